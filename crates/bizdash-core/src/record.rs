//! Shared record identity used by every repository-backed entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier assigned by a repository on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entity held in a feature view's record collection.
pub trait Record: Clone {
    /// Lowercase entity name used in errors and logs (`"transaction"`).
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    /// Assign the identifier. Only repositories call this.
    fn set_id(&mut self, id: RecordId);

    /// Free text matched by filter queries.
    fn search_text(&self) -> &str;

    /// Check the record before it enters a collection.
    fn validate(&self) -> crate::Result<()> {
        Ok(())
    }
}
