//! Text filter applied to record listings

/// Filter input state for a feature view's list tab.
///
/// Matching is a case-insensitive substring test against a record's
/// searchable text; an empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Current query text
    pub query: String,
    /// Whether the filter input currently has keyboard focus
    pub is_active: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Drop the query and leave input mode
    pub fn clear(&mut self) {
        self.query.clear();
        self.is_active = false;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        let needle = self.query.trim();
        needle.is_empty() || text.to_lowercase().contains(&needle.to_lowercase())
    }
}
