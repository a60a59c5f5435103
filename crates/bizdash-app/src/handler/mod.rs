//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event routing (overlays first, then the active view)
//! - `shell`: Command palette and project/task modal handlers
//! - `views`: Finance and Reports view handlers

pub(crate) mod keys;
pub(crate) mod shell;
pub(crate) mod update;
pub(crate) mod views;

#[cfg(test)]
mod tests;

use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
