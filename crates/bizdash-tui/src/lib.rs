//! bizdash-tui - Terminal UI for bizdash
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! TEA loop from bizdash-app and adds terminal rendering, event polling, and
//! widget display.

pub mod event;
pub mod format;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run_with_workspace;
