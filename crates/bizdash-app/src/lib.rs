//! bizdash-app - Application state and orchestration for bizdash
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dashboard shell: the active view, overlay flags, command dispatch, the
//! Finance and Reports feature views, record repositories and configuration
//! loading. It has no terminal dependencies; `bizdash-tui` renders it.

pub mod command;
pub mod config;
pub mod fuzzy;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod palette;
pub mod process;
pub mod repository;
pub mod seed;
pub mod signals;
pub mod state;
pub mod summary;
pub mod views;

// Re-export primary types
pub use command::{dispatch, Command, CommandOutcome, PALETTE_ENTRIES};
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use repository::{InMemoryRepository, Repositories, Repository};
pub use state::{AppState, Notice, NoticeLevel, Overlay, Overlays};
pub use summary::DashboardSummary;
