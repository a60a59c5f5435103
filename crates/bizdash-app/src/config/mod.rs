//! Configuration file parsing for bizdash
//!
//! Supports `.bizdash/config.toml` under the workspace directory.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings};
pub use types::*;
