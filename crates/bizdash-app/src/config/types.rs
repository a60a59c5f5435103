//! Configuration types for bizdash
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use bizdash_core::ViewId;
use serde::{Deserialize, Serialize};

/// Application settings (.bizdash/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// View shown at startup
    #[serde(default)]
    pub default_view: ViewId,

    /// Populate repositories with demo records on startup
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_view: ViewId::Dashboard,
            seed_demo_data: true,
        }
    }
}

/// Icon rendering mode.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Prefix used when formatting money
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Show the keybinding hint line at the bottom of the screen
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            currency_symbol: default_currency_symbol(),
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
