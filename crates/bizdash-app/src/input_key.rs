//! Abstract input key event, independent of terminal library.
//!
//! Handlers in this crate match on `InputKey` so that the dashboard state
//! machine can be driven (and tested) without crossterm.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+k, Ctrl+c, etc.)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// The command palette shortcut (Ctrl+K)
    pub fn is_palette_shortcut(&self) -> bool {
        matches!(self, InputKey::CharCtrl('k' | 'K'))
    }
}
