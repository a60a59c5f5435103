//! Terminal setup and restoration
//!
//! Raw mode and the alternate screen are held for exactly as long as a
//! [`TerminalGuard`] lives. The panic hook covers unwinding paths that never
//! reach the guard's `Drop`.

use ratatui::DefaultTerminal;
use std::ops::{Deref, DerefMut};

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Owns the initialized terminal and restores it on drop
pub struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen
    pub fn acquire() -> Self {
        tracing::debug!("Acquiring terminal");
        Self {
            terminal: ratatui::init(),
        }
    }
}

impl Deref for TerminalGuard {
    type Target = DefaultTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        tracing::debug!("Terminal restored");
    }
}
