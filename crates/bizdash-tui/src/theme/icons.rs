//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime from the configured `IconMode`:
//! - `IconMode::Unicode`: characters that render in any terminal
//! - `IconMode::NerdFonts`: Nerd Font glyphs (requires a Nerd Font)

use bizdash_app::config::IconMode;
use bizdash_core::{Category, ReportStatus, TransactionStatus};

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    fn pick(&self, nerd: &'static str, unicode: &'static str) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => nerd,
            IconMode::Unicode => unicode,
        }
    }

    pub fn category(&self, category: Category) -> &'static str {
        match category {
            Category::Sales => self.pick("\u{f07a}", "$"),           // nf-fa-shopping_cart
            Category::Consulting => self.pick("\u{f0b1}", "\u{2696}"), // nf-fa-briefcase / ⚖
            Category::Marketing => self.pick("\u{f0a1}", "\u{2605}"),  // nf-fa-bullhorn / ★
            Category::Payroll => self.pick("\u{f0c0}", "\u{263a}"),    // nf-fa-users / ☺
            Category::Software => self.pick("\u{f121}", "\u{2318}"),   // nf-fa-code / ⌘
            Category::Office => self.pick("\u{f1ad}", "\u{2302}"),     // nf-fa-building / ⌂
            Category::Travel => self.pick("\u{f072}", "\u{2708}"),     // nf-fa-plane / ✈
            Category::Utilities => self.pick("\u{f0e7}", "\u{26a1}"),  // nf-fa-bolt / ⚡
            Category::Other => self.pick("\u{f111}", "\u{2022}"),      // nf-fa-circle / •
        }
    }

    pub fn transaction_status(&self, status: TransactionStatus) -> &'static str {
        match status {
            TransactionStatus::Completed => self.pick("\u{f00c}", "\u{2713}"), // ✓
            TransactionStatus::Pending => self.pick("\u{f017}", "\u{25cb}"),   // ○
            TransactionStatus::Cancelled => self.pick("\u{f00d}", "\u{2717}"), // ✗
        }
    }

    pub fn report_status(&self, status: ReportStatus) -> &'static str {
        match status {
            ReportStatus::Ready => self.pick("\u{f00c}", "\u{2713}"),
            ReportStatus::Generating => self.pick("\u{f110}", "\u{21bb}"), // ↻
            ReportStatus::Failed => self.pick("\u{f071}", "\u{26a0}"),     // ⚠
        }
    }

    pub fn alert(&self) -> &'static str {
        self.pick("\u{f071}", "\u{26a0}")
    }

    pub fn dot(&self) -> &'static str {
        self.pick("\u{f444}", "\u{25cf}") // ●
    }

    pub fn command(&self) -> &'static str {
        self.pick("\u{f120}", "\u{276f}") // ❯
    }
}
