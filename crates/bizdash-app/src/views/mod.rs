//! Feature view state
//!
//! A feature view owns a fixed tab set with one active tab, a list filter
//! and an optional creation draft. Records themselves live in
//! [`crate::repository::Repositories`] so that remounting a view never
//! touches them.

pub mod finance;
pub mod form;
pub mod reports;
pub mod work;

pub use finance::{FinanceTab, FinanceViewState, TransactionDraft};
pub use form::{Form, FormInput, FormRow};
pub use reports::{ReportDraft, ReportsTab, ReportsViewState};
pub use work::{ProjectDraft, TaskDraft};

/// A closed set of tabs. Exactly one is active at a time.
pub trait ViewTab: Copy + PartialEq + Sized + 'static {
    /// Display order
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Tab for a 1-based number key, if in range
    fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Keep a list cursor inside `0..len`.
pub(crate) fn clamp_selection(selected: &mut usize, len: usize) {
    if len == 0 {
        *selected = 0;
    } else if *selected >= len {
        *selected = len - 1;
    }
}
