//! Cross-domain dashboard summary
//!
//! Computed on demand from the current repository contents. Rendered by the
//! dashboard view and printed as JSON by `bizdash --headless`.

use bizdash_core::{
    BudgetLine, BudgetOverview, Category, Decimal, FinanceSummary, ReportSummary, UtilizationTier,
};
use serde::Serialize;

use crate::state::AppState;

/// Utilization of one budget line, flattened for display and export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetUtilization {
    pub category: Category,
    pub allocated: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Clamped to 0..=100
    pub percent: u16,
    pub tier: UtilizationTier,
}

impl From<&BudgetLine> for BudgetUtilization {
    fn from(line: &BudgetLine) -> Self {
        Self {
            category: line.category,
            allocated: line.allocated,
            spent: line.spent,
            remaining: line.remaining(),
            percent: line.display_percent(),
            tier: line.tier(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkSummary {
    pub projects: usize,
    pub overdue_projects: usize,
    pub open_tasks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub finance: FinanceSummary,
    pub budget: BudgetOverview,
    pub budgets: Vec<BudgetUtilization>,
    pub reports: ReportSummary,
    pub work: WorkSummary,
}

impl DashboardSummary {
    pub fn from_state(state: &AppState) -> Self {
        let projects = state.projects();
        let tasks = state.tasks();

        Self {
            finance: FinanceSummary::from_transactions(&state.transactions()),
            budget: BudgetOverview::from_lines(&state.budgets),
            budgets: state.budgets.iter().map(BudgetUtilization::from).collect(),
            reports: ReportSummary::from_reports(&state.reports_list()),
            work: WorkSummary {
                projects: projects.len(),
                overdue_projects: projects.iter().filter(|p| p.is_overdue(state.today)).count(),
                open_tasks: tasks.iter().filter(|t| !t.done).count(),
            },
        }
    }
}
