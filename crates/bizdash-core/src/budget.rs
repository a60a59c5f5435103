//! Budget allocations and the utilization tier policy

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::finance::Category;

/// Utilization ratio at or above which a budget line is critical
pub const CRITICAL_RATIO: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Utilization ratio at or above which a budget line is a warning
pub const WARNING_RATIO: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Visual tier for a utilization ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationTier {
    Nominal,
    Warning,
    Critical,
}

impl UtilizationTier {
    /// Map a ratio (0.0 = nothing spent, 1.0 = fully spent) to a tier.
    pub fn from_ratio(ratio: Decimal) -> Self {
        if ratio >= CRITICAL_RATIO {
            UtilizationTier::Critical
        } else if ratio >= WARNING_RATIO {
            UtilizationTier::Warning
        } else {
            UtilizationTier::Nominal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UtilizationTier::Nominal => "nominal",
            UtilizationTier::Warning => "warning",
            UtilizationTier::Critical => "critical",
        }
    }
}

/// Allocation for one category.
///
/// `remaining` is derived from `allocated - spent` and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: Category,
    pub allocated: Decimal,
    pub spent: Decimal,
}

impl BudgetLine {
    pub fn new(category: Category, allocated: Decimal, spent: Decimal) -> Self {
        Self {
            category,
            allocated,
            spent,
        }
    }

    /// Negative when the category is overspent.
    pub fn remaining(&self) -> Decimal {
        self.allocated.checked_sub(self.spent).unwrap_or(Decimal::MIN)
    }

    /// `spent / allocated`; a zero allocation counts as fully used once
    /// anything is spent.
    pub fn utilization_ratio(&self) -> Decimal {
        if self.allocated <= Decimal::ZERO {
            return if self.spent > Decimal::ZERO {
                Decimal::ONE
            } else {
                Decimal::ZERO
            };
        }
        self.spent.checked_div(self.allocated).unwrap_or(Decimal::MAX)
    }

    /// Unclamped utilization percentage (may exceed 100).
    pub fn utilization_percent(&self) -> Decimal {
        self.utilization_ratio()
            .checked_mul(HUNDRED)
            .unwrap_or(Decimal::MAX)
    }

    /// Percentage for progress-bar width, clamped to `0..=100`.
    pub fn display_percent(&self) -> u16 {
        use rust_decimal::prelude::ToPrimitive;

        let pct = self
            .utilization_percent()
            .clamp(Decimal::ZERO, HUNDRED)
            .round();
        pct.to_u16().unwrap_or(100)
    }

    pub fn tier(&self) -> UtilizationTier {
        UtilizationTier::from_ratio(self.utilization_ratio())
    }

    pub fn is_overspent(&self) -> bool {
        self.spent > self.allocated
    }
}

/// Aggregate over all budget lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BudgetOverview {
    pub total_allocated: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
    /// Lines in the warning or critical tier
    pub alerts: usize,
}

impl BudgetOverview {
    pub fn from_lines(lines: &[BudgetLine]) -> Self {
        let total = |field: fn(&BudgetLine) -> Decimal| {
            lines.iter().fold(Decimal::ZERO, |sum, l| {
                sum.checked_add(field(l)).unwrap_or(Decimal::MAX)
            })
        };
        let total_allocated = total(|l| l.allocated);
        let total_spent = total(|l| l.spent);
        Self {
            total_allocated,
            total_spent,
            total_remaining: total_allocated
                .checked_sub(total_spent)
                .unwrap_or(Decimal::MIN),
            alerts: lines
                .iter()
                .filter(|l| l.tier() != UtilizationTier::Nominal)
                .count(),
        }
    }
}
