//! Derived finance metrics
//!
//! Pure functions over a transaction slice. Only `completed` transactions
//! contribute to totals; pending and cancelled entries are ignored.
//! Arithmetic saturates at the `Decimal` range instead of panicking.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::finance::{Transaction, TransactionKind, TransactionStatus};

/// Sum of completed amounts of the given kind
pub fn completed_total(transactions: &[Transaction], kind: TransactionKind) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind && t.status == TransactionStatus::Completed)
        .fold(Decimal::ZERO, |total, t| {
            total.checked_add(t.amount).unwrap_or(Decimal::MAX)
        })
}

pub fn total_income(transactions: &[Transaction]) -> Decimal {
    completed_total(transactions, TransactionKind::Income)
}

pub fn total_expenses(transactions: &[Transaction]) -> Decimal {
    completed_total(transactions, TransactionKind::Expense)
}

/// `income - expenses`, saturating at `Decimal::MIN`
pub fn net_profit(income: Decimal, expenses: Decimal) -> Decimal {
    income.checked_sub(expenses).unwrap_or(Decimal::MIN)
}

/// `net / income * 100`, or zero when there is no income.
pub fn profit_margin(income: Decimal, net_profit: Decimal) -> Decimal {
    if income.is_zero() {
        return Decimal::ZERO;
    }
    net_profit
        .checked_div(income)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| {
            if net_profit.is_sign_negative() == income.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
}

/// Headline figures for the finance overview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FinanceSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    /// Percentage, unrounded
    pub profit_margin: Decimal,
    pub pending_count: usize,
}

impl FinanceSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_income = total_income(transactions);
        let total_expenses = total_expenses(transactions);
        let net_profit = net_profit(total_income, total_expenses);
        Self {
            total_income,
            total_expenses,
            net_profit,
            profit_margin: profit_margin(total_income, net_profit),
            pending_count: transactions
                .iter()
                .filter(|t| t.status == TransactionStatus::Pending)
                .count(),
        }
    }

    /// Margin rounded to one decimal place for display
    pub fn margin_display(&self) -> Decimal {
        self.profit_margin.round_dp(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::Category;
    use chrono::NaiveDate;

    fn tx(kind: TransactionKind, amount: i64, status: TransactionStatus) -> Transaction {
        tx_exact(kind, Decimal::new(amount, 0), status)
    }

    fn tx_exact(kind: TransactionKind, amount: Decimal, status: TransactionStatus) -> Transaction {
        Transaction::new(
            kind,
            Category::Other,
            "test",
            amount,
            status,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_worked_example() {
        let records = vec![
            tx(TransactionKind::Income, 15000, TransactionStatus::Completed),
            tx(TransactionKind::Expense, 3500, TransactionStatus::Completed),
            tx(TransactionKind::Expense, 8500, TransactionStatus::Pending),
        ];
        let summary = FinanceSummary::from_transactions(&records);

        assert_eq!(summary.total_income, Decimal::new(15000, 0));
        assert_eq!(summary.total_expenses, Decimal::new(3500, 0));
        assert_eq!(summary.net_profit, Decimal::new(11500, 0));
        assert_eq!(summary.margin_display(), Decimal::new(767, 1));
        assert_eq!(summary.pending_count, 1);
    }

    #[test]
    fn test_only_completed_contribute() {
        let records = vec![
            tx(TransactionKind::Income, 100, TransactionStatus::Pending),
            tx(TransactionKind::Income, 200, TransactionStatus::Cancelled),
            tx(TransactionKind::Expense, 300, TransactionStatus::Pending),
            tx(TransactionKind::Expense, 400, TransactionStatus::Cancelled),
        ];
        assert_eq!(total_income(&records), Decimal::ZERO);
        assert_eq!(total_expenses(&records), Decimal::ZERO);
    }

    #[test]
    fn test_margin_zero_without_income() {
        let records = vec![tx(
            TransactionKind::Expense,
            900,
            TransactionStatus::Completed,
        )];
        let summary = FinanceSummary::from_transactions(&records);
        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.net_profit, Decimal::new(-900, 0));
        assert_eq!(summary.profit_margin, Decimal::ZERO);
    }

    #[test]
    fn test_empty_collection() {
        let summary = FinanceSummary::from_transactions(&[]);
        assert_eq!(summary, FinanceSummary::default());
    }

    #[test]
    fn test_negative_margin() {
        let records = vec![
            tx(TransactionKind::Income, 1000, TransactionStatus::Completed),
            tx(TransactionKind::Expense, 1500, TransactionStatus::Completed),
        ];
        let summary = FinanceSummary::from_transactions(&records);
        assert_eq!(summary.margin_display(), Decimal::new(-500, 1));
    }

    #[test]
    fn test_totals_saturate_near_decimal_max() {
        let records = vec![
            tx_exact(TransactionKind::Income, Decimal::MAX, TransactionStatus::Completed),
            tx_exact(TransactionKind::Income, Decimal::MAX, TransactionStatus::Completed),
        ];
        let summary = FinanceSummary::from_transactions(&records);
        assert_eq!(summary.total_income, Decimal::MAX);
        assert_eq!(summary.net_profit, Decimal::MAX);
        assert_eq!(summary.profit_margin, Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_margin_saturates_for_tiny_income() {
        let records = vec![
            tx_exact(TransactionKind::Income, Decimal::new(1, 10), TransactionStatus::Completed),
            tx_exact(
                TransactionKind::Expense,
                Decimal::from(10_000_000_000_000_000_000u64),
                TransactionStatus::Completed,
            ),
        ];
        let summary = FinanceSummary::from_transactions(&records);
        assert!(summary.net_profit.is_sign_negative());
        assert_eq!(summary.profit_margin, Decimal::MIN);
    }

    #[test]
    fn test_net_profit_saturates() {
        assert_eq!(net_profit(Decimal::MIN, Decimal::MAX), Decimal::MIN);
        assert_eq!(net_profit(Decimal::new(5, 0), Decimal::new(7, 0)), Decimal::new(-2, 0));
    }
}
