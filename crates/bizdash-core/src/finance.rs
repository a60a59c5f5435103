//! Finance domain types: transactions and their closed label sets

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::record::{Record, RecordId};

/// Largest amount a single transaction may carry, in whole currency units
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

/// Amounts are kept to cents
pub const AMOUNT_SCALE: u32 = 2;

/// Check that `amount` is positive, at most [`MAX_AMOUNT_UNITS`] and has no
/// more than two decimal places.
pub fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::validation("amount", "must be greater than zero"));
    }
    if amount > Decimal::new(MAX_AMOUNT_UNITS, 0) {
        return Err(Error::validation(
            "amount",
            format!("must not exceed {}", MAX_AMOUNT_UNITS),
        ));
    }
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(Error::validation("amount", "at most two decimal places"));
    }
    Ok(())
}

/// Direction of money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Toggle between income and expense (form cycling)
    pub fn toggle(self) -> Self {
        match self {
            TransactionKind::Income => TransactionKind::Expense,
            TransactionKind::Expense => TransactionKind::Income,
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(Error::validation(
                "kind",
                format!("'{other}' is not income or expense"),
            )),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Pending,
        TransactionStatus::Completed,
        TransactionStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(TransactionStatus::Pending),
            "completed" => Ok(TransactionStatus::Completed),
            "cancelled" | "canceled" => Ok(TransactionStatus::Cancelled),
            other => Err(Error::validation(
                "status",
                format!("'{other}' is not a transaction status"),
            )),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Spending/earning category shared by transactions and budget lines.
///
/// `Other` is the fallback for labels outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sales,
    Consulting,
    Marketing,
    Payroll,
    Software,
    Office,
    Travel,
    Utilities,
    Other,
}

impl Category {
    /// Categories a user may pick in the creation form, in display order
    pub const SELECTABLE: [Category; 9] = [
        Category::Sales,
        Category::Consulting,
        Category::Marketing,
        Category::Payroll,
        Category::Software,
        Category::Office,
        Category::Travel,
        Category::Utilities,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Sales => "Sales",
            Category::Consulting => "Consulting",
            Category::Marketing => "Marketing",
            Category::Payroll => "Payroll",
            Category::Software => "Software",
            Category::Office => "Office",
            Category::Travel => "Travel",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }

    /// Total mapping from a free-form label; unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        Self::SELECTABLE
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Category::Other)
    }

    /// Next selectable category, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::SELECTABLE.iter().position(|c| *c == self).unwrap_or(0);
        Self::SELECTABLE[(idx + 1) % Self::SELECTABLE.len()]
    }

    /// Previous selectable category, wrapping around
    pub fn prev(self) -> Self {
        let len = Self::SELECTABLE.len();
        let idx = Self::SELECTABLE.iter().position(|c| *c == self).unwrap_or(0);
        Self::SELECTABLE[(idx + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub kind: TransactionKind,
    pub category: Category,
    pub description: String,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub date: NaiveDate,
}

impl Transaction {
    /// Create an unsaved transaction. The repository assigns the id.
    pub fn new(
        kind: TransactionKind,
        category: Category,
        description: impl Into<String>,
        amount: Decimal,
        status: TransactionStatus,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: RecordId(0),
            kind,
            category,
            description: description.into(),
            amount,
            status,
            date,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TransactionStatus::Completed
    }
}

impl Record for Transaction {
    const KIND: &'static str = "transaction";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_text(&self) -> &str {
        &self.description
    }

    fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(Error::validation("description", "must not be empty"));
        }
        validate_amount(self.amount)
    }
}
