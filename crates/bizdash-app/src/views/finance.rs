//! Finance view: overview cards, transaction list and budget utilization

use std::str::FromStr;

use bizdash_core::prelude::*;
use bizdash_core::{
    validate_amount, Category, Decimal, FilterState, Transaction, TransactionKind, TransactionStatus,
};
use chrono::NaiveDate;

use super::form::{parse_date, require, Form, FormRow};
use super::{clamp_selection, ViewTab};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinanceTab {
    #[default]
    Overview,
    Transactions,
    Budgets,
}

impl ViewTab for FinanceTab {
    const ALL: &'static [Self] = &[FinanceTab::Overview, FinanceTab::Transactions, FinanceTab::Budgets];

    fn label(&self) -> &'static str {
        match self {
            FinanceTab::Overview => "Overview",
            FinanceTab::Transactions => "Transactions",
            FinanceTab::Budgets => "Budgets",
        }
    }
}

/// Transient state of the finance view. Reset when the view is remounted.
#[derive(Debug, Clone, Default)]
pub struct FinanceViewState {
    pub tab: FinanceTab,
    pub filter: FilterState,
    /// Exact category match, ANDed with the text filter
    pub category_filter: Option<Category>,
    /// Cursor into the visible transaction list
    pub selected: usize,
    /// Open "new transaction" modal
    pub draft: Option<TransactionDraft>,
}

impl FinanceViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transactions passing the text and category filters, in listing order
    pub fn visible<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| self.category_filter.is_none_or(|c| t.category == c))
            .filter(|t| self.filter.matches(&t.description))
            .collect()
    }

    /// None -> first category -> ... -> last category -> None
    pub fn cycle_category_filter(&mut self) {
        self.category_filter = match self.category_filter {
            None => Some(Category::SELECTABLE[0]),
            Some(c) if c == Category::SELECTABLE[Category::SELECTABLE.len() - 1] => None,
            Some(c) => Some(c.next()),
        };
        self.selected = 0;
    }

    pub fn select_next(&mut self, visible_len: usize) {
        if visible_len > 0 {
            self.selected = (self.selected + 1) % visible_len;
        }
    }

    pub fn select_previous(&mut self, visible_len: usize) {
        if visible_len > 0 {
            self.selected = (self.selected + visible_len - 1) % visible_len;
        }
    }

    pub fn clamp(&mut self, visible_len: usize) {
        clamp_selection(&mut self.selected, visible_len);
    }

    /// The transaction under the cursor
    pub fn selected_transaction<'a>(&self, transactions: &'a [Transaction]) -> Option<&'a Transaction> {
        self.visible(transactions).get(self.selected).copied()
    }
}

const DESCRIPTION: usize = 0;
const AMOUNT: usize = 1;
const KIND: usize = 2;
const CATEGORY: usize = 3;
const DATE: usize = 4;

/// "New transaction" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    /// Raw amount as typed; `$` and `,` are ignored when parsing
    pub amount: String,
    pub kind: TransactionKind,
    /// Nothing selected until the user picks one
    pub category: Option<Category>,
    /// Raw `YYYY-MM-DD`, defaults to today
    pub date: String,
    pub focus: usize,
    pub error: Option<String>,
}

impl TransactionDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            kind: TransactionKind::Expense,
            category: None,
            date: today.format("%Y-%m-%d").to_string(),
            focus: DESCRIPTION,
            error: None,
        }
    }

    fn parse_amount(&self) -> Result<Decimal> {
        let cleaned = self.amount.trim().replace(['$', ','], "");
        if cleaned.is_empty() {
            return Err(Error::validation("amount", "must not be empty"));
        }
        let amount = Decimal::from_str(&cleaned)
            .map_err(|_| Error::validation("amount", format!("'{}' is not a number", self.amount.trim())))?;
        validate_amount(amount)?;
        Ok(amount)
    }
}

impl Form for TransactionDraft {
    type Output = Transaction;

    const TITLE: &'static str = "New Transaction";

    fn rows(&self) -> Vec<FormRow> {
        vec![
            FormRow::text("Description", &self.description),
            FormRow::text("Amount", &self.amount),
            FormRow::choice("Type", self.kind.label()),
            FormRow::choice(
                "Category",
                self.category.map_or("(select)", |c| c.label()),
            ),
            FormRow::text("Date", &self.date),
        ]
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            DESCRIPTION => Some(&mut self.description),
            AMOUNT => Some(&mut self.amount),
            DATE => Some(&mut self.date),
            _ => None,
        }
    }

    fn cycle(&mut self, forward: bool) {
        match self.focus {
            KIND => self.kind = self.kind.toggle(),
            CATEGORY => {
                self.category = Some(match (self.category, forward) {
                    (None, true) => Category::SELECTABLE[0],
                    (None, false) => Category::SELECTABLE[Category::SELECTABLE.len() - 1],
                    (Some(c), true) => c.next(),
                    (Some(c), false) => c.prev(),
                });
            }
            _ => {}
        }
    }

    fn build(&self, _today: NaiveDate) -> Result<Transaction> {
        let description = require("description", &self.description)?;
        let amount = self.parse_amount()?;
        let category = self
            .category
            .ok_or_else(|| Error::validation("category", "select a category"))?;
        let date = parse_date("date", &self.date)?;

        Ok(Transaction::new(
            self.kind,
            category,
            description,
            amount,
            TransactionStatus::Pending,
            date,
        ))
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
