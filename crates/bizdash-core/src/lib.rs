//! # bizdash-core - Core Domain Types
//!
//! Foundation crate for bizdash. Provides domain records, derived metrics,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, rust_decimal, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Records
//! - [`Transaction`], [`TransactionKind`], [`TransactionStatus`], [`Category`]
//! - [`Report`], [`ReportKind`], [`ReportStatus`], [`ReportFrequency`]
//! - [`Project`], [`Task`]
//! - [`Record`] - identity/validation trait implemented by all of the above
//!
//! ### Derived Metrics
//! - [`FinanceSummary`] - income, expenses, net profit and margin
//! - [`BudgetLine`], [`UtilizationTier`], [`BudgetOverview`]
//! - [`ReportSummary`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - validation / not-found / unknown-command plus infrastructure errors
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! ```rust
//! use bizdash_core::prelude::*;
//! ```

pub mod budget;
pub mod error;
pub mod filter;
pub mod finance;
pub mod logging;
pub mod metrics;
pub mod prelude;
pub mod record;
pub mod report;
pub mod view;
pub mod work;

pub use budget::{BudgetLine, BudgetOverview, UtilizationTier, CRITICAL_RATIO, WARNING_RATIO};
pub use error::{Error, Result, ResultExt};
pub use filter::FilterState;
pub use finance::{validate_amount, Category, Transaction, TransactionKind, TransactionStatus};
pub use metrics::FinanceSummary;
pub use record::{Record, RecordId};
pub use report::{Report, ReportFrequency, ReportKind, ReportStatus, ReportSummary};
pub use view::ViewId;
pub use work::{Project, ProjectStatus, Task, TaskPriority};

pub use rust_decimal::Decimal;
