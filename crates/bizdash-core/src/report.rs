//! Report records and their summary counts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::record::{Record, RecordId};

/// Subject area of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Financial,
    Sales,
    Productivity,
    Hr,
    Operations,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::Financial,
        ReportKind::Sales,
        ReportKind::Productivity,
        ReportKind::Hr,
        ReportKind::Operations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Financial => "Financial",
            ReportKind::Sales => "Sales",
            ReportKind::Productivity => "Productivity",
            ReportKind::Hr => "HR",
            ReportKind::Operations => "Operations",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + len - 1) % len]
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How often a report is regenerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFrequency {
    #[default]
    Once,
    Weekly,
    Monthly,
    Quarterly,
}

impl ReportFrequency {
    pub const ALL: [ReportFrequency; 4] = [
        ReportFrequency::Once,
        ReportFrequency::Weekly,
        ReportFrequency::Monthly,
        ReportFrequency::Quarterly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportFrequency::Once => "One-off",
            ReportFrequency::Weekly => "Weekly",
            ReportFrequency::Monthly => "Monthly",
            ReportFrequency::Quarterly => "Quarterly",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + len - 1) % len]
    }
}

/// Generation state of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Generating,
    Ready,
    Failed,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Generating => "generating",
            ReportStatus::Ready => "ready",
            ReportStatus::Failed => "failed",
        }
    }
}

/// A generated (or generating) report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: RecordId,
    pub name: String,
    pub kind: ReportKind,
    pub frequency: ReportFrequency,
    pub status: ReportStatus,
    pub generated_on: NaiveDate,
}

impl Report {
    /// A freshly requested report, still generating.
    pub fn requested(
        name: impl Into<String>,
        kind: ReportKind,
        frequency: ReportFrequency,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: RecordId(0),
            name: name.into(),
            kind,
            frequency,
            status: ReportStatus::Generating,
            generated_on: date,
        }
    }
}

impl Record for Report {
    const KIND: &'static str = "report";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_text(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name", "must not be empty"));
        }
        Ok(())
    }
}

/// Counts shown on the reports overview tab
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub ready: usize,
    pub generating: usize,
    pub failed: usize,
    pub latest: Option<NaiveDate>,
}

impl ReportSummary {
    pub fn from_reports(reports: &[Report]) -> Self {
        let count = |status: ReportStatus| reports.iter().filter(|r| r.status == status).count();
        Self {
            total: reports.len(),
            ready: count(ReportStatus::Ready),
            generating: count(ReportStatus::Generating),
            failed: count(ReportStatus::Failed),
            latest: reports.iter().map(|r| r.generated_on).max(),
        }
    }

    /// Number of reports of a given kind
    pub fn count_kind(reports: &[Report], kind: ReportKind) -> usize {
        reports.iter().filter(|r| r.kind == kind).count()
    }
}
