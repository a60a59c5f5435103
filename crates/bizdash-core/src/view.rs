//! Identifiers for the dashboard's top-level views

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A registered feature view. The app shell keeps exactly one active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Dashboard,
    Crm,
    Finance,
    Projects,
    Team,
    Hr,
    Operations,
    Analytics,
    Reports,
    Messages,
    Settings,
}

impl ViewId {
    /// Navigation order
    pub const ALL: [ViewId; 11] = [
        ViewId::Dashboard,
        ViewId::Crm,
        ViewId::Finance,
        ViewId::Projects,
        ViewId::Team,
        ViewId::Hr,
        ViewId::Operations,
        ViewId::Analytics,
        ViewId::Reports,
        ViewId::Messages,
        ViewId::Settings,
    ];

    /// Wire identifier (`"dashboard"`, `"crm"`, ...)
    pub fn id(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Crm => "crm",
            ViewId::Finance => "finance",
            ViewId::Projects => "projects",
            ViewId::Team => "team",
            ViewId::Hr => "hr",
            ViewId::Operations => "operations",
            ViewId::Analytics => "analytics",
            ViewId::Reports => "reports",
            ViewId::Messages => "messages",
            ViewId::Settings => "settings",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Crm => "CRM",
            ViewId::Finance => "Finance",
            ViewId::Projects => "Projects",
            ViewId::Team => "Team",
            ViewId::Hr => "HR",
            ViewId::Operations => "Operations",
            ViewId::Analytics => "Analytics",
            ViewId::Reports => "Reports",
            ViewId::Messages => "Messages",
            ViewId::Settings => "Settings",
        }
    }

    /// One-line purpose shown on views without dedicated panels
    pub fn description(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Cross-domain summary of the business",
            ViewId::Crm => "Customers, leads and deal pipeline",
            ViewId::Finance => "Income, expenses and budget allocation",
            ViewId::Projects => "Projects and tasks in flight",
            ViewId::Team => "Team members and workload",
            ViewId::Hr => "Hiring, leave and payroll records",
            ViewId::Operations => "Inventory, suppliers and logistics",
            ViewId::Analytics => "Trends and key performance indicators",
            ViewId::Reports => "Report templates and generated reports",
            ViewId::Messages => "Team conversations and notifications",
            ViewId::Settings => "Workspace preferences",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl FromStr for ViewId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.id() == needle)
            .ok_or_else(|| Error::config(format!("unknown view '{s}'")))
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
