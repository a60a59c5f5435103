//! Headless mode - one JSON snapshot of the dashboard, no TUI
//!
//! Prints the derived metrics the dashboard would show for the workspace and
//! exits. Useful for scripts and for checking a config without a terminal.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "generated_at": "2024-06-15T09:30:00Z",
//!   "workspace": "acme",
//!   "default_view": "dashboard",
//!   "summary": { "finance": { "total_income": "21200", ... }, ... }
//! }
//! ```

use std::io::{self, Write};
use std::path::Path;

use bizdash_app::config;
use bizdash_app::{AppState, DashboardSummary};
use bizdash_core::prelude::*;
use bizdash_core::ViewId;
use chrono::{NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HeadlessSnapshot {
    /// RFC 3339 UTC timestamp
    pub generated_at: String,
    pub workspace: Option<String>,
    pub default_view: ViewId,
    pub summary: DashboardSummary,
}

/// Build the snapshot for `workspace_path` as of `today`
pub fn snapshot(workspace_path: &Path, today: NaiveDate) -> Result<HeadlessSnapshot> {
    let settings = config::load_settings(workspace_path);
    let default_view = settings.behavior.default_view;
    let state = AppState::with_settings(settings, today)?;

    Ok(HeadlessSnapshot {
        generated_at: Utc::now().to_rfc3339(),
        workspace: workspace_path
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned())),
        default_view,
        summary: DashboardSummary::from_state(&state),
    })
}

/// Print the snapshot to stdout as pretty JSON
pub fn run(workspace_path: &Path) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let snapshot = snapshot(workspace_path, today)?;
    let json = serde_json::to_string_pretty(&snapshot)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;

    info!("Headless snapshot written for {}", workspace_path.display());
    Ok(())
}
