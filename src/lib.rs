//! bizdash library
//!
//! Entry points for the `bizdash` binary: the interactive dashboard and the
//! headless JSON snapshot.

pub mod headless;

use std::path::Path;

use bizdash_core::prelude::*;

/// Install error reporting and file logging
fn init_runtime() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    bizdash_core::logging::init()?;
    Ok(())
}

/// Run the interactive dashboard for a workspace directory
pub async fn run_with_workspace(workspace_path: &Path) -> Result<()> {
    init_runtime()?;
    info!("Workspace: {}", workspace_path.display());

    let result = bizdash_tui::run_with_workspace(workspace_path).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

/// Print a JSON snapshot of the dashboard metrics and exit
pub async fn run_headless(workspace_path: &Path) -> Result<()> {
    init_runtime()?;
    headless::run(workspace_path)
}

/// Write `.bizdash/config.toml` with commented defaults
pub fn init_workspace(workspace_path: &Path) -> Result<()> {
    bizdash_app::config::init_config_dir(workspace_path)
}
