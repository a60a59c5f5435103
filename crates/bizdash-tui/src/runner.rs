//! Main TUI runner: startup, event loop and teardown

use std::path::Path;

use bizdash_app::config;
use bizdash_app::message::Message;
use bizdash_app::process::process_message;
use bizdash_app::signals;
use bizdash_app::AppState;
use bizdash_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the dashboard for the workspace at `workspace_path`
pub async fn run_with_workspace(workspace_path: &Path) -> Result<()> {
    terminal::install_panic_hook();

    let settings = config::load_settings(workspace_path);
    info!(
        "Loaded settings: default_view={}, seed_demo_data={}",
        settings.behavior.default_view, settings.behavior.seed_demo_data
    );

    let today = chrono::Local::now().date_naive();
    let mut state = AppState::with_settings(settings, today)?;
    state.workspace_name = workspace_name(workspace_path);

    // Signal task -> loop
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let mut term = terminal::TerminalGuard::acquire();
    let result = run_loop(&mut term, &mut state, msg_rx);
    drop(term);

    info!("bizdash exiting");
    result
}

/// Directory name shown in the header
fn workspace_name(path: &Path) -> Option<String> {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// poll -> update -> render until the state asks to quit
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Messages from background tasks first
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_name_from_path() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("acme-books");
        std::fs::create_dir_all(&dir).unwrap();
        assert_eq!(workspace_name(&dir).as_deref(), Some("acme-books"));
    }

    #[test]
    fn test_workspace_name_for_root_is_none() {
        assert_eq!(workspace_name(Path::new("/")), None);
    }
}
