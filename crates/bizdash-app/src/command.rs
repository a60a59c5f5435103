//! Command dispatch for the shell's fixed action vocabulary
//!
//! Every action either switches the active view, opens one of the shell's
//! overlays, or (for `ai-query`) records the query. Unknown actions fail
//! with [`Error::UnknownCommand`] and leave the state untouched.

use std::fmt;

use bizdash_core::prelude::*;
use bizdash_core::ViewId;

use crate::state::{AppState, Overlay};

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateProject,
    CreateTask,
    ViewTeam,
    ProductivityReport,
    UnreadMessages,
    OverdueProjects,
    /// Free-text question. Logged only, never executed.
    AiQuery(String),
}

impl Command {
    pub const AI_QUERY: &'static str = "ai-query";

    /// Parse an action id plus optional payload (`query` for `ai-query`)
    pub fn parse(action: &str, payload: Option<&str>) -> Result<Self> {
        let command = match action {
            "create-project" => Command::CreateProject,
            "create-task" => Command::CreateTask,
            "view-team" => Command::ViewTeam,
            "productivity-report" => Command::ProductivityReport,
            "unread-messages" => Command::UnreadMessages,
            "overdue-projects" => Command::OverdueProjects,
            Self::AI_QUERY => {
                let query = payload.map(str::trim).unwrap_or_default();
                if query.is_empty() {
                    return Err(Error::validation("query", "must not be empty"));
                }
                Command::AiQuery(query.to_string())
            }
            other => return Err(Error::unknown_command(other)),
        };
        Ok(command)
    }

    pub fn action_id(&self) -> &'static str {
        match self {
            Command::CreateProject => "create-project",
            Command::CreateTask => "create-task",
            Command::ViewTeam => "view-team",
            Command::ProductivityReport => "productivity-report",
            Command::UnreadMessages => "unread-messages",
            Command::OverdueProjects => "overdue-projects",
            Command::AiQuery(_) => Self::AI_QUERY,
        }
    }
}

/// A selectable row in the command palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub action: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

pub const PALETTE_ENTRIES: [PaletteEntry; 6] = [
    PaletteEntry {
        action: "create-project",
        label: "Create project",
        hint: "Open the new project form",
    },
    PaletteEntry {
        action: "create-task",
        label: "Create task",
        hint: "Open the new task form",
    },
    PaletteEntry {
        action: "view-team",
        label: "View team",
        hint: "Go to Team",
    },
    PaletteEntry {
        action: "productivity-report",
        label: "Productivity report",
        hint: "Go to Dashboard",
    },
    PaletteEntry {
        action: "unread-messages",
        label: "Unread messages",
        hint: "Go to Messages",
    },
    PaletteEntry {
        action: "overdue-projects",
        label: "Overdue projects",
        hint: "Go to Projects",
    },
];

/// What a dispatched command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    OpenedOverlay(Overlay),
    SwitchedView(ViewId),
    QueryLogged(String),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::OpenedOverlay(overlay) => write!(f, "Opened {}", overlay.label()),
            CommandOutcome::SwitchedView(view) => write!(f, "Switched to {}", view.label()),
            CommandOutcome::QueryLogged(query) => {
                write!(f, "AI assistant is not connected; query noted: \"{query}\"")
            }
        }
    }
}

/// Apply a command to the shell.
///
/// Parsing happens before any mutation, so an error leaves `state` exactly
/// as it was.
pub fn dispatch(state: &mut AppState, action: &str, payload: Option<&str>) -> Result<CommandOutcome> {
    let command = Command::parse(action, payload).map_err(|e| {
        warn!("Rejected command '{}': {}", action, e);
        e
    })?;
    debug!("Dispatching {}", command.action_id());

    let outcome = match command {
        Command::CreateProject => {
            state.open_overlay(Overlay::ProjectModal);
            CommandOutcome::OpenedOverlay(Overlay::ProjectModal)
        }
        Command::CreateTask => {
            state.open_overlay(Overlay::TaskModal);
            CommandOutcome::OpenedOverlay(Overlay::TaskModal)
        }
        Command::ViewTeam => switch(state, ViewId::Team),
        Command::ProductivityReport => switch(state, ViewId::Dashboard),
        Command::UnreadMessages => switch(state, ViewId::Messages),
        Command::OverdueProjects => switch(state, ViewId::Projects),
        Command::AiQuery(query) => {
            info!("AI query received (not executed): {}", query);
            CommandOutcome::QueryLogged(query)
        }
    };
    Ok(outcome)
}

fn switch(state: &mut AppState, view: ViewId) -> CommandOutcome {
    state.switch_view(view);
    CommandOutcome::SwitchedView(view)
}
