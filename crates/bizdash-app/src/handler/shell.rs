//! Command palette and project/task modal handlers

use bizdash_core::prelude::*;
use bizdash_core::Record;
use chrono::NaiveDate;

use crate::command::dispatch;
use crate::message::Message;
use crate::repository::Repository;
use crate::state::{AppState, Notice, Overlay};
use crate::views::{Form, FormInput};

use super::UpdateResult;

/// Validate a draft and create its record.
///
/// Validation and repository errors are stored on the draft for inline
/// display; the draft is left as typed.
pub(crate) fn save_draft<F, R>(
    draft: &mut F,
    today: NaiveDate,
    repo: &mut Box<dyn Repository<R>>,
) -> Option<R>
where
    F: Form<Output = R>,
    R: Record,
{
    let record = match draft.submit(today) {
        Ok(record) => record,
        Err(e) => {
            debug!("{} rejected: {}", F::TITLE, e);
            return None;
        }
    };

    match repo.create(record) {
        Ok(saved) => {
            info!("Created {} #{}", R::KIND, saved.id());
            Some(saved)
        }
        Err(e) => {
            warn!("Failed to create {}: {}", R::KIND, e);
            draft.set_error(Some(e.to_string()));
            None
        }
    }
}

// ─────────────────────────────────────────────────────────
// Command Palette
// ─────────────────────────────────────────────────────────

pub fn handle_palette_submit(state: &mut AppState) -> UpdateResult {
    let Some(selection) = state.palette.selection() else {
        return UpdateResult::none();
    };
    state.close_overlay(Overlay::CommandPalette);
    UpdateResult::message(Message::DispatchCommand {
        action: selection.action.to_string(),
        payload: selection.payload,
    })
}

pub fn handle_dispatch(state: &mut AppState, action: &str, payload: Option<&str>) -> UpdateResult {
    match dispatch(state, action, payload) {
        Ok(outcome) => state.set_notice(Notice::info(outcome.to_string())),
        Err(e) => state.report_error(&e),
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Project / Task Modals
// ─────────────────────────────────────────────────────────

pub fn handle_project_input(state: &mut AppState, input: FormInput) -> UpdateResult {
    state.project_draft.apply(input);
    UpdateResult::none()
}

pub fn handle_submit_project(state: &mut AppState) -> UpdateResult {
    if let Some(project) = save_draft(&mut state.project_draft, state.today, &mut state.repos.projects) {
        state.close_overlay(Overlay::ProjectModal);
        state.set_notice(Notice::info(format!("Created project \"{}\"", project.name)));
    }
    UpdateResult::none()
}

pub fn handle_task_input(state: &mut AppState, input: FormInput) -> UpdateResult {
    state.task_draft.apply(input);
    UpdateResult::none()
}

pub fn handle_submit_task(state: &mut AppState) -> UpdateResult {
    if let Some(task) = save_draft(&mut state.task_draft, state.today, &mut state.repos.tasks) {
        state.close_overlay(Overlay::TaskModal);
        state.set_notice(Notice::info(format!("Created task \"{}\"", task.title)));
    }
    UpdateResult::none()
}
