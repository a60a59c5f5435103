//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Overlay};

use super::{keys::handle_key, shell, views, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // View Navigation
        // ─────────────────────────────────────────────────────────
        Message::SwitchView(view) => {
            state.switch_view(view);
            UpdateResult::none()
        }
        Message::NextView => {
            state.switch_view(state.active_view.next());
            UpdateResult::none()
        }
        Message::PreviousView => {
            state.switch_view(state.active_view.prev());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Command Palette
        // ─────────────────────────────────────────────────────────
        Message::OpenCommandPalette => {
            state.open_overlay(Overlay::CommandPalette);
            UpdateResult::none()
        }
        Message::CloseCommandPalette => {
            state.close_overlay(Overlay::CommandPalette);
            UpdateResult::none()
        }
        Message::PaletteInput(c) => {
            state.palette.input_char(c);
            UpdateResult::none()
        }
        Message::PaletteBackspace => {
            state.palette.backspace();
            UpdateResult::none()
        }
        Message::PaletteUp => {
            state.palette.navigate_up();
            UpdateResult::none()
        }
        Message::PaletteDown => {
            state.palette.navigate_down();
            UpdateResult::none()
        }
        Message::PaletteSubmit => shell::handle_palette_submit(state),
        Message::DispatchCommand { action, payload } => {
            shell::handle_dispatch(state, &action, payload.as_deref())
        }

        // ─────────────────────────────────────────────────────────
        // Project / Task Modals
        // ─────────────────────────────────────────────────────────
        Message::CloseProjectModal => {
            state.close_overlay(Overlay::ProjectModal);
            UpdateResult::none()
        }
        Message::ProjectFormInput(input) => shell::handle_project_input(state, input),
        Message::SubmitProject => shell::handle_submit_project(state),

        Message::CloseTaskModal => {
            state.close_overlay(Overlay::TaskModal);
            UpdateResult::none()
        }
        Message::TaskFormInput(input) => shell::handle_task_input(state, input),
        Message::SubmitTask => shell::handle_submit_task(state),

        // ─────────────────────────────────────────────────────────
        // Feature Views
        // ─────────────────────────────────────────────────────────
        msg @ (Message::NextTab
        | Message::PreviousTab
        | Message::SelectTab(_)
        | Message::SelectNext
        | Message::SelectPrevious
        | Message::StartFilter
        | Message::EndFilter
        | Message::ClearFilter
        | Message::FilterInput(_)
        | Message::FilterBackspace
        | Message::CycleRecordFilter
        | Message::OpenCreateForm
        | Message::CloseCreateForm
        | Message::CreateFormInput(_)
        | Message::SubmitCreateForm
        | Message::CompleteSelected
        | Message::DeleteSelected) => views::handle(state, msg),

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }
    }
}
