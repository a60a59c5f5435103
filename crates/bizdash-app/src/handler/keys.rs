//! Key event handlers
//!
//! Routing order: Ctrl+C, Ctrl+K, then the topmost overlay (palette, task
//! modal, project modal), then the active view.

use bizdash_core::ViewId;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Overlay};
use crate::views::FormInput;

/// Convert a key event to a message based on what currently has focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }
    if key.is_palette_shortcut() {
        return Some(Message::OpenCommandPalette);
    }

    match state.overlays.topmost() {
        Some(Overlay::CommandPalette) => handle_key_palette(key),
        Some(Overlay::TaskModal) => form_key(key).map(|input| match input {
            FormKey::Input(i) => Message::TaskFormInput(i),
            FormKey::Submit => Message::SubmitTask,
            FormKey::Cancel => Message::CloseTaskModal,
        }),
        Some(Overlay::ProjectModal) => form_key(key).map(|input| match input {
            FormKey::Input(i) => Message::ProjectFormInput(i),
            FormKey::Submit => Message::SubmitProject,
            FormKey::Cancel => Message::CloseProjectModal,
        }),
        None => handle_key_view(state, key),
    }
}

fn handle_key_palette(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseCommandPalette),
        InputKey::Enter => Some(Message::PaletteSubmit),
        InputKey::Up | InputKey::BackTab => Some(Message::PaletteUp),
        InputKey::Down | InputKey::Tab => Some(Message::PaletteDown),
        InputKey::Backspace => Some(Message::PaletteBackspace),
        InputKey::Char(c) => Some(Message::PaletteInput(c)),
        _ => None,
    }
}

enum FormKey {
    Input(FormInput),
    Submit,
    Cancel,
}

/// Keys shared by every creation form
fn form_key(key: InputKey) -> Option<FormKey> {
    let input = match key {
        InputKey::Esc => return Some(FormKey::Cancel),
        InputKey::Enter => return Some(FormKey::Submit),
        InputKey::Tab | InputKey::Down => FormInput::NextField,
        InputKey::BackTab | InputKey::Up => FormInput::PrevField,
        InputKey::Right => FormInput::CycleNext,
        InputKey::Left => FormInput::CyclePrev,
        InputKey::Backspace => FormInput::Backspace,
        InputKey::Char(c) => FormInput::Char(c),
        _ => return None,
    };
    Some(FormKey::Input(input))
}

fn handle_key_view(state: &AppState, key: InputKey) -> Option<Message> {
    let (has_draft, filter) = match state.active_view {
        ViewId::Finance => (state.finance.draft.is_some(), &state.finance.filter),
        ViewId::Reports => (state.reports.draft.is_some(), &state.reports.filter),
        _ => return handle_key_global(state, key),
    };

    if has_draft {
        return form_key(key).map(|input| match input {
            FormKey::Input(i) => Message::CreateFormInput(i),
            FormKey::Submit => Message::SubmitCreateForm,
            FormKey::Cancel => Message::CloseCreateForm,
        });
    }

    if filter.is_active {
        return match key {
            InputKey::Esc => Some(Message::ClearFilter),
            InputKey::Enter => Some(Message::EndFilter),
            InputKey::Backspace => Some(Message::FilterBackspace),
            InputKey::Char(c) => Some(Message::FilterInput(c)),
            _ => None,
        };
    }

    match key {
        InputKey::Right | InputKey::Char(']') => Some(Message::NextTab),
        InputKey::Left | InputKey::Char('[') => Some(Message::PreviousTab),
        InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(|n| Message::SelectTab(n as usize)),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Char('/') => Some(Message::StartFilter),
        InputKey::Char('f') => Some(Message::CycleRecordFilter),
        InputKey::Char('n') => Some(Message::OpenCreateForm),
        InputKey::Char('c') => Some(Message::CompleteSelected),
        InputKey::Char('x') | InputKey::Delete => Some(Message::DeleteSelected),
        InputKey::Esc if !filter.is_empty() => Some(Message::ClearFilter),
        _ => handle_key_global(state, key),
    }
}

/// Shell keys available whenever no text input has focus
fn handle_key_global(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PreviousView),
        InputKey::F(n) => ViewId::ALL
            .get(usize::from(n).checked_sub(1)?)
            .map(|view| Message::SwitchView(*view)),
        InputKey::Esc if state.notice.is_some() => Some(Message::DismissNotice),
        _ => None,
    }
}
