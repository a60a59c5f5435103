use super::*;
use crate::test_utils::{demo_state, TestTerminal};
use bizdash_app::handler::update;
use bizdash_app::views::FinanceTab;
use bizdash_app::{Message, Overlay};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_default_view_is_dashboard() {
    let term = draw(&demo_state());

    assert!(term.line_contains(1, "acme"));
    assert!(term.buffer_contains("Budget utilization"));
    assert!(term.buffer_contains("$21,200.00"));
}

#[test]
fn test_every_view_renders() {
    let mut state = demo_state();
    for view_id in ViewId::ALL {
        state.switch_view(view_id);
        let term = draw(&state);
        assert!(
            term.buffer_contains(view_id.label()),
            "{} missing:\n{}",
            view_id.id(),
            term.content()
        );
    }
}

#[test]
fn test_placeholder_views_describe_purpose() {
    let mut state = demo_state();
    state.switch_view(ViewId::Messages);
    let term = draw(&state);
    assert!(term.buffer_contains("Team conversations and notifications"));
}

#[test]
fn test_palette_drawn_above_task_modal() {
    let mut state = demo_state();
    state.open_overlay(Overlay::TaskModal);
    state.open_overlay(Overlay::CommandPalette);
    let term = draw(&state);

    assert!(term.buffer_contains("Type a command or a question"));
    // Both centered: the palette covers the task form's title row
    assert!(!term.buffer_contains("New Task"));
}

#[test]
fn test_task_modal_alone() {
    let mut state = demo_state();
    state.open_overlay(Overlay::TaskModal);
    let term = draw(&state);

    assert!(term.buffer_contains("New Task"));
    assert!(term.buffer_contains("Assignee"));
}

#[test]
fn test_finance_create_form_over_view() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    update(&mut state, Message::OpenCreateForm);
    let term = draw(&state);

    assert!(term.buffer_contains("New Transaction"));
    assert!(term.buffer_contains("Category"));
}

#[test]
fn test_notice_visible_after_unknown_command() {
    let mut state = demo_state();
    update(
        &mut state,
        Message::DispatchCommand {
            action: "launch-rocket".to_string(),
            payload: None,
        },
    );
    let term = draw(&state);

    assert!(term.line_contains(29, "launch-rocket"));
}

#[test]
fn test_new_transaction_appears_first() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    update(&mut state, Message::OpenCreateForm);
    let draft = state.finance.draft.as_mut().expect("draft open");
    draft.description = "Coffee beans".to_string();
    draft.amount = "42".to_string();
    draft.category = Some(bizdash_core::Category::Office);
    update(&mut state, Message::SubmitCreateForm);
    state.finance.tab = FinanceTab::Transactions;

    let term = draw(&state);
    let new_row = term.find_line("Coffee beans").expect("new row");
    let old_row = term.find_line("Invoice 1042").expect("old row");
    assert!(new_row < old_row);
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = demo_state();
    state.open_overlay(Overlay::CommandPalette);
    for view_id in ViewId::ALL {
        state.switch_view(view_id);
        let mut term = TestTerminal::compact();
        term.draw_with(|frame| view(frame, &state));
    }
}
