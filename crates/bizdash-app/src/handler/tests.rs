//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::process::process_message;
use crate::repository::{InMemoryRepository, Repositories};
use crate::state::{AppPhase, AppState, NoticeLevel, Overlay, Overlays};
use crate::views::{FinanceTab, ReportsTab};
use bizdash_core::{
    BudgetLine, Category, Decimal, FinanceSummary, ReportStatus, Transaction, TransactionKind,
    TransactionStatus, UtilizationTier, ViewId,
};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// State seeded with the demo records
fn demo_state() -> AppState {
    AppState::with_settings(Settings::default(), today()).unwrap()
}

fn press(state: &mut AppState, key: InputKey) {
    process_message(state, Message::Key(key));
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

fn income_total(state: &AppState) -> Decimal {
    FinanceSummary::from_transactions(&state.transactions()).total_income
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_eq!(state.phase, AppPhase::Running);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_quit_message() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
}

#[test]
fn test_ctrl_c_quits_from_inside_a_form() {
    let mut state = demo_state();
    state.open_overlay(Overlay::TaskModal);
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_q_types_into_open_form() {
    let mut state = AppState::new();
    state.open_overlay(Overlay::TaskModal);
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert_eq!(state.task_draft.title, "q");
}

#[test]
fn test_tick_changes_nothing() {
    let mut state = demo_state();
    let result = update(&mut state, Message::Tick);
    assert!(result.message.is_none());
    assert_eq!(state.active_view, ViewId::Dashboard);
}

// ─────────────────────────────────────────────────────────
// View Switching
// ─────────────────────────────────────────────────────────

#[test]
fn test_function_keys_switch_views() {
    let mut state = demo_state();
    press(&mut state, InputKey::F(3));
    assert_eq!(state.active_view, ViewId::Finance);
    press(&mut state, InputKey::F(9));
    assert_eq!(state.active_view, ViewId::Reports);
    press(&mut state, InputKey::F(12));
    assert_eq!(state.active_view, ViewId::Reports);
}

#[test]
fn test_tab_cycles_views_and_wraps() {
    let mut state = demo_state();
    state.switch_view(ViewId::Settings);
    press(&mut state, InputKey::Tab);
    assert_eq!(state.active_view, ViewId::Dashboard);
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.active_view, ViewId::Settings);
}

#[test]
fn test_switching_views_never_mutates_records() {
    let mut state = demo_state();
    let transactions = state.transactions();
    let reports = state.reports_list();
    let projects = state.projects();
    let budgets = state.budgets.clone();

    for _ in 0..(ViewId::ALL.len() * 2) {
        press(&mut state, InputKey::Tab);
    }
    for view in ViewId::ALL {
        update(&mut state, Message::SwitchView(view));
        update(&mut state, Message::SwitchView(view));
    }

    assert_eq!(state.transactions(), transactions);
    assert_eq!(state.reports_list(), reports);
    assert_eq!(state.projects(), projects);
    assert_eq!(state.budgets, budgets);
}

#[test]
fn test_switching_away_discards_open_draft() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, "half typed");
    assert!(state.finance.draft.is_some());

    update(&mut state, Message::SwitchView(ViewId::Crm));
    update(&mut state, Message::SwitchView(ViewId::Finance));

    assert!(state.finance.draft.is_none());
    assert_eq!(state.finance.tab, FinanceTab::Overview);
}

#[test]
fn test_switching_to_active_view_keeps_its_state() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    update(&mut state, Message::SelectTab(3));

    update(&mut state, Message::SwitchView(ViewId::Finance));

    assert_eq!(state.finance.tab, FinanceTab::Budgets);
}

// ─────────────────────────────────────────────────────────
// Command Palette
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_k_opens_palette() {
    let mut state = demo_state();
    press(&mut state, InputKey::CharCtrl('k'));
    assert_eq!(
        state.overlays,
        Overlays {
            command_palette: true,
            project_modal: false,
            task_modal: false,
        }
    );
}

#[test]
fn test_ctrl_k_preempts_text_entry() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, "Ren");

    press(&mut state, InputKey::CharCtrl('k'));

    assert!(state.overlays.command_palette);
    let draft = state.finance.draft.as_ref().unwrap();
    assert_eq!(draft.description, "Ren");
}

#[test]
fn test_palette_routes_keys_before_view() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    press(&mut state, InputKey::CharCtrl('k'));
    type_text(&mut state, "nq");

    assert_eq!(state.palette.query, "nq");
    assert!(state.finance.draft.is_none());
    assert!(!state.should_quit());
}

#[test]
fn test_palette_selects_view_command() {
    let mut state = demo_state();
    press(&mut state, InputKey::CharCtrl('k'));
    type_text(&mut state, "team");
    press(&mut state, InputKey::Enter);

    assert_eq!(state.active_view, ViewId::Team);
    assert!(!state.overlays.command_palette);
    assert!(state.palette.query.is_empty());
    assert_eq!(state.notice.as_ref().unwrap().text, "Switched to Team");
}

#[test]
fn test_palette_arrow_selection() {
    let mut state = demo_state();
    press(&mut state, InputKey::CharCtrl('k'));
    // entries: create-project, create-task, ...
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert!(state.overlays.task_modal);
    assert!(!state.overlays.project_modal);
}

#[test]
fn test_palette_free_text_becomes_ai_query() {
    let mut state = demo_state();
    press(&mut state, InputKey::CharCtrl('k'));
    type_text(&mut state, "why did costs rise in may?");
    press(&mut state, InputKey::Enter);

    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert!(notice.text.contains("why did costs rise in may?"));
    assert_eq!(state.active_view, ViewId::Dashboard);
    assert!(!state.overlays.any_open());
}

#[test]
fn test_palette_escape_discards_query() {
    let mut state = demo_state();
    press(&mut state, InputKey::CharCtrl('k'));
    type_text(&mut state, "proj");
    press(&mut state, InputKey::Esc);

    assert!(!state.overlays.command_palette);
    press(&mut state, InputKey::CharCtrl('k'));
    assert!(state.palette.query.is_empty());
}

#[test]
fn test_create_project_command_sets_only_project_flag() {
    let mut state = demo_state();
    update(
        &mut state,
        Message::DispatchCommand {
            action: "create-project".into(),
            payload: None,
        },
    );
    assert_eq!(
        state.overlays,
        Overlays {
            command_palette: false,
            project_modal: true,
            task_modal: false,
        }
    );
    assert_eq!(state.active_view, ViewId::Dashboard);
}

#[test]
fn test_unknown_command_changes_neither_flags_nor_view() {
    let mut state = demo_state();
    state.switch_view(ViewId::Projects);
    state.open_overlay(Overlay::TaskModal);
    let overlays = state.overlays;

    update(
        &mut state,
        Message::DispatchCommand {
            action: "self-destruct".into(),
            payload: None,
        },
    );

    assert_eq!(state.overlays, overlays);
    assert_eq!(state.active_view, ViewId::Projects);
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, "Unknown command: self-destruct");
}

#[test]
fn test_palette_submit_with_nothing_selected_keeps_palette_open() {
    let mut state = demo_state();
    state.open_overlay(Overlay::CommandPalette);
    state.palette.filtered.clear();

    let result = update(&mut state, Message::PaletteSubmit);

    assert!(result.message.is_none());
    assert!(state.overlays.command_palette);
}

// ─────────────────────────────────────────────────────────
// Project / Task Modals
// ─────────────────────────────────────────────────────────

#[test]
fn test_project_modal_creates_project() {
    let mut state = demo_state();
    let before = state.projects().len();
    state.open_overlay(Overlay::ProjectModal);

    type_text(&mut state, "Warehouse audit");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "Count stock");
    press(&mut state, InputKey::Enter);

    let projects = state.projects();
    assert_eq!(projects.len(), before + 1);
    assert_eq!(projects[0].name, "Warehouse audit");
    assert_eq!(projects[0].description, "Count stock");
    assert!(!state.overlays.project_modal);
    assert!(state.project_draft.name.is_empty());
}

#[test]
fn test_project_modal_validation_keeps_modal_open() {
    let mut state = demo_state();
    let before = state.projects().len();
    state.open_overlay(Overlay::ProjectModal);

    press(&mut state, InputKey::Enter);

    assert!(state.overlays.project_modal);
    assert_eq!(state.projects().len(), before);
    assert!(state.project_draft.error.as_deref().unwrap().contains("name"));
}

#[test]
fn test_task_modal_has_priority_over_project_modal() {
    let mut state = demo_state();
    state.open_overlay(Overlay::ProjectModal);
    state.open_overlay(Overlay::TaskModal);

    type_text(&mut state, "Call bank");

    assert_eq!(state.task_draft.title, "Call bank");
    assert!(state.project_draft.name.is_empty());

    press(&mut state, InputKey::Enter);
    assert!(!state.overlays.task_modal);
    assert!(state.overlays.project_modal);
    assert_eq!(state.tasks()[0].title, "Call bank");
}

#[test]
fn test_task_modal_escape_discards_draft() {
    let mut state = demo_state();
    state.open_overlay(Overlay::TaskModal);
    type_text(&mut state, "Draft");
    press(&mut state, InputKey::Esc);

    assert!(!state.overlays.task_modal);
    assert!(state.task_draft.title.is_empty());
}

// ─────────────────────────────────────────────────────────
// Finance View
// ─────────────────────────────────────────────────────────

#[test]
fn test_finance_tabs() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);

    press(&mut state, InputKey::Right);
    assert_eq!(state.finance.tab, FinanceTab::Transactions);
    press(&mut state, InputKey::Char('3'));
    assert_eq!(state.finance.tab, FinanceTab::Budgets);
    press(&mut state, InputKey::Right);
    assert_eq!(state.finance.tab, FinanceTab::Overview);
    press(&mut state, InputKey::Char('9'));
    assert_eq!(state.finance.tab, FinanceTab::Overview);
}

#[test]
fn test_finance_filter_flow() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);

    press(&mut state, InputKey::Char('/'));
    assert_eq!(state.finance.tab, FinanceTab::Transactions);
    assert!(state.finance.filter.is_active);

    type_text(&mut state, "RENT");
    press(&mut state, InputKey::Enter);
    assert!(!state.finance.filter.is_active);

    let transactions = state.transactions();
    let visible = state.finance.visible(&transactions);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].description, "Office rent");

    // tab switches keep the filter
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Left);
    assert_eq!(state.finance.filter.query, "RENT");

    press(&mut state, InputKey::Esc);
    assert!(state.finance.filter.query.is_empty());
}

#[test]
fn test_finance_filter_with_no_matches() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    update(&mut state, Message::StartFilter);
    type_text(&mut state, "zzz");

    let transactions = state.transactions();
    assert!(state.finance.visible(&transactions).is_empty());
    // list operations on an empty selection are no-ops
    update(&mut state, Message::EndFilter);
    update(&mut state, Message::DeleteSelected);
    assert_eq!(state.transactions().len(), transactions.len());
}

#[test]
fn test_finance_category_filter() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    press(&mut state, InputKey::Char('f'));
    assert_eq!(state.finance.category_filter, Some(Category::Sales));

    let transactions = state.transactions();
    let visible = state.finance.visible(&transactions);
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|t| t.category == Category::Sales));
}

#[test]
fn test_create_transaction_is_prepended_and_pending() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    let before = state.transactions().len();
    let income = income_total(&state);

    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, "Quarterly retainer");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "4000");
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Right); // expense -> income
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Right); // category: Sales -> ...
    press(&mut state, InputKey::Right); // ... Consulting
    press(&mut state, InputKey::Enter);

    let transactions = state.transactions();
    assert_eq!(transactions.len(), before + 1);
    let newest = &transactions[0];
    assert_eq!(newest.description, "Quarterly retainer");
    assert_eq!(newest.amount, Decimal::new(4000, 0));
    assert_eq!(newest.kind, TransactionKind::Income);
    assert_eq!(newest.category, Category::Consulting);
    assert_eq!(newest.status, TransactionStatus::Pending);
    assert_eq!(newest.date, today());
    assert!(state.finance.draft.is_none());

    // pending income does not count
    assert_eq!(income_total(&state), income);
}

#[test]
fn test_create_transaction_validation_error_is_inline() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    let before = state.transactions().len();

    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, "Stationery");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "35");
    press(&mut state, InputKey::Enter);

    let draft = state.finance.draft.as_ref().unwrap();
    assert!(draft.error.as_deref().unwrap().contains("category"));
    assert_eq!(draft.description, "Stationery");
    assert_eq!(state.transactions().len(), before);

    press(&mut state, InputKey::Esc);
    assert!(state.finance.draft.is_none());
}

#[test]
fn test_complete_selected_transaction_updates_totals() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    let income = income_total(&state);

    // newest demo transaction is a pending 9800 invoice
    press(&mut state, InputKey::Char('c'));

    let first = &state.transactions()[0];
    assert_eq!(first.status, TransactionStatus::Completed);
    assert_eq!(income_total(&state), income + Decimal::new(9800, 0));
}

#[test]
fn test_complete_non_pending_transaction_is_refused() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    press(&mut state, InputKey::Down); // cancelled travel entry
    press(&mut state, InputKey::Char('c'));

    let second = &state.transactions()[1];
    assert_eq!(second.status, TransactionStatus::Cancelled);
    assert!(state.notice.as_ref().unwrap().text.contains("already cancelled"));
}

#[test]
fn test_delete_selected_transaction() {
    let mut state = demo_state();
    state.switch_view(ViewId::Finance);
    let before = state.transactions();

    press(&mut state, InputKey::Up); // wraps to the oldest entry
    press(&mut state, InputKey::Char('x'));

    let after = state.transactions();
    assert_eq!(after.len(), before.len() - 1);
    assert!(!after.iter().any(|t| t.id == before[before.len() - 1].id));
    assert_eq!(state.finance.selected, after.len() - 1);
}

#[test]
fn test_worked_example_profit_margin() {
    let transactions = InMemoryRepository::seeded([
        Transaction::new(
            TransactionKind::Income,
            Category::Sales,
            "Client payment",
            Decimal::new(15000, 0),
            TransactionStatus::Completed,
            today(),
        ),
        Transaction::new(
            TransactionKind::Expense,
            Category::Office,
            "Office rent",
            Decimal::new(3500, 0),
            TransactionStatus::Completed,
            today(),
        ),
    ])
    .unwrap();
    let repos = Repositories {
        transactions: Box::new(transactions),
        ..Repositories::in_memory()
    };
    let state = AppState::with_repositories(Settings::default(), repos, Vec::new(), today());

    let summary = FinanceSummary::from_transactions(&state.transactions());
    assert_eq!(summary.net_profit, Decimal::new(11500, 0));
    assert_eq!(summary.margin_display(), Decimal::new(767, 1));
}

#[test]
fn test_worked_example_budget_critical() {
    let line = BudgetLine::new(
        Category::Marketing,
        Decimal::new(10000, 0),
        Decimal::new(9500, 0),
    );
    assert_eq!(line.display_percent(), 95);
    assert_eq!(line.tier(), UtilizationTier::Critical);
}

// ─────────────────────────────────────────────────────────
// Reports View
// ─────────────────────────────────────────────────────────

#[test]
fn test_generate_report_starts_generating() {
    let mut state = demo_state();
    state.switch_view(ViewId::Reports);
    let before = state.reports_list().len();

    press(&mut state, InputKey::Char('n'));
    type_text(&mut state, "Churn analysis");
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Right); // Financial -> Sales
    press(&mut state, InputKey::Enter);

    let reports = state.reports_list();
    assert_eq!(reports.len(), before + 1);
    assert_eq!(reports[0].name, "Churn analysis");
    assert_eq!(reports[0].status, ReportStatus::Generating);
    assert!(state.reports.draft.is_none());
}

#[test]
fn test_mark_report_ready() {
    let mut state = demo_state();
    state.switch_view(ViewId::Reports);
    press(&mut state, InputKey::Char('2'));
    assert_eq!(state.reports.tab, ReportsTab::Generated);

    // newest demo report is still generating
    press(&mut state, InputKey::Char('c'));

    let first = &state.reports_list()[0];
    assert_eq!(first.status, ReportStatus::Ready);
    assert_eq!(first.generated_on, today());
}

#[test]
fn test_report_kind_filter_and_delete() {
    let mut state = demo_state();
    state.switch_view(ViewId::Reports);
    update(&mut state, Message::CycleRecordFilter);
    let reports = state.reports_list();
    assert_eq!(state.reports.visible(&reports).len(), 1);

    update(&mut state, Message::DeleteSelected);
    assert_eq!(state.reports_list().len(), reports.len() - 1);
    assert_eq!(state.reports.selected, 0);
}

#[test]
fn test_view_messages_ignored_on_dashboard() {
    let mut state = demo_state();
    let before = state.transactions();
    update(&mut state, Message::DeleteSelected);
    update(&mut state, Message::OpenCreateForm);
    assert_eq!(state.transactions(), before);
    assert!(state.finance.draft.is_none());
}

// ─────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────

#[test]
fn test_escape_dismisses_notice() {
    let mut state = demo_state();
    update(
        &mut state,
        Message::DispatchCommand {
            action: "view-team".into(),
            payload: None,
        },
    );
    assert!(state.notice.is_some());

    press(&mut state, InputKey::Esc);
    assert!(state.notice.is_none());
}
