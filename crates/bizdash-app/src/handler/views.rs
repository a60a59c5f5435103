//! Finance and Reports view handlers
//!
//! Each handler acts on the active view. On views without a feature view
//! (dashboard, crm, ...) these messages are ignored.

use bizdash_core::prelude::*;
use bizdash_core::{Report, ReportStatus, Transaction, TransactionStatus, ViewId};

use crate::message::Message;
use crate::state::{AppState, Notice};
use crate::views::{FinanceTab, Form, ReportDraft, ReportsTab, TransactionDraft, ViewTab};

use super::shell::save_draft;
use super::UpdateResult;

/// Route a feature-view message to the active view
pub fn handle(state: &mut AppState, message: Message) -> UpdateResult {
    match state.active_view {
        ViewId::Finance => finance(state, message),
        ViewId::Reports => reports(state, message),
        other => {
            trace!("{:?} ignored on {}", message, other);
        }
    }
    UpdateResult::none()
}

fn finance(state: &mut AppState, message: Message) {
    let transactions = state.transactions();
    let view = &mut state.finance;
    let visible_len = view.visible(&transactions).len();

    match message {
        Message::NextTab => view.tab = view.tab.next(),
        Message::PreviousTab => view.tab = view.tab.prev(),
        Message::SelectTab(n) => {
            if let Some(tab) = FinanceTab::from_number(n) {
                view.tab = tab;
            }
        }
        Message::SelectNext => view.select_next(visible_len),
        Message::SelectPrevious => view.select_previous(visible_len),
        Message::StartFilter => {
            view.tab = FinanceTab::Transactions;
            view.filter.activate();
        }
        Message::EndFilter => view.filter.deactivate(),
        Message::ClearFilter => {
            view.filter.clear();
            view.selected = 0;
        }
        Message::FilterInput(c) => {
            view.filter.query.push(c);
            view.selected = 0;
        }
        Message::FilterBackspace => {
            view.filter.query.pop();
            view.selected = 0;
        }
        Message::CycleRecordFilter => view.cycle_category_filter(),
        Message::OpenCreateForm => view.draft = Some(TransactionDraft::new(state.today)),
        Message::CloseCreateForm => view.draft = None,
        Message::CreateFormInput(input) => {
            if let Some(draft) = view.draft.as_mut() {
                draft.apply(input);
            }
        }
        Message::SubmitCreateForm => submit_transaction(state),
        Message::CompleteSelected => complete_transaction(state, &transactions),
        Message::DeleteSelected => delete_transaction(state, &transactions),
        other => warn!("Unhandled finance message: {:?}", other),
    }
}

fn submit_transaction(state: &mut AppState) {
    let Some(draft) = state.finance.draft.as_mut() else {
        return;
    };
    if let Some(saved) = save_draft(draft, state.today, &mut state.repos.transactions) {
        state.finance.draft = None;
        state.finance.selected = 0;
        state.set_notice(Notice::info(format!(
            "Added {} \"{}\"",
            saved.kind, saved.description
        )));
    }
}

fn complete_transaction(state: &mut AppState, transactions: &[Transaction]) {
    let Some(mut tx) = state.finance.selected_transaction(transactions).cloned() else {
        return;
    };
    if tx.status != TransactionStatus::Pending {
        state.set_notice(Notice::info(format!(
            "\"{}\" is already {}",
            tx.description, tx.status
        )));
        return;
    }

    tx.status = TransactionStatus::Completed;
    match state.repos.transactions.update(tx) {
        Ok(tx) => state.set_notice(Notice::info(format!("Completed \"{}\"", tx.description))),
        Err(e) => state.report_error(&e),
    }
}

fn delete_transaction(state: &mut AppState, transactions: &[Transaction]) {
    let Some(id) = state.finance.selected_transaction(transactions).map(|t| t.id) else {
        return;
    };
    match state.repos.transactions.delete(id) {
        Ok(removed) => {
            let remaining = state.finance.visible(&state.transactions()).len();
            state.finance.clamp(remaining);
            state.set_notice(Notice::info(format!("Deleted \"{}\"", removed.description)));
        }
        Err(e) => state.report_error(&e),
    }
}

fn reports(state: &mut AppState, message: Message) {
    let reports = state.reports_list();
    let view = &mut state.reports;
    let visible_len = view.visible(&reports).len();

    match message {
        Message::NextTab => view.tab = view.tab.next(),
        Message::PreviousTab => view.tab = view.tab.prev(),
        Message::SelectTab(n) => {
            if let Some(tab) = ReportsTab::from_number(n) {
                view.tab = tab;
            }
        }
        Message::SelectNext => view.select_next(visible_len),
        Message::SelectPrevious => view.select_previous(visible_len),
        Message::StartFilter => {
            view.tab = ReportsTab::Generated;
            view.filter.activate();
        }
        Message::EndFilter => view.filter.deactivate(),
        Message::ClearFilter => {
            view.filter.clear();
            view.selected = 0;
        }
        Message::FilterInput(c) => {
            view.filter.query.push(c);
            view.selected = 0;
        }
        Message::FilterBackspace => {
            view.filter.query.pop();
            view.selected = 0;
        }
        Message::CycleRecordFilter => view.cycle_kind_filter(),
        Message::OpenCreateForm => view.draft = Some(ReportDraft::new()),
        Message::CloseCreateForm => view.draft = None,
        Message::CreateFormInput(input) => {
            if let Some(draft) = view.draft.as_mut() {
                draft.apply(input);
            }
        }
        Message::SubmitCreateForm => submit_report(state),
        Message::CompleteSelected => mark_report_ready(state, &reports),
        Message::DeleteSelected => delete_report(state, &reports),
        other => warn!("Unhandled reports message: {:?}", other),
    }
}

fn submit_report(state: &mut AppState) {
    let Some(draft) = state.reports.draft.as_mut() else {
        return;
    };
    if let Some(saved) = save_draft(draft, state.today, &mut state.repos.reports) {
        state.reports.draft = None;
        state.reports.selected = 0;
        state.set_notice(Notice::info(format!("Generating \"{}\"", saved.name)));
    }
}

fn mark_report_ready(state: &mut AppState, reports: &[Report]) {
    let Some(mut report) = state.reports.selected_report(reports).cloned() else {
        return;
    };
    if report.status != ReportStatus::Generating {
        state.set_notice(Notice::info(format!(
            "\"{}\" is already {}",
            report.name,
            report.status.label()
        )));
        return;
    }

    report.status = ReportStatus::Ready;
    report.generated_on = state.today;
    match state.repos.reports.update(report) {
        Ok(report) => state.set_notice(Notice::info(format!("\"{}\" is ready", report.name))),
        Err(e) => state.report_error(&e),
    }
}

fn delete_report(state: &mut AppState, reports: &[Report]) {
    let Some(id) = state.reports.selected_report(reports).map(|r| r.id) else {
        return;
    };
    match state.repos.reports.delete(id) {
        Ok(removed) => {
            let remaining = state.reports.visible(&state.reports_list()).len();
            state.reports.clamp(remaining);
            state.set_notice(Notice::info(format!("Deleted \"{}\"", removed.name)));
        }
        Err(e) => state.report_error(&e),
    }
}
