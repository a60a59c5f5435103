//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use bizdash_app::{AppState, DashboardSummary};
use bizdash_core::ViewId;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI.
///
/// Pure with respect to `state`: derived metrics are recomputed from the
/// repositories on every frame. Overlays are drawn last, in the order that
/// puts the one receiving keys on top.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let icons = IconSet::new(state.settings.ui.icons);

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.workspace_name.as_deref()),
        areas.header,
    );
    frame.render_widget(widgets::ViewNav::new(state.active_view), areas.nav);
    render_body(frame, state, icons, areas.body);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    render_view_modal(frame, state, area);
    render_overlays(frame, state, icons, area);
}

fn render_body(frame: &mut Frame, state: &AppState, icons: IconSet, area: Rect) {
    let currency = state.settings.ui.currency_symbol.as_str();
    match state.active_view {
        ViewId::Dashboard => {
            let summary = DashboardSummary::from_state(state);
            frame.render_widget(widgets::DashboardPanel::new(&summary, icons, currency), area);
        }
        ViewId::Finance => frame.render_widget(widgets::FinancePanel::new(state, icons), area),
        ViewId::Reports => frame.render_widget(widgets::ReportsPanel::new(state, icons), area),
        ViewId::Projects => {
            let (projects, tasks) = (state.projects(), state.tasks());
            frame.render_widget(
                widgets::ProjectsPanel::new(&projects, &tasks, state.today, icons),
                area,
            );
        }
        ViewId::Crm
        | ViewId::Team
        | ViewId::Hr
        | ViewId::Operations
        | ViewId::Analytics
        | ViewId::Messages
        | ViewId::Settings => frame.render_widget(widgets::Placeholder::new(state.active_view), area),
    }
}

/// Creation form owned by the active feature view
fn render_view_modal(frame: &mut Frame, state: &AppState, area: Rect) {
    match state.active_view {
        ViewId::Finance => {
            if let Some(draft) = &state.finance.draft {
                frame.render_widget(widgets::FormModal::new(draft), area);
            }
        }
        ViewId::Reports => {
            if let Some(draft) = &state.reports.draft {
                frame.render_widget(widgets::FormModal::new(draft), area);
            }
        }
        _ => {}
    }
}

/// Shell overlays, bottom to top: project modal, task modal, palette
fn render_overlays(frame: &mut Frame, state: &AppState, icons: IconSet, area: Rect) {
    if state.overlays.project_modal {
        frame.render_widget(widgets::FormModal::new(&state.project_draft), area);
    }
    if state.overlays.task_modal {
        frame.render_widget(widgets::FormModal::new(&state.task_draft), area);
    }
    if state.overlays.command_palette {
        frame.render_widget(widgets::CommandPalette::new(&state.palette, icons), area);
    }
}
