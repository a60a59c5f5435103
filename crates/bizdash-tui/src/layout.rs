//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title row with workspace name and palette hint
    pub header: Rect,

    /// Top-level view navigation
    pub nav: Rect,

    /// Active view content
    pub body: Rect,

    /// Notice line and key hints
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, nav, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        nav,
        body,
        status,
    }
}

/// Split a view body into its tab strip and content
pub fn split_tabs(body: Rect) -> (Rect, Rect) {
    let [tabs, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(body);
    (tabs, content)
}
