//! Inline filter prompt shown above record lists

use bizdash_core::FilterState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct FilterBar<'a> {
    filter: &'a FilterState,
    /// Active category/kind restriction, if any
    scope: Option<&'a str>,
    matches: usize,
    total: usize,
}

impl<'a> FilterBar<'a> {
    pub fn new(filter: &'a FilterState, matches: usize, total: usize) -> Self {
        Self {
            filter,
            scope: None,
            matches,
            total,
        }
    }

    pub fn scope(mut self, scope: Option<&'a str>) -> Self {
        self.scope = scope;
        self
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prompt_style = if self.filter.is_active {
            styles::keybinding().add_modifier(Modifier::BOLD)
        } else {
            styles::text_muted()
        };

        let mut spans = vec![
            Span::styled("/", prompt_style),
            Span::styled(self.filter.query.as_str(), styles::text_primary()),
        ];
        if self.filter.is_active {
            spans.push(Span::styled("_", styles::keybinding()));
        } else if self.filter.query.is_empty() {
            spans.push(Span::styled("filter", styles::text_muted()));
        }
        if let Some(scope) = self.scope {
            spans.push(Span::styled(format!("  [{scope}]"), styles::accent()));
        }
        spans.push(Span::styled(
            format!("  {}/{}", self.matches, self.total),
            styles::text_muted(),
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Centered notice for a list with nothing to show
pub fn render_no_matches(filtered: bool, area: Rect, buf: &mut Buffer) {
    let text = if filtered {
        "No matching records"
    } else {
        "No records yet. Press n to add one."
    };
    let top = area.height.saturating_sub(1) / 2;
    let row = Rect {
        y: area.y + top,
        height: area.height.min(1),
        ..area
    };
    Paragraph::new(Line::styled(text, styles::text_muted()))
        .alignment(Alignment::Center)
        .render(row, buf);
}
