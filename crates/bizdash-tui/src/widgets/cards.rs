//! Stat cards: a bordered title, one big value and an optional caption

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatCard<'a> {
    title: &'a str,
    value: String,
    value_style: Style,
    caption: Option<String>,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            value_style: styles::text_primary(),
            caption: None,
        }
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::styled(
            format!(" {} ", self.title),
            styles::text_secondary(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::styled(
            self.value,
            self.value_style.add_modifier(Modifier::BOLD),
        )];
        if let Some(caption) = self.caption {
            lines.push(Line::styled(caption, styles::text_muted()));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Lay cards out side by side in equal columns
pub fn render_row(cards: Vec<StatCard<'_>>, area: Rect, buf: &mut Buffer) {
    if cards.is_empty() {
        return;
    }
    let columns = Layout::horizontal(vec![Constraint::Fill(1); cards.len()]).split(area);
    for (card, column) in cards.into_iter().zip(columns.iter()) {
        card.render(*column, buf);
    }
}
