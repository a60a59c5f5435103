//! Header bar with app title, workspace name and global shortcuts

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct MainHeader<'a> {
    workspace_name: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(workspace_name: Option<&'a str>) -> Self {
        Self { workspace_name }
    }

    fn title_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            " bizdash",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(name) = self.workspace_name {
            spans.push(Span::styled(" │ ", styles::text_muted()));
            spans.push(Span::styled(name, styles::text_primary()));
        }
        Line::from(spans)
    }

    fn shortcuts_line() -> Line<'static> {
        let key = styles::keybinding();
        let label = styles::text_secondary();
        Line::from(vec![
            Span::styled("[Ctrl+K]", key),
            Span::styled(" Commands  ", label),
            Span::styled("[Tab]", key),
            Span::styled(" Views  ", label),
            Span::styled("[q]", key),
            Span::styled(" Quit ", label),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = self.title_line();
        let shortcuts = Self::shortcuts_line();

        // Shortcuts are dropped first when the terminal is narrow
        if (title.width() + shortcuts.width()) as u16 + 1 <= inner.width {
            Paragraph::new(shortcuts)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
        Paragraph::new(title).render(inner, buf);
    }
}
