//! Panel for views that have no dedicated feature panel yet

use bizdash_core::ViewId;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct Placeholder {
    view: ViewId,
}

impl Placeholder {
    pub fn new(view: ViewId) -> Self {
        Self { view }
    }
}

impl Widget for Placeholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(format!(" {} ", self.view.label()));
        let inner = block.inner(area);
        block.render(area, buf);

        let top = inner.height.saturating_sub(3) / 2;
        let mut lines = vec![Line::default(); top as usize];
        lines.push(Line::styled(self.view.label(), styles::accent_bold()));
        lines.push(Line::styled(self.view.description(), styles::text_secondary()));
        lines.push(Line::styled(
            "Use Ctrl+K to jump to another area",
            styles::text_muted(),
        ));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
