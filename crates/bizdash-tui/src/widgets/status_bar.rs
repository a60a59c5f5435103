//! Status line: last notice on the left, key hints on the right

use bizdash_app::{AppState, NoticeLevel, Overlay};
use bizdash_core::ViewId;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::format;
use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn notice(&self, width: u16) -> Option<Span<'a>> {
        let notice = self.state.notice.as_ref()?;
        let style = match notice.level {
            NoticeLevel::Info => styles::accent(),
            NoticeLevel::Error => styles::error(),
        };
        let text = format::truncate(&notice.text, width.saturating_sub(1) as usize);
        Some(Span::styled(format!(" {text}"), style))
    }

    /// Hints for whatever currently receives keys
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.overlays.topmost() {
            Some(Overlay::CommandPalette) => &[("↑↓", "select"), ("Enter", "run"), ("Esc", "close")],
            Some(Overlay::ProjectModal | Overlay::TaskModal) => {
                &[("Tab", "next field"), ("Enter", "save"), ("Esc", "cancel")]
            }
            None => self.view_hints(),
        }
    }

    fn view_hints(&self) -> &'static [(&'static str, &'static str)] {
        let (draft_open, filtering) = match self.state.active_view {
            ViewId::Finance => (
                self.state.finance.draft.is_some(),
                self.state.finance.filter.is_active,
            ),
            ViewId::Reports => (
                self.state.reports.draft.is_some(),
                self.state.reports.filter.is_active,
            ),
            _ => return &[("Ctrl+K", "commands"), ("Tab", "next view")],
        };

        if draft_open {
            &[("←→", "choose"), ("Enter", "save"), ("Esc", "cancel")]
        } else if filtering {
            &[("Enter", "done"), ("Esc", "clear")]
        } else {
            &[
                ("1-9", "tab"),
                ("/", "filter"),
                ("f", "category"),
                ("n", "new"),
                ("c", "complete"),
                ("x", "delete"),
            ]
        }
    }

    fn hints_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let notice = self.notice(area.width);
        let notice_width = notice.as_ref().map_or(0, |s| s.width());

        if self.state.settings.ui.show_key_hints {
            let hints = self.hints_line();
            if notice_width + hints.width() <= area.width as usize {
                Paragraph::new(hints)
                    .alignment(Alignment::Right)
                    .render(area, buf);
            }
        }

        if let Some(notice) = notice {
            Paragraph::new(Line::from(notice)).render(area, buf);
        }
    }
}
