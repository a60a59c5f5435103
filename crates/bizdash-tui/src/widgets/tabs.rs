//! View navigation bar and per-view tab strip

use bizdash_app::views::ViewTab;
use bizdash_core::ViewId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::theme::styles;

/// One line listing every top-level view, active one highlighted
pub struct ViewNav {
    active: ViewId,
}

impl ViewNav {
    pub fn new(active: ViewId) -> Self {
        Self { active }
    }
}

impl ViewNav {
    /// Width of the nav with function-key prefixes and padding
    fn full_width() -> usize {
        let labels: usize = ViewId::ALL
            .iter()
            .map(|v| format!("F{} {}", v.index() + 1, v.label()).len() + 2)
            .sum();
        labels + ViewId::ALL.len() - 1
    }
}

impl Widget for ViewNav {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let with_keys = Self::full_width() <= area.width as usize;
        let titles = ViewId::ALL.iter().map(|view| {
            if with_keys {
                Line::from(vec![
                    Span::styled(format!("F{}", view.index() + 1), styles::text_muted()),
                    Span::raw(" "),
                    Span::raw(view.label()),
                ])
            } else {
                Line::from(view.label())
            }
        });

        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│");
        let tabs = if with_keys {
            tabs.padding(" ", " ")
        } else {
            tabs.padding("", "")
        };
        tabs.render(area, buf);
    }
}

/// Numbered tab strip for the active feature view
pub struct TabStrip {
    labels: Vec<&'static str>,
    selected: usize,
}

impl TabStrip {
    pub fn new<T: ViewTab>(active: T) -> Self {
        Self {
            labels: T::ALL.iter().map(|t| t.label()).collect(),
            selected: active.index(),
        }
    }
}

impl Widget for TabStrip {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{} {}", i + 1, label));

        Tabs::new(titles)
            .select(self.selected)
            .style(styles::text_muted())
            .highlight_style(styles::accent_bold())
            .divider(" ")
            .render(area, buf);
    }
}
