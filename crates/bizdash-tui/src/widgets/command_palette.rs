//! Command palette popup: query input over a fuzzy-filtered command list

use bizdash_app::palette::{CommandPaletteState, VISIBLE_ROWS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use unicode_width::UnicodeWidthStr;

use super::modal_overlay;
use crate::format;
use crate::theme::{icons::IconSet, palette, styles};

const WIDTH: u16 = 64;
/// Borders, input, separator, rows, footer
const HEIGHT: u16 = VISIBLE_ROWS as u16 + 5;

pub struct CommandPalette<'a> {
    state: &'a CommandPaletteState,
    icons: IconSet,
}

impl<'a> CommandPalette<'a> {
    pub fn new(state: &'a CommandPaletteState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn input_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(format!("{} ", self.icons.command()), styles::accent_bold()),
            Span::styled(self.state.query.as_str(), styles::text_primary()),
            Span::styled("_", styles::keybinding()),
        ];
        if self.state.query.is_empty() {
            spans.push(Span::styled(" Type a command or a question", styles::text_muted()));
        }
        Line::from(spans)
    }

    fn entry_lines(&self, width: u16) -> Vec<Line<'static>> {
        if !self.state.has_results() {
            let query = self.state.query.trim();
            if query.is_empty() {
                return Vec::new();
            }
            return vec![Line::from(vec![
                Span::styled(" Ask assistant: ", styles::accent()),
                Span::styled(
                    format!("\"{}\"", format::truncate(query, width.saturating_sub(20) as usize)),
                    styles::text_primary(),
                ),
            ])
            .style(styles::focused_selected())];
        }

        self.state
            .entries()
            .enumerate()
            .skip(self.state.scroll_offset)
            .take(VISIBLE_ROWS)
            .map(|(i, entry)| {
                let selected = i == self.state.selected;
                let pad = (width as usize)
                    .saturating_sub(entry.label.width() + entry.hint.width() + 2);
                let line = Line::from(vec![
                    Span::raw(" "),
                    Span::styled(entry.label, styles::text_primary()),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(entry.hint, styles::text_muted()),
                ]);
                if selected {
                    line.style(styles::focused_selected())
                } else {
                    line
                }
            })
            .collect()
    }
}

impl Widget for CommandPalette<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare(buf, area, WIDTH, HEIGHT);

        let block = styles::modal_block("Commands");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [input_area, separator, list_area, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.input_line()).render(input_area, buf);
        Paragraph::new(Line::styled(
            "─".repeat(separator.width as usize),
            Style::default().fg(palette::BORDER_DIM),
        ))
        .render(separator, buf);
        Paragraph::new(self.entry_lines(list_area.width)).render(list_area, buf);
        Paragraph::new(Line::from(vec![
            Span::styled("↑↓", styles::keybinding()),
            Span::styled(" select  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" run  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]))
        .render(footer, buf);
    }
}
