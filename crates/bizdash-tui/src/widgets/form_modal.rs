//! Creation modal rendered from any [`Form`] draft

use bizdash_app::views::Form;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

const WIDTH: u16 = 60;
const LABEL_WIDTH: usize = 14;

pub struct FormModal<'a, F: Form> {
    form: &'a F,
}

impl<'a, F: Form> FormModal<'a, F> {
    pub fn new(form: &'a F) -> Self {
        Self { form }
    }

    fn field_lines(&self) -> Vec<Line<'static>> {
        let focus = self.form.focus();
        self.form
            .rows()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let focused = i == focus;
                let label_style = if focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                };
                let value = if row.is_choice {
                    format!("‹ {} ›", row.value)
                } else if focused {
                    format!("{}_", row.value)
                } else {
                    row.value
                };
                let value_style = if focused {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::from(vec![
                    Span::styled(if focused { "▶ " } else { "  " }, styles::accent()),
                    Span::styled(format!("{:<LABEL_WIDTH$}", row.label), label_style),
                    Span::styled(value, value_style),
                ])
            })
            .collect()
    }
}

impl<F: Form> Widget for FormModal<'_, F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::default()];
        lines.extend(self.field_lines());
        lines.push(Line::default());
        if let Some(error) = self.form.error() {
            lines.push(Line::styled(
                format!("  {error}"),
                styles::error().add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(vec![
            Span::styled("  Tab", styles::keybinding()),
            Span::styled(" next  ", styles::text_muted()),
            Span::styled("←→", styles::keybinding()),
            Span::styled(" choose  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" save  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]));

        let height = lines.len() as u16 + 2;
        let modal = modal_overlay::prepare(buf, area, WIDTH, height);
        let block = styles::modal_block(F::TITLE);
        let inner = block.inner(modal);
        block.render(modal, buf);

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_today, TestTerminal};
    use bizdash_app::views::{FormInput, ProjectDraft, TransactionDraft};

    #[test]
    fn test_transaction_form_renders_fields() {
        let draft = TransactionDraft::new(test_today());
        let mut term = TestTerminal::new();
        term.render_widget(FormModal::new(&draft), term.area());

        assert!(term.buffer_contains("New Transaction"));
        assert!(term.buffer_contains("Description"));
        assert!(term.buffer_contains("Amount"));
        assert!(term.buffer_contains("2024-06-15"));
    }

    #[test]
    fn test_form_shows_typed_text_and_choice() {
        let mut draft = TransactionDraft::new(test_today());
        for c in "Printer".chars() {
            draft.apply(FormInput::Char(c));
        }
        let mut term = TestTerminal::new();
        term.render_widget(FormModal::new(&draft), term.area());

        assert!(term.buffer_contains("Printer_"));
        assert!(term.buffer_contains("‹ expense ›"));
    }

    #[test]
    fn test_form_shows_inline_error() {
        let mut draft = ProjectDraft::new();
        assert!(draft.submit(test_today()).is_err());

        let mut term = TestTerminal::new();
        term.render_widget(FormModal::new(&draft), term.area());

        assert!(term.buffer_contains("New Project"));
        assert!(term.buffer_contains("must not be empty"));
    }
}
