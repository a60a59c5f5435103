//! Budget utilization bars colored by tier

use bizdash_app::summary::BudgetUtilization;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Widget},
};

use crate::format;
use crate::theme::{icons::IconSet, styles};

/// One budget line: label, gauge and spent/allocated figures
pub struct BudgetGauge<'a> {
    line: &'a BudgetUtilization,
    icons: IconSet,
    currency: &'a str,
}

impl<'a> BudgetGauge<'a> {
    pub fn new(line: &'a BudgetUtilization, icons: IconSet, currency: &'a str) -> Self {
        Self {
            line,
            icons,
            currency,
        }
    }
}

impl Widget for BudgetGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [label_area, gauge_area, figures_area] = Layout::horizontal([
            Constraint::Length(16),
            Constraint::Fill(1),
            Constraint::Length(42),
        ])
        .areas(area);

        let tier_style = styles::tier(self.line.tier);

        Paragraph::new(Line::from(vec![
            Span::styled(self.icons.category(self.line.category), tier_style),
            Span::raw(" "),
            Span::styled(self.line.category.label(), styles::text_primary()),
        ]))
        .render(label_area, buf);

        LineGauge::default()
            .ratio(f64::from(self.line.percent) / 100.0)
            .label(Span::styled(format!("{:>3}%", self.line.percent), tier_style))
            .filled_style(tier_style)
            .unfilled_style(styles::text_muted())
            .render(gauge_area, buf);

        let remaining_style = if self.line.remaining.is_sign_negative() {
            styles::error()
        } else {
            styles::text_muted()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(
                    " {} / {}",
                    format::money(self.currency, self.line.spent),
                    format::money(self.currency, self.line.allocated)
                ),
                styles::text_secondary(),
            ),
            Span::styled(
                format!("  {} left", format::money(self.currency, self.line.remaining)),
                remaining_style,
            ),
        ]))
        .render(figures_area, buf);
    }
}

/// Stack budget lines one per row, skipping what does not fit
pub fn render_list(
    lines: &[BudgetUtilization],
    icons: IconSet,
    currency: &str,
    area: Rect,
    buf: &mut Buffer,
) {
    for (i, line) in lines.iter().take(area.height as usize).enumerate() {
        let row = Rect {
            y: area.y + i as u16,
            height: 1,
            ..area
        };
        BudgetGauge::new(line, icons, currency).render(row, buf);
    }
}
