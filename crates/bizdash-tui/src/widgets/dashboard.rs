//! Dashboard view: headline figures from every domain

use bizdash_app::DashboardSummary;
use bizdash_core::UtilizationTier;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::budget;
use super::cards::{self, StatCard};
use crate::format;
use crate::theme::{icons::IconSet, palette, styles};

pub struct DashboardPanel<'a> {
    summary: &'a DashboardSummary,
    icons: IconSet,
    currency: &'a str,
}

impl<'a> DashboardPanel<'a> {
    pub fn new(summary: &'a DashboardSummary, icons: IconSet, currency: &'a str) -> Self {
        Self {
            summary,
            icons,
            currency,
        }
    }

    fn finance_cards(&self) -> Vec<StatCard<'static>> {
        let finance = &self.summary.finance;
        let net_style = if finance.net_profit.is_sign_negative() {
            Style::default().fg(palette::EXPENSE)
        } else {
            Style::default().fg(palette::INCOME)
        };
        vec![
            StatCard::new("Income", format::money(self.currency, finance.total_income))
                .value_style(Style::default().fg(palette::INCOME)),
            StatCard::new("Expenses", format::money(self.currency, finance.total_expenses))
                .value_style(Style::default().fg(palette::EXPENSE)),
            StatCard::new("Net Profit", format::money(self.currency, finance.net_profit))
                .value_style(net_style)
                .caption(format!("{} margin", format::percent(finance.margin_display()))),
            StatCard::new("Pending", finance.pending_count.to_string()).caption("transactions"),
        ]
    }

    fn activity_cards(&self) -> Vec<StatCard<'static>> {
        let s = self.summary;
        let alert_style = if s.budget.alerts > 0 {
            styles::tier(UtilizationTier::Warning)
        } else {
            styles::text_primary()
        };
        let overdue_style = if s.work.overdue_projects > 0 {
            styles::error()
        } else {
            styles::text_primary()
        };
        vec![
            StatCard::new("Budget Alerts", s.budget.alerts.to_string())
                .value_style(alert_style)
                .caption(format!(
                    "{} of {} spent",
                    format::money(self.currency, s.budget.total_spent),
                    format::money(self.currency, s.budget.total_allocated)
                )),
            StatCard::new("Projects", s.work.projects.to_string()),
            StatCard::new("Overdue", s.work.overdue_projects.to_string()).value_style(overdue_style),
            StatCard::new("Open Tasks", s.work.open_tasks.to_string()),
            StatCard::new("Reports Ready", s.reports.ready.to_string())
                .caption(format!("{} generating", s.reports.generating)),
        ]
    }
}

impl Widget for DashboardPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [finance_row, activity_row, budgets_title, budgets_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        cards::render_row(self.finance_cards(), finance_row, buf);
        cards::render_row(self.activity_cards(), activity_row, buf);

        Paragraph::new(Line::styled(" Budget utilization", styles::accent_bold()))
            .render(budgets_title, buf);

        // Most utilized first
        let mut lines = self.summary.budgets.clone();
        lines.sort_by(|a, b| b.percent.cmp(&a.percent));
        budget::render_list(&lines, self.icons, self.currency, budgets_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{demo_state, empty_state, TestTerminal};
    use bizdash_app::config::IconMode;

    fn render(summary: &DashboardSummary) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(
            DashboardPanel::new(summary, IconSet::new(IconMode::Unicode), "$"),
            term.area(),
        );
        term
    }

    #[test]
    fn test_dashboard_shows_finance_totals() {
        let summary = DashboardSummary::from_state(&demo_state());
        let term = render(&summary);

        assert!(term.buffer_contains("$21,200.00"));
        assert!(term.buffer_contains("$8,300.00"));
        assert!(term.buffer_contains("$12,900.00"));
        assert!(term.buffer_contains("60.8% margin"));
    }

    #[test]
    fn test_dashboard_lists_budgets_most_utilized_first() {
        let summary = DashboardSummary::from_state(&demo_state());
        let term = render(&summary);

        let marketing = term.find_line("Marketing").expect("marketing row");
        let travel = term.find_line("Travel").expect("travel row");
        assert!(marketing < travel);
    }

    #[test]
    fn test_dashboard_empty_state_renders_zeroes() {
        let summary = DashboardSummary::from_state(&empty_state());
        let term = render(&summary);

        assert!(term.buffer_contains("$0.00"));
        assert!(term.buffer_contains("0.0% margin"));
    }
}
