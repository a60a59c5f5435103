//! Finance view: overview cards, transaction table and budget gauges

use bizdash_app::summary::BudgetUtilization;
use bizdash_app::views::FinanceTab;
use bizdash_app::AppState;
use bizdash_core::{
    BudgetOverview, FinanceSummary, Transaction, TransactionKind, TransactionStatus,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use super::budget;
use super::cards::{self, StatCard};
use super::filter_bar::{self, FilterBar};
use super::tabs::TabStrip;
use crate::format;
use crate::layout::split_tabs;
use crate::theme::{icons::IconSet, palette, styles};

/// Recent transactions listed on the overview tab
const RECENT_ROWS: usize = 5;

pub struct FinancePanel<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> FinancePanel<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn currency(&self) -> &'a str {
        &self.state.settings.ui.currency_symbol
    }

    fn render_overview(&self, transactions: &[Transaction], area: Rect, buf: &mut Buffer) {
        let summary = FinanceSummary::from_transactions(transactions);
        let currency = self.currency();
        let [cards_area, title_area, recent_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let margin_style = if summary.profit_margin.is_sign_negative() {
            Style::default().fg(palette::EXPENSE)
        } else {
            Style::default().fg(palette::INCOME)
        };
        cards::render_row(
            vec![
                StatCard::new("Total Income", format::money(currency, summary.total_income))
                    .value_style(Style::default().fg(palette::INCOME))
                    .caption("completed only"),
                StatCard::new("Total Expenses", format::money(currency, summary.total_expenses))
                    .value_style(Style::default().fg(palette::EXPENSE))
                    .caption("completed only"),
                StatCard::new("Net Profit", format::money(currency, summary.net_profit)),
                StatCard::new("Profit Margin", format::percent(summary.margin_display()))
                    .value_style(margin_style)
                    .caption(format!("{} pending", summary.pending_count)),
            ],
            cards_area,
            buf,
        );

        Paragraph::new(Line::styled(" Recent transactions", styles::accent_bold()))
            .render(title_area, buf);

        let recent: Vec<&Transaction> = transactions.iter().take(RECENT_ROWS).collect();
        if recent.is_empty() {
            filter_bar::render_no_matches(false, recent_area, buf);
            return;
        }
        self.table(&recent, None).render(recent_area, buf);
    }

    fn render_transactions(&self, transactions: &[Transaction], area: Rect, buf: &mut Buffer) {
        let view = &self.state.finance;
        let visible = view.visible(transactions);

        let [filter_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        FilterBar::new(&view.filter, visible.len(), transactions.len())
            .scope(view.category_filter.map(|c| c.label()))
            .render(filter_area, buf);

        if visible.is_empty() {
            let filtered = !view.filter.is_empty() || view.category_filter.is_some();
            filter_bar::render_no_matches(filtered, list_area, buf);
            return;
        }

        let mut table_state = TableState::default().with_selected(Some(view.selected));
        StatefulWidget::render(
            self.table(&visible, Some(styles::focused_selected())),
            list_area,
            buf,
            &mut table_state,
        );
    }

    fn render_budgets(&self, area: Rect, buf: &mut Buffer) {
        let currency = self.currency();
        let overview = BudgetOverview::from_lines(&self.state.budgets);
        let [cards_area, list_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let remaining_style = if overview.total_remaining.is_sign_negative() {
            styles::error()
        } else {
            styles::text_primary()
        };
        cards::render_row(
            vec![
                StatCard::new("Allocated", format::money(currency, overview.total_allocated)),
                StatCard::new("Spent", format::money(currency, overview.total_spent)),
                StatCard::new("Remaining", format::money(currency, overview.total_remaining))
                    .value_style(remaining_style),
                StatCard::new("Alerts", overview.alerts.to_string())
                    .caption("at or above 70%"),
            ],
            cards_area,
            buf,
        );

        let lines: Vec<BudgetUtilization> =
            self.state.budgets.iter().map(BudgetUtilization::from).collect();
        if lines.is_empty() {
            Paragraph::new(Line::styled(" No budgets allocated", styles::text_muted()))
                .render(list_area, buf);
            return;
        }
        budget::render_list(&lines, self.icons, currency, list_area, buf);
    }

    fn table(&self, rows: &[&Transaction], highlight: Option<Style>) -> Table<'a> {
        let currency = self.currency();
        let icons = self.icons;
        let rows = rows.iter().map(|t| {
            let sign = match t.kind {
                TransactionKind::Income => "+",
                TransactionKind::Expense => "-",
            };
            let status_style = styles::transaction_status(t.status);
            let description_style = if t.status == TransactionStatus::Cancelled {
                status_style
            } else {
                styles::text_primary()
            };
            Row::new(vec![
                Cell::from(Span::styled(icons.transaction_status(t.status), status_style)),
                Cell::from(Span::styled(format::date(t.date), styles::text_muted())),
                Cell::from(Span::styled(t.description.clone(), description_style)),
                Cell::from(Line::from(vec![
                    Span::raw(icons.category(t.category)),
                    Span::raw(" "),
                    Span::styled(t.category.label(), styles::text_secondary()),
                ])),
                Cell::from(
                    Line::styled(
                        format!("{sign}{}", format::money(currency, t.amount)),
                        styles::amount(t.kind),
                    )
                    .right_aligned(),
                ),
                Cell::from(Span::styled(t.status.label(), status_style)),
            ])
        });

        let header = Row::new(vec!["", "Date", "Description", "Category", "Amount", "Status"])
            .style(styles::text_muted());

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(13),
                Constraint::Fill(1),
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .column_spacing(1);

        match highlight {
            Some(style) => table.row_highlight_style(style),
            None => table,
        }
    }
}

impl Widget for FinancePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = &self.state.finance;
        let block = styles::glass_block(true).title(Line::styled(" Finance ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let (tabs_area, content) = split_tabs(inner);
        TabStrip::new(view.tab).render(tabs_area, buf);

        let transactions = self.state.transactions();
        match view.tab {
            FinanceTab::Overview => self.render_overview(&transactions, content, buf),
            FinanceTab::Transactions => self.render_transactions(&transactions, content, buf),
            FinanceTab::Budgets => self.render_budgets(content, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{demo_state, empty_state, TestTerminal};
    use bizdash_app::config::IconMode;
    use bizdash_core::{Category, ViewId};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(
            FinancePanel::new(state, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        term
    }

    fn finance_state(tab: FinanceTab) -> AppState {
        let mut state = demo_state();
        state.switch_view(ViewId::Finance);
        state.finance.tab = tab;
        state
    }

    #[test]
    fn test_overview_counts_only_completed() {
        let term = render(&finance_state(FinanceTab::Overview));

        assert!(term.buffer_contains("$21,200.00"));
        assert!(term.buffer_contains("$8,300.00"));
        assert!(term.buffer_contains("$12,900.00"));
        assert!(term.buffer_contains("60.8%"));
        assert!(term.buffer_contains("2 pending"));
    }

    #[test]
    fn test_overview_lists_newest_first() {
        let term = render(&finance_state(FinanceTab::Overview));

        let newest = term.find_line("Invoice 1042").expect("newest row");
        let older = term.find_line("Conference travel").expect("older row");
        assert!(newest < older);
    }

    #[test]
    fn test_only_active_tab_is_rendered() {
        let term = render(&finance_state(FinanceTab::Budgets));
        assert!(term.buffer_contains("Allocated"));
        assert!(!term.buffer_contains("Recent transactions"));
    }

    #[test]
    fn test_transactions_tab_shows_signed_amounts() {
        let term = render(&finance_state(FinanceTab::Transactions));

        assert!(term.buffer_contains("+$15,000.00"));
        assert!(term.buffer_contains("-$3,500.00"));
        assert!(term.buffer_contains("7/7"));
    }

    #[test]
    fn test_transactions_filter_by_text_and_category() {
        let mut state = finance_state(FinanceTab::Transactions);
        state.finance.filter.set_query("CLIENT");
        state.finance.category_filter = Some(Category::Sales);
        let term = render(&state);

        assert!(term.buffer_contains("Client payment - Acme Corp"));
        assert!(!term.buffer_contains("Invoice 1042"));
        assert!(term.buffer_contains("1/7"));
    }

    #[test]
    fn test_filter_without_results_says_so() {
        let mut state = finance_state(FinanceTab::Transactions);
        state.finance.filter.set_query("no such thing");
        let term = render(&state);

        assert!(term.buffer_contains("No matching records"));
        assert!(term.buffer_contains("0/7"));
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let mut state = finance_state(FinanceTab::Transactions);
        state.finance.selected = 1;
        let term = render(&state);

        // Newest first: index 1 is the second most recent transaction
        let row = term.find_line("Conference travel").expect("selected row");
        assert_eq!(term.buffer()[(10, row)].bg, palette::ACCENT);
    }

    #[test]
    fn test_budgets_tab_shows_critical_marketing() {
        let term = render(&finance_state(FinanceTab::Budgets));

        assert!(term.buffer_contains("Marketing"));
        assert!(term.buffer_contains("95%"));
    }

    #[test]
    fn test_empty_repository_prompts_for_first_record() {
        let mut state = empty_state();
        state.switch_view(ViewId::Finance);
        state.finance.tab = FinanceTab::Transactions;
        let term = render(&state);

        assert!(term.buffer_contains("No records yet"));
    }
}
