//! Reports view: counts by kind and the generated report list

use bizdash_app::views::ReportsTab;
use bizdash_app::AppState;
use bizdash_core::{Report, ReportKind, ReportStatus, ReportSummary};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use super::cards::{self, StatCard};
use super::filter_bar::{self, FilterBar};
use super::tabs::TabStrip;
use crate::format;
use crate::layout::split_tabs;
use crate::theme::{icons::IconSet, styles};

pub struct ReportsPanel<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> ReportsPanel<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn render_overview(&self, reports: &[Report], area: Rect, buf: &mut Buffer) {
        let summary = ReportSummary::from_reports(reports);
        let [cards_area, title_area, kinds_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        cards::render_row(
            vec![
                StatCard::new("Generated", summary.total.to_string()).caption(
                    summary
                        .latest
                        .map(|d| format!("latest {}", format::date(d)))
                        .unwrap_or_else(|| "none yet".to_string()),
                ),
                StatCard::new("Ready", summary.ready.to_string())
                    .value_style(styles::report_status(ReportStatus::Ready)),
                StatCard::new("Generating", summary.generating.to_string())
                    .value_style(styles::report_status(ReportStatus::Generating)),
                StatCard::new("Failed", summary.failed.to_string())
                    .value_style(styles::report_status(ReportStatus::Failed)),
            ],
            cards_area,
            buf,
        );

        Paragraph::new(Line::styled(" Templates", styles::accent_bold())).render(title_area, buf);

        let lines: Vec<Line> = ReportKind::ALL
            .iter()
            .map(|&kind| {
                let count = ReportSummary::count_kind(reports, kind);
                Line::from(vec![
                    Span::styled(format!("  {:<14}", kind.label()), styles::text_primary()),
                    Span::styled(
                        format!("{count} report{}", if count == 1 { "" } else { "s" }),
                        styles::text_muted(),
                    ),
                ])
            })
            .collect();
        Paragraph::new(lines).render(kinds_area, buf);
    }

    fn render_generated(&self, reports: &[Report], area: Rect, buf: &mut Buffer) {
        let view = &self.state.reports;
        let visible = view.visible(reports);

        let [filter_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        FilterBar::new(&view.filter, visible.len(), reports.len())
            .scope(view.kind_filter.map(|k| k.label()))
            .render(filter_area, buf);

        if visible.is_empty() {
            let filtered = !view.filter.is_empty() || view.kind_filter.is_some();
            filter_bar::render_no_matches(filtered, list_area, buf);
            return;
        }

        let icons = self.icons;
        let rows = visible.iter().map(|r| {
            let status_style = styles::report_status(r.status);
            Row::new(vec![
                Cell::from(Span::styled(icons.report_status(r.status), status_style)),
                Cell::from(Span::styled(r.name.clone(), styles::text_primary())),
                Cell::from(Span::styled(r.kind.label(), styles::text_secondary())),
                Cell::from(Span::styled(r.frequency.label(), styles::text_secondary())),
                Cell::from(Span::styled(format::date(r.generated_on), styles::text_muted())),
                Cell::from(Span::styled(r.status.label(), status_style)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(14),
                Constraint::Length(10),
                Constraint::Length(13),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(vec!["", "Name", "Kind", "Frequency", "Date", "Status"])
                .style(styles::text_muted()),
        )
        .column_spacing(1)
        .row_highlight_style(styles::focused_selected());

        let mut table_state = TableState::default().with_selected(Some(view.selected));
        StatefulWidget::render(table, list_area, buf, &mut table_state);
    }
}

impl Widget for ReportsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = &self.state.reports;
        let block = styles::glass_block(true).title(Line::styled(" Reports ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let (tabs_area, content) = split_tabs(inner);
        TabStrip::new(view.tab).render(tabs_area, buf);

        let reports = self.state.reports_list();
        match view.tab {
            ReportsTab::Overview => self.render_overview(&reports, content, buf),
            ReportsTab::Generated => self.render_generated(&reports, content, buf),
        }
    }
}
