//! Reports view: templates by kind and the generated report list

use bizdash_core::prelude::*;
use bizdash_core::{FilterState, Report, ReportFrequency, ReportKind};
use chrono::NaiveDate;

use super::form::{require, Form, FormRow};
use super::{clamp_selection, ViewTab};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportsTab {
    #[default]
    Overview,
    Generated,
}

impl ViewTab for ReportsTab {
    const ALL: &'static [Self] = &[ReportsTab::Overview, ReportsTab::Generated];

    fn label(&self) -> &'static str {
        match self {
            ReportsTab::Overview => "Overview",
            ReportsTab::Generated => "Generated",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportsViewState {
    pub tab: ReportsTab,
    pub filter: FilterState,
    pub kind_filter: Option<ReportKind>,
    pub selected: usize,
    pub draft: Option<ReportDraft>,
}

impl ReportsViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible<'a>(&self, reports: &'a [Report]) -> Vec<&'a Report> {
        reports
            .iter()
            .filter(|r| self.kind_filter.is_none_or(|k| r.kind == k))
            .filter(|r| self.filter.matches(&r.name))
            .collect()
    }

    /// None -> each kind in order -> None
    pub fn cycle_kind_filter(&mut self) {
        self.kind_filter = match self.kind_filter {
            None => Some(ReportKind::ALL[0]),
            Some(k) if k == ReportKind::ALL[ReportKind::ALL.len() - 1] => None,
            Some(k) => Some(k.next()),
        };
        self.selected = 0;
    }

    pub fn select_next(&mut self, visible_len: usize) {
        if visible_len > 0 {
            self.selected = (self.selected + 1) % visible_len;
        }
    }

    pub fn select_previous(&mut self, visible_len: usize) {
        if visible_len > 0 {
            self.selected = (self.selected + visible_len - 1) % visible_len;
        }
    }

    pub fn clamp(&mut self, visible_len: usize) {
        clamp_selection(&mut self.selected, visible_len);
    }

    pub fn selected_report<'a>(&self, reports: &'a [Report]) -> Option<&'a Report> {
        self.visible(reports).get(self.selected).copied()
    }
}

/// "Generate report" form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportDraft {
    pub name: String,
    pub kind: ReportKind,
    pub frequency: ReportFrequency,
    pub focus: usize,
    pub error: Option<String>,
}

impl ReportDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Form for ReportDraft {
    type Output = Report;

    const TITLE: &'static str = "Generate Report";

    fn rows(&self) -> Vec<FormRow> {
        vec![
            FormRow::text("Name", &self.name),
            FormRow::choice("Type", self.kind.label()),
            FormRow::choice("Frequency", self.frequency.label()),
        ]
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        (self.focus == 0).then_some(&mut self.name)
    }

    fn cycle(&mut self, forward: bool) {
        match (self.focus, forward) {
            (1, true) => self.kind = self.kind.next(),
            (1, false) => self.kind = self.kind.prev(),
            (2, true) => self.frequency = self.frequency.next(),
            (2, false) => self.frequency = self.frequency.prev(),
            _ => {}
        }
    }

    fn build(&self, today: NaiveDate) -> Result<Report> {
        let name = require("name", &self.name)?;
        Ok(Report::requested(name, self.kind, self.frequency, today))
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
