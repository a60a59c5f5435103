//! Application state (Model in TEA pattern)

use bizdash_core::prelude::*;
use bizdash_core::{BudgetLine, Project, Report, Task, Transaction, ViewId};
use chrono::NaiveDate;

use crate::config::Settings;
use crate::palette::CommandPaletteState;
use crate::repository::Repositories;
use crate::seed;
use crate::views::{FinanceViewState, ProjectDraft, ReportsViewState, TaskDraft};

/// Lifecycle of the running app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// One of the shell's overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    CommandPalette,
    ProjectModal,
    TaskModal,
}

impl Overlay {
    pub fn label(&self) -> &'static str {
        match self {
            Overlay::CommandPalette => "command palette",
            Overlay::ProjectModal => "project form",
            Overlay::TaskModal => "task form",
        }
    }
}

/// Independent overlay visibility flags.
///
/// Each flag is raised by exactly one trigger and lowered by its own close
/// or successful save. Several may be raised at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    pub command_palette: bool,
    pub project_modal: bool,
    pub task_modal: bool,
}

impl Overlays {
    fn flag_mut(&mut self, overlay: Overlay) -> &mut bool {
        match overlay {
            Overlay::CommandPalette => &mut self.command_palette,
            Overlay::ProjectModal => &mut self.project_modal,
            Overlay::TaskModal => &mut self.task_modal,
        }
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::CommandPalette => self.command_palette,
            Overlay::ProjectModal => self.project_modal,
            Overlay::TaskModal => self.task_modal,
        }
    }

    pub fn any_open(&self) -> bool {
        self.command_palette || self.project_modal || self.task_modal
    }

    /// The overlay receiving key input: palette, then task, then project
    pub fn topmost(&self) -> Option<Overlay> {
        [Overlay::CommandPalette, Overlay::TaskModal, Overlay::ProjectModal]
            .into_iter()
            .find(|o| self.is_open(*o))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Last action result shown on the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Exactly one view is active
    pub active_view: ViewId,

    pub overlays: Overlays,

    pub palette: CommandPaletteState,
    pub project_draft: ProjectDraft,
    pub task_draft: TaskDraft,

    /// Finance view transient state
    pub finance: FinanceViewState,

    /// Reports view transient state
    pub reports: ReportsViewState,

    /// Record stores shared by every view
    pub repos: Repositories,

    /// Budget allocations per category
    pub budgets: Vec<BudgetLine>,

    pub notice: Option<Notice>,

    /// Date used for new records and overdue checks
    pub today: NaiveDate,

    /// Display name of the workspace directory
    pub workspace_name: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Empty state with default settings
    pub fn new() -> Self {
        Self::with_repositories(
            Settings::default(),
            Repositories::in_memory(),
            Vec::new(),
            chrono::Local::now().date_naive(),
        )
    }

    pub fn with_repositories(
        settings: Settings,
        repos: Repositories,
        budgets: Vec<BudgetLine>,
        today: NaiveDate,
    ) -> Self {
        let active_view = settings.behavior.default_view;
        Self {
            phase: AppPhase::Running,
            settings,
            active_view,
            overlays: Overlays::default(),
            palette: CommandPaletteState::new(),
            project_draft: ProjectDraft::new(),
            task_draft: TaskDraft::new(),
            finance: FinanceViewState::new(),
            reports: ReportsViewState::new(),
            repos,
            budgets,
            notice: None,
            today,
            workspace_name: None,
        }
    }

    /// State for the given settings, seeded with demo records when enabled
    pub fn with_settings(settings: Settings, today: NaiveDate) -> Result<Self> {
        if settings.behavior.seed_demo_data {
            let repos = seed::demo_repositories(today)?;
            Ok(Self::with_repositories(settings, repos, seed::demo_budgets(), today))
        } else {
            Ok(Self::with_repositories(
                settings,
                Repositories::in_memory(),
                Vec::new(),
                today,
            ))
        }
    }

    // ─────────────────────────────────────────────────────────
    // View Selection
    // ─────────────────────────────────────────────────────────

    /// Make `view` the active view.
    ///
    /// Re-selecting the active view is a no-op. Selecting a different view
    /// remounts it: its tab, filter, cursor and open draft are reset.
    /// Repositories are never touched.
    pub fn switch_view(&mut self, view: ViewId) -> bool {
        if view == self.active_view {
            return false;
        }
        debug!("Switching view {} -> {}", self.active_view, view);
        self.active_view = view;
        match view {
            ViewId::Finance => self.finance = FinanceViewState::new(),
            ViewId::Reports => self.reports = ReportsViewState::new(),
            _ => {}
        }
        true
    }

    // ─────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────

    pub fn open_overlay(&mut self, overlay: Overlay) {
        *self.overlays.flag_mut(overlay) = true;
    }

    /// Lower the flag and discard that overlay's transient input
    pub fn close_overlay(&mut self, overlay: Overlay) {
        *self.overlays.flag_mut(overlay) = false;
        match overlay {
            Overlay::CommandPalette => self.palette = CommandPaletteState::new(),
            Overlay::ProjectModal => self.project_draft = ProjectDraft::new(),
            Overlay::TaskModal => self.task_draft = TaskDraft::new(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle / Notices
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Show an error on the status line
    pub fn report_error(&mut self, error: &Error) {
        if error.is_recoverable() {
            warn!("{}", error);
        } else {
            error!("{}", error);
        }
        self.notice = Some(Notice::error(error.to_string()));
    }

    /// True while a text input (form field or filter) has focus
    pub fn is_text_entry(&self) -> bool {
        self.overlays.any_open()
            || match self.active_view {
                ViewId::Finance => self.finance.draft.is_some() || self.finance.filter.is_active,
                ViewId::Reports => self.reports.draft.is_some() || self.reports.filter.is_active,
                _ => false,
            }
    }

    // ─────────────────────────────────────────────────────────
    // Record Snapshots
    // ─────────────────────────────────────────────────────────

    pub fn transactions(&self) -> Vec<Transaction> {
        snapshot(self.repos.transactions.list())
    }

    pub fn reports_list(&self) -> Vec<Report> {
        snapshot(self.repos.reports.list())
    }

    pub fn projects(&self) -> Vec<Project> {
        snapshot(self.repos.projects.list())
    }

    pub fn tasks(&self) -> Vec<Task> {
        snapshot(self.repos.tasks.list())
    }
}

fn snapshot<R>(listed: Result<Vec<R>>) -> Vec<R> {
    listed.unwrap_or_else(|e| {
        error!("Failed to list records: {}", e);
        Vec::new()
    })
}
