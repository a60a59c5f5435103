//! Projects view: project list beside the task list

use bizdash_core::{Project, ProjectStatus, Task, TaskPriority};
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use crate::format;
use crate::theme::{icons::IconSet, styles};

pub struct ProjectsPanel<'a> {
    projects: &'a [Project],
    tasks: &'a [Task],
    today: NaiveDate,
    icons: IconSet,
}

impl<'a> ProjectsPanel<'a> {
    pub fn new(projects: &'a [Project], tasks: &'a [Task], today: NaiveDate, icons: IconSet) -> Self {
        Self {
            projects,
            tasks,
            today,
            icons,
        }
    }

    fn render_projects(&self, area: Rect, buf: &mut Buffer) {
        let overdue = self.projects.iter().filter(|p| p.is_overdue(self.today)).count();
        let block = styles::glass_block(true).title(Line::from(vec![
            Span::styled(" Projects ", styles::accent_bold()),
            Span::styled(format!("{overdue} overdue "), styles::text_muted()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.projects.is_empty() {
            Paragraph::new(Line::styled(
                " No projects. Ctrl+K → Create project",
                styles::text_muted(),
            ))
            .render(inner, buf);
            return;
        }

        let rows = self.projects.iter().map(|p| {
            let is_overdue = p.is_overdue(self.today);
            let status_style = match p.status {
                ProjectStatus::Planning => styles::text_secondary(),
                ProjectStatus::Active => styles::accent(),
                ProjectStatus::Completed => styles::text_muted(),
            };
            let due = match p.due {
                Some(due) if is_overdue => Span::styled(
                    format!("{} {}", self.icons.alert(), format::date(due)),
                    styles::error().add_modifier(Modifier::BOLD),
                ),
                Some(due) => Span::styled(format::date(due), styles::text_secondary()),
                None => Span::styled("no due date", styles::text_muted()),
            };
            Row::new(vec![
                Cell::from(Span::styled(p.name.clone(), styles::text_primary())),
                Cell::from(Span::styled(p.status.label(), status_style)),
                Cell::from(due),
            ])
        });

        Table::new(
            rows,
            [Constraint::Fill(1), Constraint::Length(10), Constraint::Length(15)],
        )
        .header(Row::new(vec!["Name", "Status", "Due"]).style(styles::text_muted()))
        .render(inner, buf);
    }

    fn render_tasks(&self, area: Rect, buf: &mut Buffer) {
        let open = self.tasks.iter().filter(|t| !t.done).count();
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::styled(" Tasks ", styles::accent_bold()),
            Span::styled(format!("{open} open "), styles::text_muted()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.tasks.is_empty() {
            Paragraph::new(Line::styled(
                " No tasks. Ctrl+K → Create task",
                styles::text_muted(),
            ))
            .render(inner, buf);
            return;
        }

        let rows = self.tasks.iter().map(|t| {
            let priority_style = match t.priority {
                TaskPriority::High => styles::error(),
                TaskPriority::Medium => styles::keybinding(),
                TaskPriority::Low => styles::text_muted(),
            };
            let title_style = if t.done {
                styles::text_muted().add_modifier(Modifier::CROSSED_OUT)
            } else {
                styles::text_primary()
            };
            Row::new(vec![
                Cell::from(Span::styled(self.icons.dot(), priority_style)),
                Cell::from(Span::styled(t.title.clone(), title_style)),
                Cell::from(Span::styled(t.assignee.clone(), styles::text_secondary())),
                Cell::from(Span::styled(t.priority.label(), priority_style)),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(10),
                Constraint::Length(7),
            ],
        )
        .header(Row::new(vec!["", "Title", "Assignee", "Priority"]).style(styles::text_muted()))
        .render(inner, buf);
    }
}

impl Widget for ProjectsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
        self.render_projects(left, buf);
        self.render_tasks(right, buf);
    }
}
