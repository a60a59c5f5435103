//! Project and task drafts behind the shell's creation modals

use bizdash_core::prelude::*;
use bizdash_core::{Project, Task, TaskPriority};
use chrono::NaiveDate;

use super::form::{parse_date, require, Form, FormRow};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    /// Optional `YYYY-MM-DD`
    pub due: String,
    pub focus: usize,
    pub error: Option<String>,
}

impl ProjectDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Form for ProjectDraft {
    type Output = Project;

    const TITLE: &'static str = "New Project";

    fn rows(&self) -> Vec<FormRow> {
        vec![
            FormRow::text("Name", &self.name),
            FormRow::text("Description", &self.description),
            FormRow::text("Due date", &self.due),
        ]
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.name),
            1 => Some(&mut self.description),
            2 => Some(&mut self.due),
            _ => None,
        }
    }

    fn cycle(&mut self, _forward: bool) {}

    fn build(&self, _today: NaiveDate) -> Result<Project> {
        let name = require("name", &self.name)?;
        let mut project = Project::new(name, self.description.trim());
        if !self.due.trim().is_empty() {
            project.due = Some(parse_date("due", &self.due)?);
        }
        Ok(project)
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub assignee: String,
    pub priority: TaskPriority,
    pub focus: usize,
    pub error: Option<String>,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Form for TaskDraft {
    type Output = Task;

    const TITLE: &'static str = "New Task";

    fn rows(&self) -> Vec<FormRow> {
        vec![
            FormRow::text("Title", &self.title),
            FormRow::text("Assignee", &self.assignee),
            FormRow::choice("Priority", self.priority.label()),
        ]
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.title),
            1 => Some(&mut self.assignee),
            _ => None,
        }
    }

    fn cycle(&mut self, forward: bool) {
        if self.focus == 2 {
            self.priority = if forward {
                self.priority.next()
            } else {
                self.priority.next().next()
            };
        }
    }

    fn build(&self, _today: NaiveDate) -> Result<Task> {
        let title = require("title", &self.title)?;
        Ok(Task::new(title, self.assignee.trim(), self.priority))
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
