//! Projects and tasks created from the app shell's modals

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due: Option<NaiveDate>,
}

impl Project {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: RecordId(0),
            name: name.into(),
            description: description.into(),
            status: ProjectStatus::Planning,
            due: None,
        }
    }

    /// Past its due date without being completed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != ProjectStatus::Completed && self.due.is_some_and(|due| due < today)
    }
}

impl Record for Project {
    const KIND: &'static str = "project";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_text(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name", "must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TaskPriority::Low => TaskPriority::Medium,
            TaskPriority::Medium => TaskPriority::High,
            TaskPriority::High => TaskPriority::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub assignee: String,
    pub priority: TaskPriority,
    pub done: bool,
}

impl Task {
    pub fn new(title: impl Into<String>, assignee: impl Into<String>, priority: TaskPriority) -> Self {
        Self {
            id: RecordId(0),
            title: title.into(),
            assignee: assignee.into(),
            priority,
            done: false,
        }
    }
}

impl Record for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_text(&self) -> &str {
        &self.title
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("title", "must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut p = Project::new("Website relaunch", "");
        assert!(!p.is_overdue(today));

        p.due = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert!(p.is_overdue(today));

        p.status = ProjectStatus::Completed;
        assert!(!p.is_overdue(today));
    }

    #[test]
    fn test_validation() {
        assert!(Project::new("", "desc").validate().is_err());
        assert!(Task::new("Write brief", "", TaskPriority::High).validate().is_ok());
        assert!(Task::new(" ", "sam", TaskPriority::Low).validate().is_err());
    }

    #[test]
    fn test_priority_cycles() {
        assert_eq!(TaskPriority::High.next(), TaskPriority::Low);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }
}
