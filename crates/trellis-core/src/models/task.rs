//! Task model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Priority, TaskStatus};

/// A unit of work that belongs to exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the owning project
    pub project_id: u64,

    /// Short title shown on the board card
    pub title: String,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// Current workflow status
    #[serde(default)]
    pub status: TaskStatus,

    /// Task priority
    #[serde(default)]
    pub priority: Priority,

    /// Person responsible for the task, may be empty
    #[serde(default)]
    pub assignee: String,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,

    /// Calendar date (UTC) the task was created
    pub created_at: Date,
}

impl Task {
    /// Case-insensitive match against title, description and assignee.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [&self.title, &self.description, &self.assignee]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
