//! Parameter structures for board operations
//!
//! These structures carry user input from an interface layer (the terminal
//! shell, tests, or any other front end) into the [`crate::Board`] without
//! pulling interface framework derives into the core. Interface layers
//! define their own argument types and convert into these with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Shell Args    │    │  Core Params    │    │      Board      │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   (commands)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Text fields are expected to be trimmed by the caller; the board only
//! rejects required fields that are blank.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{Priority, TaskStatus};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProject {
    /// Name of the project (required)
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: String,
}

impl NewProject {
    /// Convenience constructor with an empty description.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }
}

/// Parameters for creating a new task.
///
/// Omitted status and priority default to `TODO` and `MEDIUM`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// ID of the project the task belongs to
    pub project_id: u64,
    /// Title of the task (required)
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub due_date: Option<Date>,
}

impl NewTask {
    /// Convenience constructor for a `TODO`, `MEDIUM` task with no extras.
    pub fn titled(project_id: u64, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Parameters for moving a task to another status column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTask {
    pub task_id: u64,
    pub new_status: TaskStatus,
}
