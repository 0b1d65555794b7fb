//! Derived views computed from the task collection.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Project, Task, TaskStatus};

/// Task counts for one project, broken down by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub todo: u32,
    pub in_progress: u32,
    pub review: u32,
    pub done: u32,
}

impl StatusCounts {
    /// Tally the statuses of `tasks`.
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut counts, task| {
            let slot = match task.status {
                TaskStatus::Todo => &mut counts.todo,
                TaskStatus::InProgress => &mut counts.in_progress,
                TaskStatus::Review => &mut counts.review,
                TaskStatus::Done => &mut counts.done,
            };
            *slot = slot.saturating_add(1);
            counts
        })
    }

    /// Count for a single status.
    pub fn get(&self, status: TaskStatus) -> u32 {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Review => self.review,
            TaskStatus::Done => self.done,
        }
    }

    /// Total number of tasks counted.
    pub fn total(&self) -> u32 {
        self.todo
            .saturating_add(self.in_progress)
            .saturating_add(self.review)
            .saturating_add(self.done)
    }
}

/// Summary information about a project with live task statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project ID
    pub id: u64,
    /// Display name of the project
    pub name: String,
    /// Project description
    pub description: String,
    /// Creation date
    pub created_at: Date,
    /// Task counts derived from the task collection
    pub counts: StatusCounts,
}

impl ProjectSummary {
    /// Create a summary from a project and the tasks that belong to it.
    pub fn from_project<'a>(project: &Project, tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            description: project.description.clone(),
            created_at: project.created_at,
            counts: StatusCounts::tally(tasks),
        }
    }

    /// Total number of tasks in the project.
    pub fn total_tasks(&self) -> u32 {
        self.counts.total()
    }
}

/// One status column of a project board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// Dashboard statistics across every project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    pub total_projects: u32,
    pub counts: StatusCounts,
}

impl BoardStats {
    pub fn total_tasks(&self) -> u32 {
        self.counts.total()
    }

    pub fn completed_tasks(&self) -> u32 {
        self.counts.done
    }

    pub fn in_progress_tasks(&self) -> u32 {
        self.counts.in_progress
    }
}
