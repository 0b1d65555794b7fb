//! Read-only views over the board state.
//!
//! Every query is computed from the current state on each call.

use super::Board;
use crate::models::{
    BoardStats, Column, Project, ProjectSummary, StatusCounts, Task, TaskFilter, TaskStatus,
};

impl Board {
    /// All projects in insertion order.
    pub fn get_projects(&self) -> &[Project] {
        &self.state.projects
    }

    /// The project with the given id, if any.
    pub fn get_project(&self, project_id: u64) -> Option<&Project> {
        self.state.projects.iter().find(|p| p.id == project_id)
    }

    /// All tasks in insertion order.
    pub fn get_tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// The task with the given id, if any.
    pub fn get_task(&self, task_id: u64) -> Option<&Task> {
        self.state.tasks.iter().find(|t| t.id == task_id)
    }

    /// Every task of a project, in insertion order, regardless of status.
    pub fn get_tasks_by_project(&self, project_id: u64) -> Vec<&Task> {
        self.state
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    /// Tasks of a project with exactly the given status.
    pub fn get_tasks_by_status(&self, project_id: u64, status: TaskStatus) -> Vec<&Task> {
        self.state
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id && t.status == status)
            .collect()
    }

    /// The project's board: one column per status in workflow order.
    ///
    /// Columns hidden by the filter's status are returned empty rather than
    /// omitted, so the result always has four entries.
    pub fn get_columns(&self, project_id: u64, filter: &TaskFilter) -> Vec<Column<'_>> {
        TaskStatus::ALL
            .into_iter()
            .map(|status| {
                let tasks = if filter.shows_column(status) {
                    self.get_tasks_by_status(project_id, status)
                        .into_iter()
                        .filter(|task| filter.matches(task))
                        .collect()
                } else {
                    Vec::new()
                };
                Column { status, tasks }
            })
            .collect()
    }

    /// Summary of one project with live task counts.
    pub fn get_project_summary(&self, project_id: u64) -> Option<ProjectSummary> {
        self.get_project(project_id).map(|project| {
            ProjectSummary::from_project(project, self.get_tasks_by_project(project_id))
        })
    }

    /// Summaries of every project, in insertion order.
    pub fn get_project_summaries(&self) -> Vec<ProjectSummary> {
        self.state
            .projects
            .iter()
            .map(|project| {
                ProjectSummary::from_project(project, self.get_tasks_by_project(project.id))
            })
            .collect()
    }

    /// Dashboard statistics derived from the task collection.
    pub fn get_stats(&self) -> BoardStats {
        BoardStats {
            total_projects: u32::try_from(self.state.projects.len()).unwrap_or(u32::MAX),
            counts: StatusCounts::tally(&self.state.tasks),
        }
    }
}
