//! Normalized board state and snapshot validation.

use std::collections::HashSet;

use jiff::civil::date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{require_text, BoardError, Result},
    models::{Priority, Project, Task, TaskStatus},
};

/// The two normalized collections owned by a [`crate::Board`].
///
/// Both vectors keep insertion order. Tasks reference projects by id only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl BoardState {
    /// Checks that a snapshot could have been produced by board operations.
    ///
    /// Rejects duplicate ids, blank names or titles, and tasks whose
    /// project does not exist.
    pub fn validate(&self) -> Result<()> {
        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id) {
                return Err(BoardError::invalid_input("projects")
                    .with_reason(format!("duplicate project id {}", project.id)));
            }
            require_text("name", &project.name)?;
        }

        let mut task_ids = HashSet::new();
        for task in &self.tasks {
            if !task_ids.insert(task.id) {
                return Err(BoardError::invalid_input("tasks")
                    .with_reason(format!("duplicate task id {}", task.id)));
            }
            require_text("title", &task.title)?;
            if !project_ids.contains(&task.project_id) {
                return Err(BoardError::invalid_input("projectId").with_reason(format!(
                    "task {} references missing project {}",
                    task.id, task.project_id
                )));
            }
        }

        Ok(())
    }

    /// Largest id used by either collection, if any.
    pub fn max_id(&self) -> Option<u64> {
        self.projects
            .iter()
            .map(|project| project.id)
            .chain(self.tasks.iter().map(|task| task.id))
            .max()
    }

    /// Demo board with three projects and four tasks.
    pub fn sample() -> Self {
        let project = |id, name: &str, description: &str, created_at, tasks_count| Project {
            id,
            name: name.to_string(),
            description: description.to_string(),
            created_at,
            tasks_count,
        };

        let task = |id,
                    project_id,
                    title: &str,
                    description: &str,
                    status,
                    priority,
                    assignee: &str,
                    due_date,
                    created_at| Task {
            id,
            project_id,
            title: title.to_string(),
            description: description.to_string(),
            status,
            priority,
            assignee: assignee.to_string(),
            due_date: Some(due_date),
            created_at,
        };

        Self {
            projects: vec![
                project(
                    1,
                    "Website Redesign",
                    "Redesign the company website with modern UI/UX",
                    date(2024, 1, 15),
                    8,
                ),
                project(
                    2,
                    "Mobile App Development",
                    "Develop a cross-platform mobile application",
                    date(2024, 1, 20),
                    12,
                ),
                project(
                    3,
                    "Database Migration",
                    "Migrate legacy database to new cloud infrastructure",
                    date(2024, 1, 25),
                    5,
                ),
            ],
            tasks: vec![
                task(
                    1,
                    1,
                    "Design Homepage Layout",
                    "Create wireframes and mockups for the homepage",
                    TaskStatus::InProgress,
                    Priority::High,
                    "John Doe",
                    date(2024, 2, 15),
                    date(2024, 1, 15),
                ),
                task(
                    2,
                    1,
                    "Implement Navigation Menu",
                    "Build responsive navigation with mobile support",
                    TaskStatus::Todo,
                    Priority::Medium,
                    "Jane Smith",
                    date(2024, 2, 20),
                    date(2024, 1, 16),
                ),
                task(
                    3,
                    2,
                    "Setup React Native Project",
                    "Initialize React Native project with TypeScript",
                    TaskStatus::Done,
                    Priority::High,
                    "Mike Johnson",
                    date(2024, 1, 30),
                    date(2024, 1, 20),
                ),
                task(
                    4,
                    2,
                    "Design App Icons",
                    "Create app icons for different platforms",
                    TaskStatus::Review,
                    Priority::Low,
                    "Sarah Wilson",
                    date(2024, 2, 10),
                    date(2024, 1, 22),
                ),
            ],
        }
    }
}
