//! Task operations for the Board.

use log::debug;

use super::{Board, Command};
use crate::{
    error::{require_text, BoardError, Result},
    models::{Task, TaskStatus},
    params::NewTask,
};

impl Board {
    /// Creates a task with a fresh id and today's date and appends it to the
    /// task list.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` if the title is blank and
    /// `BoardError::ProjectNotFound` if the project does not exist. The board
    /// is left unchanged in both cases.
    pub fn add_task(&mut self, params: &NewTask) -> Result<Task> {
        require_text("title", &params.title)?;
        self.require_project(params.project_id)?;

        let task = Task {
            id: self.next_id(),
            project_id: params.project_id,
            title: params.title.clone(),
            description: params.description.clone(),
            status: params.status,
            priority: params.priority,
            assignee: params.assignee.clone(),
            due_date: params.due_date,
            created_at: Self::today(),
        };

        self.dispatch(Command::AddTask(task.clone()));
        Ok(task)
    }

    /// Replaces the task with the same id.
    ///
    /// This is a full overwrite, `project_id` included; only the stored
    /// creation date is kept. Returns `Ok(None)` without touching the board
    /// when no task has that id, whatever the record holds.
    ///
    /// The new `project_id` is checked against the board rather than taken
    /// on trust, so an update can move a task between projects but cannot
    /// leave it pointing at a project that does not exist.
    ///
    /// # Errors
    ///
    /// For an existing task, returns `BoardError::InvalidInput` if the title
    /// is blank and `BoardError::ProjectNotFound` if the new `project_id`
    /// names no project. The board is left unchanged in both cases.
    pub fn update_task(&mut self, mut task: Task) -> Result<Option<Task>> {
        let Some(existing) = self.get_task(task.id) else {
            debug!("update_task: unknown task {}", task.id);
            return Ok(None);
        };
        task.created_at = existing.created_at;
        require_text("title", &task.title)?;
        self.require_project(task.project_id)?;

        self.dispatch(Command::UpdateTask(task.clone()));
        Ok(Some(task))
    }

    /// Deletes a task. Returns the removed task, or `None` when no task has
    /// that id.
    pub fn delete_task(&mut self, task_id: u64) -> Option<Task> {
        let Some(task) = self.get_task(task_id).cloned() else {
            debug!("delete_task: unknown task {task_id}");
            return None;
        };

        self.dispatch(Command::DeleteTask(task_id));
        Some(task)
    }

    /// Moves a task to another status column, leaving every other field
    /// untouched. Returns the moved task, or `None` when no task has that id.
    pub fn move_task(&mut self, task_id: u64, status: TaskStatus) -> Option<Task> {
        if self.get_task(task_id).is_none() {
            debug!("move_task: unknown task {task_id}");
            return None;
        }

        self.dispatch(Command::MoveTask { task_id, status });
        self.get_task(task_id).cloned()
    }

    fn require_project(&self, project_id: u64) -> Result<()> {
        if self.get_project(project_id).is_none() {
            return Err(BoardError::ProjectNotFound { id: project_id });
        }
        Ok(())
    }
}
