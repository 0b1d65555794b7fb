//! Project operations for the Board.

use log::debug;

use super::{Board, Command, ProjectRemoval};
use crate::{
    error::{require_text, Result},
    models::Project,
    params::NewProject,
};

impl Board {
    /// Creates a project with a fresh id, today's date and a zero task
    /// counter, and appends it to the project list.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` if the name is blank. The board is
    /// left unchanged.
    pub fn add_project(&mut self, params: &NewProject) -> Result<Project> {
        require_text("name", &params.name)?;

        let project = Project {
            id: self.next_id(),
            name: params.name.clone(),
            description: params.description.clone(),
            created_at: Self::today(),
            tasks_count: 0,
        };

        self.dispatch(Command::AddProject(project.clone()));
        Ok(project)
    }

    /// Replaces the project with the same id.
    ///
    /// The stored creation date is kept. Returns `Ok(None)` without touching
    /// the board when no project has that id, whatever the record holds.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` if the project exists and the new
    /// name is blank.
    pub fn update_project(&mut self, mut project: Project) -> Result<Option<Project>> {
        let Some(existing) = self.get_project(project.id) else {
            debug!("update_project: unknown project {}", project.id);
            return Ok(None);
        };
        project.created_at = existing.created_at;
        require_text("name", &project.name)?;

        self.dispatch(Command::UpdateProject(project.clone()));
        Ok(Some(project))
    }

    /// Permanently deletes a project and all of its tasks.
    ///
    /// Both removals happen in one transition. Returns `None` when no
    /// project has that id.
    pub fn delete_project(&mut self, project_id: u64) -> Option<ProjectRemoval> {
        let Some(project) = self.get_project(project_id).cloned() else {
            debug!("delete_project: unknown project {project_id}");
            return None;
        };
        let tasks = self
            .get_tasks_by_project(project_id)
            .into_iter()
            .cloned()
            .collect();

        self.dispatch(Command::DeleteProject(project_id));
        Some(ProjectRemoval { project, tasks })
    }
}
