//! The single state-transition function behind every board mutation.

use crate::models::{Project, Task, TaskStatus};

use super::BoardState;

/// A mutation of the board, fully resolved.
///
/// Ids and creation dates are assigned before a command is built, so
/// reducing a command is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddProject(Project),
    /// Full-record replace by id
    UpdateProject(Project),
    /// Removes the project and every task that belongs to it
    DeleteProject(u64),
    AddTask(Task),
    /// Full-record replace by id, including `project_id`
    UpdateTask(Task),
    DeleteTask(u64),
    MoveTask { task_id: u64, status: TaskStatus },
}

impl Command {
    /// Short name for log output.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddProject(_) => "add_project",
            Command::UpdateProject(_) => "update_project",
            Command::DeleteProject(_) => "delete_project",
            Command::AddTask(_) => "add_task",
            Command::UpdateTask(_) => "update_task",
            Command::DeleteTask(_) => "delete_task",
            Command::MoveTask { .. } => "move_task",
        }
    }
}

/// Applies `command` to `state` and returns the next state.
///
/// Commands naming an unknown id return the state unchanged. A project
/// deletion removes the project and its tasks in the same step.
pub fn reduce(mut state: BoardState, command: Command) -> BoardState {
    match command {
        Command::AddProject(project) => {
            state.projects.push(project);
        }
        Command::UpdateProject(project) => {
            if let Some(slot) = state.projects.iter_mut().find(|p| p.id == project.id) {
                *slot = project;
            }
        }
        Command::DeleteProject(project_id) => {
            state.projects.retain(|p| p.id != project_id);
            state.tasks.retain(|t| t.project_id != project_id);
        }
        Command::AddTask(task) => {
            state.tasks.push(task);
        }
        Command::UpdateTask(task) => {
            if let Some(slot) = state.tasks.iter_mut().find(|t| t.id == task.id) {
                *slot = task;
            }
        }
        Command::DeleteTask(task_id) => {
            state.tasks.retain(|t| t.id != task_id);
        }
        Command::MoveTask { task_id, status } => {
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == task_id) {
                task.status = status;
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_project_cascades_in_one_step() {
        let state = BoardState::sample();
        let next = reduce(state, Command::DeleteProject(1));

        assert!(next.projects.iter().all(|p| p.id != 1));
        assert!(next.tasks.iter().all(|t| t.project_id != 1));
        assert_eq!(next.projects.len(), 2);
        assert_eq!(next.tasks.len(), 2);
    }

    #[test]
    fn test_unknown_ids_leave_state_unchanged() {
        let state = BoardState::sample();
        let mut ghost_task = state.tasks[0].clone();
        ghost_task.id = 999;
        let mut ghost_project = state.projects[0].clone();
        ghost_project.id = 999;

        let commands = vec![
            Command::UpdateProject(ghost_project),
            Command::DeleteProject(999),
            Command::UpdateTask(ghost_task),
            Command::DeleteTask(999),
            Command::MoveTask {
                task_id: 999,
                status: TaskStatus::Done,
            },
        ];

        for command in commands {
            let name = command.name();
            assert_eq!(
                reduce(state.clone(), command),
                state,
                "{name} should be a no-op"
            );
        }
    }

    #[test]
    fn test_move_only_touches_status() {
        let state = BoardState::sample();
        let before = state.tasks[1].clone();

        let next = reduce(
            state,
            Command::MoveTask {
                task_id: before.id,
                status: TaskStatus::Review,
            },
        );

        let after = &next.tasks[1];
        assert_eq!(after.status, TaskStatus::Review);
        assert_eq!(
            Task {
                status: before.status,
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn test_update_replaces_whole_record_in_place() {
        let state = BoardState::sample();
        let mut replacement = state.tasks[0].clone();
        replacement.title = "Rewritten".to_string();
        replacement.project_id = 3;

        let next = reduce(state, Command::UpdateTask(replacement.clone()));

        assert_eq!(next.tasks[0], replacement);
        assert_eq!(next.tasks.len(), 4);
    }
}
