//! The project and task store.
//!
//! [`Board`] is the single owner of all project and task data. Every
//! mutation is turned into a [`Command`] and applied by the pure
//! [`reduce`] function, so each operation is one atomic state transition:
//! a caller can never observe a project deleted while its tasks remain.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │     Command     │    │     reduce      │
//! │ (project_ops,   │───▶│  (tagged enum)  │───▶│  (next state)   │
//! │  task_ops)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   ids, dates, checks      one mutation          one transition
//! ```
//!
//! Queries in [`queries`] read the current state directly and are never
//! cached between mutations.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Board`] instances from seed data
//! - [`project_ops`]: Project add, update and cascade delete
//! - [`task_ops`]: Task add, update, delete and move
//! - [`queries`]: Read-only views (by project, by status, board columns,
//!   summaries)
//! - [`reducer`]: The [`Command`] type and the state-transition function
//! - [`state`]: The normalized [`BoardState`] and snapshot validation
//!
//! # Usage Examples
//!
//! ```rust
//! use trellis_core::{
//!     models::TaskStatus,
//!     params::{NewProject, NewTask},
//!     Board,
//! };
//!
//! # fn example() -> trellis_core::Result<()> {
//! let mut board = Board::new();
//! let project = board.add_project(&NewProject::named("Launch"))?;
//! let task = board.add_task(&NewTask::titled(project.id, "Write spec"))?;
//!
//! board.move_task(task.id, TaskStatus::Done);
//! assert_eq!(board.get_tasks_by_status(project.id, TaskStatus::Done).len(), 1);
//!
//! board.delete_project(project.id);
//! assert!(board.get_tasks_by_project(project.id).is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::debug;

use crate::{
    error::Result,
    ids::IdGenerator,
    models::{Project, Task},
};

pub mod builder;
pub mod project_ops;
pub mod queries;
pub mod reducer;
pub mod state;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use reducer::{reduce, Command};
pub use state::BoardState;

/// Single source of truth for projects and tasks.
#[derive(Debug, Default)]
pub struct Board {
    state: BoardState,
    ids: IdGenerator,
}

/// What a project deletion removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRemoval {
    pub project: Project,
    /// Tasks removed along with the project, in insertion order
    pub tasks: Vec<Task>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from an existing snapshot.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` if the snapshot has duplicate ids,
    /// blank names or titles, or tasks pointing at missing projects.
    pub fn from_state(state: BoardState) -> Result<Self> {
        state.validate()?;
        let mut ids = IdGenerator::new();
        if let Some(max_id) = state.max_id() {
            ids.observe(max_id);
        }
        Ok(Self { state, ids })
    }

    /// Creates a board holding the demo projects and tasks.
    pub fn with_sample_data() -> Self {
        let state = BoardState::sample();
        let mut ids = IdGenerator::new();
        if let Some(max_id) = state.max_id() {
            ids.observe(max_id);
        }
        Self { state, ids }
    }

    /// Read-only view of the whole state, for export.
    pub fn snapshot(&self) -> &BoardState {
        &self.state
    }

    /// Applies one command as a single state transition.
    pub fn dispatch(&mut self, command: Command) {
        debug!("dispatch: {}", command.name());
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, command);
    }

    fn next_id(&mut self) -> u64 {
        self.ids.next_id()
    }

    /// Today's calendar date in UTC, used for creation stamps.
    fn today() -> Date {
        Timestamp::now().to_zoned(TimeZone::UTC).date()
    }
}
