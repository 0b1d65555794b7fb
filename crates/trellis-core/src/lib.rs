//! Core library for the Trellis task board.
//!
//! This crate owns the project and task domain model: two normalized
//! in-memory collections, the operations that mutate them, and the derived
//! views (tasks by project, tasks by status, board columns, dashboard
//! statistics) that front ends render.
//!
//! # Architecture
//!
//! - **Store** ([`store`]): [`Board`] is the only owner of state. Every
//!   mutation becomes a [`store::Command`] applied by one pure reducer, so
//!   deleting a project and its tasks is a single transition.
//! - **Models** ([`models`]): `Project`, `Task`, status and priority enums,
//!   filters and summaries.
//! - **Display** ([`display`]): Markdown formatting for models, boards and
//!   operation results.
//!
//! State lives only for the lifetime of the process. A board can be seeded
//! from a JSON snapshot or the built-in demo data, but is never written back.
//!
//! # Quick Start
//!
//! ```rust
//! use trellis_core::{
//!     models::TaskStatus,
//!     params::{NewProject, NewTask},
//!     Board,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::new();
//!
//! let project = board.add_project(&NewProject {
//!     name: "Website Redesign".to_string(),
//!     description: "Modern UI/UX".to_string(),
//! })?;
//!
//! let task = board.add_task(&NewTask::titled(project.id, "Write spec"))?;
//! assert_eq!(task.status, TaskStatus::Todo);
//!
//! board.move_task(task.id, TaskStatus::Done);
//! for task in board.get_tasks_by_status(project.id, TaskStatus::Done) {
//!     println!("{}", task);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod ids;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use display::{
    BoardView, CreateResult, DeleteResult, MoveResult, OperationStatus, ProjectSummaries,
    UpdateResult,
};
pub use error::{BoardError, Result};
pub use models::{
    BoardStats, Column, Priority, Project, ProjectSummary, StatusCounts, Task, TaskFilter,
    TaskStatus,
};
pub use params::{Id, MoveTask, NewProject, NewTask};
pub use store::{Board, BoardBuilder, BoardState, Command, ProjectRemoval};
