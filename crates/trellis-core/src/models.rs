//! Data models for projects and tasks.
//!
//! This module contains the core domain models of the Trellis board. Display
//! implementations for these models are located in [`crate::display::models`]
//! to keep data structures apart from presentation logic.
//!
//! All models serialize with the camelCase field names used by board
//! snapshots (`projectId`, `createdAt`, `dueDate`, `tasksCount`), and dates
//! are plain calendar dates written as `YYYY-MM-DD`.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use trellis_core::models::{Priority, Task, TaskStatus};
//!
//! let task = Task {
//!     id: 1,
//!     project_id: 1,
//!     title: "Design Homepage Layout".to_string(),
//!     description: "Create wireframes".to_string(),
//!     status: TaskStatus::InProgress,
//!     priority: Priority::High,
//!     assignee: "John Doe".to_string(),
//!     due_date: Some(date(2024, 2, 15)),
//!     created_at: date(2024, 1, 15),
//! };
//! println!("{}", task); // Shows ➤ In Progress status icon
//! ```

pub mod filters;
pub mod project;
pub mod status;
pub mod summary;
pub mod task;


pub use filters::TaskFilter;
pub use project::Project;
pub use status::{Priority, TaskStatus};
pub use summary::{BoardStats, Column, ProjectSummary, StatusCounts};
pub use task::Task;
