//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers in this module add context-specific formatting for
//! collections, whole boards and operation results. Everything renders as
//! Markdown so the terminal renderer can style it, and reads fine as plain
//! text when colors are off.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Project, Task) │───▶│ (BoardView,     │───▶│     Output      │
//! │                 │    │  CreateResult)  │    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ProjectSummaries, BoardView)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   MoveResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{BoardView, ProjectSummaries};
pub use datetime::{DisplayDate, ShortDate};
pub use models::TaskCard;
pub use results::{CreateResult, DeleteResult, MoveResult, UpdateResult};
pub use status::OperationStatus;
