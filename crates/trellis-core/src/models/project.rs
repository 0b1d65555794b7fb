//! Project model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A named collection of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    /// Display name of the project
    pub name: String,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// Calendar date (UTC) the project was created
    pub created_at: Date,

    /// Informational counter set when the project is created.
    ///
    /// This is not kept in sync with the task collection; use
    /// [`crate::models::ProjectSummary`] for live counts.
    #[serde(default)]
    pub tasks_count: u32,
}
