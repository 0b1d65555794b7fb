//! Filter types for querying the board.

use super::{Task, TaskStatus};

/// Filter options applied to board columns.
///
/// An empty filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive partial match against title, description or assignee
    pub search: Option<String>,

    /// Only show this status; every other column comes back empty
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Create a filter that only searches text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis_core::models::TaskFilter;
    ///
    /// let filter = TaskFilter::search("homepage");
    /// assert_eq!(filter.search.as_deref(), Some("homepage"));
    /// assert!(filter.status.is_none());
    /// ```
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            status: None,
        }
    }

    /// Create a filter restricted to a single status column.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            search: None,
            status: Some(status),
        }
    }

    /// Whether the column for `status` is visible under this filter.
    pub fn shows_column(&self, status: TaskStatus) -> bool {
        self.status.map_or(true, |wanted| wanted == status)
    }

    /// Whether `task` passes the text search. Blank terms match everything.
    pub fn matches(&self, task: &Task) -> bool {
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => task.matches_search(term),
            _ => true,
        }
    }
}
