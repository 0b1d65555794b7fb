//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::fmt;

use crate::models::{Column, Project, ProjectSummary};

/// Newtype wrapper for displaying the dashboard's project list.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use trellis_core::{
///     display::ProjectSummaries,
///     models::{ProjectSummary, StatusCounts},
/// };
///
/// let summary = ProjectSummary {
///     id: 1,
///     name: "Website Redesign".to_string(),
///     description: "Modern UI/UX".to_string(),
///     created_at: date(2024, 1, 15),
///     counts: StatusCounts { todo: 1, in_progress: 1, review: 0, done: 0 },
/// };
///
/// let output = format!("{}", ProjectSummaries(vec![summary]));
/// assert!(output.contains("## Website Redesign (ID: 1)"));
/// ```
pub struct ProjectSummaries(pub Vec<ProjectSummary>);

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No projects found.")
        } else {
            for project in &self.0 {
                write!(f, "{}", project)?;
            }
            Ok(())
        }
    }
}

/// A project's board: its header followed by the four status columns.
pub struct BoardView<'a> {
    pub project: &'a Project,
    pub columns: Vec<Column<'a>>,
}

impl<'a> BoardView<'a> {
    pub fn new(project: &'a Project, columns: Vec<Column<'a>>) -> Self {
        Self { project, columns }
    }

    /// Number of tasks visible across all columns.
    pub fn visible_tasks(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }
}

impl<'a> fmt::Display for BoardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.project.name)?;
        if !self.project.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.project.description)?;
        }

        for column in &self.columns {
            writeln!(f)?;
            writeln!(
                f,
                "## {} ({})",
                column.status.column_title(),
                column.tasks.len()
            )?;
            writeln!(f)?;
            if column.tasks.is_empty() {
                writeln!(f, "_No tasks_")?;
            }
            for task in &column.tasks {
                write!(f, "{}", task.card())?;
            }
        }

        Ok(())
    }
}
