//! Display implementations for domain models.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Status icons and column titles matching the board layout
//! - Compact card lines for tasks shown inside a board column

use std::fmt;

use super::datetime::{DisplayDate, ShortDate};
use crate::models::{BoardStats, Priority, Project, ProjectSummary, Task, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", DisplayDate(&self.created_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

impl Task {
    /// One-line card used inside board columns.
    pub fn card(&self) -> TaskCard<'_> {
        TaskCard(self)
    }
}

/// Compact rendering of a task as it appears on a board card.
pub struct TaskCard<'a>(&'a Task);

impl<'a> fmt::Display for TaskCard<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.0;
        write!(f, "- **{}** `{}` [{}]", task.title, task.id, task.priority)?;
        if !task.assignee.is_empty() {
            write!(f, " @{}", task.assignee)?;
        }
        if let Some(due) = &task.due_date {
            write!(f, " due {}", ShortDate(due))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Project: {}", self.project_id)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        if !self.assignee.is_empty() {
            writeln!(f, "- Assignee: {}", self.assignee)?;
        }
        if let Some(due) = &self.due_date {
            writeln!(f, "- Due: {}", DisplayDate(due))?;
        }
        writeln!(f, "- Created on {}", DisplayDate(&self.created_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_tasks();
        let progress = if total > 0 {
            format!(" ({}/{} done)", self.counts.done, total)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "- **Description**: {}", self.description)?;
        }
        writeln!(f, "- **Tasks**: {total}")?;
        writeln!(f, "- **Created**: {}", DisplayDate(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for BoardStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Total Projects**: {}", self.total_projects)?;
        writeln!(f, "- **Total Tasks**: {}", self.total_tasks())?;
        writeln!(f, "- **Completed**: {}", self.completed_tasks())?;
        writeln!(f, "- **In Progress**: {}", self.in_progress_tasks())
    }
}
