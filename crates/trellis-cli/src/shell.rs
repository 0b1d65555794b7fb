//! Shell command definitions using clap
//!
//! Each line typed into the shell is split into words by [`split_line`] and
//! parsed with clap's derive API. The argument structs follow the same
//! wrapper pattern as the rest of the interface layer:
//!
//! ```text
//! Input line → split_line → ShellLine (clap) → Core Params → Board
//! ```
//!
//! Conversions into core parameters trim user-entered text, so the board
//! only ever sees trimmed values.

use clap::{Args, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use trellis_core::{
    models::{Priority, TaskStatus},
    params::{Id, MoveTask, NewProject, NewTask},
};

/// One line of shell input
#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    no_binary_name = true,
    about = "Track projects and tasks on a four-column board"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands available at the shell prompt
#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Sign in to the board (demo@example.com / password)
    Login(LoginArgs),
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show statistics and every project
    #[command(alias = "d")]
    Dashboard,
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show a project's board grouped by status
    #[command(alias = "b")]
    Board(BoardArgs),
    /// Print the whole board as JSON
    Export,
    /// Leave the shell
    #[command(alias = "exit", alias = "q")]
    Quit,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "a")]
    Add(AddProjectArgs),
    /// List projects with task counts
    #[command(alias = "l", alias = "ls")]
    List,
    /// Show details of a project
    #[command(alias = "s")]
    Show(ProjectIdArgs),
    /// Change a project's name or description
    #[command(alias = "e")]
    Edit(EditProjectArgs),
    /// Delete a project together with all of its tasks
    #[command(alias = "rm")]
    Delete(ProjectIdArgs),
}

/// Create a new project
#[derive(Args, Debug)]
pub struct AddProjectArgs {
    /// Name of the project
    pub name: String,
    /// Optional description of the project
    #[arg(short, long, default_value = "")]
    pub description: String,
}

impl From<AddProjectArgs> for NewProject {
    fn from(val: AddProjectArgs) -> Self {
        NewProject {
            name: val.name.trim().to_string(),
            description: val.description.trim().to_string(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ProjectIdArgs {
    #[arg(help = "Unique identifier of the project")]
    pub id: u64,
}

impl From<ProjectIdArgs> for Id {
    fn from(val: ProjectIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change a project's name or description
#[derive(Args, Debug)]
pub struct EditProjectArgs {
    #[arg(help = "Unique identifier of the project to edit")]
    pub id: u64,
    #[arg(short, long, help = "New name for the project")]
    pub name: Option<String>,
    #[arg(short, long, help = "New description for the project")]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a task to a project
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Show details of a task
    #[command(alias = "s")]
    Show(TaskIdArgs),
    /// Edit any field of a task
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Move a task to another status column
    #[command(alias = "mv")]
    Move(MoveTaskArgs),
    /// Delete a task
    #[command(alias = "rm")]
    Delete(TaskIdArgs),
}

/// Add a task to a project
#[derive(Args, Debug)]
pub struct AddTaskArgs {
    #[arg(help = "Project the task belongs to")]
    pub project_id: u64,
    #[arg(help = "Title of the task")]
    pub title: String,
    #[arg(short, long, default_value = "", help = "What needs to be done")]
    pub description: String,
    #[arg(short, long, ignore_case = true, default_value = "todo")]
    pub status: StatusArg,
    #[arg(short, long, ignore_case = true, default_value = "medium")]
    pub priority: PriorityArg,
    #[arg(short, long, default_value = "", help = "Person responsible")]
    pub assignee: String,
    #[arg(long, help = "Due date as YYYY-MM-DD")]
    pub due: Option<Date>,
}

impl From<AddTaskArgs> for NewTask {
    fn from(val: AddTaskArgs) -> Self {
        NewTask {
            project_id: val.project_id,
            title: val.title.trim().to_string(),
            description: val.description.trim().to_string(),
            status: val.status.into(),
            priority: val.priority.into(),
            assignee: val.assignee.trim().to_string(),
            due_date: val.due,
        }
    }
}

#[derive(Args, Debug)]
pub struct TaskIdArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
}

impl From<TaskIdArgs> for Id {
    fn from(val: TaskIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit any field of a task
///
/// Fields that are not given keep their current value. The edited task
/// replaces the stored one as a whole.
#[derive(Args, Debug)]
pub struct EditTaskArgs {
    #[arg(help = "Unique identifier of the task to edit")]
    pub id: u64,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(short, long, ignore_case = true)]
    pub status: Option<StatusArg>,
    #[arg(short, long, ignore_case = true)]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, help = "New assignee")]
    pub assignee: Option<String>,
    #[arg(long, conflicts_with = "clear_due", help = "New due date as YYYY-MM-DD")]
    pub due: Option<Date>,
    #[arg(long, help = "Remove the due date")]
    pub clear_due: bool,
    #[arg(long, help = "Move the task to another project")]
    pub project: Option<u64>,
}

/// Move a task to another status column
#[derive(Args, Debug)]
pub struct MoveTaskArgs {
    #[arg(help = "Unique identifier of the task to move")]
    pub id: u64,
    #[arg(ignore_case = true, help = "Target column")]
    pub status: StatusArg,
}

impl From<MoveTaskArgs> for MoveTask {
    fn from(val: MoveTaskArgs) -> Self {
        MoveTask {
            task_id: val.id,
            new_status: val.status.into(),
        }
    }
}

/// Show a project's board grouped by status
#[derive(Args, Debug)]
pub struct BoardArgs {
    #[arg(help = "Project to show")]
    pub project_id: u64,
    #[arg(long, help = "Only show tasks whose title, description or assignee match")]
    pub search: Option<String>,
    #[arg(short, long, ignore_case = true, help = "Only show one column")]
    pub status: Option<StatusArg>,
}

/// Command-line representation of task statuses
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum StatusArg {
    /// Not started
    #[value(alias = "to_do")]
    Todo,
    /// Being worked on
    #[value(alias = "in_progress", alias = "inprogress")]
    InProgress,
    /// Waiting for review
    Review,
    /// Completed
    Done,
}

impl From<StatusArg> for TaskStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Todo => TaskStatus::Todo,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Review => TaskStatus::Review,
            StatusArg::Done => TaskStatus::Done,
        }
    }
}

/// Command-line representation of task priorities
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

/// Splits a line into words, honouring single quotes, double quotes and
/// backslash escapes.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
