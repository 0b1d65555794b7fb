//! Shell session: reads command lines, routes them to the board and renders
//! the results.
//!
//! ```text
//! stdin line → split_line → ShellLine → Cli::dispatch → Board → Display
//! ```
//!
//! Each handler returns the text to show; the event loop decides how to
//! print it. Errors from one command are reported and the loop continues.

use std::io::IsTerminal;

use anyhow::{bail, Context, Result};
use clap::{error::ErrorKind, Parser};
use log::{debug, info, warn};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    signal,
};
use trellis_core::{
    display::{
        BoardView, CreateResult, DeleteResult, MoveResult, OperationStatus, ProjectSummaries,
        UpdateResult,
    },
    models::TaskFilter,
    params::{Id, MoveTask, NewProject, NewTask},
    Board, BoardError,
};

use crate::{
    renderer::TerminalRenderer,
    session::{Session, INVALID_CREDENTIALS},
    shell::{
        split_line, BoardArgs, EditProjectArgs, EditTaskArgs, LoginArgs, ProjectCommands,
        ShellCommand, ShellLine, TaskCommands,
    },
};

const BANNER: &str = "# Trellis\n\nType `help` for commands. Sign in with `login demo@example.com password`.\n";

/// What a single command produced
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Markdown for the renderer
    Markdown(String),
    /// Text printed as is (JSON, clap help)
    Raw(String),
    Quit,
}

pub struct Cli {
    board: Board,
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(board: Board, renderer: TerminalRenderer) -> Self {
        Self {
            board,
            session: Session::new(),
            renderer,
        }
    }

    /// Read commands from stdin until EOF, `quit` or Ctrl-C.
    pub async fn run(mut self) -> Result<()> {
        let interactive = std::io::stdin().is_terminal();
        let mut lines = BufReader::new(io::stdin()).lines();

        self.renderer.render(BANNER)?;

        loop {
            if interactive {
                let name = self.session.user().map(|user| user.name.as_str());
                self.renderer.prompt(name)?;
            }

            let line = tokio::select! {
                line = lines.next_line() => line.context("Failed to read from stdin")?,
                _ = signal::ctrl_c() => {
                    info!("Interrupted");
                    None
                }
            };
            let Some(line) = line else {
                break;
            };

            match self.execute(&line) {
                Ok(Some(Outcome::Quit)) => break,
                Ok(Some(Outcome::Markdown(text))) => self.renderer.render(&text)?,
                Ok(Some(Outcome::Raw(text))) => self.renderer.raw(&text)?,
                Ok(None) => {}
                Err(e) => {
                    warn!("Command failed: {e:#}");
                    let status = OperationStatus::failure(format!("{e:#}"));
                    self.renderer.render(&status.to_string())?;
                }
            }
        }

        info!("Trellis stopped");
        Ok(())
    }

    /// Parse and run one line. Blank lines produce nothing.
    pub fn execute(&mut self, line: &str) -> Result<Option<Outcome>> {
        let words = split_line(line).map_err(anyhow::Error::msg)?;
        if words.is_empty() {
            return Ok(None);
        }

        match ShellLine::try_parse_from(words) {
            Ok(ShellLine { command }) => self.dispatch(command).map(Some),
            Err(e) => {
                if !matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    warn!("Unparseable command: {}", line.trim());
                }
                Ok(Some(Outcome::Raw(e.to_string().trim_end().to_string())))
            }
        }
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Outcome> {
        let open = matches!(command, ShellCommand::Login(_) | ShellCommand::Quit);
        if !open && !self.session.is_authenticated() {
            bail!("Please log in first: login <email> <password>");
        }
        debug!("Shell command: {command:?}");

        match command {
            ShellCommand::Login(args) => self.login(args),
            ShellCommand::Logout => {
                self.session.logout();
                Ok(success("Signed out"))
            }
            ShellCommand::Whoami => self.whoami(),
            ShellCommand::Dashboard => Ok(self.dashboard()),
            ShellCommand::Project { command } => self.handle_project_command(command),
            ShellCommand::Task { command } => self.handle_task_command(command),
            ShellCommand::Board(args) => self.show_board(args),
            ShellCommand::Export => {
                let json = serde_json::to_string_pretty(self.board.snapshot())
                    .context("Failed to serialize board")?;
                Ok(Outcome::Raw(json))
            }
            ShellCommand::Quit => Ok(Outcome::Quit),
        }
    }

    fn login(&mut self, LoginArgs { email, password }: LoginArgs) -> Result<Outcome> {
        if !self.session.login(&email, &password) {
            let message = self.session.error().unwrap_or(INVALID_CREDENTIALS).to_string();
            self.session.clear_error();
            bail!(message);
        }
        let name = self.session.user().map_or("", |user| user.name.as_str());
        Ok(success(format!("Welcome, {name}!")))
    }

    fn whoami(&self) -> Result<Outcome> {
        let user = self.session.user().context("No active session")?;
        Ok(Outcome::Markdown(format!(
            "Signed in as **{}** ({}), user ID {}\n",
            user.name, user.email, user.id
        )))
    }

    fn dashboard(&self) -> Outcome {
        let name = self.session.user().map_or("", |user| user.name.as_str());
        let stats = self.board.get_stats();
        let summaries = ProjectSummaries(self.board.get_project_summaries());

        Outcome::Markdown(format!(
            "# Dashboard\n\nWelcome back, {name}!\n\n## Statistics\n\n{stats}\n# Projects\n\n{summaries}"
        ))
    }

    pub fn handle_project_command(&mut self, command: ProjectCommands) -> Result<Outcome> {
        match command {
            ProjectCommands::Add(args) => {
                let params: NewProject = args.into();
                let project = self.board.add_project(&params)?;
                Ok(markdown(CreateResult::new(project)))
            }
            ProjectCommands::List => Ok(markdown(ProjectSummaries(
                self.board.get_project_summaries(),
            ))),
            ProjectCommands::Show(args) => {
                let Id { id } = args.into();
                let project = self
                    .board
                    .get_project(id)
                    .ok_or(BoardError::ProjectNotFound { id })?;

                let mut output = project.to_string();
                output.push_str("\n## Tasks\n\n");
                let tasks = self.board.get_tasks_by_project(id);
                if tasks.is_empty() {
                    output.push_str("_No tasks_\n");
                }
                for task in tasks {
                    output.push_str(&task.card().to_string());
                }
                Ok(Outcome::Markdown(output))
            }
            ProjectCommands::Edit(args) => self.edit_project(args),
            ProjectCommands::Delete(args) => {
                let Id { id } = args.into();
                let removal = self
                    .board
                    .delete_project(id)
                    .ok_or(BoardError::ProjectNotFound { id })?;
                Ok(markdown(DeleteResult::new(removal)))
            }
        }
    }

    fn edit_project(&mut self, args: EditProjectArgs) -> Result<Outcome> {
        let id = args.id;
        let mut project = self
            .board
            .get_project(id)
            .cloned()
            .ok_or(BoardError::ProjectNotFound { id })?;
        let mut changes = Vec::new();

        if let Some(name) = args.name.map(|name| name.trim().to_string()) {
            if name != project.name {
                changes.push(format!("Name: '{}' → '{}'", project.name, name));
                project.name = name;
            }
        }
        if let Some(description) = args.description.map(|d| d.trim().to_string()) {
            if description != project.description {
                changes.push("Description updated".to_string());
                project.description = description;
            }
        }

        let project = self
            .board
            .update_project(project)?
            .ok_or(BoardError::ProjectNotFound { id })?;
        Ok(markdown(UpdateResult::with_changes(project, changes)))
    }

    pub fn handle_task_command(&mut self, command: TaskCommands) -> Result<Outcome> {
        match command {
            TaskCommands::Add(args) => {
                let params: NewTask = args.into();
                let task = self.board.add_task(&params)?;
                Ok(markdown(CreateResult::new(task)))
            }
            TaskCommands::Show(args) => {
                let Id { id } = args.into();
                let task = self
                    .board
                    .get_task(id)
                    .ok_or(BoardError::TaskNotFound { id })?;
                Ok(markdown(task))
            }
            TaskCommands::Edit(args) => self.edit_task(args),
            TaskCommands::Move(args) => {
                let MoveTask {
                    task_id,
                    new_status,
                } = args.into();
                let from = self
                    .board
                    .get_task(task_id)
                    .map(|task| task.status)
                    .ok_or(BoardError::TaskNotFound { id: task_id })?;
                let task = self
                    .board
                    .move_task(task_id, new_status)
                    .ok_or(BoardError::TaskNotFound { id: task_id })?;
                Ok(markdown(MoveResult::new(task, from)))
            }
            TaskCommands::Delete(args) => {
                let Id { id } = args.into();
                let task = self
                    .board
                    .delete_task(id)
                    .ok_or(BoardError::TaskNotFound { id })?;
                Ok(markdown(DeleteResult::new(task)))
            }
        }
    }

    fn edit_task(&mut self, args: EditTaskArgs) -> Result<Outcome> {
        let id = args.id;
        let mut task = self
            .board
            .get_task(id)
            .cloned()
            .ok_or(BoardError::TaskNotFound { id })?;
        let mut changes = Vec::new();

        if let Some(title) = args.title.map(|t| t.trim().to_string()) {
            if title != task.title {
                changes.push(format!("Title: '{}' → '{}'", task.title, title));
                task.title = title;
            }
        }
        if let Some(description) = args.description.map(|d| d.trim().to_string()) {
            if description != task.description {
                changes.push("Description updated".to_string());
                task.description = description;
            }
        }
        if let Some(status) = args.status.map(Into::into) {
            if status != task.status {
                changes.push(format!("Status: {} → {}", task.status, status));
                task.status = status;
            }
        }
        if let Some(priority) = args.priority.map(Into::into) {
            if priority != task.priority {
                changes.push(format!("Priority: {} → {}", task.priority, priority));
                task.priority = priority;
            }
        }
        if let Some(assignee) = args.assignee.map(|a| a.trim().to_string()) {
            if assignee != task.assignee {
                changes.push(format!("Assignee: '{}' → '{}'", task.assignee, assignee));
                task.assignee = assignee;
            }
        }
        if args.clear_due && task.due_date.is_some() {
            changes.push("Due date removed".to_string());
            task.due_date = None;
        }
        if let Some(due) = args.due {
            if task.due_date != Some(due) {
                changes.push(format!("Due date: {due}"));
                task.due_date = Some(due);
            }
        }
        if let Some(project_id) = args.project {
            if project_id != task.project_id {
                changes.push(format!("Project: {} → {}", task.project_id, project_id));
                task.project_id = project_id;
            }
        }

        let task = self
            .board
            .update_task(task)?
            .ok_or(BoardError::TaskNotFound { id })?;
        Ok(markdown(UpdateResult::with_changes(task, changes)))
    }

    fn show_board(&self, args: BoardArgs) -> Result<Outcome> {
        let BoardArgs {
            project_id,
            search,
            status,
        } = args;
        let project = self
            .board
            .get_project(project_id)
            .ok_or(BoardError::ProjectNotFound { id: project_id })?;

        let filter = TaskFilter {
            search,
            status: status.map(Into::into),
        };
        let filtered = filter != TaskFilter::default();
        let view = BoardView::new(project, self.board.get_columns(project_id, &filter));

        let mut output = view.to_string();
        if filtered && view.visible_tasks() == 0 {
            output.push_str("\n_No tasks match the current filter_\n");
        }
        Ok(Outcome::Markdown(output))
    }
}

fn markdown(value: impl ToString) -> Outcome {
    Outcome::Markdown(value.to_string())
}

fn success(message: impl Into<String>) -> Outcome {
    markdown(OperationStatus::success(message))
}

#[cfg(test)]
mod tests {
    use trellis_core::models::TaskStatus;

    use super::*;

    fn signed_in_cli() -> Cli {
        let mut cli = Cli::new(Board::with_sample_data(), TerminalRenderer::new(false));
        cli.execute("login demo@example.com password")
            .expect("Failed to log in");
        cli
    }

    fn text(outcome: Option<Outcome>) -> String {
        match outcome {
            Some(Outcome::Markdown(text)) | Some(Outcome::Raw(text)) => text,
            other => panic!("Expected text output, got {other:?}"),
        }
    }

    #[test]
    fn test_board_commands_require_login() {
        let mut cli = Cli::new(Board::with_sample_data(), TerminalRenderer::new(false));

        let err = cli.execute("project list").expect_err("Expected refusal");
        assert!(err.to_string().contains("Please log in first"));

        let err = cli
            .execute("login demo@example.com wrong")
            .expect_err("Expected bad credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(cli.session.error(), None);
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut cli = signed_in_cli();
        assert_eq!(cli.execute("   ").expect("Blank line failed"), None);
    }

    #[test]
    fn test_add_and_move_task() {
        let mut cli = signed_in_cli();

        let output = text(
            cli.execute("task add 1 '  Write spec  ' -p high")
                .expect("Failed to add task"),
        );
        assert!(output.contains("Created task with ID:"));

        let task_id = cli
            .board
            .get_tasks_by_status(1, TaskStatus::Todo)
            .iter()
            .find(|task| task.title == "Write spec")
            .map(|task| task.id)
            .expect("Task should be in TO DO");

        let output = text(
            cli.execute(&format!("task move {task_id} done"))
                .expect("Failed to move task"),
        );
        assert!(output.contains("from TO DO to DONE"));
    }

    #[test]
    fn test_blank_project_name_is_rejected() {
        let mut cli = signed_in_cli();
        let before = cli.board.get_projects().len();

        let err = cli
            .execute("project add '   '")
            .expect_err("Expected validation error");

        assert!(err.to_string().contains("name"));
        assert_eq!(cli.board.get_projects().len(), before);
    }

    #[test]
    fn test_edit_task_lists_changes() {
        let mut cli = signed_in_cli();

        let output = text(
            cli.execute("task edit 1 --title 'New title' -a 'Ana' --clear-due")
                .expect("Failed to edit task"),
        );

        assert!(output.contains("Title: 'Design Homepage Layout' → 'New title'"));
        assert!(output.contains("Assignee: 'John Doe' → 'Ana'"));
        assert!(output.contains("Due date removed"));
        let task = cli.board.get_task(1).expect("Task should exist");
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_delete_project_reports_cascade() {
        let mut cli = signed_in_cli();

        let output = text(cli.execute("project delete 1").expect("Failed to delete"));

        assert!(output.contains("Deleted project 'Website Redesign' (ID: 1) and 2 tasks"));
        assert!(cli.board.get_tasks_by_project(1).is_empty());
        assert!(cli.execute("project delete 1").is_err());
    }

    #[test]
    fn test_board_filters() {
        let mut cli = signed_in_cli();

        let output = text(
            cli.execute("board 1 --search navigation")
                .expect("Failed to show board"),
        );
        assert!(output.contains("Implement Navigation Menu"));
        assert!(!output.contains("Design Homepage Layout"));

        let output = text(
            cli.execute("board 1 --status review")
                .expect("Failed to show board"),
        );
        assert!(output.contains("_No tasks match the current filter_"));
    }

    #[test]
    fn test_export_is_json() {
        let mut cli = signed_in_cli();
        let Some(Outcome::Raw(json)) = cli.execute("export").expect("Failed to export") else {
            panic!("Expected raw output");
        };

        let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
        assert_eq!(value["projects"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["tasks"][0]["status"], "IN_PROGRESS");
    }

    #[test]
    fn test_help_and_parse_errors_are_printed() {
        let mut cli = signed_in_cli();

        let help = text(cli.execute("help").expect("Help failed"));
        assert!(help.contains("dashboard"));

        let error = text(cli.execute("frobnicate").expect("Parse errors are output"));
        assert!(error.contains("frobnicate"));
    }

    #[test]
    fn test_quit() {
        let mut cli = Cli::new(Board::new(), TerminalRenderer::new(false));
        assert_eq!(cli.execute("quit").expect("Quit failed"), Some(Outcome::Quit));
    }
}
