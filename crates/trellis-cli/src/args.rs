use std::path::PathBuf;

use clap::Parser;

/// Interactive terminal board for tracking projects and tasks
///
/// Trellis keeps projects and their tasks in memory for the length of one
/// session. Tasks move freely between four columns: TO DO, IN PROGRESS,
/// REVIEW and DONE. Commands are read line by line from standard input;
/// type `help` at the prompt for the full list.
#[derive(Parser, Debug)]
#[command(version, about, name = "trellis")]
pub struct Args {
    /// JSON snapshot to seed the board with. Defaults to
    /// $XDG_CONFIG_HOME/trellis/seed.json when that file exists
    #[arg(long, conflicts_with = "sample")]
    pub seed_file: Option<PathBuf>,

    /// Start with the built-in demo projects and tasks
    #[arg(long)]
    pub sample: bool,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
