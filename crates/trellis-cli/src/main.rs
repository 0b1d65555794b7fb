//! Trellis CLI Application
//!
//! Interactive shell for the Trellis project and task board.

mod args;
mod cli;
mod renderer;
mod session;
mod shell;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use trellis_core::BoardBuilder;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        seed_file,
        sample,
        no_color,
    } = Args::parse();

    let board = BoardBuilder::new()
        .with_seed_file(seed_file)
        .with_sample_data(sample)
        .build()
        .context("Failed to initialize board")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!(
        "Trellis started with {} projects and {} tasks",
        board.get_projects().len(),
        board.get_tasks().len()
    );

    Cli::new(board, renderer).run().await
}
