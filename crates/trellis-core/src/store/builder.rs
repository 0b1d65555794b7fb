//! Builder for creating and configuring Board instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{Board, BoardState};
use crate::error::{BoardError, Result};

const SEED_FILE_NAME: &str = "seed.json";

/// Builder for creating and configuring Board instances.
///
/// Seed data is only ever read; the board is never written back to disk.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    seed_file: Option<PathBuf>,
    sample_data: bool,
    default_seed: bool,
}

impl BoardBuilder {
    /// Creates a new builder that falls back to the default seed file.
    pub fn new() -> Self {
        Self {
            seed_file: None,
            sample_data: false,
            default_seed: true,
        }
    }

    /// Sets a JSON snapshot to load the initial board from.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/trellis/seed.json` or
    /// `~/.config/trellis/seed.json` when that file exists.
    pub fn with_seed_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.seed_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Starts from the demo projects instead of an empty board. Cannot be
    /// combined with a seed file.
    pub fn with_sample_data(mut self, enabled: bool) -> Self {
        self.sample_data = enabled;
        self
    }

    /// Skips the lookup of the default seed file.
    pub fn without_default_seed(mut self) -> Self {
        self.default_seed = false;
        self
    }

    /// Builds the configured board.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::FileSystem` if the seed file cannot be read,
    /// `BoardError::Serialization` if it is not a valid snapshot, and
    /// `BoardError::InvalidInput` if the snapshot breaks board invariants.
    /// Asking for both a seed file and sample data is a
    /// `BoardError::Configuration` error.
    pub fn build(self) -> Result<Board> {
        if self.sample_data && self.seed_file.is_some() {
            return Err(BoardError::Configuration {
                message: "a seed file and sample data cannot be combined".to_string(),
            });
        }

        if let Some(path) = self.seed_file {
            return load_seed(&path);
        }

        if self.sample_data {
            info!("Loading sample board");
            return Ok(Board::with_sample_data());
        }

        if self.default_seed {
            if let Some(path) = Self::default_seed_path() {
                return load_seed(&path);
            }
        }

        debug!("Starting with an empty board");
        Ok(Board::new())
    }

    /// Returns the default seed path following the XDG Base Directory
    /// specification, if such a file exists.
    fn default_seed_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("trellis").find_config_file(SEED_FILE_NAME)
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads and validates a JSON board snapshot.
pub fn load_seed(path: &Path) -> Result<Board> {
    info!("Loading board from {}", path.display());
    let contents =
        std::fs::read_to_string(path).map_err(|e| BoardError::file_system(path, e))?;
    let state: BoardState = serde_json::from_str(&contents)?;
    Board::from_state(state)
}
