//! Configuration file loading for the text front end.
//!
//! Settings come from an optional TOML file, `chess.toml` in the working
//! directory unless another path is given.

use chess_core::Color;
use chess_engine::{Board, Game, GameError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration or building the game
/// it describes.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured starting position could not be set up.
    #[error("Invalid starting position: {0}")]
    InvalidPosition(#[from] GameError),
    /// The configured side to move is not a color.
    #[error("Invalid side to move: {0}")]
    InvalidColor(#[from] chess_core::NotationError),
    /// The log level is not one of trace, debug, info, warn or error.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// How the board is populated when the session starts.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Setup {
    /// The usual starting array.
    #[default]
    Standard,
    /// An empty board, optionally filled from [`CliConfig::pieces`].
    Empty,
}

/// Front-end configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CliConfig {
    pub setup: Setup,
    /// Piece list placed on an empty board, e.g. `"Ke1 Rh1 ke8"`.
    pub pieces: Option<String>,
    /// Side to move for an empty setup.
    pub to_move: String,
    /// Print the board after every accepted move.
    pub show_board: bool,
    /// Print captured pieces under the board.
    pub show_captured: bool,
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            setup: Setup::Standard,
            pieces: None,
            to_move: "white".to_string(),
            show_board: true,
            show_captured: true,
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `path`, or from [`Self::default_path()`]
    /// when none is given.
    ///
    /// A missing default file yields the default configuration; an
    /// explicitly requested file must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::from_toml(&std::fs::read_to_string(&default_path)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns `chess.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Builds the game the session starts from.
    pub fn new_game(&self) -> Result<Game, ConfigError> {
        match self.setup {
            Setup::Standard => Ok(Game::new()),
            Setup::Empty => {
                let board = match &self.pieces {
                    Some(list) => Board::from_piece_list(list)?,
                    None => Board::empty(),
                };
                let side_to_move: Color = self.to_move.parse()?;
                Ok(Game::from_board(board, side_to_move))
            }
        }
    }
}
