//! Text front end for the chess rules engine.
//!
//! Reads moves and commands line by line, hands moves to
//! [`chess_engine::Game`] and prints the board from its active pieces.

pub mod config;
pub mod render;
pub mod session;

pub use config::{CliConfig, ConfigError, Setup};
pub use session::{Command, Flow, Session};
