//! Chess rules engine.
//!
//! Given a board, a move history and a move in coordinate notation, the
//! engine decides whether the move is legal, what it does (capture,
//! castling, en passant, promotion) and whether either king is in check or
//! checkmated.
//!
//! This crate provides:
//! - [`Board`] and [`Piece`] - placed pieces plus captured pieces
//! - [`movegen`] - vector-based pseudo-legal movement for every piece kind
//! - [`rules`] - legality and execution, including castling, en passant and promotion
//! - [`check`] - check, checkmate and pin detection by simulating moves on a copy
//! - [`Game`] - a session tracking history and turn order
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, MoveKind};
//!
//! let mut game = Game::new();
//! game.make_move("e2e4").unwrap();
//! game.make_move("e7e5").unwrap();
//! let outcome = game.make_move("g1f3").unwrap();
//! assert_eq!(outcome.kind, MoveKind::Regular);
//! assert_eq!(game.history().to_notation(), ["e2e4", "e7e5", "g1f3"]);
//! ```

mod board;
pub mod check;
mod error;
mod game;
mod history;
pub mod movegen;
pub mod rules;

pub use board::{Board, Piece};
pub use check::{attackers_of, is_check_on_next_move, is_checkmate, is_in_check};
pub use error::GameError;
pub use game::{Game, MoveOutcome};
pub use history::MoveHistory;
pub use movegen::{find_reachable_positions, DirectionalVector};
pub use rules::{apply_move, legal_moves, validate_move, GameStatus, MoveKind};
