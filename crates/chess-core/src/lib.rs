//! Core types for chess.
//!
//! This crate provides the fundamental value types used by the rules engine:
//! - [`PieceKind`] and [`Color`] for piece identity
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for coordinate-notation moves (`e2e4`, `e7e8q`)
//! - [`NotationError`] for rejected input

mod color;
mod error;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use error::NotationError;
pub use mov::Move;
pub use piece::PieceKind;
pub use square::{File, Rank, Square};
