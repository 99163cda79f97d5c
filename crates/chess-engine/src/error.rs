//! Engine error type.

use chess_core::{Color, Move, NotationError, Square};
use thiserror::Error;

/// Reasons a move or board operation is rejected.
///
/// A rejected move never leaves the board or history partially modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("malformed move: {0}")]
    MalformedNotation(#[from] NotationError),

    #[error("no piece at {0}")]
    NoPieceAtSquare(Square),

    #[error("square {0} is already occupied")]
    OccupiedSquare(Square),

    #[error("the piece on {square} belongs to {color}, who is not to move")]
    WrongMover { square: Square, color: Color },

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("illegal move {0}: it leaves the king in check")]
    IllegalSelfCheck(Move),

    #[error("move {0} promotes a pawn but names no piece (append q, r, b or n)")]
    MissingPromotionKind(Move),

    #[error("{0} has no king on the board")]
    MissingKing(Color),
}
