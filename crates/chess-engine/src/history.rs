//! Append-only move log.

use chess_core::{Move, Square};
use serde::Serialize;

/// The ordered list of moves played in a game.
///
/// Castling and en passant legality read this log instead of tracking
/// per-piece "has moved" flags: a square counts as disturbed once any move
/// has started from it, whatever piece stands there now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        MoveHistory::default()
    }

    /// Appends a played move.
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the most recent move.
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Returns true if any recorded move started on `square`.
    pub fn has_moved_from(&self, square: Square) -> bool {
        self.moves.iter().any(|m| m.from() == square)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns every move in coordinate notation.
    pub fn to_notation(&self) -> Vec<String> {
        self.moves.iter().map(|m| m.to_uci()).collect()
    }
}

impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveHistory {
            moves: iter.into_iter().collect(),
        }
    }
}
