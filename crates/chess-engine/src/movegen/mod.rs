//! Pseudo-legal movement.
//!
//! Each piece kind owns a fixed set of [`DirectionalVector`]s. This module
//! expands them against the current board into concrete destinations,
//! applying board edges, step limits, blocking and capture rules. Nothing
//! here considers whether the mover's own king ends up in check.

mod vector;

use crate::{Board, Piece};
use chess_core::{Color, Square};
use std::collections::BTreeSet;

pub use vector::{squares_between, vectors_for, CaptureMode, DirectionalVector};

/// Returns every square `piece` can reach by its movement shape on `board`.
///
/// Rays are scanned nearest square first: empty squares are included, the
/// first opposing piece is included and ends the ray, a friendly piece ends
/// the ray without being included. Pawn pushes never capture and pawn
/// diagonals only reach an opposing piece.
pub fn find_reachable_positions(piece: &Piece, board: &Board) -> Vec<Square> {
    vectors_for(piece.kind(), piece.color(), piece.position())
        .iter()
        .flat_map(|vector| resolve_vector(piece, vector, board))
        .collect()
}

fn resolve_vector(piece: &Piece, vector: &DirectionalVector, board: &Board) -> Vec<Square> {
    let mut reachable = Vec::new();
    for square in vector.ray(piece.position()) {
        match board.piece_at(square) {
            None if vector.capture == CaptureMode::Only => break,
            None => reachable.push(square),
            Some(occupant) => {
                if occupant.is_opponent_of(piece) && vector.capture != CaptureMode::Never {
                    reachable.push(square);
                }
                break;
            }
        }
    }
    reachable
}

/// Returns the union of reachable squares over every piece of `color`.
pub fn controlled_squares(color: Color, board: &Board) -> BTreeSet<Square> {
    board
        .pieces_of(color)
        .flat_map(|piece| find_reachable_positions(piece, board))
        .collect()
}
