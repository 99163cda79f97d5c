//! Promotion detection.

use crate::Piece;
use chess_core::{PieceKind, Square};

/// Returns true if `piece` moving to `to` would promote: a pawn reaching the
/// farthest rank for its color.
pub fn is_promotion_candidate(piece: &Piece, to: Square) -> bool {
    piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank()
}
