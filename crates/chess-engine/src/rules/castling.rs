//! Castling legality.

use crate::check::is_in_check;
use crate::movegen::squares_between;
use crate::{Board, MoveHistory};
use chess_core::{Color, Move, PieceKind, Square};
use serde::Serialize;
use tracing::trace;

/// Which side of the board the king castles towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// The fixed squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePattern {
    pub color: Color,
    pub side: CastleSide,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

const PATTERNS: [CastlePattern; 4] = [
    CastlePattern {
        color: Color::White,
        side: CastleSide::Kingside,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        rook_to: Square::F1,
    },
    CastlePattern {
        color: Color::White,
        side: CastleSide::Queenside,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        rook_to: Square::D1,
    },
    CastlePattern {
        color: Color::Black,
        side: CastleSide::Kingside,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        rook_to: Square::F8,
    },
    CastlePattern {
        color: Color::Black,
        side: CastleSide::Queenside,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        rook_to: Square::D8,
    },
];

/// Returns the castling pattern `m` spells out (`e1g1`, `e1c1`, `e8g8`,
/// `e8c8`), regardless of the position.
pub fn castle_pattern(m: Move) -> Option<CastlePattern> {
    if m.promotion().is_some() {
        return None;
    }
    PATTERNS
        .iter()
        .find(|p| p.king_from == m.from() && p.king_to == m.to())
        .copied()
}

/// Returns the castling patterns available to `color`.
pub fn patterns_for(color: Color) -> impl Iterator<Item = CastlePattern> {
    PATTERNS.into_iter().filter(move |p| p.color == color)
}

/// Returns the pattern if `m` is a legal castling move for the piece on its
/// start square.
///
/// Legal when the king and rook of the same color stand on their home
/// squares, no move in the history ever started from either square, the
/// king is not in check, the squares between king and rook are empty, and
/// the king neither passes through nor lands on an attacked square.
pub fn legal_castle(board: &Board, history: &MoveHistory, m: Move) -> Option<CastlePattern> {
    let pattern = castle_pattern(m)?;
    let color = pattern.color;

    let king = board.piece_at(pattern.king_from)?;
    let rook = board.piece_at(pattern.rook_from)?;
    if king.kind() != PieceKind::King
        || king.color() != color
        || rook.kind() != PieceKind::Rook
        || rook.color() != color
    {
        return None;
    }

    if history.has_moved_from(pattern.king_from) || history.has_moved_from(pattern.rook_from) {
        trace!(%m, "castling refused: king or rook has moved");
        return None;
    }

    if is_in_check(color, board) {
        trace!(%m, "castling refused: king is in check");
        return None;
    }

    if squares_between(pattern.king_from, pattern.rook_from)
        .into_iter()
        .any(|sq| board.is_occupied(sq))
    {
        trace!(%m, "castling refused: path is blocked");
        return None;
    }

    let mut transit = squares_between(pattern.king_from, pattern.king_to);
    transit.push(pattern.king_to);
    if transit
        .into_iter()
        .any(|sq| king_attacked_on(board, pattern.king_from, sq, color))
    {
        trace!(%m, "castling refused: king would cross an attacked square");
        return None;
    }

    Some(pattern)
}

/// Stands the king on `square` in a copy of the board and asks whether it
/// is attacked there.
fn king_attacked_on(board: &Board, king_from: Square, square: Square, color: Color) -> bool {
    let mut hypothetical = board.clone();
    match hypothetical.move_piece(king_from, square) {
        Ok(()) => is_in_check(color, &hypothetical),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    fn history(moves: &[&str]) -> MoveHistory {
        moves.iter().map(|m| mv(m)).collect()
    }

    fn legal(list: &str, moves: &[&str], m: &str) -> bool {
        let board = Board::from_piece_list(list).unwrap();
        legal_castle(&board, &history(moves), mv(m)).is_some()
    }

    #[test]
    fn recognises_the_four_patterns() {
        assert_eq!(castle_pattern(mv("e1g1")).map(|p| p.rook_to), Some(Square::F1));
        assert_eq!(castle_pattern(mv("e1c1")).map(|p| p.rook_from), Some(Square::A1));
        assert_eq!(
            castle_pattern(mv("e8g8")).map(|p| p.side),
            Some(CastleSide::Kingside)
        );
        assert_eq!(
            castle_pattern(mv("e8c8")).map(|p| p.color),
            Some(Color::Black)
        );
        assert!(castle_pattern(mv("e1f1")).is_none());
        assert_eq!(patterns_for(Color::White).count(), 2);
    }

    #[test]
    fn both_sides_when_clear() {
        assert!(legal("Ke1 Rh1 Ra1", &[], "e1g1"));
        assert!(legal("Ke1 Rh1 Ra1", &[], "e1c1"));
        assert!(legal("ke8 rh8 ra8", &[], "e8g8"));
        assert!(legal("ke8 rh8 ra8", &[], "e8c8"));
    }

    #[test]
    fn requires_king_and_rook_of_mover() {
        assert!(!legal("Ke1", &[], "e1g1"));
        assert!(!legal("Ke1 rh1", &[], "e1g1"));
        assert!(!legal("Ke1 Nh1", &[], "e1g1"));
        assert!(!legal("Qe1 Rh1", &[], "e1g1"));
    }

    #[test]
    fn refused_after_king_or_rook_moved() {
        assert!(!legal("Ke1 Rh1", &["e1e2", "e8e7", "e2e1", "e7e8"], "e1g1"));
        assert!(!legal("Ke1 Rh1", &["h1h2", "a8a7", "h2h1"], "e1g1"));
        assert!(legal("Ke1 Rh1 Ra1", &["a1a2", "a8a7", "a2a1"], "e1g1"));
    }

    #[test]
    fn refused_when_path_blocked() {
        assert!(!legal("Ke1 Rh1 Ng1", &[], "e1g1"));
        assert!(!legal("Ke1 Ra1 nb1", &[], "e1c1"));
    }

    #[test]
    fn refused_in_check() {
        assert!(!legal("Ke1 Rh1 re8", &[], "e1g1"));
    }

    #[test]
    fn refused_through_or_into_attack() {
        assert!(!legal("Ke1 Rh1 rf8", &[], "e1g1"));
        assert!(!legal("Ke1 Rh1 rg8", &[], "e1g1"));
        assert!(!legal("Ke1 Rh1 pg2", &[], "e1g1"));
        assert!(!legal("Ke1 Ra1 bh6", &[], "e1c1"));
    }

    #[test]
    fn queenside_rook_may_pass_attacked_square() {
        assert!(legal("Ke1 Ra1 rb8", &[], "e1c1"));
    }
}
