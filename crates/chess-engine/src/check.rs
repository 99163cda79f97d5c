//! Check, checkmate and pin detection.
//!
//! King safety is never stored. Every question is answered from the live
//! board, and "would this move leave my king attacked?" is answered by
//! playing the move on a clone and asking again. Pins fall out of that
//! simulation; there is no static pin-line analysis.
//!
//! A color without a king is never in check.

use crate::movegen::{find_reachable_positions, squares_between};
use crate::rules::{apply_move, en_passant_capture_square, is_promotion_candidate, MoveKind};
use crate::{Board, MoveHistory, Piece};
use chess_core::{Color, Move, PieceKind, Square};
use tracing::trace;

/// Returns true if some opposing piece can reach `color`'s king.
pub fn is_in_check(color: Color, board: &Board) -> bool {
    match board.king_of(color) {
        Ok(king) => {
            let target = king.position();
            board
                .pieces_of(color.opposite())
                .any(|p| find_reachable_positions(p, board).contains(&target))
        }
        Err(_) => false,
    }
}

/// Returns the opposing pieces attacking `color`'s king.
pub fn attackers_of(color: Color, board: &Board) -> Vec<Piece> {
    let Ok(king) = board.king_of(color) else {
        return Vec::new();
    };
    let target = king.position();
    board
        .pieces_of(color.opposite())
        .filter(|p| find_reachable_positions(p, board).contains(&target))
        .copied()
        .collect()
}

/// Plays `m` on a copy of the board and reports whether the mover's king is
/// then in check.
///
/// The move is executed as an en passant capture when the history allows
/// it, as a promotion when it names a piece for a pawn reaching the far rank,
/// and otherwise as a plain move or capture. Its legality is not checked.
pub fn is_check_on_next_move(board: &Board, history: &MoveHistory, m: Move) -> bool {
    let Some(mover) = board.piece_at(m.from()).copied() else {
        return false;
    };

    let kind = if en_passant_capture_square(board, history, m).is_some() {
        MoveKind::EnPassant
    } else if let Some(promoted) = m
        .promotion()
        .filter(|_| is_promotion_candidate(&mover, m.to()))
    {
        MoveKind::Promotion(promoted)
    } else if board.is_occupied(m.to()) {
        MoveKind::Capture
    } else {
        MoveKind::Regular
    };

    let mut hypothetical = board.clone();
    if let Err(error) = apply_move(&mut hypothetical, m, kind) {
        trace!(%m, %error, "simulation failed");
        return false;
    }
    let check = is_in_check(mover.color(), &hypothetical);
    trace!(%m, check, "simulated move");
    check
}

/// Returns the squares `king` can step to without ending in check.
pub fn legal_king_escape_squares(
    king: &Piece,
    board: &Board,
    history: &MoveHistory,
) -> Vec<Square> {
    find_reachable_positions(king, board)
        .into_iter()
        .filter(|&to| !is_check_on_next_move(board, history, Move::normal(king.position(), to)))
        .collect()
}

/// Returns true if a friendly piece other than the king can capture
/// `attacker` or step between it and `king` without leaving the king in
/// check.
///
/// Double check can never be met this way, so this is false whenever more
/// than one piece attacks the king.
pub fn can_block_or_capture(
    attacker: &Piece,
    king: &Piece,
    board: &Board,
    history: &MoveHistory,
) -> bool {
    if attackers_of(king.color(), board).len() > 1 {
        return false;
    }

    let mut targets = vec![attacker.position()];
    if attacker.kind().is_slider() {
        targets.extend(squares_between(attacker.position(), king.position()));
    }

    let defenders = board
        .pieces_of(king.color())
        .filter(|p| p.kind() != PieceKind::King);
    for defender in defenders {
        let from = defender.position();
        let resolves = find_reachable_positions(defender, board)
            .into_iter()
            .filter(|to| targets.contains(to))
            .any(|to| {
                let m = if is_promotion_candidate(defender, to) {
                    Move::promoting(from, to, PieceKind::Queen)
                } else {
                    Move::normal(from, to)
                };
                !is_check_on_next_move(board, history, m)
            });
        if resolves || resolves_en_passant(defender, attacker, &targets, board, history) {
            return true;
        }
    }
    false
}

/// An en passant capture resolves the check when it removes the checking
/// pawn or lands on a square between the attacker and the king.
fn resolves_en_passant(
    defender: &Piece,
    attacker: &Piece,
    targets: &[Square],
    board: &Board,
    history: &MoveHistory,
) -> bool {
    if defender.kind() != PieceKind::Pawn {
        return false;
    }
    let from = defender.position();
    [-1, 1]
        .into_iter()
        .filter_map(|file_delta| from.offset(defender.color().pawn_direction(), file_delta))
        .map(|to| Move::normal(from, to))
        .any(|m| {
            en_passant_capture_square(board, history, m).is_some_and(|taken| {
                taken == attacker.position() || targets.contains(&m.to())
            }) && !is_check_on_next_move(board, history, m)
        })
}

/// Returns true if `color` is checkmated.
///
/// The king must be in check with no escape square, and the check must be
/// either double or impossible to block or capture.
pub fn is_checkmate(color: Color, board: &Board, history: &MoveHistory) -> bool {
    let Ok(king) = board.king_of(color) else {
        return false;
    };
    let attackers = attackers_of(color, board);
    let Some(attacker) = attackers.first() else {
        return false;
    };
    if !legal_king_escape_squares(king, board, history).is_empty() {
        return false;
    }
    if attackers.len() > 1 {
        return true;
    }
    !can_block_or_capture(attacker, king, board, history)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(list: &str) -> Board {
        Board::from_piece_list(list).unwrap()
    }

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn no_king_is_never_in_check() {
        let b = board("qd1 Pe2");
        assert!(!is_in_check(Color::White, &b));
        assert!(attackers_of(Color::White, &b).is_empty());
        assert!(!is_checkmate(Color::White, &b, &MoveHistory::new()));
    }

    #[test]
    fn detects_sliding_and_jumping_checks() {
        assert!(is_in_check(Color::White, &board("Ke1 ra1")));
        assert!(!is_in_check(Color::White, &board("Ke1 Nb1 ra1")));
        assert!(is_in_check(Color::White, &board("Ke1 nd3")));
        assert!(is_in_check(Color::Black, &board("ke8 Pd7")));
        assert!(!is_in_check(Color::Black, &board("ke8 Pe7")));
    }

    #[test]
    fn lists_every_attacker() {
        let b = board("Ke1 re8 nd3 ba5");
        let attackers: Vec<_> = attackers_of(Color::White, &b)
            .iter()
            .map(|p| p.symbol())
            .collect();
        assert_eq!(attackers.len(), 3);
        assert!(attackers.contains(&'r'));
        assert!(attackers.contains(&'n'));
        assert!(attackers.contains(&'b'));
    }

    #[test]
    fn simulation_does_not_touch_the_board() {
        let b = board("Ke1 Be2 re8");
        let before = b.clone();
        assert!(is_check_on_next_move(&b, &MoveHistory::new(), mv("e2d3")));
        assert!(!is_check_on_next_move(&b, &MoveHistory::new(), mv("e1d1")));
        assert_eq!(b, before);
    }

    #[test]
    fn escape_squares_avoid_attacked_squares() {
        let b = board("Ke1 ra2 rh8");
        let king = *b.king_of(Color::White).unwrap();
        let mut escapes = legal_king_escape_squares(&king, &b, &MoveHistory::new());
        escapes.sort();
        assert_eq!(escapes, vec![Square::D1, Square::F1]);
    }

    #[test]
    fn king_may_capture_an_undefended_attacker() {
        let b = board("Ke1 qe2");
        let king = *b.king_of(Color::White).unwrap();
        assert_eq!(
            legal_king_escape_squares(&king, &b, &MoveHistory::new()),
            vec![sq("e2")]
        );
    }

    #[test]
    fn block_or_capture_a_single_checker() {
        let history = MoveHistory::new();
        let b = board("Kh1 Pg2 Ph2 ra1 Rc3");
        let king = *b.king_of(Color::White).unwrap();
        let attacker = *b.piece_at(Square::A1).unwrap();
        assert!(can_block_or_capture(&attacker, &king, &b, &history));

        let b = board("Kh1 Pg2 Ph2 ra1 Nc6");
        let king = *b.king_of(Color::White).unwrap();
        let attacker = *b.piece_at(Square::A1).unwrap();
        assert!(!can_block_or_capture(&attacker, &king, &b, &history));
    }

    #[test]
    fn a_pinned_defender_cannot_block() {
        let history = MoveHistory::new();
        let b = board("Kh1 Ph2 Bg2 ra1 qb8");
        let king = *b.king_of(Color::White).unwrap();
        let attacker = *b.piece_at(Square::A1).unwrap();
        assert!(can_block_or_capture(&attacker, &king, &b, &history));

        let b = board("Kh1 Ph2 Bg2 ra1 qa8");
        let king = *b.king_of(Color::White).unwrap();
        let attacker = *b.piece_at(Square::A1).unwrap();
        assert!(!can_block_or_capture(&attacker, &king, &b, &history));
        assert!(is_checkmate(Color::White, &b, &history));
    }

    #[test]
    fn back_rank_mate() {
        let history = MoveHistory::new();
        assert!(is_checkmate(Color::White, &board("Kh1 Pg2 Ph2 ra1"), &history));
        assert!(!is_checkmate(Color::White, &board("Kh1 Pg2 Ph2 ra1 Rc3"), &history));
        assert!(!is_checkmate(Color::White, &board("Kh1 Pg2 ra1"), &history));
    }

    #[test]
    fn double_check_cannot_be_blocked() {
        let history = MoveHistory::new();
        let single = board("Kh1 Pg2 Ph2 ra1 Qd4");
        assert!(!is_checkmate(Color::White, &single, &history));

        let double = board("Kh1 Pg2 Ph2 ra1 nf2 Qd4");
        assert_eq!(attackers_of(Color::White, &double).len(), 2);
        let king = *double.king_of(Color::White).unwrap();
        let attacker = *double.piece_at(sq("f2")).unwrap();
        assert!(!can_block_or_capture(&attacker, &king, &double, &history));
        assert!(is_checkmate(Color::White, &double, &history));
    }

    #[test]
    fn en_passant_can_block_a_check() {
        let history: MoveHistory = [mv("d7d5")].into_iter().collect();
        let b = board("Kb4 Pa3 Pa4 Pa5 Pb3 Pb5 Pc3 Pe5 bf8 pd5 ke8");
        let king = *b.king_of(Color::White).unwrap();
        let attacker = *b.piece_at(sq("f8")).unwrap();
        assert!(is_in_check(Color::White, &b));
        assert!(legal_king_escape_squares(&king, &b, &history).is_empty());
        assert!(can_block_or_capture(&attacker, &king, &b, &history));
        assert!(!is_checkmate(Color::White, &b, &history));
        assert!(is_checkmate(Color::White, &b, &MoveHistory::new()));
    }

    #[test]
    fn checking_pawn_taken_en_passant() {
        let history: MoveHistory = [mv("d7d5")].into_iter().collect();
        let b = board("Ke4 Pe5 pd5 kh8");
        let king = *b.king_of(Color::White).unwrap();
        let attacker = *b.piece_at(sq("d5")).unwrap();
        assert!(is_in_check(Color::White, &b));
        assert!(can_block_or_capture(&attacker, &king, &b, &history));
        assert!(!can_block_or_capture(&attacker, &king, &b, &MoveHistory::new()));
    }
}
