//! En passant legality.

use crate::{Board, MoveHistory};
use chess_core::{Move, PieceKind, Square};

/// Returns the square of the pawn captured if `m` is a legal en passant
/// capture, judged by the piece on `m`'s start square.
///
/// The mover must be a pawn on its en passant rank stepping diagonally
/// forward onto an empty square, with an opposing pawn directly beside it
/// on the destination file, and the last move in the history must be that
/// pawn's two-square advance onto its current square.
pub fn en_passant_capture_square(board: &Board, history: &MoveHistory, m: Move) -> Option<Square> {
    if m.promotion().is_some() {
        return None;
    }
    let pawn = board.piece_at(m.from())?;
    let color = pawn.color();
    if pawn.kind() != PieceKind::Pawn || m.from().rank() != color.en_passant_rank() {
        return None;
    }

    let forward = color.pawn_direction();
    let diagonal = [-1, 1]
        .into_iter()
        .any(|file_delta| m.from().offset(forward, file_delta) == Some(m.to()));
    if !diagonal || board.is_occupied(m.to()) {
        return None;
    }

    let capture_square = Square::new(m.to().file(), m.from().rank());
    let victim = board.piece_at(capture_square)?;
    if victim.kind() != PieceKind::Pawn || victim.color() == color {
        return None;
    }

    let double_step = Move::normal(
        Square::new(capture_square.file(), color.opposite().pawn_start_rank()),
        capture_square,
    );
    (history.last() == Some(double_step)).then_some(capture_square)
}
