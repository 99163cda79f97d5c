//! Move legality and execution.
//!
//! [`validate_move`] decides whether a move is legal for a color and what
//! kind of move it is; [`apply_move`] performs it. The check engine plays
//! hypothetical moves through the same [`apply_move`], so a simulated move
//! always ends in the position the real move would produce.

mod castling;
mod en_passant;
mod promotion;

pub use castling::{castle_pattern, legal_castle, patterns_for, CastlePattern, CastleSide};
pub use en_passant::en_passant_capture_square;
pub use promotion::is_promotion_candidate;

use crate::check::{is_check_on_next_move, is_checkmate, is_in_check};
use crate::movegen::find_reachable_positions;
use crate::{Board, GameError, MoveHistory, Piece};
use chess_core::{Color, Move, PieceKind, Square};
use serde::Serialize;

/// What a legal move does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// A move onto an empty square.
    Regular,
    /// A move capturing the piece on the destination.
    Capture,
    /// King and rook castling.
    Castle(CastleSide),
    /// A pawn capturing a pawn that just advanced two squares past it.
    EnPassant,
    /// A pawn reaching the far rank, with or without capture.
    Promotion(PieceKind),
}

/// State of the game from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// Decides whether `color` may play `m`.
///
/// Castling and en passant are tried first; everything else must be a
/// pseudo-legal destination of the moving piece. Pawns reaching the far rank
/// must name a promotion piece. No move may leave the mover's king in check.
pub fn validate_move(
    board: &Board,
    history: &MoveHistory,
    m: Move,
    color: Color,
) -> Result<MoveKind, GameError> {
    let piece = *board
        .piece_at(m.from())
        .ok_or(GameError::NoPieceAtSquare(m.from()))?;
    if piece.color() != color {
        return Err(GameError::WrongMover {
            square: m.from(),
            color: piece.color(),
        });
    }

    if m
        .promotion()
        .is_some_and(|kind| !PieceKind::PROMOTIONS.contains(&kind))
    {
        return Err(GameError::IllegalMove(m));
    }

    if piece.kind() == PieceKind::King {
        if let Some(pattern) = legal_castle(board, history, m) {
            return Ok(MoveKind::Castle(pattern.side));
        }
    }

    if en_passant_capture_square(board, history, m).is_some() {
        if is_check_on_next_move(board, history, m) {
            return Err(GameError::IllegalSelfCheck(m));
        }
        return Ok(MoveKind::EnPassant);
    }

    if !find_reachable_positions(&piece, board).contains(&m.to()) {
        return Err(GameError::IllegalMove(m));
    }

    let kind = if is_promotion_candidate(&piece, m.to()) {
        let promotion = m.promotion().ok_or(GameError::MissingPromotionKind(m))?;
        MoveKind::Promotion(promotion)
    } else if m.promotion().is_some() {
        return Err(GameError::IllegalMove(m));
    } else if board.is_occupied(m.to()) {
        MoveKind::Capture
    } else {
        MoveKind::Regular
    };

    if is_check_on_next_move(board, history, m) {
        return Err(GameError::IllegalSelfCheck(m));
    }
    Ok(kind)
}

/// Performs a move of the given kind, returning the captured piece if any.
///
/// The move is not re-validated. Errors only arise when `kind` does not fit
/// the board, and may leave `board` partially updated; callers wanting
/// atomicity apply to a clone.
pub fn apply_move(board: &mut Board, m: Move, kind: MoveKind) -> Result<Option<Piece>, GameError> {
    let (from, to) = (m.from(), m.to());
    match kind {
        MoveKind::Regular => {
            board.move_piece(from, to)?;
            Ok(None)
        }
        MoveKind::Capture => {
            let captured = board.remove_piece(to)?;
            board.move_piece(from, to)?;
            Ok(Some(captured))
        }
        MoveKind::EnPassant => {
            let captured = board.remove_piece(Square::new(to.file(), from.rank()))?;
            board.move_piece(from, to)?;
            Ok(Some(captured))
        }
        MoveKind::Castle(_) => {
            let pattern = castle_pattern(m).ok_or(GameError::IllegalMove(m))?;
            board.move_piece(pattern.king_from, pattern.king_to)?;
            board.move_piece(pattern.rook_from, pattern.rook_to)?;
            Ok(None)
        }
        MoveKind::Promotion(promoted) => {
            let pawn = *board
                .piece_at(from)
                .ok_or(GameError::NoPieceAtSquare(from))?;
            let captured = if board.is_occupied(to) {
                Some(board.remove_piece(to)?)
            } else {
                None
            };
            board.take_piece(from)?;
            board.place_piece(Piece::new(promoted, pawn.color(), to))?;
            Ok(captured)
        }
    }
}

/// Lists every legal move for `color`, with one entry per promotion piece.
pub fn legal_moves(board: &Board, history: &MoveHistory, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in board.pieces_of(color) {
        let from = piece.position();
        let mut targets = find_reachable_positions(piece, board);
        match piece.kind() {
            PieceKind::King => targets.extend(
                patterns_for(color)
                    .filter(|p| p.king_from == from)
                    .map(|p| p.king_to),
            ),
            PieceKind::Pawn => targets.extend(
                [-1, 1]
                    .into_iter()
                    .filter_map(|file_delta| from.offset(color.pawn_direction(), file_delta))
                    .filter(|to| !board.is_occupied(*to)),
            ),
            _ => {}
        }

        for to in targets {
            let candidates: Vec<Move> = if is_promotion_candidate(piece, to) {
                PieceKind::PROMOTIONS
                    .iter()
                    .map(|&kind| Move::promoting(from, to, kind))
                    .collect()
            } else {
                vec![Move::normal(from, to)]
            };
            moves.extend(
                candidates
                    .into_iter()
                    .filter(|&m| validate_move(board, history, m, color).is_ok()),
            );
        }
    }
    moves
}

/// Returns true if `color` is not in check but has no legal move.
pub fn is_stalemate(board: &Board, history: &MoveHistory, color: Color) -> bool {
    !is_in_check(color, board) && legal_moves(board, history, color).is_empty()
}

/// Classifies the position for `color`.
pub fn game_status(board: &Board, history: &MoveHistory, color: Color) -> GameStatus {
    if is_checkmate(color, board, history) {
        GameStatus::Checkmate
    } else if is_in_check(color, board) {
        GameStatus::Check
    } else if is_stalemate(board, history, color) {
        GameStatus::Stalemate
    } else {
        GameStatus::Ongoing
    }
}
