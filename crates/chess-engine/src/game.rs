//! Game session: board, move history and turn order.
//!
//! [`Game`] is the single entry point a front end needs: it parses a move,
//! validates it for the side to move, applies it and records it. A rejected
//! move leaves the game exactly as it was.

use crate::check::{is_checkmate, is_in_check};
use crate::rules::{apply_move, game_status, legal_moves, validate_move, GameStatus, MoveKind};
use crate::{Board, GameError, MoveHistory, Piece};
use chess_core::{Color, Move};
use serde::Serialize;
use tracing::debug;

/// What happened when a move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// The move as played.
    pub mov: Move,
    /// The kind of move.
    pub kind: MoveKind,
    /// The piece removed from the board by this move, if any.
    pub captured: Option<Piece>,
    /// Whether the opponent is now in check.
    pub check: bool,
    /// Whether the opponent is now checkmated.
    pub checkmate: bool,
}

/// A chess game with history tracking.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current board.
    board: Board,
    /// Every move played, in order.
    history: MoveHistory,
    /// Color whose turn it is.
    side_to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting array, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Creates a game from a custom board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self::from_parts(board, MoveHistory::new(), side_to_move)
    }

    /// Resumes a game from a board and the history that led to it.
    pub fn from_parts(board: Board, history: MoveHistory, side_to_move: Color) -> Self {
        Game {
            board,
            history,
            side_to_move,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Returns the color to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the number of half-moves played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, &self.history, self.side_to_move)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_in_check(self.side_to_move, &self.board)
    }

    /// Returns true if the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        is_checkmate(self.side_to_move, &self.board, &self.history)
    }

    /// Returns the state of the game for the side to move.
    pub fn status(&self) -> GameStatus {
        game_status(&self.board, &self.history, self.side_to_move)
    }

    /// Checks a move for the side to move without playing it.
    pub fn validate(&self, m: Move) -> Result<MoveKind, GameError> {
        validate_move(&self.board, &self.history, m, self.side_to_move)
    }

    /// Makes a move given in coordinate notation (`e2e4`, `e7e8q`).
    pub fn make_move(&mut self, notation: &str) -> Result<MoveOutcome, GameError> {
        let m = Move::from_uci(notation.trim()).map_err(|e| {
            debug!(notation, error = %e, "rejected malformed move");
            GameError::from(e)
        })?;
        self.play(m)
    }

    /// Plays a move for the side to move.
    pub fn play(&mut self, m: Move) -> Result<MoveOutcome, GameError> {
        let mover = self.side_to_move;
        let kind = self.validate(m).map_err(|e| {
            debug!(%m, color = %mover, error = %e, "rejected move");
            e
        })?;

        let mut next = self.board.clone();
        let captured = apply_move(&mut next, m, kind)?;
        self.board = next;
        self.history.push(m);
        self.side_to_move = mover.opposite();

        let opponent = self.side_to_move;
        let check = is_in_check(opponent, &self.board);
        let checkmate = check && is_checkmate(opponent, &self.board, &self.history);
        debug!(%m, color = %mover, ?kind, check, checkmate, "played move");

        Ok(MoveOutcome {
            mov: m,
            kind,
            captured,
            check,
            checkmate,
        })
    }
}
