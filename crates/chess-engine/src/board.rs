//! Piece placement and capture bookkeeping.

use crate::GameError;
use chess_core::{Color, File, NotationError, PieceKind, Rank, Square};
use serde::Serialize;

/// A piece standing on a board.
///
/// Only the position changes over a piece's lifetime. Rooks and kings
/// remember the square they were created on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Square,
    starting_position: Option<Square>,
}

impl Piece {
    /// Creates a piece on the given square.
    pub fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        let starting_position =
            matches!(kind, PieceKind::Rook | PieceKind::King).then_some(position);
        Piece {
            kind,
            color,
            position,
            starting_position,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn position(&self) -> Square {
        self.position
    }

    /// The square a rook or king was created on; `None` for other kinds.
    #[inline]
    pub fn starting_position(&self) -> Option<Square> {
        self.starting_position
    }

    /// Returns the display letter (upper-case for White).
    #[inline]
    pub fn symbol(&self) -> char {
        self.kind.to_char(self.color)
    }

    /// Returns true if `other` belongs to the opposing side.
    #[inline]
    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

/// The set of pieces in play plus everything captured so far.
///
/// No two active pieces share a square. Cloning produces an independent
/// snapshot; hypothetical moves are always played on a clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    captured: Vec<Piece>,
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board::default()
    }

    /// Creates the standard starting array.
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut pieces = Vec::with_capacity(32);
        for color in Color::ALL {
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                pieces.push(Piece::new(kind, color, Square::new(file, color.back_rank())));
                pieces.push(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Square::new(file, color.pawn_start_rank()),
                ));
            }
        }
        Board {
            pieces,
            captured: Vec::new(),
        }
    }

    /// Creates a board from the given pieces.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Result<Self, GameError> {
        let mut board = Board::empty();
        for piece in pieces {
            board.place_piece(piece)?;
        }
        Ok(board)
    }

    /// Creates a board from a whitespace-separated piece list such as
    /// `"Ke1 Rh1 ke8 pd7"`. The letter's case gives the color.
    pub fn from_piece_list(list: &str) -> Result<Self, GameError> {
        let pieces = list
            .split_whitespace()
            .map(|token| -> Result<Piece, GameError> {
                let mut chars = token.chars();
                let (kind, color) = chars
                    .next()
                    .and_then(PieceKind::from_char)
                    .ok_or_else(|| NotationError::InvalidPiece(token.to_string()))?;
                let square: Square = chars.as_str().parse()?;
                Ok(Piece::new(kind, color, square))
            })
            .collect::<Result<Vec<_>, GameError>>()?;
        Board::from_pieces(pieces)
    }

    /// Places a piece on its square.
    pub fn place_piece(&mut self, piece: Piece) -> Result<(), GameError> {
        if self.is_occupied(piece.position) {
            return Err(GameError::OccupiedSquare(piece.position));
        }
        self.pieces.push(piece);
        Ok(())
    }

    /// Returns the piece on the given square, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position == square)
    }

    /// Returns true if any piece stands on the square.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Moves the piece on `from` to the empty square `to`.
    ///
    /// Captures must be resolved with [`remove_piece`](Board::remove_piece)
    /// first.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), GameError> {
        if self.is_occupied(to) {
            return Err(GameError::OccupiedSquare(to));
        }
        let piece = self
            .pieces
            .iter_mut()
            .find(|p| p.position == from)
            .ok_or(GameError::NoPieceAtSquare(from))?;
        piece.position = to;
        Ok(())
    }

    /// Removes the piece on `square` and records it as captured.
    pub fn remove_piece(&mut self, square: Square) -> Result<Piece, GameError> {
        let piece = self.take_piece(square)?;
        self.captured.push(piece);
        Ok(piece)
    }

    /// Removes the piece on `square` without recording a capture
    /// (a pawn leaving the board to be replaced on promotion).
    pub fn take_piece(&mut self, square: Square) -> Result<Piece, GameError> {
        let index = self
            .pieces
            .iter()
            .position(|p| p.position == square)
            .ok_or(GameError::NoPieceAtSquare(square))?;
        Ok(self.pieces.remove(index))
    }

    /// Returns an owned copy of every active piece.
    pub fn clone_pieces(&self) -> Vec<Piece> {
        self.pieces.clone()
    }

    /// Returns the king of the given color.
    pub fn king_of(&self, color: Color) -> Result<&Piece, GameError> {
        self.pieces
            .iter()
            .find(|p| p.kind == PieceKind::King && p.color == color)
            .ok_or(GameError::MissingKing(color))
    }

    /// Returns all active pieces.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the active pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    /// Returns captured pieces in capture order.
    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Returns the board mirrored top to bottom with colors swapped.
    pub fn mirrored(&self) -> Self {
        let flip = |p: &Piece| Piece {
            kind: p.kind,
            color: p.color.opposite(),
            position: p.position.flip_rank(),
            starting_position: p.starting_position.map(Square::flip_rank),
        };
        Board {
            pieces: self.pieces.iter().map(flip).collect(),
            captured: self.captured.iter().map(flip).collect(),
        }
    }

    /// Iterates over squares from rank 8 down to rank 1, files a to h,
    /// paired with their occupant.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<&Piece>)> + '_ {
        Rank::ALL.into_iter().rev().flat_map(move |rank| {
            File::ALL.into_iter().map(move |file| {
                let square = Square::new(file, rank);
                (square, self.piece_at(square))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn standard_board() {
        let board = Board::standard();
        assert_eq!(board.pieces().len(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(
            board.piece_at(Square::E1).map(Piece::kind),
            Some(PieceKind::King)
        );
        assert_eq!(board.piece_at(Square::D8).map(Piece::symbol), Some('q'));
        assert!(board.is_occupied(sq("h2")));
        assert!(!board.is_occupied(sq("e4")));
    }

    #[test]
    fn starting_position_only_for_rooks_and_kings() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Square::H1);
        let pawn = Piece::new(PieceKind::Pawn, Color::White, sq("h2"));
        assert_eq!(rook.starting_position(), Some(Square::H1));
        assert_eq!(pawn.starting_position(), None);
    }

    #[test]
    fn place_on_occupied_square_fails() {
        let mut board = Board::from_piece_list("Ke1").unwrap();
        let result = board.place_piece(Piece::new(PieceKind::Queen, Color::Black, Square::E1));
        assert_eq!(result, Err(GameError::OccupiedSquare(Square::E1)));
        assert_eq!(board.pieces().len(), 1);
    }

    #[test]
    fn piece_list_parsing() {
        let board = Board::from_piece_list("Ke1 Rh1 ke8 pd7").unwrap();
        assert_eq!(board.pieces().len(), 4);
        let pawn = board.piece_at(sq("d7")).unwrap();
        assert_eq!((pawn.kind(), pawn.color()), (PieceKind::Pawn, Color::Black));

        assert_eq!(
            Board::from_piece_list("Ke1 Xe2"),
            Err(GameError::MalformedNotation(NotationError::InvalidPiece(
                "Xe2".to_string()
            )))
        );
        assert_eq!(
            Board::from_piece_list("Ke9"),
            Err(GameError::MalformedNotation(NotationError::InvalidSquare(
                "e9".to_string()
            )))
        );
        assert_eq!(
            Board::from_piece_list("Ke1 qe1"),
            Err(GameError::OccupiedSquare(Square::E1))
        );
    }

    #[test]
    fn move_keeps_identity_and_updates_position() {
        let mut board = Board::from_piece_list("Rh1").unwrap();
        board.move_piece(Square::H1, sq("h5")).unwrap();
        let rook = board.piece_at(sq("h5")).unwrap();
        assert_eq!(rook.starting_position(), Some(Square::H1));
        assert!(!board.is_occupied(Square::H1));
    }

    #[test]
    fn move_onto_occupied_square_fails() {
        let mut board = Board::from_piece_list("Rh1 ph5").unwrap();
        assert_eq!(
            board.move_piece(Square::H1, sq("h5")),
            Err(GameError::OccupiedSquare(sq("h5")))
        );
        assert_eq!(
            board.move_piece(sq("a1"), sq("a2")),
            Err(GameError::NoPieceAtSquare(sq("a1")))
        );
    }

    #[test]
    fn remove_records_capture() {
        let mut board = Board::from_piece_list("Ke1 qd5").unwrap();
        let queen = board.remove_piece(sq("d5")).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(board.captured(), &[queen]);
        assert_eq!(
            board.remove_piece(sq("d5")),
            Err(GameError::NoPieceAtSquare(sq("d5")))
        );
    }

    #[test]
    fn take_does_not_record_capture() {
        let mut board = Board::from_piece_list("Ph7").unwrap();
        board.take_piece(sq("h7")).unwrap();
        assert!(board.pieces().is_empty());
        assert!(board.captured().is_empty());
    }

    #[test]
    fn clones_are_independent() {
        let board = Board::standard();
        let mut copy = board.clone();
        copy.move_piece(sq("e2"), sq("e4")).unwrap();
        assert!(board.is_occupied(sq("e2")));
        assert!(!copy.is_occupied(sq("e2")));
        assert_eq!(board.clone_pieces().len(), 32);
    }

    #[test]
    fn king_lookup() {
        let board = Board::from_piece_list("Ke1").unwrap();
        assert_eq!(board.king_of(Color::White).unwrap().position(), Square::E1);
        assert_eq!(
            board.king_of(Color::Black),
            Err(GameError::MissingKing(Color::Black))
        );
    }

    #[test]
    fn mirrored_swaps_colors_and_ranks() {
        let board = Board::from_piece_list("Ke1 Rh1 pd7").unwrap();
        let mirrored = board.mirrored();
        assert_eq!(mirrored.piece_at(Square::E8).map(Piece::symbol), Some('k'));
        assert_eq!(
            mirrored.piece_at(Square::H8).and_then(Piece::starting_position),
            Some(Square::H8)
        );
        assert_eq!(mirrored.piece_at(sq("d2")).map(Piece::symbol), Some('P'));
        assert_eq!(mirrored.mirrored(), board);
    }

    #[test]
    fn squares_walk_from_a8() {
        let board = Board::standard();
        let squares: Vec<_> = board.squares().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].0, Square::A8);
        assert_eq!(squares[63].0, Square::H1);
        assert_eq!(squares.iter().filter(|(_, p)| p.is_some()).count(), 32);
    }
}
