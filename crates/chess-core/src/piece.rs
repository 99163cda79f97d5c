//! Chess piece kinds.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// The kinds a pawn may promote to, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Returns the letter for this piece with the given color
    /// (upper-case for White, lower-case for Black).
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a piece letter into a kind and color.
    pub const fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }

    /// Parses the trailing promotion letter of a move (`q`, `r`, `b`, `n`).
    pub const fn from_promotion_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    /// Returns the promotion letter, or `None` for pawns and kings.
    pub const fn promotion_char(self) -> Option<char> {
        match self {
            PieceKind::Queen => Some('q'),
            PieceKind::Rook => Some('r'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Knight => Some('n'),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }

    /// Returns true if this piece slides any distance (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_char() {
        assert_eq!(PieceKind::Pawn.to_char(Color::White), 'P');
        assert_eq!(PieceKind::Pawn.to_char(Color::Black), 'p');
        assert_eq!(PieceKind::King.to_char(Color::White), 'K');
        assert_eq!(PieceKind::Knight.to_char(Color::Black), 'n');
    }

    #[test]
    fn piece_from_char() {
        assert_eq!(
            PieceKind::from_char('P'),
            Some((PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            PieceKind::from_char('k'),
            Some((PieceKind::King, Color::Black))
        );
        assert_eq!(PieceKind::from_char('x'), None);
    }

    #[test]
    fn promotion_letters() {
        for kind in PieceKind::PROMOTIONS {
            let c = kind.promotion_char().unwrap();
            assert_eq!(PieceKind::from_promotion_char(c), Some(kind));
            assert_eq!(
                PieceKind::from_promotion_char(c.to_ascii_uppercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceKind::from_promotion_char('k'), None);
        assert_eq!(PieceKind::from_promotion_char('p'), None);
        assert_eq!(PieceKind::King.promotion_char(), None);
    }

    #[test]
    fn is_slider() {
        assert!(!PieceKind::Pawn.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(PieceKind::Rook.is_slider());
        assert!(PieceKind::Queen.is_slider());
        assert!(!PieceKind::King.is_slider());
    }
}
