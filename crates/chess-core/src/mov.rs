//! Move representation.

use crate::{NotationError, PieceKind, Square};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A move in coordinate notation: start square, end square and an optional
/// promotion piece.
///
/// A `Move` says nothing about legality. Whether it is a capture, castle or
/// en passant capture is decided by the engine against a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move with an optional promotion piece.
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Move {
            from,
            to,
            promotion,
        }
    }

    /// Creates a move without promotion.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, None)
    }

    /// Creates a promoting move.
    #[inline]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self::new(from, to, Some(kind))
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the requested promotion piece, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        self.to_string()
    }

    /// Parses a move from coordinate notation.
    ///
    /// Accepts exactly four characters (`e2e4`) or five with a trailing
    /// promotion letter in `q r b n` (`e7e8q`).
    pub fn from_uci(s: &str) -> Result<Self, NotationError> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(NotationError::InvalidLength(s.to_string()));
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            Some(c) => {
                Some(PieceKind::from_promotion_char(c).ok_or(NotationError::InvalidPromotion(c))?)
            }
            None => None,
        };
        Ok(Move::new(from, to, promotion))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(c) = self.promotion.and_then(PieceKind::promotion_char) {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_uci(s)
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_uci())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Move::from_uci(&s).map_err(serde::de::Error::custom)
    }
}
