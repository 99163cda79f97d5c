//! Board square representation.

use crate::NotationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files, a to h.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Creates a file from a letter, either case.
    pub fn from_char(c: char) -> Option<Self> {
        let offset = u32::from(c.to_ascii_lowercase()).checked_sub(u32::from('a'))?;
        Self::from_index(u8::try_from(offset).ok()?)
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks, 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Creates a rank from a digit '1' to '8'.
    pub fn from_char(c: char) -> Option<Self> {
        let offset = u32::from(c).checked_sub(u32::from('1'))?;
        Self::from_index(u8::try_from(offset).ok()?)
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// The same rank seen from the other side (1 <-> 8).
    #[inline]
    pub fn flip(self) -> Self {
        Self::ALL[usize::from(7 - self.index())]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board.
///
/// A square can only be built from a valid [`File`] and [`Rank`], so an
/// off-board coordinate is unrepresentable. Ordering follows little-endian
/// rank-file mapping (a1 < b1 < ... < h1 < a2 < ... < h8).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    rank: Rank,
    file: File,
}

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square { rank, file }
    }

    /// Creates a square from index (0-63, a1 = 0, h8 = 63).
    pub fn from_index(index: u8) -> Option<Self> {
        Some(Square::new(
            File::from_index(index % 8)?,
            Rank::from_index(index / 8)?,
        ))
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let square = Square::new(
            File::from_char(chars.next()?)?,
            Rank::from_char(chars.next()?)?,
        );
        chars.next().is_none().then_some(square)
    }

    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns the square displaced by the given deltas, or `None` if that
    /// would leave the board.
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank.index().checked_add_signed(rank_delta)?;
        let file = self.file.index().checked_add_signed(file_delta)?;
        Some(Square::new(File::from_index(file)?, Rank::from_index(rank)?))
    }

    /// Mirrors the square across the board's horizontal axis (e2 <-> e7).
    #[inline]
    pub fn flip_rank(self) -> Self {
        Square::new(self.file, self.rank.flip())
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file, self.rank)
    }

    pub const A1: Square = Square::new(File::A, Rank::R1);
    pub const B1: Square = Square::new(File::B, Rank::R1);
    pub const C1: Square = Square::new(File::C, Rank::R1);
    pub const D1: Square = Square::new(File::D, Rank::R1);
    pub const E1: Square = Square::new(File::E, Rank::R1);
    pub const F1: Square = Square::new(File::F, Rank::R1);
    pub const G1: Square = Square::new(File::G, Rank::R1);
    pub const H1: Square = Square::new(File::H, Rank::R1);
    pub const A8: Square = Square::new(File::A, Rank::R8);
    pub const B8: Square = Square::new(File::B, Rank::R8);
    pub const C8: Square = Square::new(File::C, Rank::R8);
    pub const D8: Square = Square::new(File::D, Rank::R8);
    pub const E8: Square = Square::new(File::E, Rank::R8);
    pub const F8: Square = Square::new(File::F, Rank::R8);
    pub const G8: Square = Square::new(File::G, Rank::R8);
    pub const H8: Square = Square::new(File::H, Rank::R8);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| NotationError::InvalidSquare(s.to_string()))
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_algebraic())
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
