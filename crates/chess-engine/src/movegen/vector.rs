//! Directional vectors: the movement shape of each piece kind.

use chess_core::{Color, PieceKind, Square};

/// How a vector treats an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Moves onto empty squares and captures the first opposing piece.
    Normal,
    /// Only reaches a square holding an opposing piece (pawn diagonals).
    Only,
    /// Only reaches empty squares (pawn pushes).
    Never,
}

/// A line of travel from a piece's square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalVector {
    pub rank_delta: i8,
    pub file_delta: i8,
    /// Maximum number of squares walked; 0 means up to the board edge.
    pub step_limit: u8,
    pub capture: CaptureMode,
}

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl DirectionalVector {
    /// A vector sliding to the board edge.
    pub const fn slide(rank_delta: i8, file_delta: i8) -> Self {
        DirectionalVector {
            rank_delta,
            file_delta,
            step_limit: 0,
            capture: CaptureMode::Normal,
        }
    }

    /// A vector of exactly one step.
    pub const fn step(rank_delta: i8, file_delta: i8) -> Self {
        DirectionalVector {
            rank_delta,
            file_delta,
            step_limit: 1,
            capture: CaptureMode::Normal,
        }
    }

    /// Walks from `from` (exclusive) towards the board edge, truncated to the
    /// step limit. Occupancy is not considered.
    pub fn ray(&self, from: Square) -> Vec<Square> {
        let mut squares = Vec::new();
        let mut current = from;
        while let Some(next) = current.offset(self.rank_delta, self.file_delta) {
            if self.step_limit != 0 && squares.len() >= self.step_limit as usize {
                break;
            }
            squares.push(next);
            current = next;
        }
        squares
    }
}

fn slides(deltas: &[(i8, i8)]) -> impl Iterator<Item = DirectionalVector> + '_ {
    deltas.iter().map(|&(r, f)| DirectionalVector::slide(r, f))
}

fn steps(deltas: &[(i8, i8)]) -> impl Iterator<Item = DirectionalVector> + '_ {
    deltas.iter().map(|&(r, f)| DirectionalVector::step(r, f))
}

/// Returns the vectors a piece of the given kind and color travels along
/// from `square`.
///
/// Pawns get a forward push of two steps from their starting rank and one
/// elsewhere, plus two capture-only diagonals.
pub fn vectors_for(kind: PieceKind, color: Color, square: Square) -> Vec<DirectionalVector> {
    match kind {
        PieceKind::Pawn => {
            let forward = color.pawn_direction();
            let push_limit = if square.rank() == color.pawn_start_rank() {
                2
            } else {
                1
            };
            let mut vectors = vec![DirectionalVector {
                rank_delta: forward,
                file_delta: 0,
                step_limit: push_limit,
                capture: CaptureMode::Never,
            }];
            vectors.extend([-1, 1].map(|file_delta| DirectionalVector {
                rank_delta: forward,
                file_delta,
                step_limit: 1,
                capture: CaptureMode::Only,
            }));
            vectors
        }
        PieceKind::Knight => steps(&KNIGHT).collect(),
        PieceKind::Bishop => slides(&DIAGONAL).collect(),
        PieceKind::Rook => slides(&ORTHOGONAL).collect(),
        PieceKind::Queen => slides(&ORTHOGONAL).chain(slides(&DIAGONAL)).collect(),
        PieceKind::King => steps(&ORTHOGONAL).chain(steps(&DIAGONAL)).collect(),
    }
}

/// Returns the squares strictly between `a` and `b` when they share a rank,
/// file or diagonal; otherwise nothing.
pub fn squares_between(a: Square, b: Square) -> Vec<Square> {
    let rank_diff = b.rank().index() as i8 - a.rank().index() as i8;
    let file_diff = b.file().index() as i8 - a.file().index() as i8;
    let aligned = rank_diff == 0 || file_diff == 0 || rank_diff.abs() == file_diff.abs();
    if !aligned || a == b {
        return Vec::new();
    }
    let direction = DirectionalVector::slide(rank_diff.signum(), file_diff.signum());
    direction
        .ray(a)
        .into_iter()
        .take_while(|&sq| sq != b)
        .collect()
}
