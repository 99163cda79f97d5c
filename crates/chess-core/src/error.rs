//! Notation parsing errors.

use thiserror::Error;

/// Errors that can occur when parsing coordinate notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid move notation '{0}': expected 4 or 5 characters")]
    InvalidLength(String),

    #[error("invalid square '{0}': expected a file a-h followed by a rank 1-8")]
    InvalidSquare(String),

    #[error("invalid piece '{0}': expected a letter from p n b r q k, upper-case for White")]
    InvalidPiece(String),

    #[error("invalid promotion piece '{0}': expected one of q, r, b, n")]
    InvalidPromotion(char),

    #[error("invalid color '{0}': expected 'white' or 'black'")]
    InvalidColor(String),
}
