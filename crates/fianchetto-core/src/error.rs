//! Error types for board structural validation.

use crate::color::Color;

/// Errors from structural validation of a [`Board`](crate::board::Board).
///
/// Partial boards (missing kings, missing whole armies) are legal inputs
/// everywhere in the engine; validation only rejects states no game could
/// reach from any hand-built position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side has more than one king.
    #[error("{count} kings found for {color}")]
    TooManyKings {
        /// The side with the surplus kings.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn sits on row 0 or row 7.
    #[error("pawn on back row at {square}")]
    PawnOnBackRow {
        /// The offending square in algebraic notation.
        square: String,
    },
    /// A piece's recorded position disagrees with the square it occupies.
    #[error("piece at {square} records a different position")]
    MisplacedPiece {
        /// The occupied square in algebraic notation.
        square: String,
    },
}
