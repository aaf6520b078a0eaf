//! A chess piece: kind, owner, location, and move-history flags.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// An immutable piece value.
///
/// "Moving" a piece never mutates it; [`Piece::moved_to`] produces the
/// piece as it exists after the move. The two history flags drive castling
/// eligibility (`has_moved`) and en passant (`just_moved_two_squares`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Position,
    has_moved: bool,
    just_moved_two_squares: bool,
}

impl Piece {
    /// Create an unmoved piece of the given kind and color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Piece {
        Piece {
            kind,
            color,
            position,
            has_moved: false,
            just_moved_two_squares: false,
        }
    }

    /// Return a copy relocated to `target` and marked as moved.
    ///
    /// A pawn displaced exactly two rows on its first move records
    /// en-passant eligibility via `just_moved_two_squares`; any other move
    /// leaves the flag false.
    pub fn moved_to(self, target: Position) -> Piece {
        let double_step = self.kind == PieceKind::Pawn
            && !self.has_moved
            && self.position.row().abs_diff(target.row()) == 2;

        Piece {
            position: target,
            has_moved: true,
            just_moved_two_squares: double_step,
            ..self
        }
    }

    /// Return a copy with `has_moved` forced true, in place.
    ///
    /// For setting up mid-game positions in tests and custom boards.
    #[inline]
    pub const fn marked_moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Return a copy with en-passant eligibility withdrawn.
    #[inline]
    pub(crate) const fn double_step_expired(self) -> Piece {
        Piece {
            just_moved_two_squares: false,
            ..self
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the owning side.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the piece's current square.
    #[inline]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Return `true` if the piece has moved at least once.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Return `true` if this is a pawn whose last move was its two-row
    /// first step, making it capturable en passant.
    #[inline]
    pub const fn just_moved_two_squares(self) -> bool {
        self.just_moved_two_squares
    }

    /// One-letter code: uppercase for White, lowercase for Black.
    #[inline]
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.color, self.kind, self.position)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.letter(), self.position)
    }
}
