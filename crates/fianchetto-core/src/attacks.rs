//! Attack detection: is a square threatened by a given side.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// The four orthogonal step directions as (row delta, column delta).
pub(crate) const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// The four diagonal step directions.
pub(crate) const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// All eight king/queen step directions.
pub(crate) const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// The eight knight jump offsets.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

impl Board {
    /// Return `true` if any piece of `by` attacks `target`.
    ///
    /// Probes each piece family from the target square outward and
    /// short-circuits on the first hit: pawns, knights, kings, then
    /// orthogonal and diagonal sliders walked to their first blocker.
    /// King adjacency counts as an attack so that castling safety and
    /// king-versus-king exclusion fall out of the same query.
    ///
    /// Pawn probes are the two diagonal squares one row along the
    /// attacker's forward delta from `target`.
    pub fn is_square_attacked(&self, target: Position, by: Color) -> bool {
        let pawn_row = by.forward();
        for delta_col in [-1, 1] {
            if self.holds(target.offset(pawn_row, delta_col), by, PieceKind::Pawn) {
                return true;
            }
        }

        for (delta_row, delta_col) in KNIGHT_OFFSETS {
            if self.holds(target.offset(delta_row, delta_col), by, PieceKind::Knight) {
                return true;
            }
        }

        for (delta_row, delta_col) in ALL_DIRECTIONS {
            if self.holds(target.offset(delta_row, delta_col), by, PieceKind::King) {
                return true;
            }
        }

        self.ray_hits(target, &STRAIGHT_DIRECTIONS, by, PieceKind::Rook)
            || self.ray_hits(target, &DIAGONAL_DIRECTIONS, by, PieceKind::Bishop)
    }

    /// Return `true` if `at` is on the board and holds `color`'s piece of
    /// the given kind.
    fn holds(&self, at: Position, color: Color, kind: PieceKind) -> bool {
        at.is_valid()
            && self
                .piece_at(at)
                .is_some_and(|piece| piece.color() == color && piece.kind() == kind)
    }

    /// Walk each direction to its first occupied square; `true` if that
    /// square holds an attacking piece of `slider` kind or a queen.
    fn ray_hits(
        &self,
        target: Position,
        directions: &[(i8, i8)],
        by: Color,
        slider: PieceKind,
    ) -> bool {
        for &(delta_row, delta_col) in directions {
            let mut current = target.offset(delta_row, delta_col);
            while current.is_valid() {
                if let Some(piece) = self.piece_at(current) {
                    if piece.color() == by
                        && (piece.kind() == slider || piece.kind() == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                current = current.offset(delta_row, delta_col);
            }
        }
        false
    }
}
