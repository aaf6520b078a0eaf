//! King move and castling generation.

use std::collections::HashSet;

use crate::attacks::ALL_DIRECTIONS;
use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// The two castling wings, named for the rook's starting column.
#[derive(Clone, Copy)]
enum Wing {
    King,
    Queen,
}

impl Wing {
    /// Rook starting column on this wing.
    fn rook_col(self) -> i8 {
        match self {
            Wing::King => 7,
            Wing::Queen => 0,
        }
    }

    /// Column step from the king toward the rook.
    fn step(self) -> i8 {
        match self {
            Wing::King => 1,
            Wing::Queen => -1,
        }
    }

    /// Number of squares strictly between king and rook.
    fn gap(self) -> i8 {
        match self {
            Wing::King => 2,
            Wing::Queen => 3,
        }
    }
}

/// Enumerate king destinations: the eight adjacent squares plus any
/// available castling destination.
///
/// Adjacent squares are not pre-filtered for safety here; walking into
/// check is caught by the legality filter like every other unsafe move.
/// Castling safety (king square and both crossed squares unattacked) is
/// part of the castling pattern itself and is checked here.
pub(super) fn king_moves(king: Piece, board: &Board) -> HashSet<Position> {
    let mut moves = super::single_steps(king.position(), &ALL_DIRECTIONS, board, king.color());

    if !king.has_moved() {
        for wing in [Wing::King, Wing::Queen] {
            if let Some(destination) = castle_destination(king, board, wing) {
                moves.insert(destination);
            }
        }
    }

    moves
}

/// Evaluate one castling wing.
///
/// Requires an unmoved same-color rook on the wing's rook column of the
/// king's row, every square strictly between them empty, and neither the
/// king's square nor the two squares it crosses attacked. The destination
/// is two columns toward the rook; the executor relocates the rook to the
/// crossed square when this destination is played.
fn castle_destination(king: Piece, board: &Board, wing: Wing) -> Option<Position> {
    let row = king.position().row();
    let king_col = king.position().col();

    let rook = board.piece_at(Position::new(row, wing.rook_col()))?;
    if rook.kind() != PieceKind::Rook || rook.color() != king.color() || rook.has_moved() {
        return None;
    }

    for i in 1..=wing.gap() {
        if board.is_occupied(Position::new(row, king_col + wing.step() * i)) {
            return None;
        }
    }

    let enemy = king.color().flip();
    if board.is_square_attacked(king.position(), enemy) {
        return None;
    }
    for i in 1..=2 {
        if board.is_square_attacked(Position::new(row, king_col + wing.step() * i), enemy) {
            return None;
        }
    }

    Some(Position::new(row, king_col + wing.step() * 2))
}
