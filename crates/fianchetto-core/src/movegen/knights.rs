//! Knight move generation.

use std::collections::HashSet;

use crate::attacks::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

/// Enumerate knight destinations: the eight L-jumps, blockers ignored.
pub(super) fn knight_moves(knight: Piece, board: &Board) -> HashSet<Position> {
    super::single_steps(knight.position(), &KNIGHT_OFFSETS, board, knight.color())
}
