//! Sliding move generation shared by rooks, bishops, and queens.

use std::collections::HashSet;

use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

/// Ray-cast from the piece along each direction until the board edge or a
/// blocker; a blocking enemy square is included, a friendly one is not.
pub(super) fn slider_moves(
    piece: Piece,
    board: &Board,
    directions: &[(i8, i8)],
) -> HashSet<Position> {
    let mut moves = HashSet::new();
    for &(delta_row, delta_col) in directions {
        let mut current = piece.position().offset(delta_row, delta_col);
        while current.is_valid() {
            if let Some(other) = board.piece_at(current) {
                if other.color() != piece.color() {
                    moves.insert(current);
                }
                break;
            }
            moves.insert(current);
            current = current.offset(delta_row, delta_col);
        }
    }
    moves
}
