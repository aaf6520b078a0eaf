//! Move execution via copy-make.

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Board {
    /// Apply a move and return the resulting board. `self` is untouched.
    ///
    /// Whether the move is *legal* is the caller's concern; the game-state
    /// executor filters through the legality rules first. An off-board
    /// coordinate or an empty source square returns an unchanged copy.
    ///
    /// Executes the full move semantics:
    /// - any piece on `to` is captured by replacement;
    /// - a pawn arriving diagonally on an empty square also captures the
    ///   bypassed pawn beside it (en passant);
    /// - a king travelling two columns brings the matching rook to the
    ///   square it crossed (castling);
    /// - en-passant eligibility of the mover's other pawns expires.
    pub fn apply_move(&self, from: Position, to: Position) -> Board {
        let mut next = self.clone();
        if !from.is_valid() || !to.is_valid() {
            return next;
        }
        let Some(piece) = next.remove(from) else {
            return next;
        };

        next.expire_double_steps(piece.color());

        // En passant: the captured pawn sits beside the mover, on the
        // destination column of the origin row.
        if piece.kind() == PieceKind::Pawn && !from.same_col(to) && !next.is_occupied(to) {
            next.remove(Position::new(from.row(), to.col()));
        }

        // Castling: relocate the rook across the king.
        if piece.kind() == PieceKind::King
            && from.same_row(to)
            && from.col().abs_diff(to.col()) == 2
        {
            let rook_col = if to.col() > from.col() { 7 } else { 0 };
            let crossed = Position::new(from.row(), (from.col() + to.col()) / 2);
            if let Some(rook) = next.remove(Position::new(from.row(), rook_col)) {
                next.place(rook.moved_to(crossed));
            }
        }

        next.place(piece.moved_to(to));
        next
    }
}
