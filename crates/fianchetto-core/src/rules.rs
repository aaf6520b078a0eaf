//! Legal-move filtering and game-ending detection.
//!
//! Pins are never modeled directly: a move is legal iff simulating it
//! leaves the mover's king unattacked, so pinned pieces simply lose the
//! destinations that would expose the king.

use std::collections::HashSet;

use crate::board::Board;
use crate::color::Color;
use crate::movegen::pseudo_legal_moves;
use crate::piece::Piece;
use crate::position::Position;

/// Return `true` when the piece at `from` could move to `to` without
/// leaving its own king attacked.
///
/// The move is executed on a copy and check is re-queried on the result.
/// An empty `from` is not a move at all and returns `false`; a side with
/// no king on the board is never in check, so on partial boards every
/// pseudo-legal move passes.
pub fn validate_king_safety(board: &Board, from: Position, to: Position) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    let simulated = board.apply_move(from, to);
    !is_in_check(piece.color(), &simulated)
}

/// Destinations the piece can actually play: its movement pattern minus
/// everything that fails [`validate_king_safety`].
///
/// This is the single source of truth for "legal move"; selection, the
/// move executor, and the mate scans all go through it.
pub fn legal_moves(piece: Piece, board: &Board) -> HashSet<Position> {
    pseudo_legal_moves(piece, board)
        .into_iter()
        .filter(|&to| validate_king_safety(board, piece.position(), to))
        .collect()
}

/// Return `true` iff `side`'s king is attacked by the opposing side.
///
/// A board without that king reports no check.
pub fn is_in_check(side: Color, board: &Board) -> bool {
    match board.king_position(side) {
        Some(king) => board.is_square_attacked(king, side.flip()),
        None => false,
    }
}

/// Checkmate: in check with no legal move anywhere.
pub fn is_checkmate(side: Color, board: &Board) -> bool {
    if board.king_position(side).is_none() {
        return false;
    }
    is_in_check(side, board) && !has_any_legal_move(side, board)
}

/// Stalemate: not in check, but still no legal move anywhere.
pub fn is_stalemate(side: Color, board: &Board) -> bool {
    if board.king_position(side).is_none() {
        return false;
    }
    !is_in_check(side, board) && !has_any_legal_move(side, board)
}

/// The scan shared by the two predicates above; stops at the first legal
/// move found.
fn has_any_legal_move(side: Color, board: &Board) -> bool {
    board.pieces_of(side).any(|piece| {
        pseudo_legal_moves(piece, board)
            .into_iter()
            .any(|to| validate_king_safety(board, piece.position(), to))
    })
}
