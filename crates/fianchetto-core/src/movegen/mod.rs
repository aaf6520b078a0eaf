//! Pseudo-legal move generation.
//!
//! Destinations reachable by each piece's movement pattern, ignoring
//! whether the mover's own king is left attacked afterward; the legality
//! filter in [`crate::rules`] removes king-unsafe moves.

mod king;
mod knights;
mod pawns;
mod sliders;

use std::collections::HashSet;

use crate::attacks::{ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Enumerate every destination reachable by `piece`'s movement pattern.
///
/// Chess has a closed piece set, so dispatch is a plain match over the six
/// kinds rather than anything extensible.
pub fn pseudo_legal_moves(piece: Piece, board: &Board) -> HashSet<Position> {
    match piece.kind() {
        PieceKind::Pawn => pawns::pawn_moves(piece, board),
        PieceKind::Rook => sliders::slider_moves(piece, board, &STRAIGHT_DIRECTIONS),
        PieceKind::Bishop => sliders::slider_moves(piece, board, &DIAGONAL_DIRECTIONS),
        PieceKind::Queen => sliders::slider_moves(piece, board, &ALL_DIRECTIONS),
        PieceKind::Knight => knights::knight_moves(piece, board),
        PieceKind::King => king::king_moves(piece, board),
    }
}

/// Single-step destinations: in bounds and not blocked by a friendly piece.
fn single_steps(
    from: Position,
    offsets: &[(i8, i8)],
    board: &Board,
    us: Color,
) -> HashSet<Position> {
    let mut moves = HashSet::new();
    for &(delta_row, delta_col) in offsets {
        let target = from.offset(delta_row, delta_col);
        if target.is_valid() && !board.is_occupied_by(target, us) {
            moves.insert(target);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn lone_piece(kind: PieceKind, at: Position) -> (Piece, Board) {
        let piece = Piece::new(kind, Color::White, at);
        let mut board = Board::empty();
        board.place(piece);
        (piece, board)
    }

    #[test]
    fn center_piece_destination_counts() {
        let center = Position::new(4, 4);
        for (kind, expected) in [
            (PieceKind::Rook, 14),
            (PieceKind::Bishop, 13),
            (PieceKind::Queen, 27),
            (PieceKind::Knight, 8),
            (PieceKind::King, 8),
        ] {
            let (piece, board) = lone_piece(kind, center);
            assert_eq!(
                pseudo_legal_moves(piece, &board).len(),
                expected,
                "wrong destination count for a centered {kind:?}"
            );
        }
    }

    #[test]
    fn corner_king_has_three_destinations() {
        let (king, board) = lone_piece(PieceKind::King, Position::new(0, 0));
        let moves = pseudo_legal_moves(king, &board);
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Position::new(0, 1)));
        assert!(moves.contains(&Position::new(1, 0)));
        assert!(moves.contains(&Position::new(1, 1)));
    }

    #[test]
    fn friendly_piece_blocks_single_step() {
        let knight = Piece::new(PieceKind::Knight, Color::White, Position::new(4, 4));
        let mut board = Board::empty();
        board.place(knight);
        board.place(Piece::new(PieceKind::Pawn, Color::White, Position::new(2, 3)));
        let moves = pseudo_legal_moves(knight, &board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::new(2, 3)));
    }

    #[test]
    fn starting_position_pawn_and_knight_moves() {
        let board = Board::standard();
        let pawn = board.piece_at(Position::new(6, 4)).unwrap();
        assert_eq!(pseudo_legal_moves(pawn, &board).len(), 2);

        let knight = board.piece_at(Position::new(7, 1)).unwrap();
        let moves = pseudo_legal_moves(knight, &board);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Position::new(5, 0)));
        assert!(moves.contains(&Position::new(5, 2)));

        // Everything behind the pawn wall is shut in.
        let rook = board.piece_at(Position::new(7, 0)).unwrap();
        assert!(pseudo_legal_moves(rook, &board).is_empty());
    }
}
