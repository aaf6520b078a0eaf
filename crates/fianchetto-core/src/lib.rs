//! Core chess types: board representation, move generation, and game rules.

mod attacks;
mod board;
mod color;
mod error;
mod game;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod position;
mod rules;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::BoardError;
pub use game::{GameState, GameStatus};
pub use movegen::pseudo_legal_moves;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use rules::{is_checkmate, is_in_check, is_stalemate, legal_moves, validate_king_safety};
