//! Game state snapshots and the turn-taking move executor.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;
use crate::rules;

/// Where the game stands, recomputed for the side to move after every
/// executed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Return `true` for the two states in which no further move exists.
    ///
    /// The engine keeps answering queries in terminal states; stopping is
    /// the caller's job.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Active => "active",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{name}")
    }
}

/// One immutable snapshot of a game in progress.
///
/// Every transition returns a new snapshot and a rejected input returns
/// the receiver unchanged, so callers detect failure by comparing states
/// rather than matching errors. Superseded snapshots stay valid for undo
/// or comparison for as long as anyone holds them.
///
/// Invariants: `legal_destinations` is empty whenever nothing is selected,
/// and otherwise holds exactly the legality-filtered destinations of the
/// selected piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    selected: Option<Position>,
    legal_destinations: HashSet<Position>,
    status: GameStatus,
}

impl GameState {
    /// Start a fresh game: standard setup, White to move, no selection.
    pub fn new() -> GameState {
        GameState::from_board(Board::standard())
    }

    /// Wrap an arbitrary board with White to move and status `Active`.
    ///
    /// The status is not recomputed; call [`GameState::update_status`] if
    /// the board may already hold a check.
    pub fn from_board(board: Board) -> GameState {
        GameState {
            board,
            side_to_move: Color::White,
            selected: None,
            legal_destinations: HashSet::new(),
            status: GameStatus::Active,
        }
    }

    /// Return the board snapshot.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the selected square, if any.
    #[inline]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Return the legal destinations of the selected piece.
    #[inline]
    pub fn legal_destinations(&self) -> &HashSet<Position> {
        &self.legal_destinations
    }

    /// Return the game status.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, at: Position) -> Option<Piece> {
        self.board.piece_at(at)
    }

    /// Return `true` if the given square holds a piece.
    #[inline]
    pub fn is_occupied(&self, at: Position) -> bool {
        self.board.is_occupied(at)
    }

    /// Return `true` if the given square holds a piece of `color`.
    #[inline]
    pub fn is_occupied_by(&self, at: Position, color: Color) -> bool {
        self.board.is_occupied_by(at, color)
    }

    /// Select the piece on `at` and compute its legal destinations.
    ///
    /// A square that is empty or holds the opponent's piece leaves the
    /// state unchanged.
    pub fn select(&self, at: Position) -> GameState {
        let Some(piece) = self.board.piece_at(at) else {
            return self.clone();
        };
        if piece.color() != self.side_to_move {
            debug!(square = %at, "selection rejected: not the mover's piece");
            return self.clone();
        }

        GameState {
            selected: Some(at),
            legal_destinations: rules::legal_moves(piece, &self.board),
            ..self.clone()
        }
    }

    /// Drop the selection and its destination set.
    pub fn deselect(&self) -> GameState {
        GameState {
            selected: None,
            legal_destinations: HashSet::new(),
            ..self.clone()
        }
    }

    /// The single state-transition entry point.
    ///
    /// Rejects — by returning the unchanged state — when `from` does not
    /// hold the mover's piece or `to` is not among its legal destinations.
    /// Otherwise executes the move (captures, en passant, castling rook
    /// included), flips the turn, clears the selection, and recomputes the
    /// status for the new side to move.
    pub fn validate_and_move(&self, from: Position, to: Position) -> GameState {
        let Some(piece) = self.board.piece_at(from) else {
            return self.clone();
        };
        if piece.color() != self.side_to_move {
            debug!(%from, %to, "move rejected: out of turn");
            return self.clone();
        }
        if !rules::legal_moves(piece, &self.board).contains(&to) {
            debug!(%from, %to, "move rejected: not a legal destination");
            return self.clone();
        }

        let next = GameState {
            board: self.board.apply_move(from, to),
            side_to_move: self.side_to_move.flip(),
            selected: None,
            legal_destinations: HashSet::new(),
            status: GameStatus::Active,
        };
        next.update_status()
    }

    /// Recompute the status for the side to move.
    ///
    /// Checkmate is reported ahead of the check it implies; stalemate
    /// ahead of plain activity.
    pub fn update_status(&self) -> GameState {
        let side = self.side_to_move;
        let status = if rules::is_checkmate(side, &self.board) {
            GameStatus::Checkmate
        } else if rules::is_stalemate(side, &self.board) {
            GameStatus::Stalemate
        } else if rules::is_in_check(side, &self.board) {
            GameStatus::Check
        } else {
            GameStatus::Active
        };

        if status != self.status {
            debug!(%side, %status, "game status changed");
        }

        GameState {
            status,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
