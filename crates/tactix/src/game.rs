//! Immutable-snapshot game engine.
//!
//! The engine owns the canonical board and turn flag. Every transition
//! takes `&self` and returns a new [`Game`] value; a published snapshot
//! is never mutated in place, so successive states stay referentially
//! independent.

use crate::position::Position;
use crate::rules::{draw, win};
use crate::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine: the board plus whose move is next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
}

/// Error raised for a cell index outside the board.
///
/// An out-of-range index is a contract violation by the caller and is
/// never clamped. Occupied cells and finished games are the expected
/// misuse path and are handled as silent no-ops instead, see
/// [`Game::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),
}

impl std::error::Error for MoveError {}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Derives the game status from the board.
    ///
    /// A winner takes precedence over fullness: a board that is both
    /// full and won reports `Won`, not `Draw`.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = win::winner(&self.board) {
            GameStatus::Won(winner)
        } else if draw::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move)
        }
    }

    /// Places the current player's mark at the given position.
    ///
    /// Returns the successor state: a new game with the mark placed and
    /// the turn flipped. If the game is already over or the square is
    /// occupied, the move is dropped and the returned state equals
    /// `self` - the expected path when a player activates a filled or
    /// post-game cell.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&self, pos: Position) -> Game {
        if self.status().is_terminal() || !self.board.is_empty(pos) {
            debug!(%pos, "Move ignored");
            return self.clone();
        }

        let mut board = self.board.clone();
        board.set(pos, Square::Occupied(self.to_move));
        debug!(%pos, "Mark placed");

        Game {
            board,
            to_move: self.to_move.opponent(),
        }
    }

    /// Applies a cell activation by raw index, the form the UI reports.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] for indices outside 0-8.
    /// Legality of the move itself is handled by [`Game::place`].
    pub fn activate_cell(&self, index: usize) -> Result<Game, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        Ok(self.place(pos))
    }

    /// Returns a fresh game. Always succeeds, from any state.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Game {
        Game::new()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
