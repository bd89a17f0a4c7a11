//! Tactix - pure tic-tac-toe game logic.
//!
//! The engine is an immutable-snapshot state machine: every transition
//! takes the current state by reference and returns a new state value.
//! A UI layer (see the `tactix_tui` crate) forwards cell activations and
//! restart requests, and renders the `(board, turn, status)` snapshot it
//! gets back. The engine is the authority on move legality; any UI-side
//! disabling of occupied cells is a convenience only.
//!
//! # Example
//!
//! ```
//! use tactix::{Game, GameStatus, Player, Position};
//!
//! let game = Game::new();
//! assert_eq!(game.to_move(), Player::X);
//!
//! let game = game.place(Position::Center);
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod position;
mod types;

// Rules are public for callers that evaluate raw board snapshots.
pub mod rules;

// Crate-level exports - engine
pub use game::{Game, MoveError};

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
