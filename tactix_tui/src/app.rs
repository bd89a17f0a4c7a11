//! Application state and logic.

use anyhow::Result;
use crossterm::event::KeyCode;
use tactix::{Game, GameStatus, Position};
use tracing::debug;

use crate::input;

const OPENING_HINT: &str = "Player X's turn. Press 1-9 or move with arrows and Enter.";

/// Main application state.
///
/// Owns the current engine snapshot and replaces it wholesale on each
/// accepted transition. The cursor and status line are UI-only state.
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            status_message: OPENING_HINT.to_string(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Activates the cell under the cursor.
    pub fn activate_cursor(&mut self) {
        self.activate(self.cursor);
    }

    /// Activates a cell by raw index (keys 1-9 map to indices 0-8).
    ///
    /// An out-of-range index is a bug in the key mapping, not a player
    /// mistake, so it propagates as an error.
    pub fn activate_cell(&mut self, index: usize) -> Result<()> {
        let next = self.game.activate_cell(index)?;
        self.accept(next);
        Ok(())
    }

    /// Moves the cursor based on an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = self.game.restart();
        self.cursor = Position::Center;
        self.status_message = OPENING_HINT.to_string();
    }

    fn activate(&mut self, pos: Position) {
        debug!(%pos, "Activating cell");
        let next = self.game.place(pos);
        self.accept(next);
    }

    /// Installs the successor snapshot. The engine returns an unchanged
    /// state for illegal activations; only the status line reacts.
    fn accept(&mut self, next: Game) {
        if next == self.game {
            if let GameStatus::InProgress(player) = self.game.status() {
                self.status_message =
                    format!("That square is taken. Player {player}, pick another.");
            }
            return;
        }

        self.game = next;
        self.status_message = match self.game.status() {
            GameStatus::InProgress(player) => format!("Player {player}'s turn"),
            GameStatus::Won(player) => {
                format!("Player {player} wins! Press 'r' to restart or 'q' to quit.")
            }
            GameStatus::Draw => {
                "It's a draw! Press 'r' to restart or 'q' to quit.".to_string()
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactix::Player;

    #[test]
    fn test_activation_updates_game_and_status() {
        let mut app = App::new();
        app.activate_cell(4).unwrap();
        assert_eq!(app.game().to_move(), Player::O);
        assert_eq!(app.status_message(), "Player O's turn");
    }

    #[test]
    fn test_occupied_square_reports_without_state_change() {
        let mut app = App::new();
        app.activate_cell(4).unwrap();
        let before = app.game().clone();

        app.activate_cell(4).unwrap();
        assert_eq!(app.game(), &before);
        assert!(app.status_message().contains("taken"));
    }

    #[test]
    fn test_restart_clears_board_and_status() {
        let mut app = App::new();
        for index in [0, 4, 1] {
            app.activate_cell(index).unwrap();
        }
        app.restart();
        assert_eq!(app.game(), &Game::new());
        assert_eq!(app.status_message(), OPENING_HINT);
    }

    #[test]
    fn test_win_message_after_final_move() {
        let mut app = App::new();
        for index in [0, 4, 1, 3, 2] {
            app.activate_cell(index).unwrap();
        }
        assert!(app.status_message().starts_with("Player X wins!"));
    }
}
