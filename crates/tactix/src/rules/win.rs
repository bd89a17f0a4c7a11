//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Order matters: detection reports the first complete line in this
/// order. The board is trusted as given; a malformed board with two
/// complete lines of different players still yields the first match.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first complete line on the board.
///
/// Returns the owning player together with the line itself, so callers
/// can highlight the winning squares. Returns `None` if no line is
/// complete.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some((player, line));
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_detectable() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::O));
            }
            assert_eq!(winning_line(&board), Some((Player::O, line)));
        }
    }

    #[test]
    fn test_first_line_in_order_wins_on_malformed_board() {
        // Two complete lines of different players cannot arise from
        // legal play, but the board is trusted as given: the top row
        // is checked before the middle row.
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::X));
        }
        for pos in [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ] {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert_eq!(winner(&board), Some(Player::X));
    }
}
