//! End-to-end scenarios for the game engine state machine.

use tactix::{Game, GameStatus, MoveError, Player, Position, Square};

fn play(indices: &[usize]) -> Game {
    let mut game = Game::new();
    for &index in indices {
        game = game.activate_cell(index).expect("Index in range");
    }
    game
}

#[test]
fn test_x_wins_top_row() {
    // X takes 0, 1, 2 while O plays 4 and 3.
    let game = play(&[0, 4, 1, 3, 2]);

    assert_eq!(game.board().winner(), Some(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // X: 0, 2, 4, 5, 7 / O: 1, 3, 6, 8 - fills the board, no line.
    let game = play(&[0, 1, 2, 3, 4, 6, 5, 8, 7]);

    assert_eq!(game.board().winner(), None);
    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_winner_on_the_board_filling_move() {
    // X's last move both fills the board and completes the 0-4-8
    // diagonal. Winner takes precedence over fullness.
    let game = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_activation_on_occupied_cell_changes_nothing() {
    // Index 5 already holds O's mark.
    let game = play(&[4, 5]);
    assert_eq!(game.board().get(Position::MiddleRight), Square::Occupied(Player::O));

    let after = game.activate_cell(5).unwrap();
    assert_eq!(after, game);
    assert_eq!(after.to_move(), Player::X);
}

#[test]
fn test_terminal_game_ignores_further_activations() {
    let won = play(&[0, 4, 1, 3, 2]);
    assert_eq!(won.status(), GameStatus::Won(Player::X));

    // Every remaining empty cell is refused.
    for index in [5, 6, 7, 8] {
        let after = won.activate_cell(index).unwrap();
        assert_eq!(after, won);
        assert_eq!(after.status(), GameStatus::Won(Player::X));
    }
}

#[test]
fn test_restart_from_mid_game_and_terminal_states() {
    let fresh = Game::new();

    let mid_game = play(&[4, 0, 8]);
    assert_eq!(mid_game.restart(), fresh);

    let won = play(&[0, 4, 1, 3, 2]);
    assert_eq!(won.restart(), fresh);

    let drawn = play(&[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    assert_eq!(drawn.restart(), fresh);

    assert_eq!(fresh.restart().status(), GameStatus::InProgress(Player::X));
}

#[test]
fn test_out_of_range_index_rejected_loudly() {
    let game = play(&[4]);
    for index in [9, 10, usize::MAX] {
        assert_eq!(game.activate_cell(index), Err(MoveError::InvalidIndex(index)));
    }
    // The snapshot the caller holds is untouched.
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_replaying_a_move_from_the_same_snapshot_is_deterministic() {
    let game = play(&[4, 0]);
    let first = game.activate_cell(8).unwrap();
    let second = game.activate_cell(8).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_turns_alternate_from_x() {
    let mut game = Game::new();
    let mut expected = Player::X;
    for index in [4, 0, 8, 2, 6] {
        assert_eq!(game.to_move(), expected);
        game = game.activate_cell(index).unwrap();
        expected = expected.opponent();
    }
}
