//! Tests for game-state transitions and time travel.

use rewind_tictactoe::{Board, GameState, GameStatus, MoveOutcome, Player, Position, Square};

fn play(game: &mut GameState, cells: &[usize]) {
    for cell in cells {
        let outcome = game.apply_move_at(*cell);
        assert!(outcome.is_applied(), "cell {} rejected: {}", cell, outcome);
    }
}

#[test]
fn test_top_row_win_after_fifth_move() {
    let mut game = GameState::new();

    play(&mut game, &[0, 4, 1, 5]);
    assert_eq!(game.winner(), None);

    play(&mut game, &[2]);
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status_line(), "Winner: X");
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(game.current_snapshot().get(pos), Square::Occupied(Player::X));
    }
}

#[test]
fn test_full_board_without_winner() {
    let mut game = GameState::new();
    // X: 0 1 5 6 8, O: 2 3 4 7
    play(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(game.winner(), None);
    assert_eq!(game.current_snapshot().occupied_count(), 9);
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_occupied_cell_leaves_snapshot_unchanged() {
    let mut game = GameState::new();
    play(&mut game, &[4]);
    let snapshot = *game.current_snapshot();
    let next = game.next_player();

    assert_eq!(game.apply_move_at(4), MoveOutcome::SquareOccupied(Position::Center));
    assert_eq!(game.current_snapshot(), &snapshot);
    assert_eq!(game.next_player(), next);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_move_after_win_leaves_snapshot_unchanged() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 5, 2]);
    let snapshot = *game.current_snapshot();

    assert_eq!(game.apply_move_at(8), MoveOutcome::GameOver(Player::X));
    assert_eq!(game.current_snapshot(), &snapshot);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_each_legal_move_flips_player_once() {
    let mut game = GameState::new();

    for (turn, cell) in [4, 0, 8, 2, 1, 7].into_iter().enumerate() {
        let expected = Player::for_step(turn);
        assert_eq!(game.next_player(), expected);
        assert_eq!(game.apply_move_at(cell), MoveOutcome::Applied(expected, Position::ALL[cell]));
    }
    assert_eq!(game.next_player(), Player::X);
}

#[test]
fn test_rejected_move_does_not_flip_player() {
    let mut game = GameState::new();
    play(&mut game, &[0]);
    game.apply_move_at(0);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_jump_then_move_truncates_future() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 8, 2, 6]);
    assert_eq!(game.history().len(), 6);

    let kept: Vec<Board> = game.history()[..=2].iter().map(|e| *e.board()).collect();

    assert!(game.jump_to(2));
    play(&mut game, &[3]);

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step(), 3);
    let prefix: Vec<Board> = game.history()[..=2].iter().map(|e| *e.board()).collect();
    assert_eq!(prefix, kept);
    assert_eq!(
        game.current_snapshot().get(Position::MiddleLeft),
        Square::Occupied(Player::X)
    );
    assert!(game.current_snapshot().is_empty(Position::TopRight));
}

#[test]
fn test_jump_is_non_destructive() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 8]);

    assert!(game.jump_to(0));
    assert_eq!(game.current_snapshot(), &Board::new());
    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.history().len(), 4);

    assert!(game.jump_to(3));
    assert_eq!(game.current_snapshot().occupied_count(), 3);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_history_entries_differ_by_one_cell() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8, 2, 1, 7, 6]);

    for (step, pair) in game.history().windows(2).enumerate() {
        let changed = pair[0].board().diff(pair[1].board());
        assert_eq!(changed.len(), 1, "step {}", step + 1);
        assert_eq!(pair[1].locations().len(), step + 1);
    }
}

#[test]
fn test_toggle_does_not_touch_game_logic() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4]);
    let before = (*game.current_snapshot(), game.step(), game.next_player());

    game.toggle_move_order();
    assert!(game.is_move_list_flipped());
    assert_eq!((*game.current_snapshot(), game.step(), game.next_player()), before);
}

#[test]
fn test_state_serializes_with_history() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4]);

    let json = serde_json::to_value(&game).expect("serializable");
    assert_eq!(json["step"], 2);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(3));

    let back: GameState = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, game);
}

#[test]
fn test_deserialize_rejects_step_past_history() {
    let mut json = serde_json::to_value(GameState::new()).expect("serializable");
    json["step"] = serde_json::json!(5);

    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("Step pointer"), "{}", err);
}

#[test]
fn test_deserialize_rejects_empty_history() {
    let json = serde_json::json!({
        "history": [],
        "step": 0,
        "x_is_next": true,
        "move_list_flipped": false
    });
    assert!(serde_json::from_value::<GameState>(json).is_err());
}

#[test]
fn test_deserialize_rejects_zero_indexed_location() {
    let mut game = GameState::new();
    play(&mut game, &[0]);
    let mut json = serde_json::to_value(&game).expect("serializable");
    json["history"][1]["locations"][0] = serde_json::json!({ "row": 0, "column": 0 });

    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("off the board"), "{}", err);
}

#[test]
fn test_deserialize_rejects_next_player_out_of_turn() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4]);
    let mut json = serde_json::to_value(&game).expect("serializable");
    json["x_is_next"] = serde_json::json!(false);

    assert!(serde_json::from_value::<GameState>(json).is_err());
}
