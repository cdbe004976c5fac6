//! Tests for the move list and its display order.

use rewind_tictactoe::{GameState, SortOrder};

fn played(cells: &[usize]) -> GameState {
    let mut game = GameState::new();
    for cell in cells {
        game.apply_move_at(*cell);
    }
    game
}

#[test]
fn test_ascending_descriptions() {
    let game = played(&[0, 4, 7]);
    let descriptions: Vec<String> = game.move_list().iter().map(|row| row.description()).collect();

    assert_eq!(
        descriptions,
        vec![
            "Go to game start",
            "Go to move #1 (1,1)",
            "Go to move #2 (2,2)",
            "Go to move #3 (2,3)",
        ]
    );
    assert_eq!(game.sort_order_label(), "Sort Order: Ascending");
}

#[test]
fn test_flipped_list_is_reversed() {
    let mut game = played(&[0, 4, 7]);
    let ascending: Vec<usize> = game.move_list().iter().map(|row| row.step).collect();

    game.toggle_move_order();
    let descending: Vec<usize> = game.move_list().iter().map(|row| row.step).collect();

    assert_eq!(game.sort_order(), SortOrder::Descending);
    assert_eq!(game.sort_order_label(), "Sort Order: Descending");
    assert_eq!(descending, vec![3, 2, 1, 0]);
    assert_eq!(ascending.iter().rev().copied().collect::<Vec<_>>(), descending);
}

#[test]
fn test_toggle_twice_restores_order() {
    let mut game = played(&[2, 6, 4]);
    let original = game.move_list();

    game.toggle_move_order();
    game.toggle_move_order();

    assert!(!game.is_move_list_flipped());
    assert_eq!(game.move_list(), original);
}

#[test]
fn test_current_row_follows_jumps() {
    let mut game = played(&[0, 1, 2]);
    game.jump_to(1);
    game.toggle_move_order();

    let current: Vec<usize> = game
        .move_list()
        .iter()
        .filter(|row| row.is_current)
        .map(|row| row.step)
        .collect();
    assert_eq!(current, vec![1]);
    assert_eq!(game.move_list()[0].step, 3);
    assert!(game.move_list()[0].is_latest);
}
