//! Kani proof harnesses for the board evaluator.
//!
//! These check the evaluator against every possible board, not only
//! boards reachable through play.

use crate::rules::{WIN_LINES, check_winner, evaluate};
use crate::{Board, GameStatus, Square};

/// A reported winner always owns a complete line.
#[kani::proof]
#[kani::unwind(10)]
fn verify_winner_owns_a_line() {
    let board: Board = kani::any();

    if let Some(player) = check_winner(&board) {
        let owned = Square::Occupied(player);
        assert!(
            WIN_LINES
                .iter()
                .any(|line| line.iter().all(|pos| board.get(*pos) == owned))
        );
    }
}

/// No winner means no line is complete for either player.
#[kani::proof]
#[kani::unwind(10)]
fn verify_no_winner_means_no_line() {
    let board: Board = kani::any();

    if check_winner(&board).is_none() {
        for line in WIN_LINES {
            let first = board.get(line[0]);
            assert!(first == Square::Empty || line.iter().any(|pos| board.get(*pos) != first));
        }
    }
}

/// A draw is only reported for a full board.
#[kani::proof]
#[kani::unwind(10)]
fn verify_draw_requires_full_board() {
    let board: Board = kani::any();

    if evaluate(&board) == GameStatus::Draw {
        assert!(board.squares().iter().all(|s| *s != Square::Empty));
    }
}
