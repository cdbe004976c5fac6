//! Tests for the board evaluator over whole boards.

use rewind_tictactoe::rules::{WIN_LINES, check_winner, evaluate, is_full};
use rewind_tictactoe::{Board, GameStatus, Player, Position, Square};

fn board(x: &[usize], o: &[usize]) -> Board {
    let mut board = Board::new();
    for (cells, player) in [(x, Player::X), (o, Player::O)] {
        for cell in cells {
            board.set(Position::ALL[*cell], Square::Occupied(player));
        }
    }
    board
}

#[test]
fn test_any_complete_line_wins_regardless_of_other_marks() {
    for line in WIN_LINES {
        let cells: Vec<usize> = line.iter().map(|p| p.to_index()).collect();
        // Fill one other square for the opponent so the board is not trivial.
        let other: Vec<usize> = (0..9).filter(|i| !cells.contains(i)).take(2).collect();

        assert_eq!(check_winner(&board(&cells, &other)), Some(Player::X));
        assert_eq!(check_winner(&board(&other, &cells)), Some(Player::O));
    }
}

#[test]
fn test_drawn_boards_have_no_winner() {
    let draws = [
        board(&[0, 1, 5, 6, 8], &[2, 3, 4, 7]),
        board(&[0, 2, 3, 7, 5], &[1, 4, 6, 8]),
    ];
    for drawn in draws {
        assert!(is_full(&drawn));
        assert_eq!(check_winner(&drawn), None);
        assert_eq!(evaluate(&drawn), GameStatus::Draw);
    }
}

#[test]
fn test_partial_boards_without_lines() {
    let partial = board(&[0, 8], &[4]);
    assert_eq!(check_winner(&partial), None);
    assert_eq!(evaluate(&partial), GameStatus::InProgress);
    assert!(!evaluate(&partial).is_over());
}
