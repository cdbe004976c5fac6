//! Draw detection logic for tic-tac-toe.

use super::super::{Board, GameStatus, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Derives the game status from a snapshot.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn fill(x: &[usize], o: &[usize]) -> Board {
        let mut board = Board::new();
        for (cells, player) in [(x, Player::X), (o, Player::O)] {
            for index in cells {
                board.set(Position::ALL[*index], Square::Occupied(player));
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X X O / O O X / X O X
        let board = fill(&[0, 1, 5, 6, 8], &[2, 3, 4, 7]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = fill(&[0, 1, 2], &[3, 4]);
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_with_winner_is_won() {
        // X X X / O O X / O X O
        let board = fill(&[0, 1, 2, 5, 7], &[3, 4, 6, 8]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }
}
