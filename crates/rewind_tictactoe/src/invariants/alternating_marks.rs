//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark added at step `k` belongs to X when `k` is odd and
/// to O when `k` is even, and the next player matches the step parity.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let marks_alternate = history.windows(2).enumerate().all(|(i, pair)| {
            let expected = Square::Occupied(Player::for_step(i));
            let (before, after) = (pair[0].board(), pair[1].board());
            before.diff(after).iter().all(|pos| after.get(*pos) == expected)
        });

        marks_alternate && game.next_player() == Player::for_step(game.step())
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
