//! Single-cell delta invariant: each entry adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every entry's board differs from its predecessor in exactly
/// one square, and that square went from empty to occupied.
///
/// The first entry is the empty board.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if history.first().is_some_and(|e| e.board().occupied_count() != 0) {
            return false;
        }

        history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            match before.diff(after).as_slice() {
                [pos] => before.get(*pos) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to its predecessor"
    }
}
