//! Step pointer invariant: the viewed step is inside history.

use super::super::GameState;
use super::Invariant;

/// Invariant: the step pointer indexes an existing entry and history is
/// never empty.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history().is_empty() && game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step pointer indexes an existing history entry"
    }
}
