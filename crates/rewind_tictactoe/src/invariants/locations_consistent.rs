//! Location consistency invariant: locations track the moves played.

use super::super::GameState;
use super::Invariant;

/// Invariant: entry `k` records exactly `k` move locations, earlier
/// locations are inherited unchanged, and the newest names the square that
/// changed.
pub struct LocationsConsistentInvariant;

impl Invariant<GameState> for LocationsConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let lengths_match = history
            .iter()
            .enumerate()
            .all(|(step, entry)| entry.locations().len() == step);
        if !lengths_match {
            return false;
        }

        history.windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let inherited = after.locations().starts_with(before.locations());
            let newest_matches = after
                .last_location()
                .is_some_and(|loc| before.board().diff(after.board()) == vec![loc.position()]);
            inherited && newest_matches
        })
    }

    fn description() -> &'static str {
        "Move locations match the moves recorded in history"
    }
}
