//! Immutable history entries.

use super::{Board, MoveLocation, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One step of game history: the board after a move and every move
/// location played to reach it.
///
/// Entries are never edited after they are appended. A new entry is
/// derived from its predecessor with [`HistoryEntry::advance`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board snapshot at this step.
    board: Board,
    /// Move locations so far, one per move, in play order.
    locations: Vec<MoveLocation>,
}

impl HistoryEntry {
    /// The entry every game starts from: empty board, no moves.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            locations: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, locations: Vec<MoveLocation>) -> Self {
        Self { board, locations }
    }

    /// Derives the entry that follows this one when `player` marks `pos`.
    pub(crate) fn advance(&self, pos: Position, player: Player) -> Self {
        let mut locations = self.locations.clone();
        locations.push(MoveLocation::from(pos));
        Self {
            board: self.board.with_mark(pos, player),
            locations,
        }
    }

    /// Location of the move that produced this entry, if any.
    pub fn last_location(&self) -> Option<MoveLocation> {
        self.locations.last().copied()
    }
}
