//! Time-travel game state for tic-tac-toe.
//!
//! The game is an ordered list of immutable history entries plus a step
//! pointer into it. Moving from an earlier step branches: every entry
//! after the step is discarded before the new one is appended. Jumping
//! only moves the pointer.

use super::invariants::{InvariantSet, RewindInvariants};
use super::move_list::{MoveListEntry, SortOrder};
use super::rules;
use super::{Board, GameStatus, HistoryEntry, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// What happened when a move was requested.
///
/// Rejected moves leave the game untouched; callers are free to ignore
/// the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was placed and the step advanced.
    #[display("{} played {}", _0, _1)]
    Applied(Player, Position),
    /// The target square already holds a mark.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
    /// The viewed snapshot already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
    /// The raw cell index does not name a square.
    #[display("Cell index {} is out of range", _0)]
    OutOfRange(usize),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(..))
    }
}

/// A deserialized game state that breaks a history invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game state: {}", message)]
pub struct StateError {
    /// Every violated invariant, joined with "; ".
    pub message: String,
}

/// Wire shape of [`GameState`], checked before it becomes one.
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    step: usize,
    x_is_next: bool,
    move_list_flipped: bool,
}

/// Complete game state: history, viewed step, and move-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<HistoryEntry>,
    step: usize,
    x_is_next: bool,
    move_list_flipped: bool,
}

impl GameState {
    /// Creates a new game with a single empty entry, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
            x_is_next: true,
            move_list_flipped: false,
        }
    }

    /// Builds a state from raw parts, bypassing move validation.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<HistoryEntry>, step: usize) -> Self {
        Self {
            history,
            step,
            x_is_next: step % 2 == 0,
            move_list_flipped: false,
        }
    }

    /// Plays the active player's mark at `pos`.
    ///
    /// A no-op if the square is occupied or the viewed snapshot already has
    /// a winner. Otherwise history after the current step is discarded, the
    /// new snapshot is appended, and the turn passes.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let current = self.current_snapshot();

        if let Some(winner) = rules::check_winner(current) {
            debug!(%winner, "Move ignored, game already won");
            return MoveOutcome::GameOver(winner);
        }

        if !current.is_empty(pos) {
            debug!(position = %pos, "Move ignored, square occupied");
            return MoveOutcome::SquareOccupied(pos);
        }

        let player = self.next_player();
        let next = self.history[self.step].advance(pos, player);

        let discarded = self.history.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Branching from earlier step, dropping future entries");
        }
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;
        debug!(board = %self.current_snapshot().display(), "Move applied");

        if cfg!(debug_assertions) {
            self.assert_invariants();
        }

        MoveOutcome::Applied(player, pos)
    }

    /// Checks every history invariant, panicking in debug builds on violation.
    fn assert_invariants(&self) {
        if let Err(violations) = RewindInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Invariants violated after move");
        }
    }

    /// Plays at a raw cell index in `[0, 9)`.
    ///
    /// An index outside the board is a no-op.
    #[instrument(skip(self))]
    pub fn apply_move_at(&mut self, index: usize) -> MoveOutcome {
        match Position::try_from(index) {
            Ok(pos) => self.apply_move(pos),
            Err(e) => {
                debug!(error = %e, "Move ignored");
                MoveOutcome::OutOfRange(index)
            }
        }
    }

    /// Views history at `step` without discarding anything.
    ///
    /// Returns false (and changes nothing) if `step` is not in history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "Jump target outside history");
            return false;
        }
        self.step = step;
        self.x_is_next = step % 2 == 0;
        true
    }

    /// Flips the move-list display order. Game logic is unaffected.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.move_list_flipped = !self.move_list_flipped;
        debug!(flipped = self.move_list_flipped, "Move order toggled");
    }

    /// Board snapshot at the current step.
    pub fn current_snapshot(&self) -> &Board {
        self.history[self.step].board()
    }

    /// Winner of the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_snapshot())
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self.current_snapshot())
    }

    /// All history entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the entry being viewed.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the last entry in history.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Player due to move at the current step.
    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Whether the move list is shown newest first.
    pub fn is_move_list_flipped(&self) -> bool {
        self.move_list_flipped
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_flipped(self.move_list_flipped)
    }

    /// Rows of the move list in display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let latest = self.latest_step();
        let mut rows: Vec<_> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                MoveListEntry::new(step, entry.last_location(), step == self.step, step == latest)
            })
            .collect();
        if self.move_list_flipped {
            rows.reverse();
        }
        rows
    }

    /// Status text for the viewed snapshot.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// Label describing the move-list order.
    pub fn sort_order_label(&self) -> String {
        format!("Sort Order: {}", self.sort_order())
    }
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    #[instrument(skip(raw), fields(step = raw.step, len = raw.history.len()))]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step: raw.step,
            x_is_next: raw.x_is_next,
            move_list_flipped: raw.move_list_flipped,
        };
        RewindInvariants::check_all(&state).map_err(|violations| {
            let message = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%message, "Rejected deserialized game state");
            StateError { message }
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
