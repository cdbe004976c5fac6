//! Rewind Tic-Tac-Toe - game logic with time-travel history.
//!
//! The game is a list of immutable board snapshots plus a pointer to the
//! step being viewed. Moves made from an earlier step discard the future;
//! jumping between steps never does.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Position};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move_at(cell);
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//!
//! // Go back two moves and branch.
//! game.jump_to(3);
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.history().len(), 5);
//! assert_eq!(game.winner(), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
mod kani_support;
mod location;
mod move_list;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use game::{GameState, MoveOutcome, StateError};
pub use history::HistoryEntry;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, RewindInvariants};
pub use location::{LocationError, MoveLocation};
pub use move_list::{MoveListEntry, SortOrder};
pub use position::{Position, PositionError};
pub use types::{Board, GameStatus, Player, Square};
