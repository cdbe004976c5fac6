//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. The game state never
//! stores an outcome; it asks these functions on demand.

pub mod draw;
pub mod win;

pub use draw::{evaluate, is_full};
pub use win::{WIN_LINES, check_winner};
