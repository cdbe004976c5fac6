//! Terminal frontend for Rewind Tic-Tac-Toe.
//!
//! Reads [`rewind_tictactoe::GameState`] for drawing and drives it with
//! key presses and mouse clicks.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, key_action, mouse_action, move_cursor};
pub use terminal::TerminalGuard;
pub use ui::{ScreenLayout, draw};
