//! Keyboard and mouse input mapping.
//!
//! Raw terminal events become [`Action`]s here; [`crate::App`] applies them.

use crate::app::Focus;
use crate::ui::ScreenLayout;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position as Point;
use rewind_tictactoe::Position;

/// Something the user asked the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor (arrow keys).
    MoveCursor(KeyCode),
    /// Play at the cursor.
    PlaceAtCursor,
    /// Play at a specific square (digit key or click).
    PlaceAt(Position),
    /// Move the move-list selection up one row.
    SelectPrevious,
    /// Move the move-list selection down one row.
    SelectNext,
    /// Jump to the selected move-list row.
    JumpToSelected,
    /// Jump to a display row of the move list (click).
    JumpToRow(usize),
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Reverse the move-list order.
    ToggleOrder,
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps a key press to an action, given which panel has focus.
pub fn key_action(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('f') => Some(Action::ToggleOrder),
        KeyCode::Tab => Some(Action::SwitchFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlaceAt),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => match focus {
            Focus::Board => Some(Action::MoveCursor(code)),
            Focus::Moves => match code {
                KeyCode::Up => Some(Action::SelectPrevious),
                KeyCode::Down => Some(Action::SelectNext),
                _ => None,
            },
        },
        KeyCode::Enter | KeyCode::Char(' ') => match focus {
            Focus::Board => Some(Action::PlaceAtCursor),
            Focus::Moves => Some(Action::JumpToSelected),
        },
        _ => None,
    }
}

/// Maps a left click to an action by hit-testing the screen layout.
pub fn mouse_action(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let point = Point::new(mouse.column, mouse.row);

    if let Some(pos) = layout.cell_at(point) {
        return Some(Action::PlaceAt(pos));
    }

    layout.move_row_at(point).map(Action::JumpToRow)
}
