//! Human-facing move coordinates.

use super::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A row or column outside the 1-3 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move location row {} column {} is off the board (must be 1-3)", row, column)]
pub struct LocationError {
    /// The rejected row.
    pub row: u8,
    /// The rejected column.
    pub column: u8,
}

#[derive(Deserialize)]
struct RawMoveLocation {
    row: u8,
    column: u8,
}

/// Where a move was played: 1-indexed row and column.
///
/// Displays as `(column,row)`, the order the move list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoveLocation")]
pub struct MoveLocation {
    row: u8,
    column: u8,
}

impl MoveLocation {
    /// Row, 1-3 from the top.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column, 1-3 from the left.
    pub fn column(&self) -> u8 {
        self.column
    }

    /// The board position this location names.
    pub fn position(&self) -> Position {
        // row and column are 1-3 for every constructed location
        Position::ALL[(self.row as usize - 1) * 3 + (self.column as usize - 1)]
    }
}

impl From<Position> for MoveLocation {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row() as u8 + 1,
            column: pos.column() as u8 + 1,
        }
    }
}

impl TryFrom<RawMoveLocation> for MoveLocation {
    type Error = LocationError;

    fn try_from(raw: RawMoveLocation) -> Result<Self, Self::Error> {
        let on_board = |n: u8| (1..=3).contains(&n);
        if on_board(raw.row) && on_board(raw.column) {
            Ok(Self {
                row: raw.row,
                column: raw.column,
            })
        } else {
            Err(LocationError {
                row: raw.row,
                column: raw.column,
            })
        }
    }
}

impl std::fmt::Display for MoveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.column, self.row)
    }
}
