//! Move-list rows for time-travel navigation.

use super::MoveLocation;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One row of the move list: a jump target into history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveListEntry {
    /// History step this row jumps to.
    pub step: usize,
    /// Location of the move that produced the step (`None` for game start).
    pub location: Option<MoveLocation>,
    /// The step currently being viewed.
    pub is_current: bool,
    /// The last step in history.
    pub is_latest: bool,
}

impl MoveListEntry {
    /// Button text for this row.
    pub fn description(&self) -> String {
        match self.location {
            Some(location) if self.step > 0 => format!("Go to move #{} {}", self.step, location),
            _ => "Go to game start".to_string(),
        }
    }
}

/// Direction the move list is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum SortOrder {
    /// Oldest move first.
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Maps the flipped flag to an order.
    pub fn from_flipped(flipped: bool) -> Self {
        if flipped {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_descriptions() {
        let start = MoveListEntry::new(0, None, true, false);
        assert_eq!(start.description(), "Go to game start");

        let third = MoveListEntry::new(3, Some(Position::BottomCenter.into()), false, true);
        assert_eq!(third.description(), "Go to move #3 (2,3)");
    }

    #[test]
    fn test_sort_order_display() {
        assert_eq!(SortOrder::from_flipped(false).to_string(), "Ascending");
        assert_eq!(SortOrder::from_flipped(true).to_string(), "Descending");
    }
}
