use serde::{Deserialize, Serialize};

use crate::{Coord2, GameSession};

/// What a generated cell holds. `Empty` is the canonical form of a zero
/// adjacency count; `CellContent::number` normalizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Empty,
    Number(u8),
    Mine,
}

impl CellContent {
    /// Content for an adjacency count, folding zero into `Empty`.
    pub const fn number(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Number(count)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// True for a zero adjacency count.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Adjacency count for display, `None` for a mine.
    pub const fn numeric_value(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Number(count) => Some(count),
            Self::Mine => None,
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty
    }
}

/// Behavioral state of a cell, deciding which inputs are legal. Mutated
/// only through the intent handlers, by generation (everything starts
/// Closed) and by the forced reveal-all on loss.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Closed,
    Opened,
    Flagged,
}

impl CellState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Opened)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    /// Reveal intent, dispatched per state. The owning session is passed in
    /// as a capability so states hold no back-reference. A flagged cell
    /// cannot be revealed without unflagging it first.
    pub(crate) fn on_reveal(self, session: &mut GameSession, pos: Coord2) {
        match self {
            Self::Closed => session.reveal_closed(pos),
            Self::Opened | Self::Flagged => {}
        }
    }

    /// Flag intent: flips Closed and Flagged, absorbed by Opened.
    pub(crate) fn on_toggle_flag(self, session: &mut GameSession, pos: Coord2) {
        match self {
            Self::Closed | Self::Flagged => session.toggle_flag_closed(pos),
            Self::Opened => {}
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Closed
    }
}

/// One grid position: content plus behavioral state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: CellContent,
    pub state: CellState,
}
