#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod types;

/// Board dimensions and mine budget for one session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    /// Cells reserved around the first click (the 3x3 safe zone).
    pub const SAFE_ZONE_CELLS: CellCount = 9;

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates that the grid is non-empty and that `mines` fits outside
    /// the first-click safe zone, so generation always terminates.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let (w, h) = size;
        if w == 0 || h == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines > mult(w, h).saturating_sub(Self::SAFE_ZONE_CELLS) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn easy() -> Self {
        Self::new_unchecked((10, 10), 10)
    }

    pub const fn normal() -> Self {
        Self::new_unchecked((14, 14), 20)
    }

    pub const fn hard() -> Self {
        Self::new_unchecked((20, 20), 40)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}
