use alloc::vec::Vec;

use super::BoardGenerator;
use crate::{Board, Coord2, GameError, Result};

/// Places a fixed mine list; the deterministic substitute for the random
/// strategy in tests and replays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetBoardGenerator {
    mines: Vec<Coord2>,
}

impl PresetBoardGenerator {
    /// Rejects coordinates that do not fit a `size` board.
    pub fn new(size: Coord2, mines: Vec<Coord2>) -> Result<Self> {
        for &(x, y) in &mines {
            if x >= size.0 || y >= size.1 {
                return Err(GameError::MineOutOfBounds);
            }
        }
        Ok(Self { mines })
    }
}

impl BoardGenerator for PresetBoardGenerator {
    fn generate(&mut self, board: &mut Board, _safe: Coord2) {
        board.clear_contents();
        for &pos in &self.mines {
            board.place_mine(pos);
        }
        board.assign_numbers();
    }
}
