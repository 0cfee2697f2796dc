use rand::prelude::*;

use super::BoardGenerator;
use crate::{Board, CellCount, Coord2, mult, neighbors};

/// Chebyshev distance <= 1: `pos` lies in the 3x3 block around the first
/// click.
fn in_safe_zone(pos: Coord2, center: Coord2) -> bool {
    pos.0.abs_diff(center.0) <= 1 && pos.1.abs_diff(center.1) <= 1
}

/// Uniform rejection sampling over the grid: draws cells until the
/// requested number of mines is placed, rejecting repeats and the safe
/// zone. Seedable so placement is reproducible.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, board: &mut Board, safe: Coord2) {
        board.clear_contents();

        let (w, h) = board.size();
        let safe_cells = 1 + neighbors(safe, (w, h)).count() as CellCount;
        let capacity = mult(w, h) - safe_cells;
        let mut requested = board.mine_count();
        if requested > capacity {
            log::warn!("cannot place {requested} mines outside the safe zone, clamping to {capacity}");
            requested = capacity;
        }

        let mut placed = 0;
        while placed < requested {
            let pos = (self.rng.random_range(0..w), self.rng.random_range(0..h));
            if board[pos].content.is_mine() || in_safe_zone(pos, safe) {
                continue;
            }
            board.place_mine(pos);
            placed += 1;
        }

        board.assign_numbers();
    }
}
