use crate::{Board, Coord2};

pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Strategy seam for mine placement. Called once per session, on the first
/// accepted reveal, with the clicked cell as the safe center.
pub trait BoardGenerator {
    fn generate(&mut self, board: &mut Board, safe: Coord2);
}
