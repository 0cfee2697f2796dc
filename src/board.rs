use alloc::collections::VecDeque;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::nd_index;
use crate::{Cell, CellContent, CellCount, CellState, Coord2, GameConfig, neighbors};

/// The 2D grid of cells. Session flags (win, loss, timer) live in
/// `GameSession`; the board only knows cells and its mine budget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Array2<Cell>,
    config: GameConfig,
}

impl Board {
    /// All cells Closed and Empty; content arrives with generation.
    pub fn new(config: GameConfig) -> Self {
        Self {
            grid: Array2::default(nd_index(config.size)),
            config,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn cell_at(&self, pos: Coord2) -> Cell {
        self[pos]
    }

    /// Number of mines among the up-to-8 neighbors of `pos`. Pure query.
    pub fn count_mines_around(&self, pos: Coord2) -> u8 {
        neighbors(pos, self.size())
            .filter(|&p| self[p].content.is_mine())
            .count() as u8
    }

    pub fn count_flags(&self) -> CellCount {
        self.grid.iter().filter(|cell| cell.state.is_flagged()).count() as CellCount
    }

    /// Every non-mine cell has been opened; mine cells may be anything.
    pub fn is_win_by_open(&self) -> bool {
        self.grid
            .iter()
            .all(|cell| cell.content.is_mine() || cell.state.is_open())
    }

    /// Exactly `mines` flags, every one of them on a mine. A flag on a safe
    /// cell merely fails this check for the call; it does not end the game.
    pub fn is_win_by_flags(&self) -> bool {
        let mut flagged = 0;
        for cell in self.grid.iter() {
            if cell.state.is_flagged() {
                if !cell.content.is_mine() {
                    return false;
                }
                flagged += 1;
            }
        }
        flagged == self.config.mines
    }

    /// Forces every cell open; full disclosure on loss.
    pub(crate) fn reveal_all(&mut self) {
        for cell in self.grid.iter_mut() {
            cell.state = CellState::Opened;
        }
    }

    /// Flips Closed <-> Flagged. Returns whether anything changed.
    pub(crate) fn toggle_flag(&mut self, pos: Coord2) -> bool {
        let cell = &mut self[pos];
        match cell.state {
            CellState::Closed => {
                cell.state = CellState::Flagged;
                true
            }
            CellState::Flagged => {
                cell.state = CellState::Closed;
                true
            }
            CellState::Opened => false,
        }
    }

    /// Opens `pos` and, when it holds an empty cell, discloses the connected
    /// zero region. Returns the opened content so the caller can sequence
    /// the loss path.
    pub(crate) fn open_cell(&mut self, pos: Coord2) -> CellContent {
        self[pos].state = CellState::Opened;
        let content = self[pos].content;
        if content.is_empty() {
            self.flood_fill(pos);
        }
        content
    }

    /// Work-list flood fill: opens every neighbor that is not a mine, not
    /// flagged and not already open, expanding through empty cells. The
    /// Opened check terminates the walk, so no visited set is needed, and
    /// the resulting open-set is independent of traversal order.
    fn flood_fill(&mut self, start: Coord2) {
        let size = self.size();
        let mut to_expand = VecDeque::from([start]);

        while let Some(center) = to_expand.pop_front() {
            for pos in neighbors(center, size) {
                let cell = &mut self[pos];
                if cell.state.is_open() || cell.state.is_flagged() || cell.content.is_mine() {
                    continue;
                }
                cell.state = CellState::Opened;
                if cell.content.is_empty() {
                    to_expand.push_back(pos);
                }
            }
        }
    }

    /// Resets every cell's content to Empty, leaving states untouched
    /// (flags placed before the first reveal survive generation).
    pub(crate) fn clear_contents(&mut self) {
        for cell in self.grid.iter_mut() {
            cell.content = CellContent::Empty;
        }
    }

    pub(crate) fn place_mine(&mut self, pos: Coord2) {
        self[pos].content = CellContent::Mine;
    }

    /// Recomputes every non-mine cell's adjacency number.
    pub(crate) fn assign_numbers(&mut self) {
        let (w, h) = self.size();
        for x in 0..w {
            for y in 0..h {
                if !self[(x, y)].content.is_mine() {
                    let around = self.count_mines_around((x, y));
                    self[(x, y)].content = CellContent::number(around);
                }
            }
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, pos: Coord2) -> &Self::Output {
        &self.grid[nd_index(pos)]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, pos: Coord2) -> &mut Self::Output {
        &mut self.grid[nd_index(pos)]
    }
}
