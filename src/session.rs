use alloc::boxed::Box;

use crate::{Board, BoardGenerator, Cell, CellCount, Coord2, GameConfig};

/// Seconds the explosion flash stays armed after a loss. How it is drawn is
/// the presentation layer's business; the session only counts down.
const EXPLOSION_FLASH_SECS: f32 = 0.2;

/// One game from construction to win or loss, and the sole entry point for
/// presentation-layer input. Coordinates must be pre-validated by the
/// caller; out-of-range input is a contract violation and panics.
///
/// `game_over` and `win` are never both true. Once either is set, every
/// further reveal or flag call is silently absorbed.
pub struct GameSession {
    config: GameConfig,
    board: Board,
    generator: Box<dyn BoardGenerator>,
    game_over: bool,
    win: bool,
    first_click_pending: bool,
    explosion_active: bool,
    explosion_countdown: f32,
    timer_running: bool,
    elapsed_time: f32,
}

impl GameSession {
    pub fn new(config: GameConfig, generator: Box<dyn BoardGenerator>) -> Self {
        Self {
            config,
            board: Board::new(config),
            generator,
            game_over: false,
            win: false,
            first_click_pending: true,
            explosion_active: false,
            explosion_countdown: 0.0,
            timer_running: false,
            elapsed_time: 0.0,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn cell_at(&self, pos: Coord2) -> Cell {
        self.board.cell_at(pos)
    }

    pub const fn game_over(&self) -> bool {
        self.game_over
    }

    pub const fn win(&self) -> bool {
        self.win
    }

    pub const fn is_finished(&self) -> bool {
        self.game_over || self.win
    }

    pub const fn explosion_active(&self) -> bool {
        self.explosion_active
    }

    pub const fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Mines minus flags, for the remaining-mine display; negative when
    /// over-flagged.
    pub fn remaining_mines(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.board.count_flags())
    }

    /// Reveal intent at `pos`, dispatched through the cell's current state.
    pub fn reveal_at(&mut self, pos: Coord2) {
        let state = self.board.cell_at(pos).state;
        state.on_reveal(self, pos);
    }

    /// Flag intent at `pos`, dispatched through the cell's current state.
    pub fn toggle_flag_at(&mut self, pos: Coord2) {
        let state = self.board.cell_at(pos).state;
        state.on_toggle_flag(self, pos);
    }

    /// Reveal of a Closed cell. The session's first accepted reveal
    /// generates the board with `pos` as the safe center and starts the
    /// timer, exactly once per session.
    pub(crate) fn reveal_closed(&mut self, pos: Coord2) {
        if self.is_finished() {
            return;
        }

        if self.first_click_pending {
            self.generator.generate(&mut self.board, pos);
            self.first_click_pending = false;
            self.start_timer();
        }

        if self.board.open_cell(pos).is_mine() {
            self.trigger_loss(pos);
        } else {
            self.check_win();
        }
    }

    /// Flag toggle of a Closed or Flagged cell.
    pub(crate) fn toggle_flag_closed(&mut self, pos: Coord2) {
        if self.is_finished() {
            return;
        }
        if self.board.toggle_flag(pos) {
            self.check_win();
        }
    }

    /// Open-based win is checked first, then flag-based, so both paths are
    /// detected without double bookkeeping.
    fn check_win(&mut self) {
        if self.board.is_win_by_open() || self.board.is_win_by_flags() {
            log::debug!("session won after {:.1}s", self.elapsed_time);
            self.win = true;
            self.stop_timer();
        }
    }

    fn trigger_loss(&mut self, pos: Coord2) {
        log::debug!("mine hit at {pos:?}, ending session");
        self.game_over = true;
        self.stop_timer();
        self.explosion_active = true;
        self.explosion_countdown = EXPLOSION_FLASH_SECS;
        self.board.reveal_all();
    }

    fn start_timer(&mut self) {
        if !self.timer_running {
            self.timer_running = true;
            self.elapsed_time = 0.0;
        }
    }

    fn stop_timer(&mut self) {
        self.timer_running = false;
    }

    /// Advances time-driven state by `dt` seconds: winds down the explosion
    /// flash and accumulates play time while the timer runs. Called once
    /// per frame by the presentation layer; any non-negative delta works.
    pub fn tick(&mut self, dt: f32) {
        if self.explosion_active {
            self.explosion_countdown -= dt;
            if self.explosion_countdown < 0.0 {
                self.explosion_active = false;
            }
        }
        if self.timer_running && !self.is_finished() {
            self.elapsed_time += dt;
        }
    }

    /// Back to a fresh Closed/Empty board with every session flag and timer
    /// cleared. The generator is retained; a difficulty change replaces the
    /// whole session instead.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config);
        self.game_over = false;
        self.win = false;
        self.first_click_pending = true;
        self.explosion_active = false;
        self.explosion_countdown = 0.0;
        self.timer_running = false;
        self.elapsed_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellContent, PresetBoardGenerator};
    use alloc::vec::Vec;

    fn session(size: Coord2, mines: &[Coord2]) -> GameSession {
        let generator = PresetBoardGenerator::new(size, mines.to_vec()).unwrap();
        GameSession::new(
            GameConfig::new_unchecked(size, mines.len() as CellCount),
            Box::new(generator),
        )
    }

    fn snapshot(session: &GameSession) -> Vec<Cell> {
        let (w, h) = session.size();
        let mut cells = Vec::new();
        for x in 0..w {
            for y in 0..h {
                cells.push(session.cell_at((x, y)));
            }
        }
        cells
    }

    #[test]
    fn corner_reveal_cascades_and_wins_by_open() {
        // 3x3 with the single mine at (2,2): revealing (0,0) floods every
        // safe cell and ends the game immediately.
        let mut game = session((3, 3), &[(2, 2)]);
        game.reveal_at((0, 0));

        assert!(game.win());
        assert!(!game.game_over());
        for pos in [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2)] {
            assert!(game.cell_at(pos).state.is_open(), "{pos:?} not open");
        }
        assert!(!game.cell_at((2, 2)).state.is_open());
        assert_eq!(game.cell_at((1, 1)).content, CellContent::Number(1));
        assert_eq!(game.cell_at((2, 1)).content, CellContent::Number(1));
        assert_eq!(game.cell_at((1, 2)).content, CellContent::Number(1));
        assert_eq!(game.cell_at((0, 0)).content, CellContent::Empty);
    }

    #[test]
    fn win_by_open_with_the_mine_left_closed() {
        // Single mine on a 2x2 board: every safe cell borders it, so there
        // is no cascade and the win lands on the last individual reveal.
        let mut game = session((2, 2), &[(0, 0)]);
        game.reveal_at((1, 0));
        game.reveal_at((0, 1));
        assert!(!game.win());
        game.reveal_at((1, 1));
        assert!(game.win());
        assert!(!game.cell_at((0, 0)).state.is_open());
    }

    #[test]
    fn win_by_flags_with_safe_cells_still_closed() {
        let mut game = session((4, 1), &[(0, 0), (2, 0)]);
        game.reveal_at((3, 0));
        assert!(!game.is_finished());

        game.toggle_flag_at((0, 0));
        game.toggle_flag_at((2, 0));

        assert!(game.win());
        assert!(!game.cell_at((1, 0)).state.is_open());
        assert_eq!(game.remaining_mines(), 0);
    }

    #[test]
    fn misplaced_flag_skips_the_win_without_losing() {
        let mut game = session((4, 1), &[(0, 0), (2, 0)]);
        game.reveal_at((3, 0));

        game.toggle_flag_at((0, 0));
        game.toggle_flag_at((1, 0));
        assert!(!game.is_finished());
        assert_eq!(game.remaining_mines(), 0);

        // Fixing the flag wins retroactively on the next mutation.
        game.toggle_flag_at((1, 0));
        game.toggle_flag_at((2, 0));
        assert!(game.win());
    }

    #[test]
    fn revealing_a_mine_loses_and_discloses_the_board() {
        let mut game = session((2, 2), &[(0, 0)]);
        game.reveal_at((1, 1));
        assert!(!game.is_finished());

        game.reveal_at((0, 0));

        assert!(game.game_over());
        assert!(!game.win());
        assert!(game.explosion_active());
        for pos in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert!(game.cell_at(pos).state.is_open());
        }
    }

    #[test]
    fn terminal_state_absorbs_all_input() {
        let mut game = session((2, 2), &[(0, 0)]);
        game.reveal_at((0, 0));
        assert!(game.game_over());
        let frozen = snapshot(&game);

        game.reveal_at((1, 1));
        game.toggle_flag_at((1, 0));
        assert_eq!(snapshot(&game), frozen);
    }

    #[test]
    fn flagged_cells_cannot_be_revealed() {
        let mut game = session((2, 2), &[(0, 0)]);
        game.toggle_flag_at((0, 0));
        game.reveal_at((0, 0));

        assert!(game.cell_at((0, 0)).state.is_flagged());
        assert!(!game.is_finished());

        game.toggle_flag_at((0, 0));
        assert_eq!(game.cell_at((0, 0)).state, crate::CellState::Closed);
    }

    #[test]
    fn generation_waits_for_the_first_reveal() {
        let mut game = session((3, 3), &[(2, 2)]);
        // Flagging does not trigger generation, so no cell is a mine yet.
        game.toggle_flag_at((2, 2));
        assert_eq!(game.cell_at((2, 2)).content, CellContent::Empty);
        assert!(!game.win());

        game.toggle_flag_at((2, 2));
        game.reveal_at((0, 0));
        assert!(game.cell_at((2, 2)).content.is_mine());
    }

    #[test]
    fn timer_accumulates_between_first_reveal_and_game_end() {
        let mut game = session((4, 1), &[(0, 0), (2, 0)]);
        game.tick(5.0);
        assert_eq!(game.elapsed_time(), 0.0);

        game.reveal_at((3, 0));
        game.tick(1.5);
        game.tick(0.25);
        assert_eq!(game.elapsed_time(), 1.75);

        game.reveal_at((1, 0));
        assert!(game.win());
        game.tick(3.0);
        assert_eq!(game.elapsed_time(), 1.75);
    }

    #[test]
    fn explosion_flash_expires_through_tick() {
        let mut game = session((2, 2), &[(0, 0)]);
        game.reveal_at((0, 0));
        assert!(game.explosion_active());

        game.tick(0.1);
        assert!(game.explosion_active());
        game.tick(0.2);
        assert!(!game.explosion_active());
    }

    #[test]
    fn reset_restores_a_fresh_session() {
        let mut game = session((2, 2), &[(0, 0)]);
        game.reveal_at((0, 0));
        assert!(game.game_over());

        game.reset();

        assert!(!game.is_finished());
        assert!(!game.explosion_active());
        assert_eq!(game.elapsed_time(), 0.0);
        assert_eq!(game.remaining_mines(), 1);
        for cell in snapshot(&game) {
            assert_eq!(cell, Cell::default());
        }

        // The session generates again on the next first reveal.
        game.reveal_at((1, 1));
        assert!(game.cell_at((0, 0)).content.is_mine());
    }
}
