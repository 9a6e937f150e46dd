//! Game state module - the controller
//!
//! Ties together grid, cursor, pace gate, RNG and the session counters. Commands
//! are dispatched by the current [`Mode`]; time only moves the game forward
//! through [`GameState::tick`].

use std::time::Instant;

use crate::config::GameConfig;
use crate::cursor::Cursor;
use crate::grid::Grid;
use crate::pace::PaceGate;
use crate::rng::SimpleRng;
use crate::scoring::should_speed_up;
use crate::snapshot::{CursorSnapshot, GameSnapshot};
use crate::types::{ChainResult, Command, Flow, Mode, StatusLine, UpdateResult};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    cursor: Cursor,
    pace: PaceGate,
    rng: SimpleRng,
    symbols: Vec<char>,
    base_speed: u32,
    seed: u32,
    score: u64,
    /// Cumulative since the game started; never reset by a speed-up.
    panels_cleared: u64,
    mode: Mode,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Something shown on screen changed since the last frame.
    redraw: bool,
}

impl GameState {
    /// Start a game: generate the stack and begin in `Playing`.
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        let mut rng = SimpleRng::new(config.seed());
        let mut grid = Grid::new(config.length(), config.width());
        grid.build_initial_stack(&mut rng, config.symbol_count());
        log::info!(
            "new {}x{} game, {} symbols, speed {}, seed {}",
            config.length(),
            config.width(),
            config.symbol_count(),
            config.speed(),
            config.seed()
        );

        Self {
            grid,
            cursor: Cursor::new(config.length(), config.width()),
            pace: PaceGate::new(config.speed(), now),
            rng,
            symbols: config.symbols().to_vec(),
            base_speed: config.speed(),
            seed: config.seed(),
            score: 0,
            panels_cleared: 0,
            mode: Mode::Playing,
            episode_id: 0,
            redraw: true,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access, for setting up positions in tests and tools.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.redraw = true;
        &mut self.grid
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn pace(&self) -> &PaceGate {
        &self.pace
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.pace.speed()
    }

    pub fn panels_cleared(&self) -> u64 {
        self.panels_cleared
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    fn symbol_count(&self) -> u8 {
        self.symbols.len() as u8
    }

    pub fn status(&self) -> StatusLine {
        match self.mode {
            Mode::Playing if self.cursor.selecting() => StatusLine::Selecting,
            Mode::Playing => StatusLine::Directions,
            Mode::Paused => StatusLine::Paused,
            Mode::GameOver => StatusLine::GameOver,
        }
    }

    /// Apply one player command.
    ///
    /// `Quit` ends the session from any mode; everything else is interpreted by
    /// the handler of the current mode.
    pub fn apply_command(&mut self, command: Command, now: Instant) -> Flow {
        if command == Command::Quit {
            log::info!("quit requested in {} mode", self.mode.as_str());
            return Flow::Quit;
        }

        match self.mode {
            Mode::Playing => self.play(command, now),
            Mode::Paused => self.paused(command, now),
            Mode::GameOver => self.game_over(command, now),
        }
    }

    fn play(&mut self, command: Command, now: Instant) -> Flow {
        if let Some((dx, dy)) = command.step() {
            if let Some((from, to)) = self.cursor.move_by(dx, dy) {
                let chain = self.grid.swap_panel(from, to);
                self.redraw = true;
                self.record(chain);
            }
            return Flow::Continue;
        }

        match command {
            Command::ToggleSelect => {
                self.cursor.toggle_select();
                self.redraw = true;
            }
            Command::TogglePause => {
                self.pace.pause(now);
                self.mode = Mode::Paused;
                self.redraw = true;
                log::debug!("paused");
            }
            _ => {}
        }
        Flow::Continue
    }

    fn paused(&mut self, command: Command, now: Instant) -> Flow {
        if command == Command::TogglePause {
            self.pace.unpause(now);
            self.mode = Mode::Playing;
            self.redraw = true;
            log::debug!("resumed");
        }
        Flow::Continue
    }

    fn game_over(&mut self, command: Command, now: Instant) -> Flow {
        match command {
            Command::ConfirmYes => {
                self.reset(now);
                Flow::Continue
            }
            Command::ConfirmNo => Flow::Quit,
            _ => Flow::Continue,
        }
    }

    /// Advance the stack if it is due. Returns the update when one happened.
    pub fn tick(&mut self, now: Instant) -> Option<UpdateResult> {
        if self.mode != Mode::Playing || !self.pace.advance_ready(now) {
            return None;
        }

        let symbol_count = self.symbol_count();
        let update = self.grid.update_stack(&mut self.rng, symbol_count);
        self.pace.mark_advanced(now);
        self.redraw = true;
        self.record(update.chain);

        if update.game_over {
            self.mode = Mode::GameOver;
            log::info!(
                "game over: score {}, speed {}, {} panels cleared",
                self.score,
                self.pace.speed(),
                self.panels_cleared
            );
        }
        Some(update)
    }

    /// Credit a chain and apply the speed rule.
    fn record(&mut self, chain: ChainResult) {
        if chain.is_empty() {
            return;
        }
        self.score = self.score.saturating_add(chain.score);
        self.panels_cleared = self.panels_cleared.saturating_add(chain.eliminated as u64);

        // NOTE: the cleared count is cumulative, so each level needs it to pass
        // a higher absolute threshold rather than a fresh per-level quota.
        if should_speed_up(self.panels_cleared, self.pace.speed()) {
            self.pace.speed_up();
            log::info!(
                "speed up to {} after {} panels",
                self.pace.speed(),
                self.panels_cleared
            );
        }
    }

    /// Start over with a fresh stack at the original speed.
    ///
    /// The RNG keeps its stream, so the new stack differs from the last one.
    pub fn reset(&mut self, now: Instant) {
        let symbol_count = self.symbol_count();
        self.grid.build_initial_stack(&mut self.rng, symbol_count);
        self.cursor.reset();
        self.pace.reset(self.base_speed, now);
        self.score = 0;
        self.panels_cleared = 0;
        self.mode = Mode::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.redraw = true;
        log::info!("reset, episode {}", self.episode_id);
    }

    /// Report and clear whether anything needs redrawing.
    pub fn take_redraw(&mut self) -> bool {
        let cursor = self.cursor.take_refresh();
        let redraw = std::mem::take(&mut self.redraw);
        cursor || redraw
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.length = self.grid.length();
        out.width = self.grid.width();
        out.board.clear();
        out.board.extend_from_slice(self.grid.cells());
        if out.symbols != self.symbols {
            out.symbols.clone_from(&self.symbols);
        }
        out.cursor = CursorSnapshot {
            x: self.cursor.x(),
            y: self.cursor.y(),
            select: self.cursor.selecting(),
        };
        out.score = self.score;
        out.speed = self.pace.speed();
        out.panels_cleared = self.panels_cleared;
        out.mode = self.mode;
        out.status = self.status();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
