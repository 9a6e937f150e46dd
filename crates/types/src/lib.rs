//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Stack Geometry
//!
//! The stack is a `length x width` grid stored row-major:
//!
//! - **Row 0** is the insertion edge; every advance pushes a fresh row in here
//! - **Row `length - 1`** is the far boundary; rows pushed past it are discarded
//! - Panels fall toward row 0 after eliminations
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_MATCH` | 2 | Shortest run of identical symbols that is eliminated |
//! | `CHAIN_MULT_NUMERATOR / CHAIN_MULT_DENOMINATOR` | 3/2 | Weight applied to chained passes |
//! | `BASE_ADV_SPEED_MS` | 2000 | Advance interval at speed 1 |
//! | `BASE_PANEL_THRESH` | 6 | Panel threshold base for speed-ups |
//! | `SPEED_UP_EXP` | 1.5 | Exponent of the speed-up threshold |
//! | `TICK_MS` | 16 | Input poll timeout of the control loop |
//!
//! # Examples
//!
//! ```
//! use cursed_panels_types::{Command, Mode, Symbol, MIN_MATCH};
//!
//! assert_eq!(Command::MoveLeft.step(), Some((-1, 0)));
//! assert_eq!(Command::TogglePause.step(), None);
//!
//! assert_eq!(Mode::Paused.as_str(), "paused");
//! assert_eq!(Symbol(2).index(), 2);
//! assert_eq!(MIN_MATCH, 2);
//! ```

/// Shortest run of identical symbols that gets eliminated.
pub const MIN_MATCH: usize = 2;

/// Chain multiplier numerator (3/2 = 1.5x per chained pass).
pub const CHAIN_MULT_NUMERATOR: u64 = 3;

/// Chain multiplier denominator.
pub const CHAIN_MULT_DENOMINATOR: u64 = 2;

/// Advance interval at speed 1, in milliseconds.
///
/// The interval at speed `s` is `BASE_ADV_SPEED_MS / log2(s + 1)`.
pub const BASE_ADV_SPEED_MS: u64 = 2000;

/// Base of the speed-up threshold `(speed * BASE_PANEL_THRESH) ^ SPEED_UP_EXP`.
pub const BASE_PANEL_THRESH: u32 = 6;

/// Exponent of the speed-up threshold.
pub const SPEED_UP_EXP: f64 = 1.5;

/// Rows at or beyond this fraction of the length start out empty.
pub const INITIAL_FILL_NUMERATOR: usize = 3;

/// Denominator of the initial fill fraction (3/4).
pub const INITIAL_FILL_DENOMINATOR: usize = 4;

/// Input poll timeout of the control loop (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Default starting speed.
pub const DEFAULT_SPEED: u32 = 1;

/// Default stack length (rows along the rising axis).
pub const DEFAULT_LENGTH: usize = 60;

/// Default stack width (columns).
pub const DEFAULT_WIDTH: usize = 12;

/// Default panel alphabet.
pub const DEFAULT_SYMBOLS: [char; 5] = ['!', '@', '#', '$', '%'];

/// Largest alphabet supported by [`Symbol`]'s `u8` index.
pub const MAX_SYMBOLS: usize = u8::MAX as usize;

/// Character drawn on empty cells of the boundary row.
pub const BOUNDARY_MARKER: char = '|';

/// A panel symbol, stored as an index into the game's alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub u8);

impl Symbol {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A cell on the stack
///
/// - `None`: Empty cell
/// - `Some(Symbol)`: Cell holding a panel
pub type Cell = Option<Symbol>;

/// Discrete player commands, at most one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the cursor toward row 0
    MoveLeft,
    /// Move the cursor toward the boundary row
    MoveRight,
    /// Move the cursor to the previous column
    MoveUp,
    /// Move the cursor to the next column
    MoveDown,
    /// Enter or leave swap selection
    ToggleSelect,
    /// Pause or resume the stack
    TogglePause,
    /// Answer "yes" to the game-over prompt
    ConfirmYes,
    /// Answer "no" to the game-over prompt
    ConfirmNo,
    /// End the session
    Quit,
}

impl Command {
    /// Cursor step `(dx, dy)` for movement commands.
    ///
    /// `x` runs along the stack length, `y` along its width.
    pub fn step(&self) -> Option<(isize, isize)> {
        match self {
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            Command::MoveUp => Some((0, -1)),
            Command::MoveDown => Some((0, 1)),
            _ => None,
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Playing => "playing",
            Mode::Paused => "paused",
            Mode::GameOver => "gameOver",
        }
    }
}

/// What the status field should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusLine {
    /// Key help while playing
    #[default]
    Directions,
    /// Swap selection is armed
    Selecting,
    /// Stack is paused
    Paused,
    /// Continue/quit prompt
    GameOver,
}

/// Outcome of a match/eliminate/compact cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChainResult {
    /// Panels eliminated across every chained pass.
    pub eliminated: u32,
    /// Score earned by the whole chain.
    pub score: u64,
}

impl ChainResult {
    pub fn is_empty(&self) -> bool {
        self.eliminated == 0 && self.score == 0
    }
}

/// Outcome of an advance-driven update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UpdateResult {
    pub chain: ChainResult,
    /// Panels were pushed into the boundary row.
    pub game_over: bool,
}

/// Whether the control loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_defaults() {
        assert_eq!(MIN_MATCH, 2);
        assert_eq!(CHAIN_MULT_NUMERATOR, 3);
        assert_eq!(CHAIN_MULT_DENOMINATOR, 2);
        assert_eq!(BASE_ADV_SPEED_MS, 2000);
        assert_eq!(BASE_PANEL_THRESH, 6);
        assert_eq!(SPEED_UP_EXP, 1.5);
        assert_eq!(DEFAULT_LENGTH, 60);
        assert_eq!(DEFAULT_WIDTH, 12);
        assert_eq!(DEFAULT_SYMBOLS.len(), 5);
    }

    #[test]
    fn only_movement_commands_step() {
        assert_eq!(Command::MoveRight.step(), Some((1, 0)));
        assert_eq!(Command::MoveUp.step(), Some((0, -1)));
        assert_eq!(Command::MoveDown.step(), Some((0, 1)));
        for cmd in [
            Command::ToggleSelect,
            Command::TogglePause,
            Command::ConfirmYes,
            Command::ConfirmNo,
            Command::Quit,
        ] {
            assert_eq!(cmd.step(), None, "{:?}", cmd);
        }
    }
}
