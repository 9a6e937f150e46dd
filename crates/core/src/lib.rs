//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the panel engine and the controller around it. It has no
//! dependency on the terminal; time, input and output reach it through the
//! traits in [`session`].
//!
//! - **Deterministic**: the same seed and inputs reproduce the same game
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: any front end that implements the session traits can drive it
//!
//! # Module Structure
//!
//! - [`grid`]: the panel stack with generation, advance, swap, matching and gravity
//! - [`cursor`]: the player's selected cell and swap selection
//! - [`pace`]: when the stack advances, with pause/resume
//! - [`scoring`]: chain scores, advance interval and speed progression
//! - [`game_state`]: the controller and its mode state machine
//! - [`session`]: the cooperative control loop and its collaborator traits
//! - [`config`]: validated game parameters
//! - [`rng`]: seedable symbol chooser
//!
//! # Game Rules
//!
//! - **Runs**: two or more identical neighbouring symbols along a row or column vanish
//! - **Gravity**: panels fall toward row 0 after every elimination
//! - **Chains**: each pass triggered by falling panels weighs the rest of the chain by 1.5x
//! - **Advance**: a new row is pushed in at row 0 every `2s / log2(speed + 1)`
//! - **Speed**: rises once cleared panels exceed `(speed * 6) ^ 1.5`
//! - **Game over**: panels pushed into the boundary row
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use cursed_panels_core::{GameConfig, GameState};
//! use cursed_panels_core::types::{Command, Flow, Mode};
//!
//! let config = GameConfig::new(1, &["a", "b", "c"], 10, 4, 12345).unwrap();
//! let t0 = Instant::now();
//! let mut game = GameState::new(&config, t0);
//!
//! game.apply_command(Command::MoveDown, t0);
//! assert_eq!(game.cursor().position(), (0, 1));
//!
//! // One advance is due after two seconds at speed 1.
//! assert!(game.tick(t0 + Duration::from_secs(2)).is_some());
//!
//! assert_eq!(game.apply_command(Command::TogglePause, t0), Flow::Continue);
//! assert_eq!(game.mode(), Mode::Paused);
//! ```

pub mod config;
pub mod cursor;
pub mod game_state;
pub mod grid;
pub mod pace;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use cursed_panels_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use cursor::Cursor;
pub use game_state::GameState;
pub use grid::{Grid, Pos};
pub use pace::PaceGate;
pub use rng::SimpleRng;
pub use scoring::{advance_interval, chain_score, should_speed_up};
pub use session::{Clock, InputSource, ManualClock, RenderSink, ScriptedInput, SystemClock};
pub use snapshot::{CursorSnapshot, GameSnapshot};
