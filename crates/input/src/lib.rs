//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. It knows nothing
//! about the engine beyond the command set, so any front end can reuse it.

pub mod map;

pub use cursed_panels_types as types;

pub use map::{command_for_key, is_press};
