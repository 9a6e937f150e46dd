//! Terminal rendering for the panel game.
//!
//! A small game-oriented rendering layer: snapshots are laid out into a
//! framebuffer by [`GameView`], and [`TerminalRenderer`] flushes only the cells
//! that changed since the last frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use cursed_panels_core as core;
pub use cursed_panels_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{status_text, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSink};
