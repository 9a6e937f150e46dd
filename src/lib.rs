//! Cursed panels (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `cursed_panels::{core,input,term,types}`.

pub use cursed_panels_core as core;
pub use cursed_panels_input as input;
pub use cursed_panels_term as term;
pub use cursed_panels_types as types;
