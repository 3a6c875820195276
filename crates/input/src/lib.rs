//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s plus the two
//! keys the runner handles itself (quit and restart). It has no state: the
//! gravity clock, not this crate, decides how held keys accelerate the game.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for_key, should_quit, should_restart};
