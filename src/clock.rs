//! Frame clock for the runner.
//!
//! The loop runs one frame every [`FRAME_MS`] milliseconds and gravity fires on
//! every [`GRAVITY_FRAMES`]th frame. A soft drop pulls the next gravity tick
//! forward to the very next frame instead of moving the piece directly.

use std::time::Duration;

use crate::types::{FRAME_MS, GRAVITY_FRAMES};

/// Counts frames and reports when gravity is due.
#[derive(Debug, Clone, Default)]
pub struct GravityClock {
    frame: u8,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of one frame.
    pub fn frame_duration() -> Duration {
        Duration::from_millis(FRAME_MS as u64)
    }

    /// Step one frame. Returns true when a gravity tick is due.
    pub fn advance(&mut self) -> bool {
        self.frame += 1;
        if self.frame >= GRAVITY_FRAMES {
            self.frame = 0;
            return true;
        }
        false
    }

    /// Make the next `advance` fire.
    pub fn hurry(&mut self) {
        self.frame = GRAVITY_FRAMES - 1;
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }
}
