//! Terminal rendering for blockfall.
//!
//! Sessions are drawn into a plain framebuffer first and only then flushed to
//! the terminal, so the drawing code stays pure and unit-testable.
//!
//! - [`fb`]: styled glyph framebuffer
//! - [`game_view`]: snapshot to framebuffer (playfield, side panel, overlays)
//! - [`renderer`]: crossterm backend with full and diff redraws
//!
//! Each field cell is drawn two columns wide so blocks look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{kind_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
