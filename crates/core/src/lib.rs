//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else: no drawing, no
//! input devices, no sound, no timers. Callers own the clock and the screen;
//! they call into a [`Session`] and read back a [`SessionSnapshot`].
//!
//! # Module Structure
//!
//! - [`shapes`]: static 4x4 rotation tables for the seven kinds
//! - [`piece`]: the falling piece with collision, move, rotate and drop
//! - [`grid`]: 10x20 playfield with full-row detection and compaction
//! - [`session`]: gravity, landing, line clears, scoring, spawning, game over
//! - [`rng`]: seeded uniform choice of the next kind
//! - [`snapshot`]: copyable view of a session for renderers
//!
//! # Game Rules
//!
//! - **Spawn**: new pieces appear with their 4x4 box at (3, -1); a spawn that
//!   overlaps the stack ends the game
//! - **Rotation**: steps backwards through the kind's table, no wall kicks
//! - **Landing**: a piece locks as soon as gravity cannot move it down
//! - **Scoring**: 10 points per cleared line
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::Command;
//!
//! let mut session = Session::new(12345);
//! session.on_tick(); // spawns the first piece
//!
//! session.on_command(Command::MoveRight);
//! session.on_command(Command::RotateCw);
//! session.on_tick();
//!
//! assert!(session.active_piece().is_some());
//! assert_eq!(session.score(), 0);
//! ```

pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use piece::Piece;
pub use rng::PieceRng;
pub use session::{LockEvent, Session};
pub use shapes::{rotations, Mask};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
