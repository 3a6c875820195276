//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so the game core, the
//! key mapping and the terminal view all agree on the same vocabulary.
//!
//! # Playfield
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: a new piece's 4x4 box starts at (3, -1), one row above the field
//!
//! # Timing
//!
//! The runner advances in fixed frames of [`FRAME_MS`]. Gravity moves the active
//! piece once every [`GRAVITY_FRAMES`] frames; holding the drop key makes the
//! next frame a gravity frame.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let cell = Cell::Filled(PieceKind::T);
//! assert_eq!(cell.code(), 6);
//! assert_eq!(PieceKind::from_code(cell.code()), Some(PieceKind::T));
//!
//! assert_ne!(Command::RotateCw, Command::SoftDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the top-left corner of a freshly spawned piece
pub const SPAWN_X: i8 = 3;

/// Row of the top-left corner of a freshly spawned piece (above the field)
pub const SPAWN_Y: i8 = -1;

/// Points awarded per cleared line
pub const LINE_CLEAR_BONUS: u32 = 10;

/// Runner frame length in milliseconds
pub const FRAME_MS: u32 = 50;

/// Frames per gravity step (one step every 200ms)
pub const GRAVITY_FRAMES: u8 = 4;

/// The seven piece kinds
///
/// Each kind has a fixed colour in the terminal view:
/// - **O**: Yellow, 2x2 square
/// - **I**: Cyan, straight line
/// - **S**: Green
/// - **Z**: Red (mirror of S)
/// - **L**: Orange
/// - **J**: Blue (mirror of L)
/// - **T**: Violet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    S,
    Z,
    L,
    J,
    T,
}

impl PieceKind {
    /// All kinds, in spawn-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Numeric code used in snapshots (1-7, never 0)
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// A cell on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Filled(kind) => Some(*kind),
        }
    }

    /// Snapshot code: 0 for empty, otherwise [`PieceKind::code`]
    pub fn code(&self) -> u8 {
        self.kind().map_or(0, |k| k.code())
    }
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta (-1 or +1)
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Commands a player (or any other driver) can send to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece to its next rotation state
    RotateCw,
    /// Apply one gravity step immediately
    SoftDrop,
    /// Flip between running and paused
    TogglePause,
}

/// Lifecycle state of a game session
///
/// `Running` and `Paused` toggle on [`Command::TogglePause`]; `GameOver` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Running,
    Paused,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_round_trip_and_skip_zero() {
        for kind in PieceKind::ALL {
            assert_ne!(kind.code(), 0);
            assert_eq!(PieceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(PieceKind::from_code(0), None);
        assert_eq!(PieceKind::from_code(8), None);
    }

    #[test]
    fn empty_cell_has_code_zero() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(Cell::Filled(PieceKind::Z).is_filled());
        assert_eq!(Cell::Filled(PieceKind::L).kind(), Some(PieceKind::L));
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Left.dx(), -1);
        assert_eq!(Direction::Right.dx(), 1);
    }

    #[test]
    fn timing_constants() {
        assert_eq!(FRAME_MS, 50);
        assert_eq!(GRAVITY_FRAMES, 4);
        assert_eq!(LINE_CLEAR_BONUS, 10);
        assert_eq!((SPAWN_X, SPAWN_Y), (3, -1));
    }
}
