use crate::piece::Piece;
use crate::shapes;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Grid of snapshot codes (0 = empty, see `PieceKind::code`)
pub type CodeGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute (x, y) of every occupied cell, including cells above the field
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        shapes::offset_cells(shapes::mask_for(self.kind, self.rotation), self.x, self.y)
    }
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of everything a renderer needs after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub grid: CodeGrid,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            paused: false,
            game_over: false,
        }
    }
}
