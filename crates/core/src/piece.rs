//! Piece module - the falling piece and its movement rules
//!
//! A piece is a kind, a rotation index into that kind's static mask table, and
//! the grid position of its 4x4 bounding box. Every move is tentative: the
//! piece applies the change, checks for collision and restores the old value
//! if needed, so callers never observe a half-applied move.

use tracing::trace;

use crate::grid::Grid;
use crate::shapes::{self, Mask};
use crate::types::{Cell, Direction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn position in its first rotation state
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y, 0)
    }

    /// Create a piece at an explicit position; `rotation` wraps
    pub fn at(kind: PieceKind, x: i8, y: i8, rotation: usize) -> Self {
        let rotation = rotation % shapes::rotations(kind).len();
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Current index into the kind's rotation table
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Number of rotation states for this kind
    pub fn rotation_count(&self) -> usize {
        shapes::rotations(self.kind).len()
    }

    /// Mask for the current rotation state
    pub fn mask(&self) -> &'static Mask {
        shapes::mask_for(self.kind, self.rotation)
    }

    /// Absolute (x, y) of every occupied cell, including cells above the field.
    ///
    /// Coordinates saturate at the `i8` range; a saturated cell is always
    /// outside the field.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        shapes::offset_cells(self.mask(), self.x, self.y)
    }

    /// Check if the piece overlaps a wall, the floor or a settled block.
    ///
    /// Cells above the top edge never collide, so a fresh piece can hang
    /// partly outside the field.
    pub fn collides_with(&self, grid: &Grid) -> bool {
        self.cells().any(|(x, y)| {
            x < 0
                || x >= BOARD_WIDTH as i8
                || y >= BOARD_HEIGHT as i8
                || (y >= 0 && grid.is_occupied(x, y))
        })
    }

    /// Move one column left or right. The position is left unchanged when
    /// the move would collide; returns whether the move stood.
    pub fn shift(&mut self, grid: &Grid, direction: Direction) -> bool {
        let previous = self.x;
        self.x = self.x.saturating_add(direction.dx());
        if self.x == previous || self.collides_with(grid) {
            self.x = previous;
            trace!(kind = ?self.kind, ?direction, "shift blocked");
            return false;
        }
        true
    }

    /// Step to the previous rotation state (wrapping to the last one).
    ///
    /// No kicks are attempted: a colliding rotation fails and the piece keeps
    /// its current state.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        let previous = self.rotation;
        self.rotation = match self.rotation {
            0 => self.rotation_count() - 1,
            n => n - 1,
        };
        if self.collides_with(grid) {
            self.rotation = previous;
            trace!(kind = ?self.kind, rotation = previous, "rotation blocked");
            return false;
        }
        true
    }

    /// Drop one row. Returns true while the piece is still falling.
    ///
    /// When the row below is blocked the piece stays where it is, is stamped
    /// into `grid`, and false is returned. The piece must not be used again
    /// after that.
    pub fn move_down(&mut self, grid: &mut Grid) -> bool {
        let previous = self.y;
        self.y = self.y.saturating_add(1);
        if self.y == previous || self.collides_with(grid) {
            self.y = previous;
            self.lock_into(grid);
            return false;
        }
        true
    }

    /// Stamp the piece's cells into the grid.
    ///
    /// Cells outside the field or on an occupied cell are skipped.
    pub(crate) fn lock_into(&self, grid: &mut Grid) {
        for (x, y) in self.cells() {
            if matches!(grid.get(x, y), Some(Cell::Empty)) {
                grid.set(x, y, Cell::Filled(self.kind));
            }
        }
    }
}
