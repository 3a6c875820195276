//! Grid module - the playfield of settled blocks
//!
//! The grid is a 10x20 field where each cell is empty or holds the kind of the
//! piece that settled there. Storage is a flat row-major array, so line clears
//! are plain `copy_within` calls and nothing on the hot path allocates.
//! Coordinates: (x, y) with x in 0..10 (left to right) and y in 0..20 (top to
//! bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the grid
const GRID_SIZE: usize = WIDTH * HEIGHT;

/// Row indices cleared by a single sweep
pub type ClearedRows = ArrayVec<u8, HEIGHT>;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::in_bounds(x, y) {
            Some((y as usize) * WIDTH + (x as usize))
        } else {
            None
        }
    }

    /// Whether (x, y) lies inside the field
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (x, y), or `None` outside the field
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Inside the field and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled(_)))
    }

    /// Check if every column of row `y` is filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(Cell::is_filled)
    }

    /// Empty row `y` and drop every cell above it by exactly one row.
    ///
    /// Each column keeps its stacking order; row 0 ends up empty.
    pub fn clear_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }

        self.row_mut(y).fill(Cell::Empty);

        // Moving whole rows moves every column by one at once.
        for row in (1..=y).rev() {
            let src = (row - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, row * WIDTH);
        }
        self.row_mut(0).fill(Cell::Empty);
    }

    /// Clear every full row, scanning top to bottom.
    ///
    /// Rows above a cleared row shift down, rows below it are untouched, so a
    /// single top-down pass sees every full row exactly once. Returns the
    /// cleared row indices in scan order.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in 0..HEIGHT {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y as u8);
            }
        }
        cleared
    }

    /// Clear every full row and return how many were cleared
    pub fn sweep_and_clear(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Cells of row `y` (panics if `y` is outside the field)
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * WIDTH;
        &mut self.cells[start..start + WIDTH]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Copy snapshot codes (0 = empty) into `out` without allocating
    pub fn write_codes(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.code();
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
