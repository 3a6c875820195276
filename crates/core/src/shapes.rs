//! Shapes module - static rotation tables for the seven piece kinds
//!
//! Every kind owns an ordered list of 4x4 occupancy masks, one per rotation
//! state. Rotating a piece walks *backwards* through this list. The tables are
//! `'static` and shared by every piece; nothing copies them.

use crate::types::PieceKind;

/// 4x4 occupancy mask, indexed `[row][column]`
pub type Mask = [[bool; 4]; 4];

/// Build a mask from four 4-bit rows; the high bit is column 0.
const fn mask(rows: [u8; 4]) -> Mask {
    let mut out = [[false; 4]; 4];
    let mut row = 0;
    while row < 4 {
        let mut col = 0;
        while col < 4 {
            out[row][col] = rows[row] & (0b1000 >> col) != 0;
            col += 1;
        }
        row += 1;
    }
    out
}

static O_STATES: [Mask; 1] = [mask([0b0000, 0b0110, 0b0110, 0b0000])];

static I_STATES: [Mask; 2] = [
    // horizontal
    mask([0b0000, 0b1111, 0b0000, 0b0000]),
    // vertical
    mask([0b0010, 0b0010, 0b0010, 0b0010]),
];

static S_STATES: [Mask; 2] = [
    mask([0b0000, 0b0011, 0b0110, 0b0000]),
    mask([0b0010, 0b0011, 0b0001, 0b0000]),
];

static Z_STATES: [Mask; 2] = [
    mask([0b0000, 0b0110, 0b0011, 0b0000]),
    mask([0b0001, 0b0011, 0b0010, 0b0000]),
];

static L_STATES: [Mask; 4] = [
    mask([0b0000, 0b0111, 0b0100, 0b0000]),
    mask([0b0010, 0b0010, 0b0011, 0b0000]),
    mask([0b0001, 0b0111, 0b0000, 0b0000]),
    mask([0b0110, 0b0010, 0b0010, 0b0000]),
];

static J_STATES: [Mask; 4] = [
    mask([0b0000, 0b0111, 0b0001, 0b0000]),
    mask([0b0011, 0b0010, 0b0010, 0b0000]),
    mask([0b0100, 0b0111, 0b0000, 0b0000]),
    mask([0b0010, 0b0010, 0b0110, 0b0000]),
];

static T_STATES: [Mask; 4] = [
    mask([0b0000, 0b0111, 0b0010, 0b0000]),
    mask([0b0010, 0b0011, 0b0010, 0b0000]),
    mask([0b0010, 0b0111, 0b0000, 0b0000]),
    mask([0b0010, 0b0110, 0b0010, 0b0000]),
];

/// Rotation states for a piece kind, in table order
pub fn rotations(kind: PieceKind) -> &'static [Mask] {
    match kind {
        PieceKind::O => &O_STATES,
        PieceKind::I => &I_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::T => &T_STATES,
    }
}

/// Mask for `kind` at `index`, wrapping the index modulo the state count
pub fn mask_for(kind: PieceKind, index: usize) -> &'static Mask {
    let states = rotations(kind);
    &states[index % states.len()]
}

/// Occupied `(column, row)` offsets of a mask, row by row
pub fn occupied(mask: &Mask) -> impl Iterator<Item = (i8, i8)> + '_ {
    mask.iter().enumerate().flat_map(|(row, cols)| {
        cols.iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(col, _)| (col as i8, row as i8))
    })
}

/// Absolute cells of a mask whose box sits at `(x, y)`, saturating at the
/// `i8` range
pub fn offset_cells(mask: &Mask, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
    occupied(mask).map(move |(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
}
