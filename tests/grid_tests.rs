//! Grid tests - row detection, clearing and sweeps

use blockfall::core::Grid;
use blockfall::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(grid: &mut Grid, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        grid.set(x, y, Cell::Filled(kind));
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), BOARD_WIDTH);
    assert_eq!(grid.height(), BOARD_HEIGHT);
    assert_eq!(grid.filled_count(), 0);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, BOARD_HEIGHT as i8), None);
    assert!(!grid.set(0, BOARD_HEIGHT as i8, Cell::Filled(PieceKind::I)));
    assert!(!grid.is_occupied(-1, 5));
}

#[test]
fn test_sweep_on_empty_grid_is_a_no_op() {
    let mut grid = Grid::new();
    assert_eq!(grid.sweep_and_clear(), 0);
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_filling_the_gap_clears_exactly_that_row() {
    let mut grid = Grid::new();
    for x in 0..BOARD_WIDTH as i8 {
        if x != 3 {
            grid.set(x, 5, Cell::Filled(PieceKind::J));
        }
    }
    grid.set(0, 4, Cell::Filled(PieceKind::S));
    grid.set(7, 2, Cell::Filled(PieceKind::Z));
    grid.set(9, 12, Cell::Filled(PieceKind::T));

    assert!(!grid.is_row_full(5));
    assert_eq!(grid.sweep_and_clear(), 0);

    grid.set(3, 5, Cell::Filled(PieceKind::L));
    assert!(grid.is_row_full(5));
    assert_eq!(grid.sweep_and_clear(), 1);

    // Everything above row 5 moved down by one; below it nothing moved.
    assert_eq!(grid.get(0, 5), Some(Cell::Filled(PieceKind::S)));
    assert_eq!(grid.get(7, 3), Some(Cell::Filled(PieceKind::Z)));
    assert_eq!(grid.get(9, 12), Some(Cell::Filled(PieceKind::T)));
    assert_eq!(grid.filled_count(), 3);
    assert!(grid.row(0).iter().all(Cell::is_empty));
}

#[test]
fn test_two_full_rows_clear_in_one_sweep() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 19, PieceKind::I);
    fill_row(&mut grid, 17, PieceKind::O);
    grid.set(2, 18, Cell::Filled(PieceKind::T));
    grid.set(4, 16, Cell::Filled(PieceKind::S));

    assert_eq!(grid.sweep_and_clear(), 2);

    assert_eq!(grid.get(2, 19), Some(Cell::Filled(PieceKind::T)));
    assert_eq!(grid.get(4, 18), Some(Cell::Filled(PieceKind::S)));
    assert_eq!(grid.filled_count(), 2);
}

#[test]
fn test_clear_full_rows_reports_indices() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 10, PieceKind::L);
    fill_row(&mut grid, 11, PieceKind::L);
    fill_row(&mut grid, 19, PieceKind::L);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[10, 11, 19]);
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_write_codes_matches_kind_codes() {
    let mut grid = Grid::new();
    grid.set(0, 19, Cell::Filled(PieceKind::I));
    grid.set(9, 0, Cell::Filled(PieceKind::Z));

    let mut codes = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    grid.write_codes(&mut codes);
    assert_eq!(codes[19][0], 1);
    assert_eq!(codes[0][9], 7);
    assert_eq!(codes.iter().flatten().filter(|&&c| c != 0).count(), 2);
}
