//! Piece tests - shifting, rotation, gravity and locking

use blockfall::core::{rotations, Grid, Piece};
use blockfall::types::{Cell, Direction, PieceKind, SPAWN_X, SPAWN_Y};

#[test]
fn test_piece_spawns_at_spawn_position() {
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.cells().count(), 4);
        assert!(!piece.collides_with(&Grid::new()));
    }
}

#[test]
fn test_rotation_counts_per_kind() {
    assert_eq!(rotations(PieceKind::O).len(), 1);
    assert_eq!(rotations(PieceKind::I).len(), 2);
    assert_eq!(rotations(PieceKind::S).len(), 2);
    assert_eq!(rotations(PieceKind::Z).len(), 2);
    assert_eq!(rotations(PieceKind::L).len(), 4);
    assert_eq!(rotations(PieceKind::J).len(), 4);
    assert_eq!(rotations(PieceKind::T).len(), 4);
}

#[test]
fn test_shift_moves_one_column_until_the_wall() {
    let grid = Grid::new();
    // Horizontal I occupies columns x..x+3 of its box row 1.
    let mut piece = Piece::new(PieceKind::I);

    for expected in (0..SPAWN_X).rev() {
        assert!(piece.shift(&grid, Direction::Left));
        assert_eq!(piece.x, expected);
    }

    let before = piece;
    assert!(!piece.shift(&grid, Direction::Left));
    assert_eq!(piece, before);

    assert!(piece.shift(&grid, Direction::Right));
    assert_eq!(piece.x, 1);
}

#[test]
fn test_shift_blocked_by_settled_block() {
    let mut grid = Grid::new();
    let mut piece = Piece::at(PieceKind::O, 3, 10, 0);
    // O occupies columns 4 and 5.
    grid.set(6, 11, Cell::Filled(PieceKind::T));

    let before = piece;
    assert!(!piece.shift(&grid, Direction::Right));
    assert_eq!(piece, before);
    assert!(piece.shift(&grid, Direction::Left));
    assert_eq!(piece.x, 2);
}

#[test]
fn test_rotating_state_count_times_is_identity() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        let mut piece = Piece::at(kind, 3, 8, 0);
        let start = piece;
        for _ in 0..piece.rotation_count() {
            assert!(piece.rotate(&grid));
        }
        assert_eq!(piece, start, "{:?}", kind);
    }
}

#[test]
fn test_rotation_steps_backwards() {
    let grid = Grid::new();
    let mut piece = Piece::at(PieceKind::T, 3, 8, 0);
    assert!(piece.rotate(&grid));
    assert_eq!(piece.rotation(), 3);
    assert!(piece.rotate(&grid));
    assert_eq!(piece.rotation(), 2);
}

#[test]
fn test_rotation_blocked_keeps_state() {
    let mut grid = Grid::new();
    // Horizontal I at row 11; vertical state needs column 5 rows 10..13.
    let mut piece = Piece::at(PieceKind::I, 3, 10, 0);
    grid.set(5, 12, Cell::Filled(PieceKind::O));

    let before = piece;
    assert!(!piece.rotate(&grid));
    assert_eq!(piece, before);
}

#[test]
fn test_move_down_stamps_at_pre_collision_position() {
    let mut grid = Grid::new();
    let mut piece = Piece::at(PieceKind::O, 3, 10, 0);
    // O covers rows 11 and 12; block the cell under column 4.
    grid.set(4, 13, Cell::Filled(PieceKind::I));

    assert!(!piece.move_down(&mut grid));
    assert_eq!(piece.y, 10);
    for (x, y) in [(4, 11), (5, 11), (4, 12), (5, 12)] {
        assert_eq!(grid.get(x, y), Some(Cell::Filled(PieceKind::O)));
    }
    assert_eq!(grid.filled_count(), 5);
}

#[test]
fn test_move_down_falls_to_the_floor() {
    let mut grid = Grid::new();
    let mut piece = Piece::new(PieceKind::I);

    let mut steps = 0;
    while piece.move_down(&mut grid) {
        steps += 1;
        assert!(steps < 40);
    }
    // Box row 1 holds the cells, so the box stops at y = 18.
    assert_eq!(piece.y, 18);
    assert!(grid.row(19).iter().skip(3).take(4).all(Cell::is_filled));
}

#[test]
fn test_cells_above_the_top_never_collide() {
    let grid = Grid::new();
    let piece = Piece::at(PieceKind::I, 3, -5, 1);
    assert!(piece.cells().all(|(_, y)| y < 0));
    assert!(!piece.collides_with(&grid));
}

/// `shift` either keeps the piece where it was or moves it exactly one column.
fn assert_shift_is_exact(piece: Piece, grid: &Grid, direction: Direction) {
    let mut moved = piece;
    let ok = moved.shift(grid, direction);
    if ok {
        assert_eq!(moved.x, piece.x + direction.dx(), "{:?}", piece);
        assert_eq!((moved.y, moved.rotation()), (piece.y, piece.rotation()));
        assert!(!moved.collides_with(grid));
    } else {
        assert_eq!(moved, piece);
    }
}

#[test]
fn test_shift_is_exact_for_every_kind_and_state() {
    let empty = Grid::new();
    let mut walled = Grid::new();
    for y in 0..20 {
        walled.set(4, y, Cell::Filled(PieceKind::J));
    }

    for kind in PieceKind::ALL {
        for rotation in 0..rotations(kind).len() {
            for x in -3..10 {
                for y in [-1, 0, 9, 17] {
                    for grid in [&empty, &walled] {
                        let piece = Piece::at(kind, x, y, rotation);
                        if piece.collides_with(grid) {
                            continue;
                        }
                        assert_shift_is_exact(piece, grid, Direction::Left);
                        assert_shift_is_exact(piece, grid, Direction::Right);
                    }
                }
            }
        }
    }
}

#[test]
fn test_shift_stops_at_both_walls_for_every_kind_and_state() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        for rotation in 0..rotations(kind).len() {
            for direction in [Direction::Left, Direction::Right] {
                let mut piece = Piece::at(kind, 3, 8, rotation);
                let mut steps = 0;
                while piece.shift(&grid, direction) {
                    steps += 1;
                    assert!(steps < 10, "{:?} never hit the wall", kind);
                }
                let (min_x, max_x) = piece
                    .cells()
                    .fold((i8::MAX, i8::MIN), |(lo, hi), (x, _)| (lo.min(x), hi.max(x)));
                match direction {
                    Direction::Left => assert_eq!(min_x, 0, "{:?}/{}", kind, rotation),
                    Direction::Right => assert_eq!(max_x, 9, "{:?}/{}", kind, rotation),
                }
            }
        }
    }
}

#[test]
fn test_moves_near_the_i8_limits_do_not_panic() {
    let mut grid = Grid::new();

    let mut piece = Piece::at(PieceKind::I, 0, 126, 1);
    assert!(!piece.move_down(&mut grid));
    assert_eq!(grid.filled_count(), 0);

    for kind in PieceKind::ALL {
        let mut high = Piece::at(kind, i8::MAX, i8::MAX, 0);
        assert!(high.collides_with(&grid));
        assert!(!high.shift(&grid, Direction::Right));
        assert!(!high.rotate(&grid));
        assert!(!high.move_down(&mut grid));

        let mut low = Piece::at(kind, i8::MIN, i8::MIN, 0);
        assert!(!low.shift(&grid, Direction::Left));
        assert_eq!(low.x, i8::MIN);
    }
    assert_eq!(grid.filled_count(), 0);
}
