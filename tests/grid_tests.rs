//! Grid tests - cell lookup, locking and row collapse

use tui_polyomino::core::Grid;
use tui_polyomino::types::{CellState, Rgb};

const GRAY: Rgb = Rgb::new(128, 128, 128);

fn lock_row_except(grid: &mut Grid, y: i32, skip: &[i32]) {
    for x in 0..grid.width() {
        if !skip.contains(&x) {
            grid.lock_cell(x, y, GRAY);
        }
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(10, 20, 1.0);
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);
    assert_eq!(grid.len(), 200);
    assert!(grid.is_empty());
    for cell in grid.cells() {
        assert_eq!(cell.state, CellState::Empty);
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(10, 20, 1.0);
    assert!(grid.get(-1, 0).is_none());
    assert!(grid.get(0, -1).is_none());
    assert!(grid.get(10, 0).is_none());
    assert!(grid.get(0, 20).is_none());
    assert!(!grid.is_locked(-1, 5));
}

#[test]
fn test_grid_lock_cell() {
    let mut grid = Grid::new(10, 20, 1.0);
    assert!(grid.lock_cell(5, 10, GRAY));
    assert!(grid.is_locked(5, 10));
    assert_eq!(grid.get(5, 10).unwrap().color, GRAY);
    assert!(!grid.lock_cell(10, 10, GRAY));
    assert!(!grid.lock_cell(0, -1, GRAY));
}

#[test]
fn test_row_full_detection() {
    let mut grid = Grid::new(10, 20, 1.0);
    lock_row_except(&mut grid, 19, &[4]);
    assert!(!grid.is_row_full(19));
    grid.lock_cell(4, 19, GRAY);
    assert!(grid.is_row_full(19));
    assert!(!grid.is_row_full(20));
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut grid = Grid::new(10, 20, 1.0);
    lock_row_except(&mut grid, 19, &[]);
    grid.lock_cell(2, 18, Rgb::new(1, 2, 3));
    grid.lock_cell(7, 0, GRAY);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 1);

    assert!(grid.is_locked(2, 19));
    assert_eq!(grid.get(2, 19).unwrap().color, Rgb::new(1, 2, 3));
    assert!(grid.is_locked(7, 1));
    // The vacated top row is empty.
    assert!(grid.row(0).iter().all(|c| c.state == CellState::Empty));
    assert_eq!(
        grid.cells().iter().filter(|c| c.state == CellState::Locked).count(),
        2
    );
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut grid = Grid::new(5, 6, 1.0);
    lock_row_except(&mut grid, 5, &[]);
    lock_row_except(&mut grid, 4, &[0]);
    lock_row_except(&mut grid, 3, &[]);
    lock_row_except(&mut grid, 2, &[1, 2]);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[5, 3]);

    // Row 4 -> 5, row 2 -> 4, rows 0..4 are empty.
    assert!(!grid.is_locked(0, 5));
    assert!(grid.is_locked(1, 5));
    assert!(grid.is_locked(0, 4));
    assert!(!grid.is_locked(1, 4));
    assert!(!grid.is_locked(2, 4));
    for y in 0..4 {
        assert!(!grid.is_row_full(y));
        assert!(grid.row(y).iter().all(|c| c.state == CellState::Empty));
    }
}

#[test]
fn test_clear_whole_board() {
    let mut grid = Grid::new(3, 3, 1.0);
    for y in 0..3 {
        lock_row_except(&mut grid, y, &[]);
    }
    assert_eq!(grid.clear_full_rows().len(), 3);
    assert!(grid.is_empty());
}

#[test]
fn test_clear_nothing_when_no_full_rows() {
    let mut grid = Grid::new(4, 4, 1.0);
    lock_row_except(&mut grid, 3, &[3]);
    let before = grid.clone();
    assert!(grid.clear_full_rows().is_empty());
    assert_eq!(grid, before);
}

#[test]
#[should_panic(expected = "must not exceed")]
fn test_oversized_grid_panics() {
    Grid::new(10, 101, 1.0);
}
