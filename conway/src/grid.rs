// grid.rs - Grid configuration and coordinate helpers for Conway's Game of Life

use std::time::Duration;

use itertools::Itertools;

// Compile-time configuration
pub const GRID_ROWS: usize = 20;                                  // Rows of the playing area
pub const GRID_COLS: usize = 20;                                  // Columns of the playing area
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);  // Time between generations

/// Offsets of the 8 cells surrounding a cell.
pub const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Every `(row, col)` of a `rows x cols` grid in row-major order.
pub fn positions(rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..rows).cartesian_product(0..cols)
}

/// Moves `(row, col)` by `(dr, dc)`, or returns `None` if that leaves a `rows x cols` grid.
pub fn offset(
    (row, col): (usize, usize),
    (dr, dc): (isize, isize),
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(dr).filter(|&r| r < rows)?;
    let col = col.checked_add_signed(dc).filter(|&c| c < cols)?;
    Some((row, col))
}
