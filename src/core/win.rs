//! Five-in-a-row detection.

use crate::core::board::Board;
use crate::core::common::{Cell, Color};
use crate::core::config::WIN_LENGTH;

/// Horizontal, vertical and the two diagonals. Each is scanned both ways.
pub const DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Number of consecutive `color` stones from `cell` (exclusive) along `(dx, dz)`.
fn count_direction(board: &Board, cell: Cell, color: Color, dx: i8, dz: i8) -> usize {
    let mut count = 0;
    let mut next = cell.step(dx, dz);
    while let Some(c) = next {
        if board.get(c) != Some(color) {
            break;
        }
        count += 1;
        next = c.step(dx, dz);
    }
    count
}

/// Length of the `color` line through `cell` along `dir`, counting `cell`
/// itself once whether or not a stone stands on it yet.
pub fn run_length(board: &Board, cell: Cell, color: Color, (dx, dz): (i8, i8)) -> usize {
    1 + count_direction(board, cell, color, dx, dz) + count_direction(board, cell, color, -dx, -dz)
}

/// Longest `color` line through `cell` over all four directions.
pub fn longest_run(board: &Board, cell: Cell, color: Color) -> usize {
    DIRECTIONS
        .iter()
        .map(|&dir| run_length(board, cell, color, dir))
        .max()
        .unwrap_or(1)
}

/// Does the `color` stone just placed at `cell` complete a winning line?
pub fn check_win(board: &Board, cell: Cell, color: Color) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| run_length(board, cell, color, dir) >= WIN_LENGTH)
}
