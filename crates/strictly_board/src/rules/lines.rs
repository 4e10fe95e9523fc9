//! The eight winning lines and the signed line count.

use crate::{Grid, Player};

/// Three `(row, col)` coordinates forming a line.
pub type Line = [(usize, usize); 3];

/// Rows, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Sums the cells of `line` from `player`'s point of view.
///
/// Each owned cell counts `+1`, each opponent cell `-1`, each free cell `0`.
/// A score of `3` is a completed line; `2` means two owned cells and a free
/// one.
pub fn line_score(grid: &Grid, line: &Line, player: Player) -> i8 {
    line.iter()
        .map(|&(row, col)| grid[row][col].weight(player))
        .sum()
}
