//! Draw detection and outcome assembly.

use super::win::check_winner;
use crate::{Cell, Grid, Outcome};
use tracing::instrument;

/// Checks if every cell holds a marker.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().flatten().all(|cell| *cell != Cell::Empty)
}

/// Derives the outcome of a grid from scratch.
///
/// A completed line wins; otherwise a full grid is a draw.
#[instrument(skip(grid))]
pub fn outcome(grid: &Grid) -> Outcome {
    if let Some(winner) = check_winner(grid) {
        Outcome::Winner(winner)
    } else if is_full(grid) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn grid_from(rows: [[u8; 3]; 3]) -> Grid {
        rows.map(|row| {
            row.map(|id| match id {
                1 => Cell::Occupied(Player::One),
                2 => Cell::Occupied(Player::Two),
                _ => Cell::Empty,
            })
        })
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Grid::default()));
        assert_eq!(outcome(&Grid::default()), Outcome::InProgress);
    }

    #[test]
    fn test_partial_board_not_full() {
        let grid = grid_from([[1, 0, 0], [0, 2, 0], [0, 0, 0]]);
        assert!(!is_full(&grid));
    }

    #[test]
    fn test_draw_detection() {
        let grid = grid_from([[1, 1, 2], [2, 2, 1], [1, 2, 1]]);
        assert!(is_full(&grid));
        assert_eq!(outcome(&grid), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let grid = grid_from([[1, 1, 1], [2, 2, 1], [1, 2, 2]]);
        assert!(is_full(&grid));
        assert_eq!(outcome(&grid), Outcome::Winner(Player::One));
    }
}
