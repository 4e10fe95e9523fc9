//! Win detection logic.

use super::lines::{LINES, line_score};
use crate::{Grid, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if there is a winner on the grid.
///
/// Both players are checked on every call, so the answer depends on the grid
/// alone and not on who moved last.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<Player> {
    Player::iter().find(|&player| {
        LINES
            .iter()
            .any(|line| line_score(grid, line, player) == 3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn fill(grid: &mut Grid, cells: &[(usize, usize)], player: Player) {
        for &(row, col) in cells {
            grid[row][col] = Cell::Occupied(player);
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Grid::default()), None);
    }

    #[test]
    fn test_winner_every_line() {
        for player in Player::iter() {
            for line in &LINES {
                let mut grid = Grid::default();
                fill(&mut grid, line, player);
                assert_eq!(check_winner(&grid), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut grid = Grid::default();
        fill(&mut grid, &[(0, 0), (0, 1)], Player::One);
        fill(&mut grid, &[(0, 2)], Player::Two);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_winner_found_for_either_player() {
        let mut grid = Grid::default();
        fill(&mut grid, &[(0, 2), (1, 2), (2, 2)], Player::Two);
        fill(&mut grid, &[(0, 0), (1, 1)], Player::One);
        assert_eq!(check_winner(&grid), Some(Player::Two));
    }
}
