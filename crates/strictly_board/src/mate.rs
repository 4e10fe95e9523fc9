//! Imminent-win ("mate") prediction.
//!
//! After a move by `mover`, the player about to move (`next`) is under
//! pressure on every line where `mover` holds two cells and the third is
//! free. Lines where `next` already holds two cells with a free third cancel
//! that pressure, since `next` can win first.
//!
//! Lines are walked in pairs: row `i` together with column `i`, then the two
//! diagonals. A pair contributes at most one threat and at most one
//! cancellation, and a pair containing a completed line contributes no
//! threat. The counters never influence the outcome.

use crate::rules::{LINES, line_score};
use crate::{Grid, Player};
use tracing::{debug, instrument};

/// Indices into [`LINES`]: (row i, column i) and (diagonal, anti-diagonal).
const LINE_PAIRS: [(usize, usize); 4] = [(0, 3), (1, 4), (2, 5), (6, 7)];

/// Per-player pressure counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MateCounters {
    one: i32,
    two: i32,
}

impl MateCounters {
    /// Counter for `player`.
    pub fn get(&self, player: Player) -> i32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// Sum of both counters.
    pub fn total(&self) -> i32 {
        self.one + self.two
    }

    /// True when the counters are worth reporting.
    pub fn is_pressing(&self) -> bool {
        self.total() > 0
    }

    fn adjust(&mut self, player: Player, delta: i32) {
        match player {
            Player::One => self.one += delta,
            Player::Two => self.two += delta,
        }
    }
}

/// Recomputes the counters for the grid left by `mover`'s move.
#[instrument(skip(grid))]
pub fn assess(grid: &Grid, mover: Player) -> MateCounters {
    let next = mover.opponent();
    let mut counters = MateCounters::default();

    for (a, b) in LINE_PAIRS {
        let pair = [LINES[a], LINES[b]];
        let mover_scores = pair.map(|line| line_score(grid, &line, mover));
        let next_scores = pair.map(|line| line_score(grid, &line, next));

        if mover_scores.contains(&3) {
            // Completed line: a win, not a threat.
        } else if mover_scores.contains(&2) {
            counters.adjust(next, 1);
        }

        if next_scores.contains(&2) {
            counters.adjust(next, -1);
        }
    }

    debug!(?counters, "Mate counters recomputed");
    counters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

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
    fn test_empty_grid_has_no_pressure() {
        let counters = assess(&Grid::default(), Player::One);
        assert_eq!(counters, MateCounters::default());
        assert!(!counters.is_pressing());
    }

    #[test]
    fn test_single_threat_presses_next() {
        let grid = grid_from([[1, 1, 0], [0, 2, 0], [0, 0, 0]]);
        let counters = assess(&grid, Player::One);
        assert_eq!(counters.get(Player::Two), 1);
        assert_eq!(counters.get(Player::One), 0);
        assert!(counters.is_pressing());
    }

    #[test]
    fn test_answering_threat_cancels() {
        let grid = grid_from([[1, 1, 0], [2, 2, 0], [0, 0, 0]]);
        let counters = assess(&grid, Player::Two);
        assert_eq!(counters.get(Player::One), 0);
        assert_eq!(counters.total(), 0);
    }

    #[test]
    fn test_row_and_column_of_same_index_count_once() {
        // Row 0 and column 0 both threaten, but they form one pair.
        let grid = grid_from([[1, 1, 0], [1, 2, 0], [0, 0, 2]]);
        let counters = assess(&grid, Player::One);
        assert_eq!(counters.get(Player::Two), 1);
    }

    #[test]
    fn test_threats_in_different_pairs_add_up() {
        // Row 0 (pair 0) and column 2 (pair 2).
        let grid = grid_from([[1, 1, 0], [2, 2, 1], [0, 2, 1]]);
        let counters = assess(&grid, Player::One);
        assert_eq!(counters.get(Player::Two), 2);
    }

    #[test]
    fn test_completed_line_is_not_a_threat() {
        let grid = grid_from([[1, 0, 2], [2, 2, 0], [1, 1, 1]]);
        let counters = assess(&grid, Player::One);
        // Row 1 is an open pair for player two; row 2 is a win, not a threat.
        assert_eq!(counters.get(Player::Two), -1);
        assert!(!counters.is_pressing());
    }
}
