//! Board state machine.

use crate::error::MoveError;
use crate::mate::{self, MateCounters};
use crate::rules;
use crate::types::{Cell, Grid, Outcome, Player};
use crate::view::BoardView;
use tracing::{debug, info, instrument};

/// A 3x3 game between two players.
///
/// The board is mutated only through [`Board::try_move`]. Every accepted move
/// flips the turn and recomputes the outcome (and the mate counters, when
/// enabled) from the whole grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    next: Player,
    outcome: Outcome,
    last_error: Option<MoveError>,
    mate: Option<MateCounters>,
}

impl Board {
    /// Creates an empty board without mate prediction.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::default(),
            next: Player::One,
            outcome: Outcome::InProgress,
            last_error: None,
            mate: None,
        }
    }

    /// Creates an empty board that tracks mate counters.
    #[instrument]
    pub fn with_mate_prediction() -> Self {
        Self {
            mate: Some(MateCounters::default()),
            ..Self::new()
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the cell at `(row, col)`, `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Returns the player expected to move.
    pub fn next(&self) -> Player {
        self.next
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns why the last attempted move was refused, if it was.
    pub fn last_error(&self) -> Option<MoveError> {
        self.last_error
    }

    /// Returns the mate counters, `None` when prediction is off.
    pub fn mate(&self) -> Option<&MateCounters> {
        self.mate.as_ref()
    }

    /// Attempts a move for `player` at `(row, col)`.
    ///
    /// Arguments are taken as received from the wire, so any integer is
    /// accepted and judged. `Ok(())` means the board changed.
    ///
    /// # Errors
    ///
    /// Checked in order, first failure wins:
    /// - [`MoveError::GameAlreadyTerminated`] once the game is won or drawn
    /// - [`MoveError::UnexpectedPlayer`] if `player` is not the one to move
    /// - [`MoveError::IllegalPosition`] if `row` or `col` is outside `0..=2`
    /// - [`MoveError::PositionTaken`] if the cell is occupied
    ///
    /// A refused move leaves the board unchanged apart from
    /// [`Board::last_error`].
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn try_move(&mut self, player: i64, row: i64, col: i64) -> Result<(), MoveError> {
        self.last_error = None;

        match self.validate(player, row, col) {
            Ok((mover, row, col)) => {
                self.apply(mover, row, col);
                Ok(())
            }
            Err(err) => {
                debug!(code = err.code(), error = %err, "Move rejected");
                self.last_error = Some(err);
                Err(err)
            }
        }
    }

    /// Serializable snapshot of the board.
    pub fn view(&self) -> BoardView {
        BoardView::from(self)
    }

    fn validate(&self, player: i64, row: i64, col: i64) -> Result<(Player, usize, usize), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameAlreadyTerminated);
        }

        let mover = Player::from_id(player)
            .filter(|&mover| mover == self.next)
            .ok_or(MoveError::UnexpectedPlayer)?;

        let (row, col) = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) if row < 3 && col < 3 => (row, col),
            _ => return Err(MoveError::IllegalPosition),
        };

        if self.grid[row][col] != Cell::Empty {
            return Err(MoveError::PositionTaken);
        }

        Ok((mover, row, col))
    }

    fn apply(&mut self, mover: Player, row: usize, col: usize) {
        self.grid[row][col] = Cell::Occupied(mover);
        self.next = mover.opponent();
        self.outcome = rules::outcome(&self.grid);

        if let Some(counters) = self.mate.as_mut() {
            *counters = mate::assess(&self.grid, mover);
        }

        info!(
            player = %mover,
            row,
            col,
            outcome = ?self.outcome,
            "Move applied"
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
