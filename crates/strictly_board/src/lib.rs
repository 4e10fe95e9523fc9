//! Strictly Board - the 3x3 game state machine.
//!
//! Pure game logic with no I/O: move validation, turn enforcement, win and
//! draw detection, and an optional imminent-win ("mate") heuristic.
//!
//! # Example
//!
//! ```
//! use strictly_board::{Board, MoveError, Outcome, Player};
//!
//! let mut board = Board::new();
//! board.try_move(1, 1, 1).unwrap();
//! assert_eq!(board.next(), Player::Two);
//!
//! // Player one cannot move twice in a row.
//! assert_eq!(board.try_move(1, 0, 0), Err(MoveError::UnexpectedPlayer));
//! assert_eq!(board.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod mate;
pub mod rules;
mod types;
mod view;

pub use board::Board;
pub use error::MoveError;
pub use mate::MateCounters;
pub use types::{Cell, Grid, Outcome, Player};
pub use view::{BoardView, MateView};
