//! Game rules for the 3x3 board.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are kept apart from
//! the board so the state machine can recompute everything from scratch
//! after each move.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_full, outcome};
pub use lines::{LINES, Line, line_score};
pub use win::check_winner;
