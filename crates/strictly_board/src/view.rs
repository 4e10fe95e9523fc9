//! Wire representation of a board.

use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// JSON shape of a board as sent to clients.
///
/// `board` and `next` are always present. `err`/`msg` appear only after a
/// refused move, `winner` only once the game is over (`-1` for a draw), and
/// `mate` only when prediction is on and the counters sum above zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Rows of cells: `0` empty, `1` or `2` for the owner.
    pub board: [[u8; 3]; 3],
    /// Id of the player expected to move.
    pub next: u8,
    /// Code of the last refused move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<u8>,
    /// Message of the last refused move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Winner id, or `-1` for a draw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<i8>,
    /// Mate counters keyed by player id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mate: Option<MateView>,
}

/// Mate counters keyed `"1"` and `"2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MateView {
    /// Counter of player one.
    #[serde(rename = "1")]
    pub one: i32,
    /// Counter of player two.
    #[serde(rename = "2")]
    pub two: i32,
}

impl BoardView {
    /// True once `winner` is reported.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The winning player, `None` for a draw or an unfinished game.
    pub fn winning_player(&self) -> Option<Player> {
        self.winner.and_then(|id| Player::from_id(i64::from(id)))
    }
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        let error = board.last_error();
        let grid = *board.grid();

        Self {
            board: grid.map(|row| row.map(|cell| cell.id())),
            next: board.next().id(),
            err: error.map(|e| e.code()),
            msg: error.map(|e| e.to_string()),
            winner: board.outcome().winner_id(),
            mate: board
                .mate()
                .filter(|counters| counters.is_pressing())
                .map(|counters| MateView {
                    one: counters.get(Player::One),
                    two: counters.get(Player::Two),
                }),
        }
    }
}
