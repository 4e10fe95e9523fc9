//! Text rendering of boards for the terminal.

use derive_more::Display;
use strictly_board::BoardView;

/// Draws the grid: `O` for player one, `X` for player two.
///
/// ```text
/// O| |X
/// -----
/// X|X|
/// -----
/// O|O|O
/// ```
pub fn render_board(board: &[[u8; 3]; 3]) -> String {
    board
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| symbol(cell).to_string())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n-----\n")
}

fn symbol(cell: u8) -> char {
    match cell {
        0 => ' ',
        1 => 'O',
        2 => 'X',
        _ => '?',
    }
}

/// One-line summary printed under each board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Verdict {
    /// The move was refused.
    #[display("Err: {} - {}", code, msg)]
    Refused {
        /// Error code.
        code: u8,
        /// Error message.
        msg: String,
    },
    /// A player completed a line.
    #[display("THE WINNER IS PLAYER {}", _0)]
    Winner(i8),
    /// The board is full without a line.
    #[display("GAME IS A DRAW")]
    Draw,
    /// Play goes on.
    #[display("GAME CAN CONTINUE")]
    Continue,
}

impl From<&BoardView> for Verdict {
    fn from(view: &BoardView) -> Self {
        if let Some(code) = view.err.filter(|&code| code > 0) {
            return Verdict::Refused {
                code,
                msg: view.msg.clone().unwrap_or_default(),
            };
        }
        match view.winner {
            Some(-1) => Verdict::Draw,
            Some(player) => Verdict::Winner(player),
            None => Verdict::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_board(&[[0; 3]; 3]), " | | \n-----\n | | \n-----\n | | ");
    }

    #[test]
    fn test_render_symbols() {
        let board = [[1, 0, 2], [2, 2, 0], [1, 1, 1]];
        assert_eq!(render_board(&board), "O| |X\n-----\nX|X| \n-----\nO|O|O");
    }
}
