//! Scripted move sequences.

use clap::ValueEnum;
use derive_more::{Display, Error};
use derive_new::new;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// One move as sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ScriptedMove {
    /// Player id.
    pub player: i64,
    /// Row index.
    pub row: i64,
    /// Column index.
    pub col: i64,
}

impl From<(i64, i64, i64)> for ScriptedMove {
    fn from((player, row, col): (i64, i64, i64)) -> Self {
        Self::new(player, row, col)
    }
}

/// Built-in games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Script {
    /// Player one completes the bottom row.
    #[default]
    WinOne,
    /// Player two completes the right column; player one then moves too late.
    WinTwo,
    /// The board fills without a line.
    Draw,
}

impl Script {
    /// Moves of this script, in order.
    pub fn moves(self) -> Vec<ScriptedMove> {
        let moves: &[(i64, i64, i64)] = match self {
            Script::WinOne => &[
                (1, 0, 0),
                (2, 1, 1),
                (1, 2, 2),
                (2, 0, 2),
                (1, 2, 0),
                (2, 1, 0),
                (1, 2, 1),
            ],
            Script::WinTwo => &[
                (1, 0, 0),
                (2, 0, 2),
                (1, 1, 1),
                (2, 1, 2),
                (1, 2, 0),
                (2, 2, 2),
                (1, 0, 1),
            ],
            Script::Draw => &[
                (1, 0, 0),
                (2, 0, 2),
                (1, 2, 0),
                (2, 1, 0),
                (1, 2, 2),
                (2, 1, 1),
                (1, 1, 2),
                (2, 2, 1),
                (1, 0, 1),
            ],
        };
        moves.iter().copied().map(ScriptedMove::from).collect()
    }
}

#[derive(Debug, Deserialize)]
struct MoveFile {
    moves: Vec<(i64, i64, i64)>,
}

/// Reads a TOML move file of the form `moves = [[1, 0, 0], [2, 1, 1]]`.
///
/// Values are passed to the server as written; it decides what is legal.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_moves(path: impl AsRef<Path>) -> Result<Vec<ScriptedMove>, ScriptError> {
    debug!("Loading move file");
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ScriptError::new(format!("Failed to read move file: {}", e)))?;

    let file: MoveFile = toml::from_str(&content)
        .map_err(|e| ScriptError::new(format!("Failed to parse move file: {}", e)))?;

    if file.moves.is_empty() {
        return Err(ScriptError::new("Move file has no moves".to_string()));
    }

    info!(count = file.moves.len(), "Move file loaded");
    Ok(file.moves.into_iter().map(ScriptedMove::from).collect())
}

/// Move script error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
