//! Move rejection reasons.

/// Why a move was refused.
///
/// Rejections are ordinary outcomes of play, not faults: the board is left
/// untouched and the caller may retry with corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game reached a win or a draw.
    #[display("Game already terminated")]
    GameAlreadyTerminated,

    /// The mover is not the player whose turn it is.
    #[display("Unexpected player")]
    UnexpectedPlayer,

    /// Row or column outside `0..=2`.
    #[display("Illegal move")]
    IllegalPosition,

    /// The target cell already holds a marker.
    #[display("Position already taken")]
    PositionTaken,
}

impl MoveError {
    /// Numeric code reported in the `err` field.
    pub fn code(self) -> u8 {
        match self {
            Self::GameAlreadyTerminated => 2,
            Self::UnexpectedPlayer => 3,
            Self::IllegalPosition => 4,
            Self::PositionTaken => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_messages() {
        let cases = [
            (MoveError::GameAlreadyTerminated, 2, "Game already terminated"),
            (MoveError::UnexpectedPlayer, 3, "Unexpected player"),
            (MoveError::IllegalPosition, 4, "Illegal move"),
            (MoveError::PositionTaken, 5, "Position already taken"),
        ];
        for (err, code, msg) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.to_string(), msg);
        }
    }
}
