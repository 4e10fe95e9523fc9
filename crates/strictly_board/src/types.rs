//! Core domain types for the 3x3 board.

/// Player in the game.
///
/// On the wire players are the integers `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Player {
    /// Player one (moves first).
    One,
    /// Player two.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Wire id of the player.
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parses a raw wire id. Anything other than `1` or `2` is not a player.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Free cell.
    #[default]
    Empty,
    /// Cell holding a player's marker.
    Occupied(Player),
}

impl Cell {
    /// Wire value: `0` empty, otherwise the owner's id.
    pub fn id(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.id(),
        }
    }

    /// Signed weight of the cell from `player`'s point of view.
    ///
    /// `+1` if `player` owns it, `-1` if the opponent does, `0` if free.
    pub fn weight(self, player: Player) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(owner) if owner == player => 1,
            Cell::Occupied(_) => -1,
        }
    }
}

/// Row-major 3x3 grid.
pub type Grid = [[Cell; 3]; 3];

/// How the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A player completed a line.
    Winner(Player),
    /// Every cell is filled and nobody completed a line.
    Draw,
}

impl Outcome {
    /// True once the game accepts no more moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Wire value of the `winner` field, `None` while in progress.
    pub fn winner_id(self) -> Option<i8> {
        match self {
            Outcome::InProgress => None,
            Outcome::Winner(player) => Some(player.id() as i8),
            Outcome::Draw => Some(-1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_toggles() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_player_ids() {
        assert_eq!(Player::from_id(1), Some(Player::One));
        assert_eq!(Player::from_id(2), Some(Player::Two));
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Player::from_id(3), None);
        assert_eq!(Player::from_id(-1), None);
    }

    #[test]
    fn test_cell_weight() {
        let cell = Cell::Occupied(Player::One);
        assert_eq!(cell.weight(Player::One), 1);
        assert_eq!(cell.weight(Player::Two), -1);
        assert_eq!(Cell::Empty.weight(Player::Two), 0);
    }

    #[test]
    fn test_winner_ids() {
        assert_eq!(Outcome::InProgress.winner_id(), None);
        assert_eq!(Outcome::Winner(Player::Two).winner_id(), Some(2));
        assert_eq!(Outcome::Draw.winner_id(), Some(-1));
    }
}
