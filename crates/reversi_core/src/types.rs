use std::fmt;

/// Number of rows and columns of the board.
pub const SIZE: usize = 8;

/// Total number of fields on the board.
pub const NUM_FIELDS: usize = SIZE * SIZE;

/// Search depth a fresh game starts with.
pub const DEFAULT_LEVEL: u8 = 3;

/// Largest accepted search depth. Full-width search grows exponentially
/// with the level, so deeper settings are rejected.
pub const MAX_LEVEL: u8 = 8;

/// One of the two parties of a game. The human always renders as `X`,
/// the machine as `O`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Machine,
}

impl Player {
    /// The opposing player.
    pub fn inverse(self) -> Player {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    /// Character used in the canonical board rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Machine => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => f.write_str("human"),
            Player::Machine => f.write_str("machine"),
        }
    }
}

/// One of the eight compass directions a capturing line can run along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, in scan order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (row, col) offset of one step along this direction. Row 1 is the
    /// northern edge, so north decreases the row.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
