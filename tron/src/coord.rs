use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidDirection;

/// A position on the grid.
///
/// `x` is the column and grows eastward, `y` is the row and grows southward,
/// and `(0, 0)` is the top-left cell. A coordinate knows nothing about any
/// particular board, so it may well lie outside of one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// One of the four moves a bot can make.
///
/// There is no way to stand still.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    North = 1,
    East = 2,
    South = 3,
    West = 4,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate in the given direction.
    ///
    /// This is plain arithmetic, the result is not checked against any board.
    pub fn offset(self, direction: Direction) -> Self {
        // Wrapping keeps this total; a wrapped coordinate is off every board anyway.
        let (dx, dy) = direction.delta();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The four orthogonal neighbours, in the order of [`Direction::ALL`].
    ///
    /// Strategies that break ties by taking the first candidate rely on this order.
    pub fn adjacent(self) -> [Coord; 4] {
        Direction::ALL.map(|direction| self.offset(direction))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Direction {
    /// All directions, in clockwise order starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The numeric code used by the referee, from 1 (north) to 4 (west).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction.code()
    }
}

/// Decodes a numeric move code.
impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Direction::North),
            2 => Ok(Direction::East),
            3 => Ok(Direction::South),
            4 => Ok(Direction::West),
            _ => Err(InvalidDirection {
                token: code.to_string(),
            }),
        }
    }
}

/// Decodes a direction name such as "North", "north" or "N".
///
/// Only the first character is looked at, case-insensitively.
impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDirection {
            token: String::from(s),
        };
        match s.chars().next().ok_or_else(invalid)?.to_ascii_uppercase() {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<&str> for Direction {
    type Error = InvalidDirection;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Direction {
    type Error = InvalidDirection;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
