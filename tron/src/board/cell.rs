use serde::{Deserialize, Serialize};

/// One of the two light cycles.
///
/// Player one is always the bot reading the board, player two its opponent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

/// The content of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Floor,
    /// A wall, or the trail left behind by a light cycle.
    Wall,
    Player1,
    Player2,
}

impl Player {
    /// The character marking this player's position in a map.
    pub fn marker(self) -> u8 {
        match self {
            Player::One => b'1',
            Player::Two => b'2',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

impl Cell {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b' ' => Some(Cell::Floor),
            b'#' => Some(Cell::Wall),
            b'1' => Some(Cell::Player1),
            b'2' => Some(Cell::Player2),
            _ => None,
        }
    }

    /// Like [`Self::from_byte()`], for a character of a decoded row.
    pub fn from_char(character: char) -> Option<Self> {
        u8::try_from(character).ok().and_then(Cell::from_byte)
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Cell::Floor => b' ',
            Cell::Wall => b'#',
            Cell::Player1 => Player::One.marker(),
            Cell::Player2 => Player::Two.marker(),
        }
    }

    /// Only the floor can be moved onto. The players' own cells block movement
    /// just like walls do.
    pub fn is_passable(self) -> bool {
        self == Cell::Floor
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
            Cell::Floor | Cell::Wall => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        match player {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }
}
