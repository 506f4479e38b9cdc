use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Direction, InvalidDirection, UnknownProtocol};

/// How moves are written back to the referee.
///
/// The variant is chosen once at startup, the two are never mixed within a game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Moves are the codes 1 (north) to 4 (west).
    #[default]
    Numeric,
    /// Moves are direction names such as "North".
    Symbolic,
}

impl Protocol {
    /// The token for a move, without the line terminator.
    pub fn encode(self, direction: Direction) -> &'static str {
        match self {
            Protocol::Numeric => match direction {
                Direction::North => "1",
                Direction::East => "2",
                Direction::South => "3",
                Direction::West => "4",
            },
            Protocol::Symbolic => direction.name(),
        }
    }

    /// The inverse of [`Self::encode()`]. Surrounding whitespace is ignored.
    pub fn decode(self, token: &str) -> Result<Direction, InvalidDirection> {
        let token = token.trim();
        match self {
            Protocol::Numeric => token
                .parse::<u8>()
                .map_err(|_| InvalidDirection {
                    token: String::from(token),
                })
                .and_then(Direction::try_from),
            Protocol::Symbolic => token.parse(),
        }
    }

    /// Sends a move as a single line and flushes it, since the referee waits for
    /// the line before doing anything else.
    pub fn write_move<W: Write + ?Sized>(
        self,
        writer: &mut W,
        direction: Direction,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", self.encode(direction))?;
        writer.flush()
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Numeric => write!(f, "numeric"),
            Protocol::Symbolic => write!(f, "symbolic"),
        }
    }
}

impl FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" => Ok(Protocol::Numeric),
            "symbolic" => Ok(Protocol::Symbolic),
            _ => Err(UnknownProtocol {
                name: String::from(s),
            }),
        }
    }
}
