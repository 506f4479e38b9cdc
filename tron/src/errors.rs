use crate::{Coord, Player};

/// The error type for reading one board, i.e. why the text sent by the referee
/// is not a valid map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The first line is not two positive integers.
    MalformedHeader { line: String },
    RowLengthMismatch {
        row: i32,
        expected: i32,
        found: usize,
        line: String,
    },
    /// The input ended before all rows were read.
    RowCountMismatch { expected: i32, found: i32 },
    DuplicatePlayer {
        player: Player,
        first: Coord,
        second: Coord,
    },
    MissingPlayer { player: Player },
    InvalidCharacter { character: char, at: Coord },
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedHeader { line } => write!(
                f,
                "Malformed header: expected two positive integers, got {:?}",
                line
            ),
            ParseError::RowLengthMismatch {
                row,
                expected,
                found,
                line,
            } => write!(
                f,
                "Row {} has length {} instead of {}: {:?}",
                row, found, expected, line
            ),
            ParseError::RowCountMismatch { expected, found } => write!(
                f,
                "Input ended after {} of {} rows",
                found, expected
            ),
            ParseError::DuplicatePlayer {
                player,
                first,
                second,
            } => write!(
                f,
                "Found two locations for {}, first at {} and then at {}",
                player, first, second
            ),
            ParseError::MissingPlayer { player } => {
                write!(f, "Did not find a location for {}", player)
            }
            ParseError::InvalidCharacter { character, at } => write!(
                f,
                "Invalid character {:?} (U+{:04X}) at {}",
                character,
                u32::from(*character),
                at
            ),
        }
    }
}

/// The error type for [`Board::read()`](crate::Board::read).
#[derive(Debug)]
pub enum ReadBoardError {
    Parse(ParseError),
    Io(std::io::Error),
}

impl std::error::Error for ReadBoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadBoardError::Parse(err) => Some(err),
            ReadBoardError::Io(err) => Some(err),
        }
    }
}

impl std::fmt::Display for ReadBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadBoardError::Parse(_) => write!(f, "Received an invalid board"),
            ReadBoardError::Io(_) => write!(f, "Could not read the board"),
        }
    }
}

impl From<ParseError> for ReadBoardError {
    fn from(err: ParseError) -> Self {
        ReadBoardError::Parse(err)
    }
}

impl From<std::io::Error> for ReadBoardError {
    fn from(err: std::io::Error) -> Self {
        ReadBoardError::Io(err)
    }
}

/// A move token that does not name one of the four directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidDirection {
    pub token: String,
}

impl std::error::Error for InvalidDirection {}

impl std::fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} is not a direction, it must start with one of 'N', 'E', 'S' or 'W' or be a code from 1 to 4",
            self.token
        )
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Protocol`](crate::Protocol).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownProtocol {
    pub name: String,
}

impl std::error::Error for UnknownProtocol {}

impl std::fmt::Display for UnknownProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown protocol {:?}, expected \"numeric\" or \"symbolic\"",
            self.name
        )
    }
}
