use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::{debug, trace};
use tron::{Board, Direction, ParseError, Protocol, ReadBoardError};

/// Why a game had to be abandoned. None of these can be recovered from.
#[derive(Debug)]
pub enum BotError {
    /// The referee sent something that isn't a board.
    Parse(ParseError),
    /// The strategy returned a move that isn't one of the four directions.
    StrategyContractViolation { reason: String },
    /// Reading from or writing to the referee failed.
    Transport(std::io::Error),
}

impl BotError {
    /// A short name for the kind of failure, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::Parse(ParseError::MalformedHeader { .. }) => "MalformedHeader",
            BotError::Parse(ParseError::RowLengthMismatch { .. }) => "RowLengthMismatch",
            BotError::Parse(ParseError::RowCountMismatch { .. }) => "RowCountMismatch",
            BotError::Parse(ParseError::DuplicatePlayer { .. }) => "DuplicatePlayer",
            BotError::Parse(ParseError::MissingPlayer { .. }) => "MissingPlayer",
            BotError::Parse(ParseError::InvalidCharacter { .. }) => "InvalidCharacter",
            BotError::StrategyContractViolation { .. } => "StrategyContractViolation",
            BotError::Transport(_) => "TransportError",
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::Parse(err) => Some(err),
            BotError::Transport(err) => Some(err),
            BotError::StrategyContractViolation { .. } => None,
        }
    }
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::Parse(_) => write!(f, "The referee sent an invalid board"),
            BotError::StrategyContractViolation { reason } => {
                write!(f, "The strategy returned an invalid move: {}", reason)
            }
            BotError::Transport(_) => write!(f, "Lost the connection to the referee"),
        }
    }
}

impl From<ReadBoardError> for BotError {
    fn from(err: ReadBoardError) -> Self {
        match err {
            ReadBoardError::Parse(err) => BotError::Parse(err),
            ReadBoardError::Io(err) => BotError::Transport(err),
        }
    }
}

/// What happened in one iteration of the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(Direction),
    /// The input ended cleanly between two boards.
    EndOfInput,
}

/// Reads one board, asks the strategy for a move, and sends it.
///
/// The strategy may return anything that converts into a [`Direction`], e.g. a
/// numeric code or a direction name. Nothing is written if the conversion fails.
pub fn play_turn<R, W, F, M>(
    input: &mut R,
    output: &mut W,
    protocol: Protocol,
    strategy: &mut F,
) -> Result<TurnOutcome, BotError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    F: FnMut(&Board) -> M,
    M: TryInto<Direction>,
    <M as TryInto<Direction>>::Error: Display,
{
    let Some(board) = Board::read(input)? else {
        return Ok(TurnOutcome::EndOfInput);
    };
    trace!(width = board.width(), height = board.height(), me = %board.me(), them = %board.them(), "Received board");

    let direction = strategy(&board).try_into().map_err(|err| {
        BotError::StrategyContractViolation {
            reason: err.to_string(),
        }
    })?;

    protocol
        .write_move(output, direction)
        .map_err(BotError::Transport)?;
    Ok(TurnOutcome::Played(direction))
}

/// Plays turns until the input ends, and returns the number of turns played.
pub fn play_game<R, W, F, M>(
    input: &mut R,
    output: &mut W,
    protocol: Protocol,
    mut strategy: F,
) -> Result<usize, BotError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    F: FnMut(&Board) -> M,
    M: TryInto<Direction>,
    <M as TryInto<Direction>>::Error: Display,
{
    let mut num_turns = 0;
    loop {
        match play_turn(input, output, protocol, &mut strategy)? {
            TurnOutcome::Played(direction) => {
                num_turns += 1;
                debug!(turn = num_turns, %direction, "Played move");
            }
            TurnOutcome::EndOfInput => break Ok(num_turns),
        }
    }
}
