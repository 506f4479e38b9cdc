mod config;
mod driver;
mod logging;
pub use config::*;
pub use driver::*;
pub use logging::*;

use tron::{Board, Direction};
use tracing::info;

/// A trait to simplify writing bots.
pub trait Bot {
    /// Chooses the move for this turn.
    ///
    /// There must always be a move, even when every direction crashes;
    /// [`Board::legal_moves()`] is never empty for that reason.
    fn play_turn(&mut self, board: &Board) -> Direction;

    /// Plays until the referee closes stdin.
    ///
    /// Returns an error if the referee sends something that isn't a valid board,
    /// or if stdin/stdout break.
    fn run(&mut self, config: &BotConfig) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();

        info!(protocol = %config.protocol, "Waiting for the first board");
        match play_game(&mut stdin, &mut stdout, config.protocol, |board| {
            self.play_turn(board)
        }) {
            Ok(num_turns) => {
                info!(num_turns, "Input closed, game over");
                Ok(())
            }
            Err(err) => Err(report(err)),
        }
    }
}

/// Names the kind of failure first, so that it is part of what `main` prints
/// to stderr even when logging is off.
fn report(err: BotError) -> anyhow::Error {
    let kind = err.kind();
    anyhow::Error::new(err).context(kind)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tron::Protocol;

    use super::*;

    fn report_for(input: &str) -> String {
        let err = play_game(
            &mut Cursor::new(input),
            &mut Vec::new(),
            Protocol::Numeric,
            |board: &Board| board.legal_moves()[0],
        )
        .unwrap_err();
        format!("{:#}", report(err))
    }

    #[test]
    fn report_starts_with_the_kind() {
        let message = report_for("3 2\n# #\n1  2\n");
        assert!(message.starts_with("RowLengthMismatch: "), "{}", message);
        // The offending row is still in there
        assert!(message.contains("\"1  2\""), "{}", message);

        let message = report_for("2 2\n11\n  \n");
        assert!(message.starts_with("DuplicatePlayer: "), "{}", message);
    }
}
