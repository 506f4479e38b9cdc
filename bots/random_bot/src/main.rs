use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;
use tron::{Board, Direction};
use tron_bot_utils::{initialize_logging, Bot, BotArgs};

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    bot: BotArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.bot.log_level);
    let config = args.bot.config()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(seed);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { rng }.run(&config)
}

/// Moves in a random direction that doesn't crash right away.
struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn play_turn(&mut self, board: &Board) -> Direction {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Direction::North)
    }
}
