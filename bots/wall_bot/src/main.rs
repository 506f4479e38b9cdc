use clap::Parser;
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};
use tracing::debug;
use tron::{Board, Cell, Direction};
use tron_bot_utils::{initialize_logging, Bot, BotArgs};

#[derive(Parser)]
struct Args {
    /// RNG seed, used to pick the order in which directions are tried
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
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order = Direction::ALL;
    order.shuffle(&mut rng);
    debug!(seed, ?order, "Direction preference");

    WallBot { order }.run(&config)
}

/// Follows the wall: prefers moving onto a cell that touches a wall.
struct WallBot {
    /// Preference order, fixed for the whole game
    order: [Direction; 4],
}

impl Bot for WallBot {
    fn play_turn(&mut self, board: &Board) -> Direction {
        let fallback = board.legal_moves()[0];
        self.order
            .into_iter()
            .find(|&direction| {
                let dest = board.rel(direction, board.me());
                board.is_passable(dest)
                    && board
                        .adjacent(dest)
                        .into_iter()
                        .any(|pos| board.cell(pos) == Cell::Wall)
            })
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hugs_the_wall() {
        // Only moving south ends up next to a wall
        let board: Board = "7 5\n2      \n       \n   1   \n       \n#######\n"
            .parse()
            .unwrap();
        let mut bot = WallBot {
            order: Direction::ALL,
        };
        assert_eq!(bot.play_turn(&board), Direction::South);
    }

    #[test]
    fn falls_back_to_first_legal_move() {
        // No wall anywhere near, and the player markers don't count
        let board: Board = "5 5\n     \n     \n  1  \n     \n 2   \n".parse().unwrap();
        let mut bot = WallBot {
            order: [
                Direction::West,
                Direction::South,
                Direction::East,
                Direction::North,
            ],
        };
        assert_eq!(bot.play_turn(&board), Direction::North);
    }

    #[test]
    fn boxed_in() {
        let board: Board = "3 3\n#2#\n#1#\n###\n".parse().unwrap();
        let mut bot = WallBot {
            order: Direction::ALL,
        };
        assert_eq!(bot.play_turn(&board), Direction::North);
    }
}
