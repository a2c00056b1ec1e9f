use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, print_board, AiPlayer, Board, CliPlayer, Match, MatchStatus, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two random opponents play a match to completion.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            println!("Welcome to sea battle!");
            println!(
                "The board is {size}x{size}; enter shots as 'row col', e.g. '1 2'.",
                size = BOARD_SIZE
            );
            let mut rng = make_rng(seed);
            let your_board =
                Board::with_random_fleet(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let ai_board =
                Board::with_random_fleet(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut game = Match::new(
                Box::new(CliPlayer::stdin()),
                your_board,
                Box::new(AiPlayer::new()),
                ai_board,
                rng,
            );
            let result = game.run()?;
            println!("\nFinal boards:");
            println!("Yours:");
            print_board(game.board(0), true);
            println!("Computer's:");
            print_board(game.board(1), true);
            match result {
                MatchStatus::PlayerOneWon => println!("\nYou win!"),
                MatchStatus::PlayerTwoWon => println!("\nThe computer wins."),
                MatchStatus::InProgress => unreachable!("run() only returns terminal states"),
            }
        }
        Commands::Auto { seed } => {
            let mut rng = make_rng(seed);
            let board_one =
                Board::with_random_fleet(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let board_two =
                Board::with_random_fleet(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut game = Match::new(
                Box::new(AiPlayer::new()),
                board_one,
                Box::new(AiPlayer::new()),
                board_two,
                rng,
            );
            let mut turns = 0u32;
            while game.step()? == MatchStatus::InProgress {
                turns += 1;
            }
            println!("Player 1 board:");
            print_board(game.board(0), true);
            println!("Player 2 board:");
            print_board(game.board(1), true);
            let winner = match game.status() {
                MatchStatus::PlayerOneWon => 1,
                _ => 2,
            };
            println!("Player {} wins after {} turns.", winner, turns);
        }
    }
    Ok(())
}
