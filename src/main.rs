use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{
    init_logging, print_boards, random_board, CliStrategy, Game, GameStatus, RandomStrategy, Side,
    Strategy,
};

#[derive(Parser)]
#[command(author, version, about = "Console sea battle on a 6x6 grid", long_about = None)]
struct Cli {
    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
    /// Let the random strategy play both sides
    #[arg(long)]
    auto: bool,
}

fn greet() {
    println!("-------------------");
    println!("    Sea Battle     ");
    println!("-------------------");
    println!(" input format: row col ");
    println!(" 1-based, e.g. 2 4 ");
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    run(&mut rng, cli.auto)
}

/// Build two random boards and drive the game loop to completion.
fn run(rng: &mut SmallRng, auto: bool) -> anyhow::Result<()> {
    greet();
    let human_board = random_board(rng);
    let opponent_board = random_board(rng);
    let human: Box<dyn Strategy> = if auto {
        Box::new(RandomStrategy::new())
    } else {
        Box::new(CliStrategy::new())
    };
    let mut game = Game::new(
        human_board,
        opponent_board,
        human,
        Box::new(RandomStrategy::new()),
    );

    loop {
        print_boards(&game, auto);
        match game.turn() {
            Side::Human => println!("Your turn!"),
            Side::Opponent => println!("Opponent's turn..."),
        }
        match game.step(rng) {
            GameStatus::InProgress => {}
            GameStatus::Won(side) => {
                print_boards(&game, true);
                match side {
                    Side::Human => println!("You won!"),
                    Side::Opponent => println!("The opponent won!"),
                }
                break;
            }
            GameStatus::Aborted => {
                println!("Game aborted.");
                break;
            }
        }
    }
    Ok(())
}
