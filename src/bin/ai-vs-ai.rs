extern crate lightcycles;
extern crate time;
use time::PreciseTime;

use lightcycles::*;
use lightcycles::engine::settings::GameSettings;

use std::env;
use std::process;

const DEFAULT_GAMES: u64 = 1000;
const DEFAULT_SEED: u64 = 0x5eed;

fn main() {
    let mut args = env::args().skip(1);
    let games = args.next().and_then(|a| a.parse().ok()).unwrap_or(DEFAULT_GAMES);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(DEFAULT_SEED);

    println!("Playing {} AI against AI games from seed {}", games, seed);
    let start_time = PreciseTime::now();

    let score = match strategy::series::run_series(&GameSettings::default(), games, seed) {
        Ok(ok) => ok,
        Err(error) => {
            println!("Invalid settings: {}", error);
            process::exit(1);
        }
    };

    println!("Player 1 wins: {}", score.player1_wins);
    println!("Player 2 wins: {}", score.player2_wins);
    println!("Draws: {}", score.draws);
    println!("Unfinished: {}", score.unfinished);
    println!("Total running time: {}", start_time.to(PreciseTime::now()));
}
