extern crate lightcycles;
extern crate rand;
extern crate time;
use time::PreciseTime;

use lightcycles::*;
use lightcycles::engine::{Game, Mode, Outcome, TickResult};
use lightcycles::engine::clock::{Clock, WallClock};
use lightcycles::engine::settings::GameSettings;

use rand::{Rng, SeedableRng, thread_rng};
use rand::prng::XorShiftRng;

use std::env;
use std::error::Error;
use std::path::Path;
use std::process;
use std::thread;

const SETTINGS_PATH: &str = "settings.json";

fn load_settings(filename: &str) -> Result<GameSettings, Box<Error>> {
    if Path::new(filename).exists() {
        input::json::read_settings_from_file(filename)
    } else {
        Ok(GameSettings::default())
    }
}

/// Runs one game in real time, sleeping for the current tick interval
/// between ticks, until somebody crashes.
fn play<C: Clock, R: Rng>(game: &mut Game<C, R>) -> TickResult {
    loop {
        let result = game.advance_tick();
        if result.status.is_complete() {
            return result;
        }
        if let Ok(pause) = result.tick_interval.to_std() {
            thread::sleep(pause);
        }
    }
}

fn main() {
    let start_time = PreciseTime::now();

    let settings_path = env::args().nth(1).unwrap_or_else(|| SETTINGS_PATH.to_string());
    let settings = match load_settings(&settings_path) {
        Ok(ok) => ok,
        Err(error) => {
            println!("Error while reading settings: {}", error);
            process::exit(1);
        }
    };

    let rng = match XorShiftRng::from_rng(thread_rng()) {
        Ok(ok) => ok,
        Err(error) => {
            println!("Error while seeding the AI: {}", error);
            process::exit(1);
        }
    };

    let mut game = match Game::new(settings, Mode::AiVsAi, WallClock::start(), rng) {
        Ok(ok) => ok,
        Err(error) => {
            println!("Invalid settings: {}", error);
            process::exit(1);
        }
    };

    let result = play(&mut game);
    print!("{}", result);
    match result.outcome() {
        Outcome::Won(winner) => println!("{} wins after {} ticks", winner, result.tick),
        Outcome::Draw => println!("Draw after {} ticks", result.tick),
        Outcome::Ongoing => {}
    }

    println!("Elapsed time: {}", start_time.to(PreciseTime::now()));
}
