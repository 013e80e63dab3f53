use engine::{Game, Mode, Outcome};
use engine::agent::AgentId;
use engine::clock::ManualClock;
use engine::settings::{GameSettings, ConfigurationError};

use rand::{Rng, SeedableRng};
use rand::prng::XorShiftRng;

#[cfg(not(feature = "single-threaded"))]
use rayon::prelude::*;

pub const MAX_TICKS: u32 = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesScore {
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
    pub ticks: u64
}

impl SeriesScore {
    fn add_game(&mut self, outcome: Outcome, ticks: u32) {
        match outcome {
            Outcome::Won(AgentId::Player1) => self.player1_wins += 1,
            Outcome::Won(AgentId::Player2) => self.player2_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => self.unfinished += 1,
        }
        self.ticks += ticks as u64;
    }

    fn merge(mut self, other: SeriesScore) -> SeriesScore {
        self.player1_wins += other.player1_wins;
        self.player2_wins += other.player2_wins;
        self.draws += other.draws;
        self.unfinished += other.unfinished;
        self.ticks += other.ticks;
        self
    }

    pub fn games(&self) -> u32 {
        self.player1_wins + self.player2_wins + self.draws + self.unfinished
    }
}

/// Plays one AI against AI game as fast as possible. Time doesn't pass,
/// so the tick interval never changes.
pub fn play_out<R: Rng>(settings: &GameSettings, rng: R, max_ticks: u32) -> Result<(Outcome, u32), ConfigurationError> {
    let mut game = Game::new(settings.clone(), Mode::AiVsAi, ManualClock::new(), rng)?;
    for _ in 0..max_ticks {
        let result = game.advance_tick();
        if result.status.is_complete() {
            return Ok((result.outcome(), result.tick));
        }
    }
    Ok((Outcome::Ongoing, game.tick()))
}

pub fn seed_for_game(base_seed: u64, game: u64) -> [u8; 16] {
    let mut seed = [0; 16];
    seed[..8].copy_from_slice(&base_seed.to_le_bytes());
    // Odd constant keeps the second half from ever being all zeroes
    seed[8..].copy_from_slice(&(game.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1).to_le_bytes());
    seed
}

/// Plays `games` seeded games and tallies who won. The same base seed
/// always gives the same score.
pub fn run_series(settings: &GameSettings, games: u64, base_seed: u64) -> Result<SeriesScore, ConfigurationError> {
    settings.validate()?;

    let play = |i: u64| -> Result<SeriesScore, ConfigurationError> {
        let rng = XorShiftRng::from_seed(seed_for_game(base_seed, i));
        let (outcome, ticks) = play_out(settings, rng, MAX_TICKS)?;
        let mut score = SeriesScore::default();
        score.add_game(outcome, ticks);
        Ok(score)
    };

    #[cfg(feature = "single-threaded")]
    let scores = (0..games)
        .map(play)
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "single-threaded"))]
    let scores = (0..games).into_par_iter()
        .map(play)
        .collect::<Result<Vec<_>, _>>()?;

    let score = scores.into_iter().fold(SeriesScore::default(), SeriesScore::merge);

    #[cfg(feature = "benchmarking")]
    println!("Ticks simulated: {}", score.ticks);

    Ok(score)
}
