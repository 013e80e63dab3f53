use engine::agent::Agent;
use engine::geometry::{Point, Heading};
use engine::grid::{Grid, Occupancy};
use engine::legality::legal_headings;
use engine::settings::PolicySettings;

use rand::Rng;

/// Greedy one step lookahead. Sometimes random, usually straight
/// ahead, and otherwise the turn with the longest open run in front of
/// it. It's meant to be beatable.
pub fn choose_heading<R: Rng>(agent: &Agent, grid: &Grid, occupancy: &Occupancy, settings: &PolicySettings, rng: &mut R) -> Heading {
    let legal = legal_headings(agent, grid, occupancy);
    if legal.is_empty() {
        #[cfg(feature = "debug-decisions")]
        println!("{} is trapped, keeping {}", agent.id(), agent.heading());
        return agent.heading();
    }

    if rng.gen::<f64>() < settings.randomness {
        let heading = legal[rng.gen_range(0, legal.len())];
        #[cfg(feature = "debug-decisions")]
        println!("{} picked {} at random from {:?}", agent.id(), heading, legal);
        return heading;
    }

    if legal.contains(&agent.heading()) {
        return agent.heading();
    }

    let mut best = legal[0];
    let mut best_score = 0;
    for (i, &heading) in legal.iter().enumerate() {
        let score = open_run(agent.peek_next(heading), heading, grid, occupancy, settings.lookahead_depth);
        #[cfg(feature = "debug-decisions")]
        println!("{} scores {} for {}", agent.id(), score, heading);
        if i == 0 || score > best_score {
            best = heading;
            best_score = score;
        }
    }
    best
}

/// Number of free cells in a straight line starting at `from`,
/// counting `from` itself, up to `depth`.
pub fn open_run(from: Point, heading: Heading, grid: &Grid, occupancy: &Occupancy, depth: u32) -> u32 {
    let mut score = 0;
    let mut cell = from;
    while score < depth && grid.contains(cell) && !occupancy.contains(cell) {
        score += 1;
        cell = cell.step(heading);
    }
    score
}
