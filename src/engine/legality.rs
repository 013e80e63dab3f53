use arrayvec::ArrayVec;

use engine::agent::Agent;
use engine::geometry::Heading;
use engine::grid::{Grid, Occupancy};

pub type Headings = ArrayVec<[Heading; 4]>;

/// Headings that don't immediately crash the agent, in the order of
/// `Heading::all()`. Empty means the agent is trapped.
pub fn legal_headings(agent: &Agent, grid: &Grid, occupancy: &Occupancy) -> Headings {
    let mut result = Headings::new();
    for &heading in Heading::all().iter() {
        if heading.is_reverse_of(agent.heading()) {
            continue;
        }
        let next = agent.peek_next(heading);
        if !grid.contains(next) || occupancy.contains(next) {
            continue;
        }
        result.push(heading);
    }
    result
}

pub fn is_trapped(agent: &Agent, grid: &Grid, occupancy: &Occupancy) -> bool {
    legal_headings(agent, grid, occupancy).is_empty()
}
