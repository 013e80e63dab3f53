use std::fmt;

use engine::geometry::{Point, Heading};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentId {
    Player1,
    Player2
}

impl AgentId {
    pub fn all() -> [AgentId; 2] {
        [AgentId::Player1, AgentId::Player2]
    }

    pub fn index(&self) -> usize {
        match *self {
            AgentId::Player1 => 0,
            AgentId::Player2 => 1,
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AgentId::Player1 => write!(f, "Player 1"),
            AgentId::Player2 => write!(f, "Player 2"),
        }
    }
}

/// One light cycle. Only the engine gets to move it or kill it, which
/// is why the mutators are crate private. Everyone else sees clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    id: AgentId,
    position: Point,
    heading: Heading,
    alive: bool,
    trail: Vec<Point>
}

impl Agent {
    pub fn spawn(position: Point, heading: Heading, id: AgentId) -> Agent {
        Agent {
            id,
            position,
            heading,
            alive: true,
            trail: vec![position]
        }
    }

    /// For boards that are set up mid game, like the text maps in
    /// tests. The head is appended to the trail if it isn't there yet.
    pub(crate) fn with_trail(position: Point, heading: Heading, id: AgentId, mut trail: Vec<Point>) -> Agent {
        if !trail.contains(&position) {
            trail.push(position);
        }
        Agent {
            id,
            position,
            heading,
            alive: true,
            trail
        }
    }

    pub fn id(&self) -> AgentId { self.id }
    pub fn position(&self) -> Point { self.position }
    pub fn heading(&self) -> Heading { self.heading }
    pub fn is_alive(&self) -> bool { self.alive }

    /// Every cell this agent has been on, oldest first. The resolver
    /// never lets an agent step onto an occupied cell, so there are no
    /// duplicates.
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    pub fn peek_next(&self, heading: Heading) -> Point {
        self.position.step(heading)
    }

    /// Turning straight back on yourself is not a move, it's ignored.
    pub(crate) fn steer(&mut self, heading: Heading) -> bool {
        if heading.is_reverse_of(self.heading) {
            false
        } else {
            self.heading = heading;
            true
        }
    }

    pub(crate) fn commit_move(&mut self, new_position: Point) {
        // This is used internally. The resolver should not be making
        // invalid moves!
        debug_assert!(self.alive);
        debug_assert!(!self.trail.contains(&new_position));

        self.position = new_position;
        self.trail.push(new_position);
    }

    pub(crate) fn mark_dead(&mut self) {
        self.alive = false;
    }
}
