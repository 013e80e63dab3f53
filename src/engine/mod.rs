pub mod agent;
pub mod clock;
pub mod constants;
pub mod geometry;
pub mod grid;
pub mod legality;
pub mod settings;

use self::agent::{Agent, AgentId};
use self::clock::{Clock, TickInterval};
use self::geometry::{Point, Heading};
use self::grid::{Grid, Occupancy};
use self::settings::{GameSettings, ConfigurationError};

use strategy::lookahead;

use rand::Rng;
use time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Won(AgentId),
    Draw
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    Ended(Outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SinglePlayer,
    TwoPlayer,
    AiVsAi
}

impl Mode {
    pub fn controllers(&self) -> [Controller; 2] {
        match *self {
            Mode::SinglePlayer => [Controller::Human, Controller::Ai],
            Mode::TwoPlayer => [Controller::Human, Controller::Human],
            Mode::AiVsAi => [Controller::Ai, Controller::Ai],
        }
    }
}

impl GameStatus {
    pub fn is_complete(&self) -> bool {
        match *self {
            GameStatus::Ended(_) => true,
            _ => false
        }
    }

    pub fn outcome(&self) -> Outcome {
        match *self {
            GameStatus::Ended(outcome) => outcome,
            _ => Outcome::Ongoing
        }
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    pub tick: u32,
    pub grid: Grid,
    pub agents: [Agent; 2],
    pub occupancy: Occupancy,
    pub status: GameStatus,
    pub tick_interval: Duration
}

impl TickResult {
    pub fn outcome(&self) -> Outcome {
        self.status.outcome()
    }

    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }
}

/// The tick engine. It owns both agents and the occupancy for the
/// whole game; anything outside only gets shared references or
/// snapshots.
#[derive(Debug)]
pub struct Game<C: Clock, R: Rng> {
    settings: GameSettings,
    grid: Grid,
    controllers: [Controller; 2],
    agents: [Agent; 2],
    pending: [Option<Heading>; 2],
    occupancy: Occupancy,
    status: GameStatus,
    tick: u32,
    interval: TickInterval,
    clock: C,
    rng: R
}

impl<C: Clock, R: Rng> Game<C, R> {
    pub fn new(settings: GameSettings, mode: Mode, clock: C, rng: R) -> Result<Game<C, R>, ConfigurationError> {
        let grid = settings.validate()?;
        let spawns = settings.spawns();
        let agents = [
            Agent::spawn(spawns[0].position, spawns[0].heading, AgentId::Player1),
            Agent::spawn(spawns[1].position, spawns[1].heading, AgentId::Player2)
        ];
        Ok(Game::from_parts(settings, grid, agents, mode, clock, rng))
    }

    /// For a board that's already been played on, like one read from a
    /// text map. Agent trails must already be inside the grid.
    pub(crate) fn from_parts(settings: GameSettings, grid: Grid, agents: [Agent; 2], mode: Mode, clock: C, rng: R) -> Game<C, R> {
        let mut occupancy = Occupancy::empty(grid);
        for agent in agents.iter() {
            for &p in agent.trail() {
                occupancy.insert(p);
            }
        }
        let interval = TickInterval::new(settings.speed, clock.now());
        Game {
            settings,
            grid,
            controllers: mode.controllers(),
            agents,
            pending: [None, None],
            occupancy,
            status: GameStatus::Running,
            tick: 0,
            interval,
            clock,
            rng
        }
    }

    pub fn settings(&self) -> &GameSettings { &self.settings }
    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn occupancy(&self) -> &Occupancy { &self.occupancy }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn tick(&self) -> u32 { self.tick }
    pub fn clock(&self) -> &C { &self.clock }

    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    pub fn controller(&self, id: AgentId) -> Controller {
        self.controllers[id.index()]
    }

    /// How long the driver should wait before the next tick.
    pub fn tick_interval(&self) -> Duration {
        self.interval.current()
    }

    /// Queues a turn for a human agent, applied on the next tick. A
    /// reversal of the current heading is dropped, and `None` keeps
    /// whatever was queued before. The last accepted request wins.
    pub fn set_heading(&mut self, id: AgentId, heading: Option<Heading>) {
        if let Some(heading) = heading {
            if !heading.is_reverse_of(self.agents[id.index()].heading()) {
                self.pending[id.index()] = Some(heading);
            }
        }
    }

    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Ended(_) => {}
        }
    }

    pub fn restart(&mut self) {
        let spawns = self.settings.spawns();
        self.agents = [
            Agent::spawn(spawns[0].position, spawns[0].heading, AgentId::Player1),
            Agent::spawn(spawns[1].position, spawns[1].heading, AgentId::Player2)
        ];
        self.pending = [None, None];
        self.occupancy = Occupancy::empty(self.grid);
        for agent in self.agents.iter() {
            self.occupancy.insert(agent.position());
        }
        self.status = GameStatus::Running;
        self.tick = 0;
        self.interval = TickInterval::new(self.settings.speed, self.clock.now());
    }

    /// Restarts on a new field. If the settings are bad the current
    /// game is left alone.
    pub fn restart_with(&mut self, settings: GameSettings) -> Result<(), ConfigurationError> {
        self.grid = settings.validate()?;
        self.settings = settings;
        self.restart();
        Ok(())
    }

    pub fn snapshot(&self) -> TickResult {
        TickResult {
            tick: self.tick,
            grid: self.grid,
            agents: self.agents.clone(),
            occupancy: self.occupancy.clone(),
            status: self.status,
            tick_interval: self.interval.current()
        }
    }

    pub fn advance_tick(&mut self) -> TickResult {
        if self.status != GameStatus::Running {
            return self.snapshot();
        }

        self.steer_agents();

        let next = [
            self.agents[0].peek_next(self.agents[0].heading()),
            self.agents[1].peek_next(self.agents[1].heading())
        ];
        let crashed = resolve_collisions(&self.grid, &self.occupancy, next);

        for i in 0..2 {
            if crashed[i] {
                self.agents[i].mark_dead();
            } else {
                self.agents[i].commit_move(next[i]);
                self.occupancy.insert(next[i]);
            }
        }

        self.tick += 1;
        self.status = match (crashed[0], crashed[1]) {
            (true, true) => GameStatus::Ended(Outcome::Draw),
            (false, true) => GameStatus::Ended(Outcome::Won(AgentId::Player1)),
            (true, false) => GameStatus::Ended(Outcome::Won(AgentId::Player2)),
            (false, false) => GameStatus::Running,
        };

        self.interval.update(self.clock.now());

        self.snapshot()
    }

    fn steer_agents(&mut self) {
        for i in 0..2 {
            let heading = match self.controllers[i] {
                Controller::Human => self.pending[i].take(),
                Controller::Ai => Some(lookahead::choose_heading(
                    &self.agents[i], &self.grid, &self.occupancy, &self.settings.policy, &mut self.rng
                ))
            };
            if let Some(heading) = heading {
                self.agents[i].steer(heading);
            }
        }
    }
}

/// Which agents crash if they step onto `next` from the given board.
/// Walls and trails are checked per agent, then two agents heading for
/// the same cell both crash on top of that.
pub fn resolve_collisions(grid: &Grid, occupancy: &Occupancy, next: [Point; 2]) -> [bool; 2] {
    let mut crashed = [false; 2];
    for i in 0..2 {
        crashed[i] = !grid.contains(next[i]) || occupancy.contains(next[i]);
    }
    if next[0] == next[1] {
        crashed = [true, true];
    }
    crashed
}
