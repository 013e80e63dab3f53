use std::cmp;
use std::error::Error;
use std::fmt;

use time::Duration;

use engine::agent::AgentId;
use engine::constants::*;
use engine::geometry::{Point, Heading};
use engine::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub position: Point,
    pub heading: Heading
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub height: i32,
    pub width: i32,
    /// Overrides the standard layout, player 1 first.
    pub spawns: Option<[Spawn; 2]>,
    pub speed: SpeedSettings,
    pub policy: PolicySettings
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedSettings {
    pub start_tick: Duration,
    pub step: Duration,
    pub period: Duration,
    pub min_tick: Duration
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicySettings {
    /// Chance that the AI picks a random legal heading instead of
    /// thinking about it.
    pub randomness: f64,
    pub lookahead_depth: u32
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    NonPositiveDimensions { height: i32, width: i32 },
    FieldTooLarge { height: i32, width: i32 },
    SpawnOutOfBounds(AgentId, Point),
    SpawnsOverlap(Point),
    InvalidRandomness(f64),
    InvalidLookaheadDepth(u32),
    InvalidTiming(&'static str)
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigurationError::NonPositiveDimensions { height, width } =>
                write!(f, "field must be at least 1x1, got {}x{}", height, width),
            ConfigurationError::FieldTooLarge { height, width } =>
                write!(f, "field must be at most {0}x{0}, got {1}x{2}", MAX_FIELD_SIDE, height, width),
            ConfigurationError::SpawnOutOfBounds(id, p) =>
                write!(f, "{} spawns outside the field at {}", id, p),
            ConfigurationError::SpawnsOverlap(p) =>
                write!(f, "both players spawn at {}", p),
            ConfigurationError::InvalidRandomness(p) =>
                write!(f, "AI randomness must be between 0 and 1, got {}", p),
            ConfigurationError::InvalidLookaheadDepth(depth) =>
                write!(f, "AI lookahead depth must be at least 1, got {}", depth),
            ConfigurationError::InvalidTiming(reason) =>
                write!(f, "invalid tick timing: {}", reason),
        }
    }
}

impl Error for ConfigurationError {}

impl Default for GameSettings {
    fn default() -> GameSettings {
        GameSettings {
            height: FIELD_HEIGHT,
            width: FIELD_WIDTH,
            spawns: None,
            speed: SpeedSettings::default(),
            policy: PolicySettings::default()
        }
    }
}

impl Default for SpeedSettings {
    fn default() -> SpeedSettings {
        SpeedSettings {
            start_tick: Duration::milliseconds(START_TICK_MILLIS),
            step: Duration::milliseconds(SPEED_STEP_MILLIS),
            period: Duration::milliseconds(SPEED_UP_PERIOD_MILLIS),
            min_tick: Duration::milliseconds(MIN_TICK_MILLIS)
        }
    }
}

impl Default for PolicySettings {
    fn default() -> PolicySettings {
        PolicySettings {
            randomness: AI_RANDOMNESS,
            lookahead_depth: LOOKAHEAD_DEPTH
        }
    }
}

impl GameSettings {
    pub fn grid(&self) -> Result<Grid, ConfigurationError> {
        Grid::new(self.height, self.width)
    }

    /// Player 1 a sixth of the way in from the left heading right,
    /// player 2 the same distance from the right heading left, both on
    /// the middle row.
    pub fn standard_spawns(height: i32, width: i32) -> [Spawn; 2] {
        let row = height / 2;
        [
            Spawn {
                position: Point::new(row, cmp::max(2, width / 6)),
                heading: Heading::Right
            },
            Spawn {
                position: Point::new(row, cmp::max(3, width - width / 6)),
                heading: Heading::Left
            }
        ]
    }

    pub fn spawns(&self) -> [Spawn; 2] {
        self.spawns.unwrap_or_else(|| GameSettings::standard_spawns(self.height, self.width))
    }

    /// Shrinks the field so that it fits a terminal of the given size,
    /// but never below 8x16.
    pub fn fit_to_terminal(&self, rows: i32, cols: i32) -> GameSettings {
        let usable_height = rows - TERMINAL_MARGIN;
        let usable_width = (cols - TERMINAL_MARGIN) / CELL_CHARS;
        GameSettings {
            height: cmp::min(self.height, cmp::max(MIN_FIELD_HEIGHT, usable_height)),
            width: cmp::min(self.width, cmp::max(MIN_FIELD_WIDTH, usable_width)),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<Grid, ConfigurationError> {
        let grid = self.grid()?;

        let spawns = self.spawns();
        for (id, spawn) in AgentId::all().iter().zip(spawns.iter()) {
            if !grid.contains(spawn.position) {
                return Err(ConfigurationError::SpawnOutOfBounds(*id, spawn.position));
            }
        }
        if spawns[0].position == spawns[1].position {
            return Err(ConfigurationError::SpawnsOverlap(spawns[0].position));
        }

        self.speed.validate()?;
        self.policy.validate()?;
        Ok(grid)
    }
}

impl SpeedSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.min_tick <= Duration::zero() {
            return Err(ConfigurationError::InvalidTiming("minimum tick must be positive"));
        }
        if self.start_tick < self.min_tick {
            return Err(ConfigurationError::InvalidTiming("starting tick is below the minimum tick"));
        }
        if self.step < Duration::zero() {
            return Err(ConfigurationError::InvalidTiming("speed step must not be negative"));
        }
        if self.period <= Duration::zero() {
            return Err(ConfigurationError::InvalidTiming("speed up period must be positive"));
        }
        Ok(())
    }
}

impl PolicySettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.randomness >= 0.0 && self.randomness <= 1.0) {
            return Err(ConfigurationError::InvalidRandomness(self.randomness));
        }
        if self.lookahead_depth == 0 {
            return Err(ConfigurationError::InvalidLookaheadDepth(self.lookahead_depth));
        }
        Ok(())
    }
}
