use std::error::Error;
use std::fmt;

use rand::Rng;

use engine::{Game, Mode, TickResult};
use engine::agent::{Agent, AgentId};
use engine::clock::Clock;
use engine::geometry::{Point, Heading};
use engine::grid::Grid;
use engine::settings::{GameSettings, Spawn};

const EMPTY: char = '.';
const HEADS: [char; 2] = ['1', '2'];
const TRAILS: [char; 2] = ['a', 'b'];

/// A board drawn as text, one character per cell:
///
/// ```text
/// ..........
/// .aa1...2b.
/// ..........
/// ```
///
/// `1` and `2` are the heads, `a` and `b` their trails, `.` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub grid: Grid,
    pub agents: [Agent; 2]
}

pub fn read_board(map: &str, headings: [Heading; 2]) -> Result<Board, Box<Error>> {
    let rows: Vec<&str> = map.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    let height = rows.len() as i32;
    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as i32;
    let grid = Grid::new(height, width)?;

    let mut heads = [None, None];
    let mut trail1 = Vec::new();
    let mut trail2 = Vec::new();

    for (row, line) in rows.iter().enumerate() {
        if line.chars().count() as i32 != width {
            return Err(format!("row {} is not {} cells wide", row, width).into());
        }
        for (col, c) in line.chars().enumerate() {
            let p = Point::new(row as i32, col as i32);
            match c {
                EMPTY => {},
                c if c == HEADS[0] || c == HEADS[1] => {
                    let i = if c == HEADS[0] { 0 } else { 1 };
                    if heads[i].is_some() {
                        return Err(format!("more than one '{}' on the map", c).into());
                    }
                    heads[i] = Some(p);
                },
                c if c == TRAILS[0] => trail1.push(p),
                c if c == TRAILS[1] => trail2.push(p),
                c => return Err(format!("unknown cell '{}' at {}", c, p).into())
            }
        }
    }

    let head = |i: usize| heads[i].ok_or_else(|| format!("no '{}' on the map", HEADS[i]));
    let (head1, head2) = (head(0)?, head(1)?);

    Ok(Board {
        grid,
        agents: [
            Agent::with_trail(head1, headings[0], AgentId::Player1, trail1),
            Agent::with_trail(head2, headings[1], AgentId::Player2, trail2)
        ]
    })
}

impl Board {
    /// Starts a game from this board. The field size and the spawns in
    /// the settings are replaced with the board's, so a restart goes
    /// back to the heads on an empty field.
    pub fn into_game<C: Clock, R: Rng>(self, settings: GameSettings, mode: Mode, clock: C, rng: R) -> Game<C, R> {
        let settings = GameSettings {
            height: self.grid.height(),
            width: self.grid.width(),
            spawns: Some([
                Spawn { position: self.agents[0].position(), heading: self.agents[0].heading() },
                Spawn { position: self.agents[1].position(), heading: self.agents[1].heading() }
            ]),
            ..settings
        };
        Game::from_parts(settings, self.grid, self.agents, mode, clock, rng)
    }
}

impl fmt::Display for TickResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.grid.width() as usize;
        let mut cells = vec![EMPTY; self.grid.cell_count()];
        for agent in self.agents.iter() {
            let i = agent.id().index();
            for p in agent.trail() {
                cells[p.row as usize * width + p.col as usize] = TRAILS[i];
            }
        }
        for agent in self.agents.iter() {
            let p = agent.position();
            cells[p.row as usize * width + p.col as usize] = HEADS[agent.id().index()];
        }
        for row in cells.chunks(width) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
