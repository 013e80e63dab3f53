use std::fs::File;
use std::io::prelude::*;
use serde_json;
use std::error::Error;

use time::Duration;

use engine::geometry::{Point, Heading};
use engine::settings::{GameSettings, Spawn};

pub fn read_settings_from_file(filename: &str) -> Result<GameSettings, Box<Error>> {
    let mut file = File::open(filename)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    read_settings_from_str(&content)
}

/// Every field is optional; anything left out keeps its default.
pub fn read_settings_from_str(content: &str) -> Result<GameSettings, Box<Error>> {
    let file: SettingsFile = serde_json::from_str(content)?;
    let settings = file.to_engine_settings()?;
    settings.validate()?;
    Ok(settings)
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct SettingsFile {
    height: Option<i32>,
    width: Option<i32>,
    spawns: Option<[SpawnEntry; 2]>,
    start_tick_seconds: Option<f64>,
    speed_step_seconds: Option<f64>,
    speed_up_period_seconds: Option<f64>,
    min_tick_seconds: Option<f64>,
    ai_randomness: Option<f64>,
    lookahead_depth: Option<u32>
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpawnEntry {
    row: i32,
    col: i32,
    heading: String
}

impl SettingsFile {
    fn to_engine_settings(&self) -> Result<GameSettings, Box<Error>> {
        let mut settings = GameSettings::default();

        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(ref spawns) = self.spawns {
            settings.spawns = Some([spawns[0].to_engine()?, spawns[1].to_engine()?]);
        }

        if let Some(seconds) = self.start_tick_seconds {
            settings.speed.start_tick = seconds_to_duration(seconds);
        }
        if let Some(seconds) = self.speed_step_seconds {
            settings.speed.step = seconds_to_duration(seconds);
        }
        if let Some(seconds) = self.speed_up_period_seconds {
            settings.speed.period = seconds_to_duration(seconds);
        }
        if let Some(seconds) = self.min_tick_seconds {
            settings.speed.min_tick = seconds_to_duration(seconds);
        }

        if let Some(randomness) = self.ai_randomness {
            settings.policy.randomness = randomness;
        }
        if let Some(depth) = self.lookahead_depth {
            settings.policy.lookahead_depth = depth;
        }

        Ok(settings)
    }
}

impl SpawnEntry {
    fn to_engine(&self) -> Result<Spawn, Box<Error>> {
        Ok(Spawn {
            position: Point::new(self.row, self.col),
            heading: self.heading.parse::<Heading>()?
        })
    }
}

fn seconds_to_duration(seconds: f64) -> Duration {
    Duration::microseconds((seconds * 1_000_000.0).round() as i64)
}
