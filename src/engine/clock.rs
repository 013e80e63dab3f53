use std::cell::Cell;
use std::cmp;
use std::fmt;

use time::{Duration, PreciseTime};

use engine::settings::SpeedSettings;

/// Time elapsed since the clock was started. The engine only ever
/// asks how long it has been, it never sleeps.
pub trait Clock {
    fn now(&self) -> Duration;
}

#[derive(Clone, Copy)]
pub struct WallClock {
    start: PreciseTime
}

impl fmt::Debug for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WallClock {{ elapsed: {} }}", self.now())
    }
}

impl WallClock {
    pub fn start() -> WallClock {
        WallClock { start: PreciseTime::now() }
    }
}

impl Clock for WallClock {
    fn now(&self) -> Duration {
        self.start.to(PreciseTime::now())
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Duration>
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock { now: Cell::new(Duration::zero()) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> ManualClock {
        ManualClock::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<'a, C: Clock> Clock for &'a C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// The interval between ticks. It gets shorter by a fixed step every
/// time a full period has passed since the last speed up, and stops at
/// the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval {
    settings: SpeedSettings,
    interval: Duration,
    last_speed_up: Duration
}

impl TickInterval {
    pub fn new(settings: SpeedSettings, now: Duration) -> TickInterval {
        TickInterval {
            settings,
            interval: settings.start_tick,
            last_speed_up: now
        }
    }

    pub fn current(&self) -> Duration {
        self.interval
    }

    /// Returns true if the interval was shortened. Only one step is
    /// taken per call however long it has been.
    pub fn update(&mut self, now: Duration) -> bool {
        if now - self.last_speed_up > self.settings.period {
            self.interval = cmp::max(self.settings.min_tick, self.interval - self.settings.step);
            self.last_speed_up = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: i64) -> Duration {
        Duration::milliseconds(millis)
    }

    #[test]
    fn nothing_changes_before_the_period_is_over() {
        let mut interval = TickInterval::new(SpeedSettings::default(), ms(0));
        assert!(!interval.update(ms(8000)));
        assert_eq!(interval.current(), ms(100));
    }

    #[test]
    fn speeds_up_once_per_period() {
        let mut interval = TickInterval::new(SpeedSettings::default(), ms(0));
        assert!(interval.update(ms(8001)));
        assert_eq!(interval.current(), ms(95));
        assert!(!interval.update(ms(9000)));
        assert!(interval.update(ms(16002)));
        assert_eq!(interval.current(), ms(90));
    }

    #[test]
    fn a_long_gap_only_counts_once() {
        let mut interval = TickInterval::new(SpeedSettings::default(), ms(0));
        assert!(interval.update(ms(60000)));
        assert_eq!(interval.current(), ms(95));
    }

    #[test]
    fn never_drops_below_the_minimum() {
        let mut interval = TickInterval::new(SpeedSettings::default(), ms(0));
        let mut now = ms(0);
        for _ in 0..100 {
            now = now + ms(8001);
            interval.update(now);
            assert!(interval.current() >= ms(30));
        }
        assert_eq!(interval.current(), ms(30));
    }

    #[test]
    fn wall_clock_prints_elapsed_time() {
        let clock = WallClock::start();
        assert!(format!("{:?}", clock).starts_with("WallClock { elapsed: "));
        assert!(clock.now() >= Duration::zero());
    }

    #[test]
    fn manual_clock_moves_only_when_advanced() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), ms(0));
        clock.advance(ms(250));
        assert_eq!(clock.now(), ms(250));
    }
}
