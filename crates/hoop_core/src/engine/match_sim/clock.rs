//! Quarter clock
//!
//! ```text
//! InQuarter(q, t) --possession--> InQuarter(q, t - d)        while t > 0
//! InQuarter(q, t<=0) ----------->  InQuarter(q + 1, full)    if q < quarters
//! InQuarter(q, t<=0) ----------->  Finished                  otherwise
//! ```

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::engine::config::{ClockConfig, PossessionClock};
use crate::models::{MatchConfig, Pace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    InQuarter { quarter: u32, time_remaining: i32 },
    Finished,
}

#[derive(Debug, Clone)]
pub struct GameClock {
    quarters: u32,
    quarter_duration: i32,
    quarter: u32,
    time_remaining: i32,
    finished: bool,
}

impl GameClock {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            quarters: config.quarters,
            quarter_duration: config.quarter_duration(),
            quarter: 1,
            time_remaining: config.quarter_duration(),
            finished: false,
        }
    }

    pub fn state(&self) -> ClockState {
        if self.finished {
            ClockState::Finished
        } else {
            ClockState::InQuarter { quarter: self.quarter, time_remaining: self.time_remaining }
        }
    }

    pub fn quarter(&self) -> u32 {
        self.quarter
    }

    pub fn time_remaining(&self) -> i32 {
        self.time_remaining
    }

    pub fn quarter_duration(&self) -> i32 {
        self.quarter_duration
    }

    /// True while another possession fits in the current quarter.
    pub fn has_time(&self) -> bool {
        !self.finished && self.time_remaining > 0
    }

    pub fn run_off(&mut self, seconds: i32) {
        if !self.finished {
            self.time_remaining -= seconds;
        }
    }

    /// Close the current quarter. Returns the quarter that ended when
    /// another one follows, `None` when the match is over.
    pub fn end_quarter(&mut self) -> Option<u32> {
        if self.finished {
            return None;
        }
        if self.quarter < self.quarters {
            let ended = self.quarter;
            self.quarter += 1;
            self.time_remaining = self.quarter_duration;
            Some(ended)
        } else {
            self.finished = true;
            None
        }
    }
}

/// Seconds one possession takes off the clock.
pub fn possession_duration<R: Rng + ?Sized>(pace: Pace, config: &ClockConfig, rng: &mut R) -> i32 {
    match config.possession_clock {
        PossessionClock::Fixed => i32::try_from(config.fixed_possession_secs).unwrap_or(i32::MAX),
        PossessionClock::PaceBased => {
            let mean = pace.mean_possession_secs();
            let sampled = match Normal::new(mean, config.pace_spread_secs) {
                Ok(dist) => dist.sample(rng),
                Err(_) => mean,
            };
            let lo = config.min_possession_secs as f64;
            let hi = config.max_possession_secs as f64;
            sampled.round().clamp(lo, hi) as i32
        }
    }
}
