use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Match length settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Total playing time in minutes.
    pub duration_minutes: u32,
    pub quarters: u32,
}

impl MatchConfig {
    pub fn new(duration_minutes: u32, quarters: u32) -> Self {
        Self { duration_minutes, quarters }
    }

    /// Seconds on the clock at the start of each quarter.
    pub fn quarter_duration(&self) -> i32 {
        if self.quarters == 0 {
            return 0;
        }
        (self.duration_minutes.saturating_mul(60) / self.quarters) as i32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_minutes == 0 {
            return Err(ConfigError::InvalidDuration { minutes: self.duration_minutes });
        }
        if self.quarters == 0 {
            return Err(ConfigError::InvalidQuarters { quarters: self.quarters });
        }
        // every quarter needs at least one second on the clock
        if self.quarter_duration() <= 0 {
            return Err(ConfigError::InvalidQuarters { quarters: self.quarters });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { duration_minutes: 48, quarters: 4 }
    }
}
