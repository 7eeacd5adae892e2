//! Possession clock configuration

use serde::{Deserialize, Serialize};

/// Upper bound for any configured possession length, in seconds.
pub const POSSESSION_SECS_CAP: u32 = 60;

/// How long a possession takes off the quarter clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PossessionClock {
    /// Every possession costs `fixed_possession_secs`.
    Fixed,
    /// Sampled per possession around the attacking team's pace.
    #[default]
    PaceBased,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    pub possession_clock: PossessionClock,
    /// 고정 모드의 포제션 길이 (기본: 24초)
    pub fixed_possession_secs: u32,
    /// 페이스 기반 샘플링의 표준편차 (기본: 3.0초)
    pub pace_spread_secs: f64,
    /// 샘플 하한 (기본: 5초)
    pub min_possession_secs: u32,
    /// 샘플 상한 (기본: 35초)
    pub max_possession_secs: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            possession_clock: PossessionClock::PaceBased,
            fixed_possession_secs: 24,
            pace_spread_secs: 3.0,
            min_possession_secs: 5,
            max_possession_secs: 35,
        }
    }
}
