//! # Engine Configuration Module
//!
//! 시뮬레이션 튜닝 상수를 한 곳에서 관리한다.
//!
//! ## 사용법
//! ```rust
//! use hoop_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let arcade = EngineConfig::arcade();
//! assert!(arcade.validate().is_ok());
//! ```

mod clock_config;
mod possession_config;

pub use clock_config::{ClockConfig, PossessionClock, POSSESSION_SECS_CAP};
pub use possession_config::PossessionConfig;

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    /// Assist / rebound chances
    #[serde(default)]
    pub possession: PossessionConfig,
    /// Possession clock
    #[serde(default)]
    pub clock: ClockConfig,
}

impl EngineConfig {
    /// 기본 설정
    pub fn realistic() -> Self {
        Self::default()
    }

    /// 아케이드 스타일 (어시스트 증가, 공격 리바운드 증가, 빠른 템포 편차)
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.possession.assist_chance = 0.65;
        cfg.possession.defensive_rebound_chance = 0.6;
        cfg.clock.pace_spread_secs = 5.0;
        cfg
    }

    /// 포제션마다 24초를 소모하는 고정 시계
    pub fn fixed_clock() -> Self {
        let mut cfg = Self::default();
        cfg.clock.possession_clock = PossessionClock::Fixed;
        cfg
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// `.yaml`/`.yml` 파일은 YAML, 그 외는 JSON으로 읽는다.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_probability("assist_chance", self.possession.assist_chance)?;
        check_probability("defensive_rebound_chance", self.possession.defensive_rebound_chance)?;

        let clock = &self.clock;
        if !(1..=POSSESSION_SECS_CAP).contains(&clock.fixed_possession_secs) {
            return Err(ConfigError::InvalidTuning(format!(
                "fixed_possession_secs must be within 1..={POSSESSION_SECS_CAP}, got {}",
                clock.fixed_possession_secs
            )));
        }
        if !clock.pace_spread_secs.is_finite() || clock.pace_spread_secs < 0.0 {
            return Err(ConfigError::InvalidTuning(format!(
                "pace_spread_secs must be a non-negative number, got {}",
                clock.pace_spread_secs
            )));
        }
        if clock.min_possession_secs == 0
            || clock.min_possession_secs > clock.max_possession_secs
            || clock.max_possession_secs > POSSESSION_SECS_CAP
        {
            return Err(ConfigError::InvalidTuning(format!(
                "possession bounds must satisfy 1 <= min <= max <= {POSSESSION_SECS_CAP}, got {}..={}",
                clock.min_possession_secs, clock.max_possession_secs
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> std::result::Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning(format!("{name} must be within [0, 1], got {value}")))
    }
}

// ========== Tests ==========
