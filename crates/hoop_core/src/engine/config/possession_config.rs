//! Possession outcome constants

use serde::{Deserialize, Serialize};

/// Fixed chances applied after a shot resolves.
///
/// Neither value is influenced by player or team attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PossessionConfig {
    /// 득점 후 어시스트가 기록될 확률 (기본: 0.5)
    pub assist_chance: f64,
    /// 실패한 슛의 리바운드를 수비 팀이 잡을 확률 (기본: 0.7)
    pub defensive_rebound_chance: f64,
}

impl Default for PossessionConfig {
    fn default() -> Self {
        Self { assist_chance: 0.5, defensive_rebound_chance: 0.7 }
    }
}
