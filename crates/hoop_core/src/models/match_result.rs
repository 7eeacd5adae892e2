//! Match Record
//!
//! 한 경기의 영속화용 요약. 경기 상태(`GameState`)에서 만들어지며
//! 저장소(파일, DB 행)에 그대로 쓸 수 있는 형태를 가진다.
//!
//! ```text
//! GameState ──► MatchRecord::from_state()
//!                 ├─► replay_data   (이벤트 로그 JSON)
//!                 ├─► *_stats       (박스스코어 JSON)
//!                 ├─► mvp           (승리 팀 최고 기여 선수)
//!                 └─► fingerprint   (SHA-256, 같은 시드 = 같은 값)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use uuid::Uuid;

use super::{GameState, PlayerStats, TeamSide};
use crate::error::{MatchError, Result};

/// 경기 MVP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvpSummary {
    pub player_id: String,
    pub name: String,
    pub team: TeamSide,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub impact: u32,
}

impl MvpSummary {
    fn from_stats(stats: &PlayerStats) -> Self {
        Self {
            player_id: stats.player_id.clone(),
            name: stats.name.clone(),
            team: stats.team,
            points: stats.totals.points,
            rebounds: stats.totals.rebounds,
            assists: stats.totals.assists,
            impact: stats.impact(),
        }
    }

    /// 승리 팀(무승부면 양 팀) 중 impact 최댓값. 동률은 득점, 그다음 선수 ID 순.
    pub fn select(state: &GameState) -> Option<Self> {
        let candidates: Vec<&PlayerStats> = match state.winner() {
            Some(side) => state.players_of(side).collect(),
            None => state.player_stats.values().collect(),
        };

        candidates
            .into_iter()
            .max_by(|a, b| rank(a, b))
            .map(Self::from_stats)
    }
}

fn rank(a: &PlayerStats, b: &PlayerStats) -> Ordering {
    a.impact()
        .cmp(&b.impact())
        .then(a.totals.points.cmp(&b.totals.points))
        // smaller id ranks higher
        .then(b.player_id.cmp(&a.player_id))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub played_at: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    pub seed: u64,
    pub home_score: u32,
    pub away_score: u32,
    /// 이벤트 로그 JSON 배열
    pub replay_data: String,
    pub home_stats: String,
    pub away_stats: String,
    pub player_stats: String,
    pub mvp: Option<MvpSummary>,
    pub fingerprint: String,
}

impl MatchRecord {
    pub fn from_state(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        seed: u64,
        state: &GameState,
    ) -> Result<Self> {
        let replay_data = serde_json::to_string(&state.events)?;
        let fingerprint = fingerprint(&replay_data, state.home_score, state.away_score);

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            played_at: Utc::now(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            seed,
            home_score: state.home_score,
            away_score: state.away_score,
            replay_data,
            home_stats: serde_json::to_string(&state.home_stats)?,
            away_stats: serde_json::to_string(&state.away_stats)?,
            player_stats: serde_json::to_string(&state.player_stats)?,
            mvp: MvpSummary::select(state),
            fingerprint,
        })
    }

    /// 리플레이와 점수가 지문과 일치하는지 확인
    pub fn verify(&self) -> bool {
        fingerprint(&self.replay_data, self.home_score, self.away_score) == self.fingerprint
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MatchError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

fn fingerprint(replay_data: &str, home_score: u32, away_score: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(replay_data.as_bytes());
    hasher.update(format!("|{}:{}", home_score, away_score).as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
