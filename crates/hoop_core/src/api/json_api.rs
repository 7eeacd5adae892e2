use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::config_env::engine_config_from_env;
use crate::engine::{BasketballGameEngine, EngineConfig};
use crate::error::{MatchError, Result};
use crate::models::{
    EventLog, GameState, MatchConfig, MatchRecord, MvpSummary, PlayerStats, TeamConfig, TeamStats,
};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    #[serde(default)]
    pub match_config: MatchConfig,
    pub home_team: TeamConfig,
    pub away_team: TeamConfig,
    /// Overrides `HOOP_ENGINE_CONFIG` and the defaults.
    #[serde(default)]
    pub engine_config: Option<EngineConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub quarter: u32,
    pub time_remaining: i32,
    pub events: EventLog,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
    pub player_stats: BTreeMap<String, PlayerStats>,
    pub mvp: Option<MvpSummary>,
}

impl MatchResponse {
    fn from_state(request: &MatchRequest, state: GameState) -> Self {
        let mvp = MvpSummary::select(&state);
        Self {
            schema_version: SCHEMA_VERSION,
            seed: request.seed,
            home_team: request.home_team.name.clone(),
            away_team: request.away_team.name.clone(),
            home_score: state.home_score,
            away_score: state.away_score,
            quarter: state.quarter,
            time_remaining: state.time_remaining,
            events: state.events,
            home_stats: state.home_stats,
            away_stats: state.away_stats,
            player_stats: state.player_stats,
            mvp,
        }
    }
}

fn parse_request(request_json: &str) -> Result<MatchRequest> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(MatchError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(request)
}

fn run(request: &MatchRequest) -> Result<GameState> {
    let engine_config = match &request.engine_config {
        Some(config) => config.clone(),
        None => engine_config_from_env()?.unwrap_or_default(),
    };

    let engine = BasketballGameEngine::with_config(
        request.match_config,
        request.home_team.clone(),
        request.away_team.clone(),
        engine_config,
        request.seed,
    )?;
    engine.simulate()
}

/// Simulate a match described by a JSON request and return the JSON response.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request = parse_request(request_json)?;
    let state = run(&request)?;
    let response = MatchResponse::from_state(&request, state);
    serde_json::to_string(&response).map_err(|e| MatchError::Serialization(e.to_string()))
}

/// Same as [`simulate_match_json`], plus the persisted [`MatchRecord`] JSON.
pub fn simulate_match_json_with_record(request_json: &str) -> Result<(String, String)> {
    let request = parse_request(request_json)?;
    let state = run(&request)?;
    let record = MatchRecord::from_state(
        request.home_team.name.clone(),
        request.away_team.name.clone(),
        request.seed,
        &state,
    )?;
    let response = MatchResponse::from_state(&request, state);

    let response_json =
        serde_json::to_string(&response).map_err(|e| MatchError::Serialization(e.to_string()))?;
    Ok((response_json, record.to_json()?))
}
