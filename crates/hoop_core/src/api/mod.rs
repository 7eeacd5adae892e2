pub mod json_api;

mod config_env;

pub use config_env::{engine_config_from_env, ENGINE_CONFIG_PATH_ENV};
pub use json_api::{
    simulate_match_json, simulate_match_json_with_record, MatchRequest, MatchResponse,
};
