use crate::engine::EngineConfig;
use crate::error::{MatchError, Result};
use std::env;

pub const ENGINE_CONFIG_PATH_ENV: &str = "HOOP_ENGINE_CONFIG";

/// Tuning file named by `HOOP_ENGINE_CONFIG`, if the variable is set.
///
/// Unset or blank → `Ok(None)`. A set variable that points at a missing or
/// invalid file is an error, never a silent fallback.
pub fn engine_config_from_env() -> Result<Option<EngineConfig>> {
    engine_config_from_var(ENGINE_CONFIG_PATH_ENV)
}

fn engine_config_from_var(var: &str) -> Result<Option<EngineConfig>> {
    let Ok(path) = env::var(var) else {
        return Ok(None);
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }

    let config = EngineConfig::from_path(path)?;
    config.validate().map_err(MatchError::from)?;

    log::debug!("Loaded engine config from {var}='{path}'");
    Ok(Some(config))
}
