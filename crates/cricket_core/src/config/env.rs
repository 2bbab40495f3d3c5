use std::{env, fs};

use super::MatchConfig;
use crate::error::ConfigError;

pub const MATCH_CONFIG_PATH_ENV: &str = "CRICKET_MATCH_CONFIG_PATH";

/// Load a [`MatchConfig`] from the JSON file named by `CRICKET_MATCH_CONFIG_PATH`.
///
/// Returns `Ok(None)` when the variable is unset or blank.
pub fn config_from_env() -> Result<Option<MatchConfig>, ConfigError> {
    let Ok(path) = env::var(MATCH_CONFIG_PATH_ENV) else {
        return Ok(None);
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_string(), source })?;

    let config = MatchConfig::from_json(&content)?;
    log::info!("Loaded match config from {MATCH_CONFIG_PATH_ENV}='{path}'");
    Ok(Some(config))
}
