//! # Match Configuration
//!
//! Format rules that vary between competitions: over length, innings length
//! and how many wickets end an innings.
//!
//! ```rust
//! use cricket_core::config::MatchConfig;
//!
//! let t20 = MatchConfig::t20();
//! let hundred = MatchConfig::hundred();
//! assert_eq!(hundred.balls_per_over, 5);
//! ```

mod env;

pub use env::{config_from_env, MATCH_CONFIG_PATH_ENV};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BALLS_PER_OVER: u32 = 6;
pub const DEFAULT_MAX_WICKETS: u32 = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Overs per innings; `None` for an innings limited only by wickets.
    #[serde(default)]
    pub max_overs: Option<u32>,
    #[serde(default = "default_balls_per_over")]
    pub balls_per_over: u32,
    #[serde(default = "default_max_wickets")]
    pub max_wickets: u32,
}

fn default_balls_per_over() -> u32 {
    DEFAULT_BALLS_PER_OVER
}

fn default_max_wickets() -> u32 {
    DEFAULT_MAX_WICKETS
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::t20()
    }
}

impl MatchConfig {
    /// 20 six-ball overs.
    pub fn t20() -> Self {
        Self {
            max_overs: Some(20),
            balls_per_over: DEFAULT_BALLS_PER_OVER,
            max_wickets: DEFAULT_MAX_WICKETS,
        }
    }

    /// 50 six-ball overs.
    pub fn odi() -> Self {
        Self { max_overs: Some(50), ..Self::t20() }
    }

    /// 100 balls bowled as 20 sets of five.
    pub fn hundred() -> Self {
        Self { max_overs: Some(20), balls_per_over: 5, ..Self::t20() }
    }

    /// No over limit; the innings ends on wickets (or a met target).
    pub fn unlimited() -> Self {
        Self { max_overs: None, ..Self::t20() }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.balls_per_over == 0 {
            return Err(ConfigError::Invalid("balls_per_over must be at least 1".to_string()));
        }
        if self.max_overs == Some(0) {
            return Err(ConfigError::Invalid("max_overs must be at least 1".to_string()));
        }
        if self.max_wickets == 0 || self.max_wickets > DEFAULT_MAX_WICKETS {
            return Err(ConfigError::Invalid(format!(
                "max_wickets must be 1..={DEFAULT_MAX_WICKETS}, got {}",
                self.max_wickets
            )));
        }
        Ok(())
    }

    /// Total legal balls in a full innings, if the innings is over-limited.
    pub fn balls_per_innings(&self) -> Option<u32> {
        self.max_overs.map(|overs| overs * self.balls_per_over)
    }
}
