//! Command and JSON surface for UIs and the command-line scorer.

pub mod commands;
pub mod json_api;

pub use commands::{apply_command, ScoringCommand};
pub use json_api::{
    apply_commands, apply_commands_json, match_from_json, match_to_json, new_match, new_match_json,
    MatchSetup, PlayerData, TeamData,
};

use thiserror::Error;

use crate::error::{ConfigError, ScoringError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid setup: {0}")]
    InvalidSetup(String),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Command {index} failed: {source}")]
    Command {
        index: usize,
        #[source]
        source: ScoringError,
    },
}
