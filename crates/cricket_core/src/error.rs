use thiserror::Error;

use crate::models::{DismissalKind, MatchPhase};

/// Errors raised by scoring operations.
///
/// Every operation validates before it mutates, so an `Err` always leaves the
/// match untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("No active striker at the crease")]
    NoActiveStriker,

    #[error("No active bowler")]
    NoActiveBowler,

    #[error("Over {over} is complete: change the bowler before the next delivery")]
    OverAlreadyComplete { over: u32 },

    #[error("Over is not complete: {legal_balls} legal balls bowled")]
    OverNotComplete { legal_balls: u32 },

    #[error("{kind:?} is not a valid dismissal on a free hit")]
    InvalidDismissalOnFreeHit { kind: DismissalKind },

    #[error("Event log is empty")]
    EmptyEventLog,

    #[error("Innings is already complete")]
    InningsComplete,

    #[error("Innings has already started")]
    InningsAlreadyStarted,

    #[error("Match is finished")]
    MatchFinished,

    #[error("Operation not allowed in phase {phase:?}")]
    InvalidPhase { phase: MatchPhase },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("Neither batter at the crease is out")]
    NoBatterOut,

    #[error("Batter {id} is out or already at the crease")]
    BatterUnavailable { id: String },

    #[error("Bowler {id} bowled the previous over")]
    ConsecutiveOvers { id: String },

    #[error("Invalid run count: {runs}")]
    InvalidRuns { runs: u32 },
}

impl ScoringError {
    /// Errors the scorer can fix by choosing differently and retrying.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ScoringError::NoActiveStriker => true,
            ScoringError::NoActiveBowler => true,
            ScoringError::OverAlreadyComplete { .. } => true, // prompt for the next bowler
            ScoringError::InvalidDismissalOnFreeHit { .. } => true,
            ScoringError::PlayerNotFound { .. } => true,
            ScoringError::BatterUnavailable { .. } => true,
            ScoringError::ConsecutiveOvers { .. } => true,
            ScoringError::InvalidRuns { .. } => true,
            _ => false,
        }
    }
}

/// Errors raised while loading or validating a [`crate::config::MatchConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
