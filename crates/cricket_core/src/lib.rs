//! # cricket_core - Ball-by-ball Cricket Scoring Engine
//!
//! Scores a limited-overs match one delivery at a time and exposes derived
//! statistics to display layers.
//!
//! ## Features
//! - Append-only ball-event log with exact single-step undo
//! - Runs, extras, wickets and the free-hit rule
//! - Over and strike bookkeeping for any over length
//! - Innings/match completion with result text
//! - Run rates, fall of wickets, partnerships and scorecards
//!
//! The engine is synchronous and keeps no state of its own: every operation
//! takes the [`Match`] it mutates. Persisting the match after each call (and
//! resolving concurrent scorers) is up to the caller.

pub mod analysis;
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

#[cfg(test)]
mod test_support;

pub use api::{apply_command, ApiError, MatchSetup, ScoringCommand};
pub use config::MatchConfig;
pub use engine::{
    apply_bye, apply_dead_ball, apply_leg_bye, apply_no_ball, apply_penalty, apply_run,
    apply_wicket, apply_wide, end_over_and_change_bowler, get_match_result, is_innings_complete,
    set_next_batter, set_opening_players, start_second_innings, undo_last_event,
    update_match_result,
};
pub use error::{ConfigError, Result, ScoringError};
pub use models::{
    BallEvent, Delivery, DismissalKind, EventKind, Innings, Match, MatchPhase, Player, Team,
    TeamId, Toss, TossDecision,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
