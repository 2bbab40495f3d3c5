//! # Scoring Engine
//!
//! Free functions over an explicitly passed [`Match`](crate::models::Match).
//! The engine keeps no state of its own.
//!
//! Callers apply an operation, then run [`update_match_result`] to refresh
//! the phase and result text, then persist the match if they need to.
//!
//! ```rust
//! use cricket_core::engine::{apply_run, set_opening_players, update_match_result};
//! # use cricket_core::config::MatchConfig;
//! # use cricket_core::models::{Match, Player, Team, TeamId, Toss, TossDecision};
//! # let squad = |p: &str| -> Vec<Player> {
//! #     (1..=11).map(|i| Player::new(format!("{p}{i}"), format!("{p}{i}"))).collect()
//! # };
//! # let mut m = Match::new(
//! #     Team::new(TeamId::A, "Alpha", squad("a")),
//! #     Team::new(TeamId::B, "Beta", squad("b")),
//! #     Toss { winner: TeamId::A, decision: TossDecision::Bat },
//! #     MatchConfig::t20(),
//! # );
//! set_opening_players(&mut m, "a1", "a2", "b11").unwrap();
//! apply_run(&mut m, 4).unwrap();
//! update_match_result(&mut m);
//! assert_eq!(m.result, "Alpha 4/0 (0.1 ov)");
//! ```

pub mod batters;
pub mod completion;
pub mod over;
pub mod scoring;
pub mod undo;

#[cfg(test)]
mod tests;

pub use batters::set_next_batter;
pub use completion::{
    get_match_result, innings_complete, is_innings_complete, start_second_innings,
    update_match_result,
};
pub use over::{end_over_and_change_bowler, set_opening_players, swap_strike};
pub use scoring::{
    apply_bye, apply_dead_ball, apply_leg_bye, apply_no_ball, apply_penalty, apply_run,
    apply_wicket, apply_wide, MAX_RUNS_PER_DELIVERY,
};
pub use undo::undo_last_event;
