//! Read-only projections over teams, players and the event log.
//!
//! Every rate here uses the innings' own `balls_per_over`, so five-ball
//! formats report the same way six-ball formats do.

pub mod display;
pub mod figures;
pub mod rates;
pub mod wickets;

pub use display::{ball_display, current_over_display, format_bowler_overs, format_overs, over_display};
pub use figures::{
    describe_dismissal, economy, maidens, scorecard, strike_rate, BattingLine, BowlingLine,
    Scorecard,
};
pub use rates::{
    chase_required_run_rate, current_run_rate, innings_run_rate, required_run_rate,
    run_rate_progression, OverProgress,
};
pub use wickets::{current_partnership, wicket_falls, Partnership, WicketFall};
