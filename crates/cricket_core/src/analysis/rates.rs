use serde::{Deserialize, Serialize};

use crate::models::{Innings, Match};

/// Runs per over at the current scoring pace.
pub fn current_run_rate(score: u32, overs: u32, balls: u32, balls_per_over: u32) -> f64 {
    let legal_balls = overs * balls_per_over + balls;
    if legal_balls == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(legal_balls) * f64::from(balls_per_over)
}

/// Runs per over needed to reach the target from what is left.
///
/// `None` when no balls remain. Never negative.
pub fn required_run_rate(runs_needed: u32, balls_remaining: u32, balls_per_over: u32) -> Option<f64> {
    if runs_needed == 0 {
        return Some(0.0);
    }
    if balls_remaining == 0 {
        return None;
    }
    let rate = f64::from(runs_needed) / f64::from(balls_remaining) * f64::from(balls_per_over);
    Some(rate.max(0.0))
}

/// Run rate of the innings being played.
pub fn innings_run_rate(m: &Match) -> f64 {
    let innings = m.current_innings();
    current_run_rate(
        m.batting_team().score,
        innings.over_number,
        innings.legal_balls_in_current_over,
        innings.balls_per_over,
    )
}

/// Required rate of the chase; `None` outside an over-limited second innings.
pub fn chase_required_run_rate(m: &Match) -> Option<f64> {
    let innings = m.innings2.as_ref()?;
    let target = innings.target?;
    let balls_remaining = innings.balls_remaining()?;
    let score = m.team(innings.batting_team).score;
    required_run_rate(target.saturating_sub(score), balls_remaining, innings.balls_per_over)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OverProgress {
    /// 1-based over number.
    pub over: u32,
    pub runs: u32,
    pub cumulative: u32,
    pub run_rate: f64,
}

/// Per-over runs and cumulative run rate for every completed over, found by
/// replaying the event log.
pub fn run_rate_progression(innings: &Innings) -> Vec<OverProgress> {
    let mut progression = Vec::new();
    let mut cumulative = 0;
    let mut over_runs = 0;

    for event in &innings.events {
        let runs = event.total_runs();
        cumulative += runs;
        over_runs += runs;

        if event.legal && event.ball == innings.balls_per_over {
            let over = event.over + 1;
            progression.push(OverProgress {
                over,
                runs: over_runs,
                cumulative,
                run_rate: f64::from(cumulative) / f64::from(over),
            });
            over_runs = 0;
        }
    }

    progression
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::engine::*;
    use crate::models::TeamId;
    use crate::test_support::started_match;

    #[test]
    fn run_rate_scales_by_over_length() {
        assert_eq!(current_run_rate(0, 0, 0, 6), 0.0);
        assert!((current_run_rate(45, 6, 3, 6) - 6.923).abs() < 0.001);
        assert!((current_run_rate(50, 10, 0, 5) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn required_rate_edges() {
        assert_eq!(required_run_rate(0, 0, 6), Some(0.0));
        assert_eq!(required_run_rate(10, 0, 6), None);
        assert_eq!(required_run_rate(12, 12, 6), Some(6.0));
    }

    #[test]
    fn progression_buckets_extras_into_their_over() {
        let mut m = started_match(MatchConfig::hundred());
        apply_wide(&mut m, 0).unwrap();
        for runs in [1, 2, 0, 0, 4] {
            apply_run(&mut m, runs).unwrap();
        }
        end_over_and_change_bowler(&mut m, "b10").unwrap();
        apply_no_ball(&mut m, 0).unwrap();
        apply_bye(&mut m, 2).unwrap();
        for runs in [0, 0, 0, 6] {
            apply_run(&mut m, runs).unwrap();
        }
        end_over_and_change_bowler(&mut m, "b11").unwrap();
        apply_run(&mut m, 1).unwrap();

        let progression = run_rate_progression(&m.innings1);

        assert_eq!(progression.len(), 2);
        assert_eq!(
            progression[0],
            OverProgress { over: 1, runs: 8, cumulative: 8, run_rate: 8.0 }
        );
        assert_eq!(
            progression[1],
            OverProgress { over: 2, runs: 9, cumulative: 17, run_rate: 8.5 }
        );
        // 18 runs off 11 five-ball deliveries
        assert!((innings_run_rate(&m) - 18.0 / 11.0 * 5.0).abs() < 1e-9);
    }

    #[test]
    fn chase_rate_follows_the_target() {
        let mut m = started_match(MatchConfig { max_overs: Some(1), ..MatchConfig::t20() });
        assert_eq!(chase_required_run_rate(&m), None);
        for runs in [1, 2, 4, 0, 6, 1] {
            apply_run(&mut m, runs).unwrap();
        }
        start_second_innings(&mut m).unwrap();
        set_opening_players(&mut m, "b1", "b2", "a11").unwrap();
        assert_eq!(chase_required_run_rate(&m), Some(15.0));

        apply_run(&mut m, 6).unwrap();
        apply_run(&mut m, 6).unwrap();
        assert_eq!(chase_required_run_rate(&m), Some(4.5));

        apply_run(&mut m, 4).unwrap();
        assert_eq!(chase_required_run_rate(&m), Some(0.0));
    }

    #[test]
    fn chase_rate_needs_an_over_limit() {
        let mut m = started_match(MatchConfig::unlimited());
        m.innings2 = Some(Innings::new(TeamId::B, &m.config).with_target(10));
        assert_eq!(chase_required_run_rate(&m), None);
    }
}
