//! Engine Scenario Tests

#[cfg(test)]
mod scoring_scenarios {
    use crate::config::MatchConfig;
    use crate::engine::*;
    use crate::error::ScoringError;
    use crate::models::*;
    use crate::test_support::*;

    fn player<'a>(m: &'a Match, id: &str) -> &'a Player {
        m.team_a.player(id).or_else(|| m.team_b.player(id)).unwrap()
    }

    fn striker(m: &Match) -> &str {
        m.current_innings().striker_id.as_deref().unwrap()
    }

    fn non_striker(m: &Match) -> &str {
        m.current_innings().non_striker_id.as_deref().unwrap()
    }

    #[test]
    fn boundaries_are_classified() {
        let mut m = started_match(MatchConfig::t20());

        apply_run(&mut m, 4).unwrap();
        apply_run(&mut m, 6).unwrap();
        apply_run(&mut m, 0).unwrap();

        let kinds: Vec<_> = m.innings1.events.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![EventKind::Boundary4, EventKind::Boundary6, EventKind::Run]);

        let stats = player(&m, "a1").batting.unwrap();
        assert_eq!(stats, BattingStats { runs: 10, balls: 3, fours: 1, sixes: 1 });
        assert_eq!(m.team_a.score, 10);
        assert_eq!(striker(&m), "a1");
    }

    #[test]
    fn wide_with_extra_runs_swaps_strike_without_a_ball() {
        let mut m = started_match(MatchConfig::t20());
        apply_run(&mut m, 4).unwrap();
        apply_run(&mut m, 6).unwrap();
        assert_eq!((m.team_a.score, m.team_a.wickets), (10, 0));

        apply_wide(&mut m, 2).unwrap();

        assert_eq!(m.team_a.score, 13);
        assert_eq!(m.team_a.extras.wides, 3);
        assert_eq!(m.innings1.legal_balls_in_current_over, 2);
        assert_eq!(striker(&m), "a2");
        let bowling = player(&m, "b11").bowling.unwrap();
        assert_eq!((bowling.balls, bowling.runs, bowling.wides), (2, 13, 1));
        // the striker faced nothing on the wide
        assert!(player(&m, "a2").batting.is_none());
    }

    #[test]
    fn six_takes_a_centurion_past_the_hundred_without_rotation() {
        let mut m = started_match(MatchConfig::t20());
        m.team_a.players[0].batting =
            Some(BattingStats { runs: 96, balls: 50, fours: 10, sixes: 2 });

        apply_run(&mut m, 6).unwrap();

        let stats = player(&m, "a1").batting.unwrap();
        assert_eq!(stats.runs, 102);
        assert_eq!(stats.balls, 51);
        assert_eq!(stats.sixes, 3);
        assert_eq!(striker(&m), "a1");
    }

    #[test]
    fn no_ball_sets_free_hit_and_counts_for_the_batter() {
        let mut m = started_match(MatchConfig::t20());

        apply_no_ball(&mut m, 4).unwrap();

        let innings = &m.innings1;
        assert!(innings.free_hit);
        assert_eq!(innings.legal_balls_in_current_over, 0);
        assert_eq!(m.team_a.score, 5);
        assert_eq!(m.team_a.extras.no_balls, 1);
        // 1 + 4 is odd
        assert_eq!(striker(&m), "a2");
        let stats = player(&m, "a1").batting.unwrap();
        assert_eq!((stats.runs, stats.balls, stats.fours), (4, 1, 1));
        assert_eq!(player(&m, "b11").bowling.unwrap().no_balls, 1);
    }

    #[test]
    fn free_hit_rejects_bowled_without_mutation() {
        let mut m = started_match(MatchConfig::t20());
        apply_no_ball(&mut m, 0).unwrap();
        let before = m.clone();

        let err = apply_wicket(&mut m, DismissalKind::Bowled, None, 0).unwrap_err();

        assert_eq!(err, ScoringError::InvalidDismissalOnFreeHit { kind: DismissalKind::Bowled });
        assert!(err.is_recoverable());
        assert_eq!(m, before);
    }

    #[test]
    fn free_hit_allows_run_out_and_is_consumed() {
        let mut m = started_match(MatchConfig::t20());
        apply_no_ball(&mut m, 0).unwrap();
        assert_eq!(striker(&m), "a2");

        apply_wicket(&mut m, DismissalKind::RunOutStriker, Some("b3"), 1).unwrap();

        assert!(!m.innings1.free_hit);
        assert_eq!((m.team_a.score, m.team_a.wickets), (2, 1));
        let out = player(&m, "a2");
        assert!(out.is_out);
        let dismissal = out.dismissal.as_ref().unwrap();
        assert_eq!(dismissal.kind, DismissalKind::RunOutStriker);
        assert_eq!(dismissal.fielder_id.as_deref(), Some("b3"));
        assert_eq!((dismissal.over, dismissal.ball), (0, 1));
        assert_eq!(out.batting.unwrap().runs, 1);
        // run outs are not the bowler's
        assert_eq!(player(&m, "b11").bowling.unwrap().wickets, 0);
        // one run completed: the batters crossed
        assert_eq!(striker(&m), "a1");
        assert_eq!(non_striker(&m), "a2");

        set_next_batter(&mut m, "a3").unwrap();
        assert_eq!(non_striker(&m), "a3");
        assert_eq!(striker(&m), "a1");
    }

    #[test]
    fn caught_is_credited_to_the_bowler() {
        let mut m = started_match(MatchConfig::t20());

        apply_wicket(&mut m, DismissalKind::Caught, Some("b5"), 0).unwrap();

        assert_eq!(player(&m, "b11").bowling.unwrap().wickets, 1);
        assert_eq!(m.team_a.wickets, 1);
        assert_eq!(m.innings1.legal_balls_in_current_over, 1);
        assert!(player(&m, "a1").is_out);
    }

    #[test]
    fn run_out_at_the_non_strikers_end_dismisses_the_non_striker() {
        let mut m = started_match(MatchConfig::t20());

        apply_wicket(&mut m, DismissalKind::RunOutNonStriker, Some("b2"), 0).unwrap();

        assert!(player(&m, "a2").is_out);
        assert!(!player(&m, "a1").is_out);
        set_next_batter(&mut m, "a3").unwrap();
        assert_eq!((striker(&m), non_striker(&m)), ("a1", "a3"));
    }

    #[test]
    fn unknown_fielder_is_rejected() {
        let mut m = started_match(MatchConfig::t20());
        let err = apply_wicket(&mut m, DismissalKind::Caught, Some("a5"), 0).unwrap_err();
        assert_eq!(err, ScoringError::PlayerNotFound { id: "a5".to_string() });
        assert!(m.innings1.events.is_empty());
    }

    #[test]
    fn next_batter_errors() {
        let mut m = started_match(MatchConfig::t20());
        assert_eq!(set_next_batter(&mut m, "a3"), Err(ScoringError::NoBatterOut));

        apply_wicket(&mut m, DismissalKind::Lbw, None, 0).unwrap();
        assert_eq!(
            set_next_batter(&mut m, "a2"),
            Err(ScoringError::BatterUnavailable { id: "a2".to_string() })
        );
        assert_eq!(
            set_next_batter(&mut m, "a1"),
            Err(ScoringError::BatterUnavailable { id: "a1".to_string() })
        );
        assert_eq!(
            set_next_batter(&mut m, "zz"),
            Err(ScoringError::PlayerNotFound { id: "zz".to_string() })
        );
        // striker is out, so nobody can face until replaced
        assert_eq!(apply_run(&mut m, 1), Err(ScoringError::NoActiveStriker));
    }

    #[test]
    fn sixth_legal_ball_rolls_the_over() {
        let mut m = started_match(MatchConfig::t20());
        for _ in 0..5 {
            apply_run(&mut m, 0).unwrap();
        }
        apply_wide(&mut m, 0).unwrap();
        assert_eq!(m.innings1.legal_balls_in_current_over, 5);
        let striker_before = striker(&m).to_string();

        apply_run(&mut m, 0).unwrap();

        let innings = &m.innings1;
        assert_eq!(innings.over_number, 1);
        assert_eq!(innings.legal_balls_in_current_over, 0);
        assert_ne!(striker(&m), striker_before);
        assert!(innings.awaiting_bowler);
    }

    #[test]
    fn single_off_the_last_ball_keeps_strike() {
        let mut m = started_match(MatchConfig::t20());
        for _ in 0..5 {
            apply_run(&mut m, 0).unwrap();
        }
        apply_run(&mut m, 1).unwrap();
        assert_eq!(m.innings1.over_number, 1);
        assert_eq!(striker(&m), "a1");
    }

    #[test]
    fn bowler_change_is_required_between_overs() {
        let mut m = started_match(MatchConfig::t20());
        apply_run(&mut m, 1).unwrap();
        assert_eq!(
            end_over_and_change_bowler(&mut m, "b10"),
            Err(ScoringError::OverNotComplete { legal_balls: 1 })
        );
        for _ in 0..5 {
            apply_run(&mut m, 0).unwrap();
        }

        assert_eq!(apply_run(&mut m, 1), Err(ScoringError::OverAlreadyComplete { over: 1 }));
        assert_eq!(
            end_over_and_change_bowler(&mut m, "b11"),
            Err(ScoringError::ConsecutiveOvers { id: "b11".to_string() })
        );
        assert_eq!(
            end_over_and_change_bowler(&mut m, "a4"),
            Err(ScoringError::PlayerNotFound { id: "a4".to_string() })
        );

        end_over_and_change_bowler(&mut m, "b10").unwrap();
        apply_run(&mut m, 2).unwrap();
        assert_eq!(player(&m, "b10").bowling.unwrap().runs, 2);
    }

    #[test]
    fn five_ball_overs_roll_after_five() {
        let mut m = started_match(MatchConfig::hundred());
        for _ in 0..5 {
            apply_bye(&mut m, 2).unwrap();
        }
        assert_eq!(m.innings1.over_number, 1);
        assert_eq!(m.team_a.extras.byes, 10);
        // byes are not charged to the bowler
        let bowling = player(&m, "b11").bowling.unwrap();
        assert_eq!((bowling.balls, bowling.runs), (5, 0));
    }

    #[test]
    fn penalty_and_dead_ball_are_not_balls() {
        let mut m = started_match(MatchConfig::t20());
        apply_penalty(&mut m, 5).unwrap();
        apply_dead_ball(&mut m).unwrap();

        assert_eq!(m.team_a.score, 5);
        assert_eq!(m.team_a.extras.penalties, 5);
        assert_eq!(m.innings1.legal_balls_in_current_over, 0);
        assert_eq!(m.innings1.events.len(), 2);
        assert!(player(&m, "b11").bowling.is_none());
        assert_eq!(apply_penalty(&mut m, 0), Err(ScoringError::InvalidRuns { runs: 0 }));
    }

    #[test]
    fn openers_are_required_before_the_first_ball() {
        let mut m = new_match(MatchConfig::t20());
        assert_eq!(apply_run(&mut m, 1), Err(ScoringError::NoActiveStriker));

        m.innings1.striker_id = Some("a1".to_string());
        m.innings1.non_striker_id = Some("a2".to_string());
        assert_eq!(apply_run(&mut m, 1), Err(ScoringError::NoActiveBowler));

        set_opening_players(&mut m, "a1", "a2", "b1").unwrap();
        apply_run(&mut m, 1).unwrap();
        assert_eq!(
            set_opening_players(&mut m, "a3", "a4", "b2"),
            Err(ScoringError::InningsAlreadyStarted)
        );
    }

    #[test]
    fn excessive_runs_are_rejected() {
        let mut m = started_match(MatchConfig::t20());
        assert_eq!(apply_run(&mut m, 9), Err(ScoringError::InvalidRuns { runs: 9 }));
        assert!(m.innings1.events.is_empty());
    }
}

#[cfg(test)]
mod undo_scenarios {
    use crate::config::MatchConfig;
    use crate::engine::*;
    use crate::error::{Result, ScoringError};
    use crate::models::*;
    use crate::test_support::*;

    type Op = fn(&mut Match) -> Result<()>;

    fn every_operation() -> [(&'static str, Op); 15] {
        [
            ("dot", |m| apply_run(m, 0)),
            ("single", |m| apply_run(m, 1)),
            ("four", |m| apply_run(m, 4)),
            ("six", |m| apply_run(m, 6)),
            ("wide", |m| apply_wide(m, 0)),
            ("wide plus two", |m| apply_wide(m, 2)),
            ("no ball", |m| apply_no_ball(m, 0)),
            ("no ball four", |m| apply_no_ball(m, 4)),
            ("byes", |m| apply_bye(m, 2)),
            ("leg bye", |m| apply_leg_bye(m, 1)),
            ("bowled", |m| apply_wicket(m, DismissalKind::Bowled, None, 0)),
            ("caught", |m| apply_wicket(m, DismissalKind::Caught, Some("b4"), 0)),
            ("run out", |m| apply_wicket(m, DismissalKind::RunOutNonStriker, Some("b2"), 1)),
            ("penalty", |m| apply_penalty(m, 5)),
            ("dead ball", apply_dead_ball),
        ]
    }

    fn assert_round_trip(m: &mut Match, name: &str, op: Op) {
        let before = m.clone();
        op(m).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_ne!(*m, before, "{name} should change the match");
        undo_last_event(m).unwrap();
        assert_eq!(*m, before, "{name} was not reversed exactly");
    }

    #[test]
    fn undo_reverses_every_operation_on_a_fresh_innings() {
        for (name, op) in every_operation() {
            let mut m = started_match(MatchConfig::t20());
            assert_round_trip(&mut m, name, op);
        }
    }

    #[test]
    fn undo_reverses_every_operation_mid_over() {
        for (name, op) in every_operation() {
            let mut m = started_match(MatchConfig::t20());
            apply_run(&mut m, 2).unwrap();
            apply_no_ball(&mut m, 1).unwrap();
            apply_leg_bye(&mut m, 1).unwrap();
            assert_round_trip(&mut m, name, op);
        }
    }

    #[test]
    fn undo_reverses_every_operation_on_the_last_ball() {
        for (name, op) in every_operation() {
            let mut m = started_match(MatchConfig::t20());
            for _ in 0..5 {
                apply_run(&mut m, 1).unwrap();
            }
            assert_round_trip(&mut m, name, op);
        }
    }

    #[test]
    fn undo_on_empty_log() {
        let mut m = started_match(MatchConfig::t20());
        assert_eq!(undo_last_event(&mut m), Err(ScoringError::EmptyEventLog));
    }

    #[test]
    fn undo_restores_the_previous_overs_bowler() {
        let mut m = started_match(MatchConfig::t20());
        for _ in 0..6 {
            apply_run(&mut m, 0).unwrap();
        }
        end_over_and_change_bowler(&mut m, "b10").unwrap();
        apply_run(&mut m, 1).unwrap();

        undo_last_event(&mut m).unwrap();
        assert_eq!(m.innings1.bowler_id.as_deref(), Some("b10"));
        assert!(!m.innings1.awaiting_bowler);
        assert!(m.team_b.player("b10").unwrap().bowling.is_none());

        undo_last_event(&mut m).unwrap();
        let innings = &m.innings1;
        assert_eq!(innings.bowler_id.as_deref(), Some("b11"));
        assert_eq!((innings.over_number, innings.legal_balls_in_current_over), (0, 5));
        assert!(!innings.awaiting_bowler);
        assert_eq!(innings.previous_bowler_id, None);
        assert_eq!(innings.striker_id.as_deref(), Some("a1"));
    }

    #[test]
    fn undo_wicket_brings_the_batter_back() {
        let mut m = started_match(MatchConfig::t20());
        apply_wicket(&mut m, DismissalKind::Bowled, None, 0).unwrap();
        set_next_batter(&mut m, "a3").unwrap();

        let event = undo_last_event(&mut m).unwrap();

        assert_eq!(event.kind(), EventKind::Wicket);
        let a1 = m.team_a.player("a1").unwrap();
        assert!(!a1.is_out);
        assert!(a1.dismissal.is_none());
        assert!(a1.batting.is_none());
        assert_eq!(m.innings1.striker_id.as_deref(), Some("a1"));
        assert_eq!(m.innings1.non_striker_id.as_deref(), Some("a2"));
        assert_eq!(m.team_a.wickets, 0);
        assert!(m.team_b.player("b11").unwrap().bowling.is_none());
    }

    #[test]
    fn undo_restores_free_hit() {
        let mut m = started_match(MatchConfig::t20());
        apply_no_ball(&mut m, 0).unwrap();
        apply_run(&mut m, 2).unwrap();
        assert!(!m.innings1.free_hit);

        undo_last_event(&mut m).unwrap();
        assert!(m.innings1.free_hit);
    }
}

#[cfg(test)]
mod completion_scenarios {
    use crate::config::MatchConfig;
    use crate::engine::*;
    use crate::error::ScoringError;
    use crate::models::*;
    use crate::test_support::*;

    fn one_over() -> MatchConfig {
        MatchConfig { max_overs: Some(1), ..MatchConfig::t20() }
    }

    /// Alpha make 14 off their single over; Beta are set 15.
    fn at_innings_break() -> Match {
        let mut m = started_match(one_over());
        for runs in [1, 2, 4, 0, 6, 1] {
            apply_run(&mut m, runs).unwrap();
        }
        update_match_result(&mut m);
        m
    }

    fn chasing() -> Match {
        let mut m = at_innings_break();
        start_second_innings(&mut m).unwrap();
        set_opening_players(&mut m, "b1", "b2", "a11").unwrap();
        m
    }

    #[test]
    fn over_limit_ends_the_first_innings() {
        let mut m = at_innings_break();

        assert!(is_innings_complete(&m));
        assert_eq!(m.phase, MatchPhase::InningsBreak);
        insta::assert_snapshot!(m.result, @"Innings Break: Beta need 15 runs to win");
        assert_eq!(apply_run(&mut m, 1), Err(ScoringError::InningsComplete));
    }

    #[test]
    fn undo_before_the_chase_starts_reopens_the_first_innings() {
        let mut m = chasing();

        let event = undo_last_event(&mut m).unwrap();
        update_match_result(&mut m);

        assert_eq!(event.delivery, Delivery::Run { runs: 1 });
        assert!(m.innings2.is_none());
        assert_eq!(m.phase, MatchPhase::Innings1InProgress);
        assert_eq!(m.innings1.legal_balls_in_current_over, 5);
        insta::assert_snapshot!(m.result, @"Alpha 13/0 (0.5 ov)");

        apply_run(&mut m, 2).unwrap();
        update_match_result(&mut m);
        insta::assert_snapshot!(m.result, @"Innings Break: Beta need 16 runs to win");
    }

    #[test]
    fn free_hit_after_the_winning_no_ball_reports_the_finish() {
        let mut m = chasing();
        apply_run(&mut m, 6).unwrap();
        apply_run(&mut m, 6).unwrap();
        apply_no_ball(&mut m, 2).unwrap();
        assert!(m.current_innings().free_hit);

        let err = apply_wicket(&mut m, DismissalKind::Bowled, None, 0).unwrap_err();
        assert_eq!(err, ScoringError::InningsComplete);

        update_match_result(&mut m);
        let err = apply_wicket(&mut m, DismissalKind::Bowled, None, 0).unwrap_err();
        assert_eq!(err, ScoringError::MatchFinished);
        assert!(!err.is_recoverable());
        insta::assert_snapshot!(m.result, @"Beta won by 10 wickets");
    }

    #[test]
    fn second_innings_cannot_start_early() {
        let mut m = started_match(one_over());
        apply_run(&mut m, 1).unwrap();
        assert_eq!(
            start_second_innings(&mut m),
            Err(ScoringError::InvalidPhase { phase: MatchPhase::Innings1InProgress })
        );
        assert!(m.innings2.is_none());
    }

    #[test]
    fn chase_sets_target_and_progress_text() {
        let m = chasing();
        let innings = m.innings2.as_ref().unwrap();
        assert_eq!(innings.target, Some(15));
        assert_eq!(innings.batting_team, TeamId::B);
        assert_eq!(m.current_innings_number(), 2);
        assert_eq!(m.phase, MatchPhase::Innings2InProgress);
        insta::assert_snapshot!(m.result, @"Beta need 15 runs from 6 balls");
    }

    #[test]
    fn chasing_side_wins_by_wickets() {
        let mut m = chasing();
        apply_run(&mut m, 6).unwrap();
        apply_wicket(&mut m, DismissalKind::Caught, Some("a3"), 0).unwrap();
        set_next_batter(&mut m, "b3").unwrap();
        apply_run(&mut m, 6).unwrap();
        update_match_result(&mut m);
        insta::assert_snapshot!(m.result, @"Beta need 3 runs from 3 balls");

        apply_run(&mut m, 4).unwrap();
        update_match_result(&mut m);

        assert!(m.is_complete());
        assert_eq!(m.phase, MatchPhase::MatchComplete);
        insta::assert_snapshot!(m.result, @"Beta won by 9 wickets");
        assert_eq!(apply_run(&mut m, 1), Err(ScoringError::MatchFinished));
    }

    #[test]
    fn undo_after_the_winning_hit_reopens_the_chase() {
        let mut m = chasing();
        for runs in [6, 6, 4] {
            apply_run(&mut m, runs).unwrap();
        }
        update_match_result(&mut m);
        insta::assert_snapshot!(get_match_result(&m), @"Beta won by 10 wickets");

        undo_last_event(&mut m).unwrap();
        update_match_result(&mut m);

        assert_eq!(m.phase, MatchPhase::Innings2InProgress);
        insta::assert_snapshot!(m.result, @"Beta need 3 runs from 4 balls");
    }

    #[test]
    fn defending_side_wins_by_runs() {
        let mut m = chasing();
        for _ in 0..6 {
            apply_run(&mut m, 0).unwrap();
        }
        update_match_result(&mut m);
        assert_eq!(m.phase, MatchPhase::MatchComplete);
        insta::assert_snapshot!(m.result, @"Alpha won by 14 runs");
    }

    #[test]
    fn level_scores_tie() {
        let mut m = chasing();
        for runs in [6, 4, 4, 0, 0, 0] {
            apply_run(&mut m, runs).unwrap();
        }
        update_match_result(&mut m);
        assert_eq!(m.phase, MatchPhase::MatchTied);
        assert!(m.is_complete());
        insta::assert_snapshot!(m.result, @"Match tied");
    }

    #[test]
    fn target_reached_mid_over_completes_immediately() {
        let mut m = started_match(MatchConfig::t20());
        m.team_a.score = 149;
        m.innings1.over_number = 20;
        update_match_result(&mut m);
        insta::assert_snapshot!(m.result, @"Innings Break: Beta need 150 runs to win");

        start_second_innings(&mut m).unwrap();
        set_opening_players(&mut m, "b1", "b2", "a11").unwrap();
        m.team_b.score = 146;
        assert!(!is_innings_complete(&m));

        apply_run(&mut m, 4).unwrap();

        assert!(is_innings_complete(&m));
        assert_eq!(m.current_innings().legal_balls_in_current_over, 1);
        assert_eq!(apply_run(&mut m, 1), Err(ScoringError::InningsComplete));
    }

    #[test]
    fn all_out_ends_the_innings() {
        let config = MatchConfig { max_wickets: 2, ..MatchConfig::t20() };
        let mut m = started_match(config);
        apply_wicket(&mut m, DismissalKind::Bowled, None, 0).unwrap();
        set_next_batter(&mut m, "a3").unwrap();
        assert!(!is_innings_complete(&m));
        apply_wicket(&mut m, DismissalKind::Stumped, Some("b1"), 0).unwrap();

        assert!(is_innings_complete(&m));
        update_match_result(&mut m);
        insta::assert_snapshot!(m.result, @"Innings Break: Beta need 1 run to win");
    }

    #[test]
    fn first_innings_progress_text() {
        let mut m = started_match(MatchConfig::t20());
        for runs in [4, 1, 0] {
            apply_run(&mut m, runs).unwrap();
        }
        apply_wicket(&mut m, DismissalKind::Lbw, None, 0).unwrap();
        update_match_result(&mut m);
        insta::assert_snapshot!(m.result, @"Alpha 5/1 (0.4 ov)");
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseError;

    use crate::config::MatchConfig;
    use crate::engine::*;
    use crate::error::Result;
    use crate::models::*;
    use crate::test_support::*;

    #[derive(Debug, Clone)]
    enum Op {
        Run(u32),
        Wide(u32),
        NoBall(u32),
        Bye(u32),
        LegBye(u32),
        Wicket(DismissalKind, u32),
        Penalty,
        DeadBall,
        Undo,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            8 => (0u32..=6).prop_map(Op::Run),
            1 => (0u32..=2).prop_map(Op::Wide),
            1 => (0u32..=6).prop_map(Op::NoBall),
            1 => (1u32..=4).prop_map(Op::Bye),
            1 => (1u32..=2).prop_map(Op::LegBye),
            1 => (
                prop::sample::select(vec![
                    DismissalKind::Bowled,
                    DismissalKind::Caught,
                    DismissalKind::RunOutStriker,
                    DismissalKind::RunOutNonStriker,
                    DismissalKind::HitBallTwice,
                ]),
                0u32..=1,
            )
                .prop_map(|(kind, runs)| Op::Wicket(kind, runs)),
            1 => Just(Op::Penalty),
            1 => Just(Op::DeadBall),
            1 => Just(Op::Undo),
        ]
    }

    fn apply_op(m: &mut Match, op: &Op) -> Result<()> {
        match op {
            Op::Run(runs) => apply_run(m, *runs),
            Op::Wide(extra) => apply_wide(m, *extra),
            Op::NoBall(runs) => apply_no_ball(m, *runs),
            Op::Bye(runs) => apply_bye(m, *runs),
            Op::LegBye(runs) => apply_leg_bye(m, *runs),
            Op::Wicket(kind, runs) => apply_wicket(m, *kind, None, *runs),
            Op::Penalty => apply_penalty(m, 5),
            Op::DeadBall => apply_dead_ball(m),
            Op::Undo => undo_last_event(m).map(|_| ()),
        }
    }

    fn check_invariants(m: &Match) -> std::result::Result<(), TestCaseError> {
        for innings in std::iter::once(&m.innings1).chain(m.innings2.as_ref()) {
            let team = m.team(innings.batting_team);
            let logged: u32 = innings.events.iter().map(|e| e.runs_bat() + e.runs_extra()).sum();
            prop_assert_eq!(team.score, logged);
            prop_assert!(team.wickets <= innings.max_wickets);
            prop_assert!(innings.legal_balls_in_current_over < innings.balls_per_over);
            prop_assert_eq!(team.extras.total(), innings.events.iter().map(|e| e.runs_extra()).sum::<u32>());
        }
        Ok(())
    }

    proptest! {
        /// Property: every accepted operation is reversed exactly by undo,
        /// and every rejected one leaves the match untouched.
        #[test]
        fn prop_apply_then_undo_is_identity(ops in prop::collection::vec(op_strategy(), 1..120)) {
            let mut m = started_match(MatchConfig::t20());

            for op in &ops {
                prepare_next_delivery(&mut m);
                let before = m.clone();

                if matches!(op, Op::Undo) {
                    let _ = apply_op(&mut m, op);
                    check_invariants(&m)?;
                    continue;
                }

                match apply_op(&mut m, op) {
                    Ok(()) => {
                        let after = m.clone();
                        undo_last_event(&mut m).unwrap();
                        prop_assert_eq!(&m, &before);
                        m = after;
                    }
                    Err(_) => prop_assert_eq!(&m, &before),
                }
                check_invariants(&m)?;
            }
        }

        /// Property: the wicket count matches the wicket events in the log.
        #[test]
        fn prop_wickets_match_log(ops in prop::collection::vec(op_strategy(), 1..120)) {
            let mut m = started_match(MatchConfig::t20());
            for op in &ops {
                prepare_next_delivery(&mut m);
                let _ = apply_op(&mut m, op);
            }
            let logged = m
                .innings1
                .events
                .iter()
                .filter(|e| e.kind() == EventKind::Wicket)
                .count() as u32;
            prop_assert_eq!(m.team_a.wickets, logged);
            let out = m.team_a.players.iter().filter(|p| p.is_out).count() as u32;
            prop_assert_eq!(out, logged);
        }
    }
}
