//! Fixtures shared by unit tests.

use crate::config::MatchConfig;
use crate::engine::{end_over_and_change_bowler, set_next_batter, set_opening_players};
use crate::models::{Match, Player, Team, TeamId, Toss, TossDecision};

pub(crate) fn squad(prefix: &str, name: &str) -> Vec<Player> {
    (1..=11).map(|i| Player::new(format!("{prefix}{i}"), format!("{name} {i}"))).collect()
}

/// Alpha (a1..a11) bats first against Beta (b1..b11).
pub(crate) fn new_match(config: MatchConfig) -> Match {
    Match::new(
        Team::new(TeamId::A, "Alpha", squad("a", "Alpha")),
        Team::new(TeamId::B, "Beta", squad("b", "Beta")),
        Toss { winner: TeamId::A, decision: TossDecision::Bat },
        config,
    )
}

/// `new_match` with a1/a2 at the crease and b11 bowling.
pub(crate) fn started_match(config: MatchConfig) -> Match {
    let mut m = new_match(config);
    set_opening_players(&mut m, "a1", "a2", "b11").unwrap();
    m
}

/// First batter in order who is neither out nor at the crease.
pub(crate) fn next_unused_batter(m: &Match) -> Option<String> {
    let innings = m.current_innings();
    m.batting_team()
        .players
        .iter()
        .find(|p| {
            !p.is_out
                && innings.striker_id.as_deref() != Some(p.id.as_str())
                && innings.non_striker_id.as_deref() != Some(p.id.as_str())
        })
        .map(|p| p.id.clone())
}

/// Replace a dismissed batter and name a bowler if the over just ended, so
/// the next delivery can be bowled.
pub(crate) fn prepare_next_delivery(m: &mut Match) {
    if let Some(next) = next_unused_batter(m) {
        let _ = set_next_batter(m, &next);
    }

    if m.current_innings().awaiting_bowler {
        let previous = m.current_innings().previous_bowler_id.clone();
        let bowling = m.bowling_team();
        let choice = bowling
            .players
            .iter()
            .rev()
            .map(|p| p.id.clone())
            .find(|id| previous.as_deref() != Some(id.as_str()));
        if let Some(bowler) = choice {
            let _ = end_over_and_change_bowler(m, &bowler);
        }
    }
}
