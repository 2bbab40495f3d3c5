//! Batting and bowling figures for scorecards.

use serde::{Deserialize, Serialize};

use super::display::{format_bowler_overs, format_overs};
use crate::models::{BattingStats, BowlingStats, Dismissal, DismissalKind, Extras, Innings, Team};

/// Runs per 100 balls.
pub fn strike_rate(stats: &BattingStats) -> f64 {
    if stats.balls == 0 {
        return 0.0;
    }
    f64::from(stats.runs) * 100.0 / f64::from(stats.balls)
}

/// Runs conceded per over.
pub fn economy(stats: &BowlingStats, balls_per_over: u32) -> f64 {
    if stats.balls == 0 {
        return 0.0;
    }
    f64::from(stats.runs) / f64::from(stats.balls) * f64::from(balls_per_over)
}

/// Completed overs by `bowler_id` in which no runs were charged to the bowler.
pub fn maidens(innings: &Innings, bowler_id: &str) -> u32 {
    let mut count = 0;
    let mut over_runs = 0;
    let mut current_over = None;

    for event in &innings.events {
        if current_over != Some(event.over) {
            current_over = Some(event.over);
            over_runs = 0;
        }
        if event.delivery.involves_bowler() {
            over_runs += event.delivery.bowler_runs();
        }
        let over_done = event.legal && event.ball == innings.balls_per_over;
        if over_done && over_runs == 0 && event.before.bowler_id == bowler_id {
            count += 1;
        }
    }

    count
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BattingLine {
    pub player_id: String,
    pub name: String,
    pub how_out: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BowlingLine {
    pub player_id: String,
    pub name: String,
    pub overs: String,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
    pub economy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scorecard {
    pub batting_team: String,
    pub total: String,
    pub extras: Extras,
    pub batting: Vec<BattingLine>,
    pub bowling: Vec<BowlingLine>,
}

/// Scorecard of one innings. Batters appear in batting order once they have
/// faced a ball or come to the crease; bowlers once they have bowled.
pub fn scorecard(innings: &Innings, batting: &Team, bowling: &Team) -> Scorecard {
    let at_crease = |id: &str| {
        innings.striker_id.as_deref() == Some(id) || innings.non_striker_id.as_deref() == Some(id)
    };

    let batting_lines = batting
        .players
        .iter()
        .filter(|p| p.batting.is_some() || p.is_out || at_crease(&p.id))
        .map(|p| {
            let stats = p.batting.unwrap_or_default();
            BattingLine {
                player_id: p.id.clone(),
                name: p.name.clone(),
                how_out: match &p.dismissal {
                    Some(dismissal) => describe_dismissal(dismissal, bowling),
                    None => "not out".to_string(),
                },
                runs: stats.runs,
                balls: stats.balls,
                fours: stats.fours,
                sixes: stats.sixes,
                strike_rate: strike_rate(&stats),
            }
        })
        .collect();

    let bowling_lines = bowling
        .players
        .iter()
        .filter_map(|p| p.bowling.map(|stats| (p, stats)))
        .map(|(p, stats)| BowlingLine {
            player_id: p.id.clone(),
            name: p.name.clone(),
            overs: format_bowler_overs(stats.balls, innings.balls_per_over),
            maidens: maidens(innings, &p.id),
            runs: stats.runs,
            wickets: stats.wickets,
            economy: economy(&stats, innings.balls_per_over),
        })
        .collect();

    Scorecard {
        batting_team: batting.name.clone(),
        total: format!(
            "{}/{} ({} ov)",
            batting.score,
            batting.wickets,
            format_overs(innings.over_number, innings.legal_balls_in_current_over)
        ),
        extras: batting.extras,
        batting: batting_lines,
        bowling: bowling_lines,
    }
}

/// "c Smith b Jones", "lbw b Jones", "run out (Smith)".
pub fn describe_dismissal(dismissal: &Dismissal, fielding: &Team) -> String {
    let name = |id: &str| fielding.player(id).map_or_else(|| id.to_string(), |p| p.name.clone());
    let bowler = name(&dismissal.bowler_id);
    let fielder = dismissal.fielder_id.as_deref().map(name);

    match (dismissal.kind, fielder) {
        (DismissalKind::Bowled, _) => format!("b {bowler}"),
        (DismissalKind::Caught, Some(f)) if f == bowler => format!("c & b {bowler}"),
        (DismissalKind::Caught, Some(f)) => format!("c {f} b {bowler}"),
        (DismissalKind::Caught, None) => format!("c ? b {bowler}"),
        (DismissalKind::Lbw, _) => format!("lbw b {bowler}"),
        (DismissalKind::Stumped, Some(f)) => format!("st {f} b {bowler}"),
        (DismissalKind::Stumped, None) => format!("st b {bowler}"),
        (DismissalKind::HitWicket, _) => format!("hit wicket b {bowler}"),
        (DismissalKind::RunOutStriker | DismissalKind::RunOutNonStriker, Some(f)) => {
            format!("run out ({f})")
        }
        (DismissalKind::RunOutStriker | DismissalKind::RunOutNonStriker, None) => {
            "run out".to_string()
        }
        (kind, _) => kind.label().to_string(),
    }
}
