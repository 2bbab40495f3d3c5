use crate::analysis::format_overs;
use crate::error::{Result, ScoringError};
use crate::models::{Innings, Match, MatchPhase, Team};

/// All out, overs exhausted, or (second innings) the target reached.
pub fn innings_complete(innings: &Innings, batting: &Team) -> bool {
    if batting.wickets >= innings.max_wickets {
        return true;
    }
    if innings.overs_exhausted() {
        return true;
    }
    matches!(innings.target, Some(target) if batting.score >= target)
}

/// Whether the innings currently being played is over.
pub fn is_innings_complete(m: &Match) -> bool {
    innings_complete(m.current_innings(), m.batting_team())
}

/// Result text for the current state, without touching the match.
pub fn get_match_result(m: &Match) -> String {
    evaluate(m).1
}

/// Recompute `phase` and `result` from the innings and scores.
///
/// Nothing is cached: calling this after an undo re-opens an innings whose
/// completing delivery was reversed.
pub fn update_match_result(m: &mut Match) {
    let (phase, result) = evaluate(m);
    if phase != m.phase {
        log::info!("Phase {:?} -> {:?}: {}", m.phase, phase, result);
    }
    m.phase = phase;
    m.result = result;
}

/// Close the interval and start the chase with target = first-innings score + 1.
pub fn start_second_innings(m: &mut Match) -> Result<()> {
    let (phase, _) = evaluate(m);
    if phase != MatchPhase::InningsBreak {
        return Err(ScoringError::InvalidPhase { phase });
    }

    let target = m.team(m.innings1.batting_team).score + 1;
    let chasing = m.innings1.bowling_team;
    m.innings2 = Some(Innings::new(chasing, &m.config).with_target(target));
    log::info!("{} need {} to win", m.team(chasing).name, target);
    update_match_result(m);
    Ok(())
}

fn evaluate(m: &Match) -> (MatchPhase, String) {
    let first = &m.innings1;
    let first_team = m.team(first.batting_team);

    let Some(second) = m.innings2.as_ref() else {
        if !innings_complete(first, first_team) {
            return (MatchPhase::Innings1InProgress, progress_line(first, first_team));
        }
        // Interval text replaces the progress line.
        let chasing = m.team(first.bowling_team);
        return (
            MatchPhase::InningsBreak,
            format!(
                "Innings Break: {} need {} to win",
                chasing.name,
                plural(first_team.score + 1, "run")
            ),
        );
    };

    let second_team = m.team(second.batting_team);
    if !innings_complete(second, second_team) {
        return (MatchPhase::Innings2InProgress, chase_line(second, second_team));
    }

    if second_team.score > first_team.score {
        let margin = second.max_wickets.saturating_sub(second_team.wickets);
        (
            MatchPhase::MatchComplete,
            format!("{} won by {}", second_team.name, plural(margin, "wicket")),
        )
    } else if first_team.score > second_team.score {
        let margin = first_team.score - second_team.score;
        (MatchPhase::MatchComplete, format!("{} won by {}", first_team.name, plural(margin, "run")))
    } else {
        (MatchPhase::MatchTied, "Match tied".to_string())
    }
}

fn progress_line(innings: &Innings, batting: &Team) -> String {
    format!(
        "{} {}/{} ({} ov)",
        batting.name,
        batting.score,
        batting.wickets,
        format_overs(innings.over_number, innings.legal_balls_in_current_over)
    )
}

fn chase_line(innings: &Innings, batting: &Team) -> String {
    let need = innings.target.unwrap_or(0).saturating_sub(batting.score);
    match innings.balls_remaining() {
        Some(balls) => format!(
            "{} need {} from {}",
            batting.name,
            plural(need, "run"),
            plural(balls, "ball")
        ),
        None => format!("{} need {}", batting.name, plural(need, "run")),
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
