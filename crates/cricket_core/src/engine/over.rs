//! Over and strike bookkeeping shared by every delivery, plus the
//! between-overs operations (opening players, bowler change).

use super::completion::is_innings_complete;
use crate::error::{Result, ScoringError};
use crate::models::{Innings, Match, Player, Team};

/// Apply strike rotation and, for legal deliveries, the ball count.
///
/// Returns true when the delivery completed an over.
pub(crate) fn advance(innings: &mut Innings, rotation_runs: u32, legal: bool) -> bool {
    if rotation_runs % 2 == 1 {
        innings.swap_strike();
    }

    if !legal {
        return false;
    }

    innings.legal_balls_in_current_over += 1;
    if innings.legal_balls_in_current_over < innings.balls_per_over {
        return false;
    }

    // Over-end rotation is independent of the run-based swap above.
    innings.over_number += 1;
    innings.legal_balls_in_current_over = 0;
    innings.previous_bowler_id = innings.bowler_id.clone();
    innings.awaiting_bowler = true;
    innings.swap_strike();
    log::debug!("Over {} complete", innings.over_number);
    true
}

/// Reverse the ball count of [`advance`]. Strike and bowler are restored from
/// the event snapshot by the caller, not here.
pub(crate) fn rewind(innings: &mut Innings, legal: bool) {
    if !legal {
        return;
    }

    if innings.legal_balls_in_current_over == 0 {
        innings.over_number = innings.over_number.saturating_sub(1);
        innings.legal_balls_in_current_over = innings.balls_per_over.saturating_sub(1);
    } else {
        innings.legal_balls_in_current_over -= 1;
    }
}

/// Name the bowler for the next over. Only valid once an over has finished.
pub fn end_over_and_change_bowler(m: &mut Match, bowler_id: &str) -> Result<()> {
    if m.is_complete() {
        return Err(ScoringError::MatchFinished);
    }
    if is_innings_complete(m) {
        return Err(ScoringError::InningsComplete);
    }

    let innings = m.current_innings();
    if !innings.awaiting_bowler {
        return Err(ScoringError::OverNotComplete {
            legal_balls: innings.legal_balls_in_current_over,
        });
    }
    require_player(m.bowling_team(), bowler_id)?;
    if innings.previous_bowler_id.as_deref() == Some(bowler_id) {
        log::warn!("Rejected {bowler_id}: bowled the previous over");
        return Err(ScoringError::ConsecutiveOvers { id: bowler_id.to_string() });
    }

    let innings = m.current_innings_mut();
    innings.bowler_id = Some(bowler_id.to_string());
    innings.awaiting_bowler = false;
    log::debug!("Over {}: {} to bowl", innings.over_number + 1, bowler_id);
    Ok(())
}

/// Set both openers and the first bowler before the innings' first delivery.
pub fn set_opening_players(
    m: &mut Match,
    striker_id: &str,
    non_striker_id: &str,
    bowler_id: &str,
) -> Result<()> {
    if m.is_complete() {
        return Err(ScoringError::MatchFinished);
    }
    if m.current_innings().has_started() {
        return Err(ScoringError::InningsAlreadyStarted);
    }
    if striker_id == non_striker_id {
        return Err(ScoringError::BatterUnavailable { id: non_striker_id.to_string() });
    }

    let batting = m.batting_team();
    for id in [striker_id, non_striker_id] {
        if require_player(batting, id)?.is_out {
            return Err(ScoringError::BatterUnavailable { id: id.to_string() });
        }
    }
    require_player(m.bowling_team(), bowler_id)?;

    let innings = m.current_innings_mut();
    innings.striker_id = Some(striker_id.to_string());
    innings.non_striker_id = Some(non_striker_id.to_string());
    innings.bowler_id = Some(bowler_id.to_string());
    log::info!("Openers {striker_id} and {non_striker_id}, {bowler_id} to bowl");
    Ok(())
}

/// Manual strike correction. Not recorded in the event log.
pub fn swap_strike(m: &mut Match) -> Result<()> {
    if m.is_complete() {
        return Err(ScoringError::MatchFinished);
    }
    m.current_innings_mut().swap_strike();
    Ok(())
}

pub(crate) fn require_player<'a>(team: &'a Team, id: &str) -> Result<&'a Player> {
    team.player(id).ok_or_else(|| ScoringError::PlayerNotFound { id: id.to_string() })
}
