use super::over;
use super::scoring::debit_extras;
use crate::error::{Result, ScoringError};
use crate::models::{BallEvent, Delivery, Match};

/// Pop the last event of the current innings and reverse it exactly.
///
/// Aggregates are reversed arithmetically; strike, bowler and free-hit state
/// come back from the event's snapshot. Stat objects the delivery created
/// are removed again, so `apply(op); undo_last_event()` leaves the match
/// equal to what it was before `op`.
///
/// A second innings with no deliveries yet is discarded first, so the last
/// ball of the first innings can still be taken back; the match returns to
/// the innings break (or further) on the next `update_match_result`.
pub fn undo_last_event(m: &mut Match) -> Result<BallEvent> {
    let unstarted_chase = m.innings2.as_ref().is_some_and(|innings| innings.events.is_empty());
    if unstarted_chase {
        if m.innings1.events.is_empty() {
            return Err(ScoringError::EmptyEventLog);
        }
        log::info!("Undo discards the unstarted second innings");
        m.innings2 = None;
    }

    let (innings, batting, bowling) = m.innings_and_teams_mut();
    let event = innings.events.pop().ok_or(ScoringError::EmptyEventLog)?;
    let delivery = &event.delivery;
    let before = &event.before;

    batting.score = batting.score.saturating_sub(delivery.total_runs());
    debit_extras(&mut batting.extras, delivery);

    if delivery.faces_ball() {
        if let Some(striker) = batting.player_mut(&before.striker_id) {
            if before.created_batting {
                striker.batting = None;
            } else if let Some(stats) = striker.batting.as_mut() {
                stats.balls = stats.balls.saturating_sub(1);
                stats.runs = stats.runs.saturating_sub(delivery.runs_bat());
                match delivery.boundary() {
                    Some(4) => stats.fours = stats.fours.saturating_sub(1),
                    Some(6) => stats.sixes = stats.sixes.saturating_sub(1),
                    _ => {}
                }
            }
        }
    }

    if delivery.involves_bowler() {
        if let Some(bowler) = bowling.player_mut(&before.bowler_id) {
            if before.created_bowling {
                bowler.bowling = None;
            } else if let Some(stats) = bowler.bowling.as_mut() {
                stats.balls = stats.balls.saturating_sub(u32::from(event.legal));
                stats.runs = stats.runs.saturating_sub(delivery.bowler_runs());
                match delivery {
                    Delivery::Wide { .. } => stats.wides = stats.wides.saturating_sub(1),
                    Delivery::NoBall { .. } => stats.no_balls = stats.no_balls.saturating_sub(1),
                    Delivery::Wicket { kind, .. } if kind.credited_to_bowler() => {
                        stats.wickets = stats.wickets.saturating_sub(1)
                    }
                    _ => {}
                }
            }
        }
    }

    if let Delivery::Wicket { dismissed_id, .. } = delivery {
        batting.wickets = batting.wickets.saturating_sub(1);
        if let Some(dismissed) = batting.player_mut(dismissed_id) {
            dismissed.is_out = false;
            dismissed.dismissal = None;
        }
    }

    over::rewind(innings, event.legal);

    innings.striker_id = Some(before.striker_id.clone());
    innings.non_striker_id = Some(before.non_striker_id.clone());
    innings.bowler_id = Some(before.bowler_id.clone());
    innings.free_hit = before.free_hit;
    innings.previous_bowler_id = before.previous_bowler_id.clone();
    innings.awaiting_bowler = before.awaiting_bowler;

    log::debug!("Undid {:?} at {}.{}", delivery.kind(), event.over, event.ball);
    Ok(event)
}
