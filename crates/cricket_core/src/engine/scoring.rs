//! Scoring operations: one entry point per delivery kind.
//!
//! Each operation validates the match first and only then mutates, so an
//! error leaves the match exactly as it was. Whether the delivery counts
//! toward the over is decided here, once, and passed down explicitly.

use super::completion::is_innings_complete;
use super::over::{self, require_player};
use crate::error::{Result, ScoringError};
use crate::models::{
    BallEvent, Delivery, Dismissal, DismissalKind, Extras, Match, PlayerId, Snapshot,
};

/// Upper bound on runs from a single delivery (all-run four plus overthrows).
pub const MAX_RUNS_PER_DELIVERY: u32 = 7;

/// Players at the crease for the next delivery.
struct Crease {
    striker: PlayerId,
    non_striker: PlayerId,
    bowler: PlayerId,
}

/// Runs off the bat. 4 and 6 are recorded as boundaries.
pub fn apply_run(m: &mut Match, runs: u32) -> Result<()> {
    check_runs(runs)?;
    let delivery = match runs {
        4 => Delivery::Boundary4,
        6 => Delivery::Boundary6,
        _ => Delivery::Run { runs },
    };
    deliver(m, delivery, true)
}

/// Wide: one penalty run plus `extra_runs`, not a legal ball.
pub fn apply_wide(m: &mut Match, extra_runs: u32) -> Result<()> {
    check_runs(extra_runs)?;
    deliver(m, Delivery::Wide { extra_runs }, false)
}

/// No-ball: one penalty run plus `bat_runs` to the striker. Sets a free hit.
pub fn apply_no_ball(m: &mut Match, bat_runs: u32) -> Result<()> {
    check_runs(bat_runs)?;
    deliver(m, Delivery::NoBall { bat_runs }, false)
}

pub fn apply_bye(m: &mut Match, runs: u32) -> Result<()> {
    check_runs(runs)?;
    deliver(m, Delivery::Bye { runs }, true)
}

pub fn apply_leg_bye(m: &mut Match, runs: u32) -> Result<()> {
    check_runs(runs)?;
    deliver(m, Delivery::LegBye { runs }, true)
}

/// Record a dismissal.
///
/// On a free hit only the kinds allowed by [`DismissalKind::allowed_on_free_hit`]
/// stand; anything else is rejected with no mutation. A wicket delivery is
/// always treated as a legal ball: a dismissal off a wide or no-ball is not
/// modelled.
pub fn apply_wicket(
    m: &mut Match,
    kind: DismissalKind,
    fielder_id: Option<&str>,
    runs_completed: u32,
) -> Result<()> {
    check_runs(runs_completed)?;
    let crease = ready_for_delivery(m)?;
    if m.current_innings().free_hit && !kind.allowed_on_free_hit() {
        log::warn!("Rejected {kind:?} on a free hit");
        return Err(ScoringError::InvalidDismissalOnFreeHit { kind });
    }
    if let Some(fielder) = fielder_id {
        require_player(m.bowling_team(), fielder)?;
    }

    let dismissed_id =
        if kind.dismisses_non_striker() { crease.non_striker.clone() } else { crease.striker.clone() };
    let delivery = Delivery::Wicket {
        kind,
        dismissed_id,
        fielder_id: fielder_id.map(str::to_string),
        runs_completed,
    };
    record(m, crease, delivery, true);
    Ok(())
}

/// Penalty runs awarded to the batting side. Not a ball.
pub fn apply_penalty(m: &mut Match, runs: u32) -> Result<()> {
    if runs == 0 {
        return Err(ScoringError::InvalidRuns { runs });
    }
    check_runs(runs)?;
    deliver(m, Delivery::Penalty { runs }, false)
}

/// Dead ball: logged for the record, no effect on the score or the over.
pub fn apply_dead_ball(m: &mut Match) -> Result<()> {
    deliver(m, Delivery::DeadBall, false)
}

fn check_runs(runs: u32) -> Result<()> {
    if runs > MAX_RUNS_PER_DELIVERY {
        return Err(ScoringError::InvalidRuns { runs });
    }
    Ok(())
}

fn deliver(m: &mut Match, delivery: Delivery, legal: bool) -> Result<()> {
    let crease = ready_for_delivery(m)?;
    record(m, crease, delivery, legal);
    Ok(())
}

fn ready_for_delivery(m: &Match) -> Result<Crease> {
    if m.is_complete() {
        return Err(ScoringError::MatchFinished);
    }
    if is_innings_complete(m) {
        return Err(ScoringError::InningsComplete);
    }

    let innings = m.current_innings();
    if innings.awaiting_bowler {
        return Err(ScoringError::OverAlreadyComplete { over: innings.over_number });
    }

    let batting = m.batting_team();
    let mut at_crease = Vec::with_capacity(2);
    for slot in [&innings.striker_id, &innings.non_striker_id] {
        let id = slot.as_deref().ok_or(ScoringError::NoActiveStriker)?;
        if require_player(batting, id)?.is_out {
            return Err(ScoringError::NoActiveStriker);
        }
        at_crease.push(id.to_string());
    }

    let bowler = innings.bowler_id.as_deref().ok_or(ScoringError::NoActiveBowler)?;
    require_player(m.bowling_team(), bowler)?;

    let non_striker = at_crease.pop().ok_or(ScoringError::NoActiveStriker)?;
    let striker = at_crease.pop().ok_or(ScoringError::NoActiveStriker)?;
    Ok(Crease { striker, non_striker, bowler: bowler.to_string() })
}

/// Apply a validated delivery. Must not fail: every lookup was checked by
/// [`ready_for_delivery`].
fn record(m: &mut Match, crease: Crease, delivery: Delivery, legal: bool) {
    let (innings, batting, bowling) = m.innings_and_teams_mut();

    let mut before = Snapshot {
        striker_id: crease.striker.clone(),
        non_striker_id: crease.non_striker,
        bowler_id: crease.bowler.clone(),
        free_hit: innings.free_hit,
        previous_bowler_id: innings.previous_bowler_id.clone(),
        awaiting_bowler: innings.awaiting_bowler,
        created_batting: false,
        created_bowling: false,
    };
    let over = innings.over_number;
    let ball = innings.legal_balls_in_current_over + u32::from(legal);

    batting.score += delivery.total_runs();
    credit_extras(&mut batting.extras, &delivery);

    if delivery.faces_ball() {
        if let Some(striker) = batting.player_mut(&crease.striker) {
            before.created_batting = striker.batting.is_none();
            let stats = striker.batting.get_or_insert_with(Default::default);
            stats.balls += 1;
            stats.runs += delivery.runs_bat();
            match delivery.boundary() {
                Some(4) => stats.fours += 1,
                Some(6) => stats.sixes += 1,
                _ => {}
            }
        }
    }

    if delivery.involves_bowler() {
        if let Some(bowler) = bowling.player_mut(&crease.bowler) {
            before.created_bowling = bowler.bowling.is_none();
            let stats = bowler.bowling.get_or_insert_with(Default::default);
            stats.balls += u32::from(legal);
            stats.runs += delivery.bowler_runs();
            match &delivery {
                Delivery::Wide { .. } => stats.wides += 1,
                Delivery::NoBall { .. } => stats.no_balls += 1,
                Delivery::Wicket { kind, .. } if kind.credited_to_bowler() => stats.wickets += 1,
                _ => {}
            }
        }
    }

    if let Delivery::Wicket { kind, dismissed_id, fielder_id, .. } = &delivery {
        batting.wickets += 1;
        if let Some(dismissed) = batting.player_mut(dismissed_id) {
            dismissed.is_out = true;
            dismissed.dismissal = Some(Dismissal {
                kind: *kind,
                bowler_id: crease.bowler.clone(),
                fielder_id: fielder_id.clone(),
                over,
                ball,
            });
        }
        log::info!("Wicket: {dismissed_id} {} ({}/{})", kind.label(), batting.score, batting.wickets);
    }

    innings.free_hit = match &delivery {
        Delivery::NoBall { .. } => true,
        _ if legal => false,
        _ => innings.free_hit,
    };

    over::advance(innings, delivery.rotation_runs(), legal);

    log::debug!(
        "{}.{} {:?} -> {}/{}",
        over,
        ball,
        delivery.kind(),
        batting.score,
        batting.wickets
    );
    innings.events.push(BallEvent { delivery, legal, over, ball, before });
}

fn credit_extras(extras: &mut Extras, delivery: &Delivery) {
    let runs = delivery.runs_extra();
    match delivery {
        Delivery::Wide { .. } => extras.wides += runs,
        Delivery::NoBall { .. } => extras.no_balls += runs,
        Delivery::Bye { .. } => extras.byes += runs,
        Delivery::LegBye { .. } => extras.leg_byes += runs,
        Delivery::Penalty { .. } => extras.penalties += runs,
        Delivery::Run { .. }
        | Delivery::Boundary4
        | Delivery::Boundary6
        | Delivery::Wicket { .. }
        | Delivery::DeadBall => {}
    }
}

/// Inverse of [`credit_extras`].
pub(crate) fn debit_extras(extras: &mut Extras, delivery: &Delivery) {
    let runs = delivery.runs_extra();
    let bucket = match delivery {
        Delivery::Wide { .. } => &mut extras.wides,
        Delivery::NoBall { .. } => &mut extras.no_balls,
        Delivery::Bye { .. } => &mut extras.byes,
        Delivery::LegBye { .. } => &mut extras.leg_byes,
        Delivery::Penalty { .. } => &mut extras.penalties,
        Delivery::Run { .. }
        | Delivery::Boundary4
        | Delivery::Boundary6
        | Delivery::Wicket { .. }
        | Delivery::DeadBall => return,
    };
    *bucket = bucket.saturating_sub(runs);
}
