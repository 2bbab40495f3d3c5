use super::over::require_player;
use crate::error::{Result, ScoringError};
use crate::models::Match;

/// Send in the next batter to whichever crease slot holds a dismissed player.
///
/// The slot is found by checking the out flag on the striker, then the
/// non-striker; call order and recency are not considered.
pub fn set_next_batter(m: &mut Match, player_id: &str) -> Result<()> {
    if m.is_complete() {
        return Err(ScoringError::MatchFinished);
    }

    let batting = m.batting_team();
    let innings = m.current_innings();
    let is_out = |slot: &Option<String>| {
        slot.as_deref().and_then(|id| batting.player(id)).is_some_and(|p| p.is_out)
    };
    let striker_out = is_out(&innings.striker_id);
    if !striker_out && !is_out(&innings.non_striker_id) {
        return Err(ScoringError::NoBatterOut);
    }

    let incoming = require_player(batting, player_id)?;
    let at_crease = innings.striker_id.as_deref() == Some(player_id)
        || innings.non_striker_id.as_deref() == Some(player_id);
    if incoming.is_out || at_crease {
        return Err(ScoringError::BatterUnavailable { id: player_id.to_string() });
    }

    let innings = m.current_innings_mut();
    let slot = if striker_out { &mut innings.striker_id } else { &mut innings.non_striker_id };
    log::debug!("{} replaces {:?}", player_id, slot);
    *slot = Some(player_id.to_string());
    Ok(())
}
