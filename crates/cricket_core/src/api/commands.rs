use serde::{Deserialize, Serialize};

use crate::engine::{
    apply_bye, apply_dead_ball, apply_leg_bye, apply_no_ball, apply_penalty, apply_run,
    apply_wicket, apply_wide, end_over_and_change_bowler, set_next_batter, set_opening_players,
    start_second_innings, swap_strike, undo_last_event, update_match_result,
};
use crate::error::Result;
use crate::models::{DismissalKind, Match};

/// One scorer action, as sent by a UI or listed in a command file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoringCommand {
    Run {
        runs: u32,
    },
    Wide {
        #[serde(default)]
        extra_runs: u32,
    },
    NoBall {
        #[serde(default)]
        bat_runs: u32,
    },
    Bye {
        runs: u32,
    },
    LegBye {
        runs: u32,
    },
    Wicket {
        kind: DismissalKind,
        #[serde(default)]
        fielder_id: Option<String>,
        #[serde(default)]
        runs_completed: u32,
    },
    Penalty {
        runs: u32,
    },
    DeadBall,
    NextBatter {
        player_id: String,
    },
    ChangeBowler {
        player_id: String,
    },
    SetOpeners {
        striker_id: String,
        non_striker_id: String,
        bowler_id: String,
    },
    SwapStrike,
    Undo,
    StartSecondInnings,
}

/// Dispatch a command, then refresh the match phase and result text.
pub fn apply_command(m: &mut Match, command: &ScoringCommand) -> Result<()> {
    match command {
        ScoringCommand::Run { runs } => apply_run(m, *runs)?,
        ScoringCommand::Wide { extra_runs } => apply_wide(m, *extra_runs)?,
        ScoringCommand::NoBall { bat_runs } => apply_no_ball(m, *bat_runs)?,
        ScoringCommand::Bye { runs } => apply_bye(m, *runs)?,
        ScoringCommand::LegBye { runs } => apply_leg_bye(m, *runs)?,
        ScoringCommand::Wicket { kind, fielder_id, runs_completed } => {
            apply_wicket(m, *kind, fielder_id.as_deref(), *runs_completed)?
        }
        ScoringCommand::Penalty { runs } => apply_penalty(m, *runs)?,
        ScoringCommand::DeadBall => apply_dead_ball(m)?,
        ScoringCommand::NextBatter { player_id } => set_next_batter(m, player_id)?,
        ScoringCommand::ChangeBowler { player_id } => end_over_and_change_bowler(m, player_id)?,
        ScoringCommand::SetOpeners { striker_id, non_striker_id, bowler_id } => {
            set_opening_players(m, striker_id, non_striker_id, bowler_id)?
        }
        ScoringCommand::SwapStrike => swap_strike(m)?,
        ScoringCommand::Undo => {
            undo_last_event(m)?;
        }
        ScoringCommand::StartSecondInnings => start_second_innings(m)?,
    }

    update_match_result(m);
    Ok(())
}
