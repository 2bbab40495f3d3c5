use serde::{Deserialize, Serialize};

use super::events::BallEvent;
use super::player::PlayerId;
use super::team::TeamId;
use crate::config::MatchConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Innings {
    pub batting_team: TeamId,
    pub bowling_team: TeamId,
    #[serde(default)]
    pub striker_id: Option<PlayerId>,
    #[serde(default)]
    pub non_striker_id: Option<PlayerId>,
    #[serde(default)]
    pub bowler_id: Option<PlayerId>,
    /// Bowler of the last completed over.
    #[serde(default)]
    pub previous_bowler_id: Option<PlayerId>,
    /// Completed overs.
    pub over_number: u32,
    pub legal_balls_in_current_over: u32,
    pub free_hit: bool,
    /// Set when an over has just finished and no new bowler has been named.
    #[serde(default)]
    pub awaiting_bowler: bool,
    pub balls_per_over: u32,
    #[serde(default)]
    pub max_overs: Option<u32>,
    pub max_wickets: u32,
    /// Runs needed to win; only set for the second innings.
    #[serde(default)]
    pub target: Option<u32>,
    #[serde(default)]
    pub events: Vec<BallEvent>,
}

impl Innings {
    pub fn new(batting_team: TeamId, config: &MatchConfig) -> Self {
        Self {
            batting_team,
            bowling_team: batting_team.other(),
            striker_id: None,
            non_striker_id: None,
            bowler_id: None,
            previous_bowler_id: None,
            over_number: 0,
            legal_balls_in_current_over: 0,
            free_hit: false,
            awaiting_bowler: false,
            balls_per_over: config.balls_per_over,
            max_overs: config.max_overs,
            max_wickets: config.max_wickets,
            target: None,
            events: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: u32) -> Self {
        self.target = Some(target);
        self
    }

    /// Legal balls bowled in the innings so far.
    pub fn legal_balls(&self) -> u32 {
        self.over_number * self.balls_per_over + self.legal_balls_in_current_over
    }

    /// Legal balls left before the over limit, if there is one.
    pub fn balls_remaining(&self) -> Option<u32> {
        self.max_overs
            .map(|overs| (overs * self.balls_per_over).saturating_sub(self.legal_balls()))
    }

    pub fn has_started(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn overs_exhausted(&self) -> bool {
        matches!(self.max_overs, Some(max) if self.over_number >= max)
    }

    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker_id, &mut self.non_striker_id);
    }
}
