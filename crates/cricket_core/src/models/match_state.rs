use serde::{Deserialize, Serialize};

use super::innings::Innings;
use super::team::{Team, TeamId};
use crate::config::MatchConfig;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toss {
    pub winner: TeamId,
    pub decision: TossDecision,
}

impl Toss {
    pub fn batting_first(&self) -> TeamId {
        match self.decision {
            TossDecision::Bat => self.winner,
            TossDecision::Bowl => self.winner.other(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Innings1InProgress,
    InningsBreak,
    Innings2InProgress,
    MatchTied,
    MatchComplete,
}

impl MatchPhase {
    pub fn is_finished(self) -> bool {
        matches!(self, MatchPhase::MatchTied | MatchPhase::MatchComplete)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    pub team_a: Team,
    pub team_b: Team,
    pub toss: Toss,
    pub config: MatchConfig,
    pub innings1: Innings,
    #[serde(default)]
    pub innings2: Option<Innings>,
    pub phase: MatchPhase,
    #[serde(default)]
    pub result: String,
}

impl Match {
    pub fn new(team_a: Team, team_b: Team, toss: Toss, config: MatchConfig) -> Self {
        let innings1 = Innings::new(toss.batting_first(), &config);
        Self {
            team_a,
            team_b,
            toss,
            config,
            innings1,
            innings2: None,
            phase: MatchPhase::Innings1InProgress,
            result: String::new(),
        }
    }

    pub fn team(&self, id: TeamId) -> &Team {
        match id {
            TeamId::A => &self.team_a,
            TeamId::B => &self.team_b,
        }
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut Team {
        match id {
            TeamId::A => &mut self.team_a,
            TeamId::B => &mut self.team_b,
        }
    }

    /// 1 or 2.
    pub fn current_innings_number(&self) -> u8 {
        if self.innings2.is_some() {
            2
        } else {
            1
        }
    }

    pub fn current_innings(&self) -> &Innings {
        self.innings2.as_ref().unwrap_or(&self.innings1)
    }

    pub fn current_innings_mut(&mut self) -> &mut Innings {
        match self.innings2.as_mut() {
            Some(innings) => innings,
            None => &mut self.innings1,
        }
    }

    pub fn batting_team(&self) -> &Team {
        self.team(self.current_innings().batting_team)
    }

    pub fn bowling_team(&self) -> &Team {
        self.team(self.current_innings().bowling_team)
    }

    /// Split borrow of the current innings with both teams (batting, bowling).
    pub(crate) fn innings_and_teams_mut(&mut self) -> (&mut Innings, &mut Team, &mut Team) {
        let innings = match self.innings2.as_mut() {
            Some(innings) => innings,
            None => &mut self.innings1,
        };
        let (batting, bowling) = match innings.batting_team {
            TeamId::A => (&mut self.team_a, &mut self.team_b),
            TeamId::B => (&mut self.team_b, &mut self.team_a),
        };
        (innings, batting, bowling)
    }

    pub fn is_complete(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
