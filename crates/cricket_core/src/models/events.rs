use serde::{Deserialize, Serialize};

use super::player::{DismissalKind, PlayerId};

/// One delivery's effect on the innings, as appended to the event log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BallEvent {
    pub delivery: Delivery,
    /// Whether the delivery counted toward the over.
    pub legal: bool,
    /// Over in progress when the ball was bowled (0-based).
    pub over: u32,
    /// Legal balls of that over completed after this delivery.
    pub ball: u32,
    /// State needed to reverse the delivery exactly.
    pub before: Snapshot,
}

impl BallEvent {
    pub fn kind(&self) -> EventKind {
        self.delivery.kind()
    }

    pub fn runs_bat(&self) -> u32 {
        self.delivery.runs_bat()
    }

    pub fn runs_extra(&self) -> u32 {
        self.delivery.runs_extra()
    }

    pub fn total_runs(&self) -> u32 {
        self.delivery.total_runs()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Delivery {
    /// Runs off the bat other than a boundary; 0 is a dot ball.
    Run { runs: u32 },
    Boundary4,
    Boundary6,
    /// `extra_runs` are run or overthrown on top of the one-run penalty.
    Wide { extra_runs: u32 },
    NoBall { bat_runs: u32 },
    Bye { runs: u32 },
    LegBye { runs: u32 },
    Wicket {
        kind: DismissalKind,
        dismissed_id: PlayerId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fielder_id: Option<PlayerId>,
        runs_completed: u32,
    },
    /// Penalty runs awarded to the batting side.
    Penalty { runs: u32 },
    DeadBall,
}

impl Delivery {
    pub fn kind(&self) -> EventKind {
        match self {
            Delivery::Run { .. } => EventKind::Run,
            Delivery::Boundary4 => EventKind::Boundary4,
            Delivery::Boundary6 => EventKind::Boundary6,
            Delivery::Wide { .. } => EventKind::Wide,
            Delivery::NoBall { .. } => EventKind::NoBall,
            Delivery::Bye { .. } => EventKind::Bye,
            Delivery::LegBye { .. } => EventKind::LegBye,
            Delivery::Wicket { .. } => EventKind::Wicket,
            Delivery::Penalty { .. } => EventKind::Penalty,
            Delivery::DeadBall => EventKind::Dead,
        }
    }

    /// Runs credited to the striker.
    pub fn runs_bat(&self) -> u32 {
        match self {
            Delivery::Run { runs } => *runs,
            Delivery::Boundary4 => 4,
            Delivery::Boundary6 => 6,
            Delivery::NoBall { bat_runs } => *bat_runs,
            Delivery::Wicket { runs_completed, .. } => *runs_completed,
            Delivery::Wide { .. }
            | Delivery::Bye { .. }
            | Delivery::LegBye { .. }
            | Delivery::Penalty { .. }
            | Delivery::DeadBall => 0,
        }
    }

    /// Runs added to the team's extras.
    pub fn runs_extra(&self) -> u32 {
        match self {
            Delivery::Wide { extra_runs } => 1 + extra_runs,
            Delivery::NoBall { .. } => 1,
            Delivery::Bye { runs } | Delivery::LegBye { runs } | Delivery::Penalty { runs } => *runs,
            Delivery::Run { .. }
            | Delivery::Boundary4
            | Delivery::Boundary6
            | Delivery::Wicket { .. }
            | Delivery::DeadBall => 0,
        }
    }

    pub fn total_runs(&self) -> u32 {
        self.runs_bat() + self.runs_extra()
    }

    /// Runs charged against the bowler's figures.
    pub fn bowler_runs(&self) -> u32 {
        match self {
            Delivery::Bye { .. } | Delivery::LegBye { .. } | Delivery::Penalty { .. } => 0,
            other => other.total_runs(),
        }
    }

    /// Whether the striker is credited with a ball faced.
    pub fn faces_ball(&self) -> bool {
        match self {
            Delivery::Run { .. }
            | Delivery::Boundary4
            | Delivery::Boundary6
            | Delivery::NoBall { .. }
            | Delivery::Bye { .. }
            | Delivery::LegBye { .. }
            | Delivery::Wicket { .. } => true,
            Delivery::Wide { .. } | Delivery::Penalty { .. } | Delivery::DeadBall => false,
        }
    }

    /// Whether the delivery touches the bowler's figures at all.
    pub fn involves_bowler(&self) -> bool {
        !matches!(self, Delivery::Penalty { .. } | Delivery::DeadBall)
    }

    /// Boundary hit off the bat (4 or 6), including off a no-ball.
    pub fn boundary(&self) -> Option<u32> {
        match self {
            Delivery::Boundary4 | Delivery::NoBall { bat_runs: 4 } => Some(4),
            Delivery::Boundary6 | Delivery::NoBall { bat_runs: 6 } => Some(6),
            _ => None,
        }
    }

    /// Runs that decide strike rotation; odd means the batters crossed.
    pub fn rotation_runs(&self) -> u32 {
        match self {
            Delivery::Run { runs } | Delivery::Bye { runs } | Delivery::LegBye { runs } => *runs,
            Delivery::Boundary4 => 4,
            Delivery::Boundary6 => 6,
            Delivery::Wide { extra_runs } => 1 + extra_runs,
            Delivery::NoBall { bat_runs } => 1 + bat_runs,
            Delivery::Wicket { runs_completed, .. } => *runs_completed,
            Delivery::Penalty { .. } | Delivery::DeadBall => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Run,
    Boundary4,
    Boundary6,
    Wide,
    NoBall,
    Bye,
    LegBye,
    Wicket,
    Penalty,
    Dead,
}

/// Innings state captured just before a delivery was applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub striker_id: PlayerId,
    pub non_striker_id: PlayerId,
    pub bowler_id: PlayerId,
    pub free_hit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_bowler_id: Option<PlayerId>,
    #[serde(default)]
    pub awaiting_bowler: bool,
    /// The delivery created the striker's batting stats.
    #[serde(default)]
    pub created_batting: bool,
    /// The delivery created the bowler's bowling stats.
    #[serde(default)]
    pub created_bowling: bool,
}
