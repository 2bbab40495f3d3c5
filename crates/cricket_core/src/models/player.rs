use serde::{Deserialize, Serialize};

pub type PlayerId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Created on the first ball this player faces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batting: Option<BattingStats>,
    /// Created on the first delivery this player bowls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowling: Option<BowlingStats>,
    #[serde(default)]
    pub is_out: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal: Option<Dismissal>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            batting: None,
            bowling: None,
            is_out: false,
            dismissal: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BattingStats {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BowlingStats {
    /// Legal deliveries bowled.
    pub balls: u32,
    /// Runs charged to the bowler (byes and leg-byes excluded).
    pub runs: u32,
    pub wickets: u32,
    pub wides: u32,
    pub no_balls: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dismissal {
    pub kind: DismissalKind,
    pub bowler_id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fielder_id: Option<PlayerId>,
    /// Over in progress when the wicket fell (0-based).
    pub over: u32,
    /// Legal ball of that over on which it fell (1-based).
    pub ball: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    Stumped,
    HitWicket,
    RunOutStriker,
    RunOutNonStriker,
    Obstructing,
    HitBallTwice,
}

impl DismissalKind {
    /// Only these dismissals stand on a free hit.
    pub fn allowed_on_free_hit(self) -> bool {
        matches!(
            self,
            DismissalKind::RunOutStriker
                | DismissalKind::RunOutNonStriker
                | DismissalKind::Obstructing
                | DismissalKind::HitBallTwice
        )
    }

    /// Whether the wicket counts in the bowler's figures.
    pub fn credited_to_bowler(self) -> bool {
        !matches!(
            self,
            DismissalKind::RunOutStriker
                | DismissalKind::RunOutNonStriker
                | DismissalKind::Obstructing
        )
    }

    /// True when the batter at the non-striker's end is the one dismissed.
    pub fn dismisses_non_striker(self) -> bool {
        matches!(self, DismissalKind::RunOutNonStriker)
    }

    pub fn label(self) -> &'static str {
        match self {
            DismissalKind::Bowled => "bowled",
            DismissalKind::Caught => "caught",
            DismissalKind::Lbw => "lbw",
            DismissalKind::Stumped => "stumped",
            DismissalKind::HitWicket => "hit wicket",
            DismissalKind::RunOutStriker | DismissalKind::RunOutNonStriker => "run out",
            DismissalKind::Obstructing => "obstructing the field",
            DismissalKind::HitBallTwice => "hit the ball twice",
        }
    }
}
