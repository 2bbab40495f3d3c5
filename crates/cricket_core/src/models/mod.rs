pub mod events;
pub mod innings;
pub mod match_state;
pub mod player;
pub mod team;

pub use events::{BallEvent, Delivery, EventKind, Snapshot};
pub use innings::Innings;
pub use match_state::{Match, MatchPhase, Toss, TossDecision};
pub use player::{BattingStats, BowlingStats, Dismissal, DismissalKind, Player, PlayerId};
pub use team::{Extras, Team, TeamId};
