use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    pub fn other(self) -> TeamId {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Extras {
    pub wides: u32,
    pub no_balls: u32,
    pub byes: u32,
    pub leg_byes: u32,
    pub penalties: u32,
}

impl Extras {
    pub fn total(&self) -> u32 {
        self.wides + self.no_balls + self.byes + self.leg_byes + self.penalties
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<Player>, // batting order
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub extras: Extras,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { id, name: name.into(), players, score: 0, wickets: 0, extras: Extras::default() }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.player(id).is_some()
    }

    /// A squad must be able to lose `max_wickets` batters and still have one
    /// left, so the innings can end all out.
    pub fn validate(&self, max_wickets: u32) -> Result<(), String> {
        let needed = (max_wickets as usize + 1).max(2);
        if self.players.len() < needed {
            return Err(format!(
                "Team {} needs at least {} players for {} wickets, found {}",
                self.name,
                needed,
                max_wickets,
                self.players.len()
            ));
        }

        let mut seen: Vec<&PlayerId> = Vec::with_capacity(self.players.len());
        for player in &self.players {
            if seen.contains(&&player.id) {
                return Err(format!("Duplicate player id in team {}: {}", self.name, player.id));
            }
            seen.push(&player.id);
        }

        Ok(())
    }
}
