use serde::{Deserialize, Serialize};

use super::commands::{apply_command, ScoringCommand};
use super::ApiError;
use crate::config::MatchConfig;
use crate::engine::update_match_result;
use crate::models::{Match, Player, Team, TeamId, Toss};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSetup {
    pub team_a: TeamData,
    pub team_b: TeamData,
    pub toss: Toss,
    /// Falls back to `CRICKET_MATCH_CONFIG_PATH`, then to T20 rules.
    #[serde(default)]
    pub config: Option<MatchConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamData {
    pub name: String,
    pub players: Vec<PlayerData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerData {
    pub id: String,
    pub name: String,
}

impl TeamData {
    fn into_team(self, id: TeamId) -> Team {
        let players = self.players.into_iter().map(|p| Player::new(p.id, p.name)).collect();
        Team::new(id, self.name, players)
    }
}

/// Build a fresh match from a setup request.
pub fn new_match(setup: MatchSetup) -> Result<Match, ApiError> {
    let config = match setup.config {
        Some(config) => config,
        None => crate::config::config_from_env()?.unwrap_or_default(),
    };
    config.validate()?;

    let team_a = setup.team_a.into_team(TeamId::A);
    let team_b = setup.team_b.into_team(TeamId::B);
    team_a.validate(config.max_wickets).map_err(ApiError::InvalidSetup)?;
    team_b.validate(config.max_wickets).map_err(ApiError::InvalidSetup)?;

    let mut m = Match::new(team_a, team_b, setup.toss, config);
    update_match_result(&mut m);
    log::info!("New match: {} v {} ({:?})", m.team_a.name, m.team_b.name, config.max_overs);
    Ok(m)
}

pub fn new_match_json(setup_json: &str) -> Result<String, ApiError> {
    let setup: MatchSetup = serde_json::from_str(setup_json)?;
    match_to_json(&new_match(setup)?)
}

pub fn match_to_json(m: &Match) -> Result<String, ApiError> {
    Ok(m.to_json()?)
}

pub fn match_from_json(json: &str) -> Result<Match, ApiError> {
    Ok(Match::from_json(json)?)
}

/// Apply commands in order, stopping at the first failure.
///
/// Commands before the failing one stay applied.
pub fn apply_commands(m: &mut Match, commands: &[ScoringCommand]) -> Result<(), ApiError> {
    for (index, command) in commands.iter().enumerate() {
        apply_command(m, command).map_err(|source| ApiError::Command { index, source })?;
    }
    Ok(())
}

/// JSON in, JSON out: apply `commands_json` to `match_json`.
pub fn apply_commands_json(match_json: &str, commands_json: &str) -> Result<String, ApiError> {
    let mut m = match_from_json(match_json)?;
    let commands: Vec<ScoringCommand> = serde_json::from_str(commands_json)?;
    apply_commands(&mut m, &commands)?;
    match_to_json(&m)
}
