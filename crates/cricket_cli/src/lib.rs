//! Cricket Scorer CLI Library
//!
//! File plumbing and text rendering behind the `cricket` binary. A match is
//! stored as one JSON document; scoring commands are read from a JSON array
//! and applied in order.

use anyhow::{Context, Result};
use cricket_core::analysis::{
    chase_required_run_rate, current_over_display, current_partnership, innings_run_rate,
    run_rate_progression, scorecard, wicket_falls, Scorecard,
};
use cricket_core::api::{
    apply_commands, match_from_json, match_to_json, new_match, MatchSetup, ScoringCommand,
};
use cricket_core::{Innings, Match};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub fn load_setup(path: &Path) -> Result<MatchSetup> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read setup file: {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse match setup")
}

pub fn load_match(path: &Path) -> Result<Match> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read match file: {}", path.display()))?;
    match_from_json(&json).context("Failed to parse match")
}

pub fn save_match(path: &Path, m: &Match) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let json = match_to_json(m).context("Failed to serialize match")?;
    fs::write(path, json).with_context(|| format!("Failed to write match: {}", path.display()))?;
    log::debug!("Saved match to {}", path.display());
    Ok(())
}

pub fn load_commands(path: &Path) -> Result<Vec<ScoringCommand>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read commands file: {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse scoring commands")
}

/// Create a match file from a setup file.
pub fn create_match(setup_path: &Path, out: &Path) -> Result<Match> {
    let setup = load_setup(setup_path)?;
    let m = new_match(setup).context("Failed to create match")?;
    save_match(out, &m)?;
    Ok(m)
}

/// Apply a commands file to a stored match and write the result to `out`
/// (the match file itself when `None`).
///
/// Nothing is written when a command fails.
pub fn score_match(match_path: &Path, commands_path: &Path, out: Option<&Path>) -> Result<Match> {
    let mut m = load_match(match_path)?;
    let commands = load_commands(commands_path)?;

    apply_commands(&mut m, &commands)
        .with_context(|| format!("Failed to apply {}", commands_path.display()))?;
    log::info!("Applied {} commands: {}", commands.len(), m.result);

    save_match(out.unwrap_or(match_path), &m)?;
    Ok(m)
}

/// Scorecards of every innings played so far, first innings first.
pub fn scorecards(m: &Match) -> Vec<Scorecard> {
    std::iter::once(&m.innings1)
        .chain(m.innings2.as_ref())
        .map(|innings| scorecard(innings, m.team(innings.batting_team), m.team(innings.bowling_team)))
        .collect()
}

/// Plain-text scorecard of every innings played so far.
pub fn render_match(m: &Match) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} v {}", m.team_a.name, m.team_b.name);

    for (number, innings) in std::iter::once(&m.innings1).chain(m.innings2.as_ref()).enumerate() {
        out.push('\n');
        render_innings(&mut out, m, number + 1, innings);
    }

    if let Some(rate) = chase_required_run_rate(m).filter(|_| !m.is_complete()) {
        let _ = writeln!(out, "Required rate: {rate:.2}");
    }
    let _ = writeln!(out, "\n{}", m.result);
    out
}

fn render_innings(out: &mut String, m: &Match, number: usize, innings: &Innings) {
    let batting = m.team(innings.batting_team);
    let bowling = m.team(innings.bowling_team);
    let card = scorecard(innings, batting, bowling);

    let _ = writeln!(out, "Innings {number}: {} {}", card.batting_team, card.total);
    for line in &card.batting {
        let _ = writeln!(
            out,
            "  {:<20} {:<28} {:>3} ({:>3}) 4s:{} 6s:{} SR {:.2}",
            line.name, line.how_out, line.runs, line.balls, line.fours, line.sixes, line.strike_rate
        );
    }
    let extras = card.extras;
    let _ = writeln!(
        out,
        "  Extras {} (w {}, nb {}, b {}, lb {}, p {})",
        extras.total(),
        extras.wides,
        extras.no_balls,
        extras.byes,
        extras.leg_byes,
        extras.penalties
    );

    let falls: Vec<String> = wicket_falls(innings).iter().map(|fall| fall.label()).collect();
    if !falls.is_empty() {
        let _ = writeln!(out, "  Fall of wickets: {}", falls.join(", "));
    }

    for line in &card.bowling {
        let _ = writeln!(
            out,
            "  {:<20} {:>5}-{}-{}-{} Econ {:.2}",
            line.name, line.overs, line.maidens, line.runs, line.wickets, line.economy
        );
    }

    let progression: Vec<String> = run_rate_progression(innings)
        .iter()
        .map(|over| format!("{}:{}/{}", over.over, over.runs, over.cumulative))
        .collect();
    if !progression.is_empty() {
        let _ = writeln!(out, "  Overs: {}", progression.join(" "));
    }

    if std::ptr::eq(innings, m.current_innings()) && !m.is_complete() {
        let partnership = current_partnership(innings);
        let _ = writeln!(out, "  This over: {}", current_over_display(innings).join(" "));
        let _ = writeln!(
            out,
            "  Partnership: {} ({}) | Run rate: {:.2}",
            partnership.runs,
            partnership.balls,
            innings_run_rate(m)
        );
    }
}
