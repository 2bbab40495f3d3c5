//! Cricket Scorer CLI
//!
//! Create a match file, apply scoring commands to it, print its scorecard.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cricket")]
#[command(about = "Ball-by-ball cricket scorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a match file from a setup JSON
    New {
        /// Setup JSON (teams, toss, optional config)
        #[arg(long)]
        setup: PathBuf,

        /// Output match file path
        #[arg(long)]
        out: PathBuf,
    },

    /// Apply a JSON array of scoring commands to a match file
    Score {
        /// Match file path
        #[arg(long = "match")]
        match_path: PathBuf,

        /// Commands JSON file path
        #[arg(long)]
        commands: PathBuf,

        /// Write here instead of overwriting the match file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the scorecard of a match file
    Card {
        /// Match file path
        #[arg(long = "match")]
        match_path: PathBuf,

        /// Print the scorecards as JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New { setup, out } => {
            let m = cricket_cli::create_match(&setup, &out)?;
            println!("Created {} v {}", m.team_a.name, m.team_b.name);
            println!("   Output: {}", out.display());
            println!("   Overs:  {}", m.config.max_overs.map_or("unlimited".to_string(), |o| o.to_string()));
        }

        Commands::Score { match_path, commands, out } => {
            let m = cricket_cli::score_match(&match_path, &commands, out.as_deref())?;
            println!("{}", m.result);
        }

        Commands::Card { match_path, json } => {
            let m = cricket_cli::load_match(&match_path)?;
            if json {
                let cards = cricket_cli::scorecards(&m);
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                print!("{}", cricket_cli::render_match(&m));
            }
        }
    }

    Ok(())
}
