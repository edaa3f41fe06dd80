//! Circle and cross - terminal front end
//!
//! Interactive play against a friend or the computer, and headless
//! policy-versus-policy simulation.

#![warn(missing_docs)]

mod cli;
mod simulate;
mod terminal;

use anyhow::Result;
use circle_cross::SessionConfig;
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            seed,
            config,
            delay_ms,
        } => {
            let mut session_config = SessionConfig::load(config.as_deref())?;
            if let Some(mode) = mode {
                session_config = session_config.with_mode(mode);
            }
            if let Some(difficulty) = difficulty {
                session_config = session_config.with_difficulty(difficulty);
            }
            if let Some(seed) = seed {
                session_config = session_config.with_seed(seed);
            }
            if let Some(delay_ms) = delay_ms {
                session_config = session_config.with_computer_delay_ms(delay_ms);
            }
            terminal::play(session_config).await
        }
        Command::Simulate {
            circle,
            cross,
            games,
            seed,
            config,
        } => run_simulation(circle, cross, games, seed, config),
    }
}

/// Run the simulation and print its report to stdout
#[instrument]
fn run_simulation(
    circle: circle_cross::Difficulty,
    cross: circle_cross::Difficulty,
    games: u32,
    seed: Option<u64>,
    config: Option<std::path::PathBuf>,
) -> Result<()> {
    let session_config = SessionConfig::load(config.as_deref())?;
    let seed = seed.or(*session_config.seed());
    info!(games, "Starting simulation");

    let report = simulate::simulate(circle, cross, games, seed, session_config.policy())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
