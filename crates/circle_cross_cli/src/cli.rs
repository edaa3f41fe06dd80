//! Command-line interface for circle_cross.

use circle_cross::{Difficulty, Mode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Circle and cross - play against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "circle_cross")]
#[command(about = "Circle and cross in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// human-vs-human or human-vs-computer
        #[arg(long)]
        mode: Option<Mode>,

        /// Computer strength: easy, normal or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Pit two computer policies against each other and print a JSON report
    Simulate {
        /// Difficulty of the policy playing circle
        #[arg(long)]
        circle: Difficulty,

        /// Difficulty of the policy playing cross
        #[arg(long)]
        cross: Difficulty,

        /// Number of games to play
        #[arg(short, long, default_value_t = 100)]
        games: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file for policy tuning
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
