//! Command-line interface for morpion.

use clap::{Parser, Subcommand};
use morpion::{Difficulty, Language};

/// Morpion - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(about = "Tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Opponent difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the opponent's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the opponent replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Language of status messages (fr, en)
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Let the engine play against itself
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Difficulty used by both sides
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
