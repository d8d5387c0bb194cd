//! Morpion - command-line front-end.
//!
//! Interactive play against the computer, or engine self-play.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use morpion::GameConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play {
            difficulty,
            seed,
            delay_ms,
            language,
        } => {
            let mut config = config;
            if let Some(difficulty) = difficulty {
                config = config.with_difficulty(difficulty);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_opponent_delay_ms(delay_ms);
            }
            if let Some(language) = language {
                config = config.with_language(language);
            }
            console::run_play(config).await
        }
        Command::SelfPlay {
            games,
            difficulty,
            seed,
            json,
        } => {
            let seed = seed.or(*config.seed());
            let summary = console::run_self_play(games, difficulty, seed, json)?;
            info!(%summary, "Self-play complete");
            Ok(())
        }
    }
}
