//! Terminal front-end.
//!
//! Reads moves line by line from stdin and prints the board and status
//! after every change.

mod input;
mod orchestrator;
mod self_play;
mod ui;

pub use self_play::run_self_play;

use anyhow::Result;
use morpion::{GameConfig, MoveEngine};
use orchestrator::Orchestrator;
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Plays interactively until the player quits or stdin closes.
#[instrument(skip(config))]
pub async fn run_play(config: GameConfig) -> Result<()> {
    info!(difficulty = %config.difficulty(), seed = ?config.seed(), "Starting interactive game");

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    // Plain thread: a blocking tokio stdin read would hold up runtime shutdown.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
        debug!("Input reader finished");
    });

    let language = *config.language();
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            println!("{}", ui::render(&event, language));
        }
    });

    println!("1-9: jouer / play | easy, medium, hard | reset | quit");
    let engine = match config.seed() {
        Some(seed) => MoveEngine::seeded(*seed),
        None => MoveEngine::from_entropy(),
    };
    let session = Orchestrator::new(
        *config.difficulty(),
        engine,
        config.opponent_delay(),
        language,
        input_rx,
        event_tx,
    )
    .run()
    .await?;

    printer.await?;
    debug!(moves = session.history().len(), "Interactive game closed");
    Ok(())
}
