//! Game orchestration between the typed input and the engine.

use super::input::Input;
use anyhow::Result;
use morpion::{
    Board, Difficulty, GameSession, IndexPicker, Language, MoveEngine, Outcome, Position,
    TurnReport, celebrate, status_message,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board is ready.
    NewGame {
        /// Difficulty of the new game.
        difficulty: Difficulty,
        /// Localized opening status.
        status: &'static str,
    },
    /// Board after a change.
    BoardChanged(Board),
    /// The opponent is about to reply.
    OpponentThinking,
    /// A move was accepted.
    MoveMade(TurnReport),
    /// The game ended; further moves are ignored until a reset.
    GameOver {
        /// Localized status line.
        status: &'static str,
        /// True only when the player won.
        celebrate: bool,
    },
}

/// Runs one interactive session: player input in, events out.
pub struct Orchestrator<P> {
    session: GameSession,
    engine: MoveEngine<P>,
    delay: Duration,
    language: Language,
    input_rx: mpsc::UnboundedReceiver<String>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl<P: IndexPicker> Orchestrator<P> {
    /// Creates a new orchestrator.
    pub fn new(
        difficulty: Difficulty,
        engine: MoveEngine<P>,
        delay: Duration,
        language: Language,
        input_rx: mpsc::UnboundedReceiver<String>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session: GameSession::new_game(difficulty),
            engine,
            delay,
            language,
            input_rx,
            event_tx,
        }
    }

    /// Processes input until `quit` or the input closes.
    ///
    /// Returns the session as it was when play stopped.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> Result<GameSession> {
        info!("Starting game orchestration");
        self.announce_new_game()?;

        while let Some(line) = self.input_rx.recv().await {
            match Input::parse(&line) {
                Input::Quit => break,
                Input::Reset => {
                    self.session.reset();
                    self.announce_new_game()?;
                }
                Input::SetDifficulty(difficulty) => {
                    self.session.set_difficulty(difficulty);
                    self.announce_new_game()?;
                }
                Input::Move(position) => self.player_move(position).await?,
                Input::Unknown(text) => warn!(input = %text, "Ignoring unrecognized input"),
            }
        }

        info!(outcome = %self.session.outcome(), "Game orchestration finished");
        Ok(self.session)
    }

    async fn player_move(&mut self, position: Position) -> Result<()> {
        let turn = match self.session.submit_player_move(position.to_index()) {
            Ok(turn) => turn,
            Err(e) => {
                // Rejected input is dropped; the board stays as it was.
                debug!(error = %e, "Player move ignored");
                return Ok(());
            }
        };
        if self.report(turn)? {
            return Ok(());
        }

        self.event_tx.send(GameEvent::OpponentThinking)?;
        tokio::time::sleep(self.delay).await;

        let turn = self.session.request_opponent_move(&mut self.engine)?;
        self.report(turn)?;
        Ok(())
    }

    /// Publishes an accepted move. Returns true if it ended the game.
    fn report(&self, turn: TurnReport) -> Result<bool> {
        self.event_tx.send(GameEvent::MoveMade(turn))?;
        self.event_tx
            .send(GameEvent::BoardChanged(*self.session.board()))?;

        if turn.outcome.is_terminal() {
            self.event_tx.send(GameEvent::GameOver {
                status: status_message(turn.outcome, self.language),
                celebrate: celebrate(turn.outcome),
            })?;
            return Ok(true);
        }
        Ok(false)
    }

    fn announce_new_game(&self) -> Result<()> {
        self.event_tx.send(GameEvent::NewGame {
            difficulty: self.session.difficulty(),
            status: status_message(Outcome::InProgress, self.language),
        })?;
        self.event_tx
            .send(GameEvent::BoardChanged(*self.session.board()))?;
        Ok(())
    }
}
