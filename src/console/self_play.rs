//! Engine-versus-engine games.

use anyhow::Result;
use morpion::{Difficulty, Mark, MoveEngine, Outcome, play_engine_match};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Tally of finished self-play games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlaySummary {
    /// Difficulty both sides played at.
    pub difficulty: Difficulty,
    /// Games played.
    pub games: u32,
    /// Games won by the side moving first (X).
    pub player_wins: u32,
    /// Games won by the side moving second (O).
    pub opponent_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl SelfPlaySummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Mark::Player) => self.player_wins += 1,
            Some(Mark::Opponent) => self.opponent_wins += 1,
            None if outcome.is_draw() => self.draws += 1,
            None => {
                warn!(%outcome, "Unfinished game left out of the tally");
                return;
            }
        }
        self.games += 1;
    }
}

impl std::fmt::Display for SelfPlaySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games at {}: X {} / O {} / draws {}",
            self.games, self.difficulty, self.player_wins, self.opponent_wins, self.draws
        )
    }
}

/// Plays `games` engine-vs-engine games and prints the summary.
#[instrument]
pub fn run_self_play(
    games: u32,
    difficulty: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<SelfPlaySummary> {
    let mut engine = match seed {
        Some(seed) => MoveEngine::seeded(seed),
        None => MoveEngine::from_entropy(),
    };

    let mut summary = SelfPlaySummary {
        difficulty,
        ..SelfPlaySummary::default()
    };
    for game in 0..games {
        let session = play_engine_match(&mut engine, difficulty)?;
        info!(game, outcome = %session.outcome(), "Self-play game finished");
        summary.record(session.outcome());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(summary)
}
