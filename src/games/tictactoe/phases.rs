//! Game outcome classification.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Terminal or non-terminal classification of a board.
///
/// Always recomputed from the full board, never cached across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    #[default]
    InProgress,
    /// The mark completed a line.
    Win(Mark),
    /// Full board without a winning line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game is over. Terminal outcomes are absorbing.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
