//! Opponent difficulty tiers.

use serde::{Deserialize, Serialize};

/// How strongly the computer opponent plays.
///
/// Fixed for a session until explicitly changed, which resets the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Win if possible, else block, else random.
    Medium,
    /// Exhaustive minimax search.
    Hard,
}
