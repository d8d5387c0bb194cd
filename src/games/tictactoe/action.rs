//! Moves and move rejection.

use super::phases::Outcome;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a board index, as recorded in session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who moved.
    pub mark: Mark,
    /// Where (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Why a move was rejected.
///
/// Rejections are recoverable: the caller ignores the input and the
/// board is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The other side is due to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),
}

impl std::error::Error for MoveError {}
