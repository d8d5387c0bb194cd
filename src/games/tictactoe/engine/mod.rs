//! Computer opponent move selection.
//!
//! [`MoveEngine`] maps a board and a [`Difficulty`] to one empty cell.
//! Randomness comes from an injected [`IndexPicker`], so games can be
//! replayed exactly in tests.

pub mod heuristic;
pub mod minimax;
mod picker;

pub use minimax::{SearchResult, WIN_SCORE, minimax};
pub use picker::{IndexPicker, RngPicker, SequencePicker};

use super::{Board, Difficulty, Mark, Outcome};
use rand::rngs::StdRng;
use tracing::{debug, error, instrument};

/// Engine invoked on a board it cannot move on.
///
/// This is a caller ordering bug: the board must be evaluated before
/// asking the engine for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// No empty cell is left.
    #[display("Engine invariant violated: no empty cells")]
    NoEmptyCells,

    /// The board is already decided.
    #[display("Engine invariant violated: board is terminal ({})", _0)]
    TerminalBoard(Outcome),
}

impl std::error::Error for EngineError {}

/// Selects moves for the computer opponent.
#[derive(Debug, Clone)]
pub struct MoveEngine<P = RngPicker<StdRng>> {
    picker: P,
}

impl MoveEngine {
    /// Engine drawing randomness from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(RngPicker::from_entropy())
    }

    /// Engine with reproducible randomness.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngPicker::seeded(seed))
    }
}

impl<P: IndexPicker> MoveEngine<P> {
    /// Creates an engine around a picker.
    pub fn new(picker: P) -> Self {
        Self { picker }
    }

    /// Returns the picker.
    pub fn picker(&self) -> &P {
        &self.picker
    }

    /// Selects the opponent's move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the board has no empty cell or is
    /// already terminal.
    pub fn select_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
    ) -> Result<usize, EngineError> {
        self.select_move_as(board, difficulty, Mark::Opponent)
    }

    /// Selects a move for `mark` with the strategy for `difficulty`.
    #[instrument(skip(self, board))]
    pub fn select_move_as(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        mark: Mark,
    ) -> Result<usize, EngineError> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            error!("Engine asked to move on a full board");
            return Err(EngineError::NoEmptyCells);
        }
        let outcome = board.evaluate();
        if outcome.is_terminal() {
            error!(%outcome, "Engine asked to move on a finished board");
            return Err(EngineError::TerminalBoard(outcome));
        }

        let index = match difficulty {
            Difficulty::Easy => self.random(&empty),
            Difficulty::Medium => match heuristic::win_or_block(board, &empty, mark) {
                Some(index) => index,
                None => self.random(&empty),
            },
            Difficulty::Hard => {
                minimax::best_move(board, mark).ok_or(EngineError::TerminalBoard(outcome))?
            }
        };

        debug!(index, "Engine selected move");
        Ok(index)
    }

    fn random(&mut self, candidates: &[usize]) -> usize {
        candidates[self.picker.pick(candidates.len()) % candidates.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_easy_uses_picker() {
        let mut engine = MoveEngine::new(SequencePicker::new([2]));
        let b = board("X........");
        // Empty cells are 1..=8; the third is 3.
        assert_eq!(engine.select_move(&b, Difficulty::Easy), Ok(3));
    }

    #[test]
    fn test_easy_wraps_large_picks() {
        let mut engine = MoveEngine::new(|_len: usize| 17);
        let b = board("XO.......");
        // 17 % 7 == 3 -> fourth empty cell.
        assert_eq!(engine.select_move(&b, Difficulty::Easy), Ok(5));
    }

    #[test]
    fn test_medium_falls_back_to_random() {
        let mut engine = MoveEngine::new(SequencePicker::new([0]));
        let b = board("....X....");
        assert_eq!(engine.select_move(&b, Difficulty::Medium), Ok(0));
        assert_eq!(engine.picker().picks(), 1);
    }

    #[test]
    fn test_medium_forced_move_skips_picker() {
        let mut engine = MoveEngine::new(SequencePicker::new([0]));
        let b = board("XX..O....");
        assert_eq!(engine.select_move(&b, Difficulty::Medium), Ok(2));
        assert_eq!(engine.picker().picks(), 0);
    }

    #[test]
    fn test_hard_replies_center_to_corner() {
        let mut engine = MoveEngine::seeded(7);
        let b = board("X........");
        assert_eq!(engine.select_move(&b, Difficulty::Hard), Ok(4));
    }

    #[test]
    fn test_full_board_is_invariant_violation() {
        let mut engine = MoveEngine::seeded(0);
        let b = board("XOXXOOOXX");
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(engine.select_move(&b, difficulty), Err(EngineError::NoEmptyCells));
        }
    }

    #[test]
    fn test_won_board_is_invariant_violation() {
        let mut engine = MoveEngine::seeded(0);
        let b = board("XXXOO....");
        assert!(matches!(
            engine.select_move(&b, Difficulty::Hard),
            Err(EngineError::TerminalBoard(Outcome::Win(Mark::Player)))
        ));
    }
}
