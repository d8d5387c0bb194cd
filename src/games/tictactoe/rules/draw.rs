//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
