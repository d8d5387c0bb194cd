//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates the board, so
//! the same rules serve live play and speculative search.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner};

use super::{Board, Outcome};

/// Classifies a board.
///
/// The first line in [`WIN_LINES`] order held by a single mark decides
/// a win. Otherwise a full board is a draw and anything else is in
/// progress.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
