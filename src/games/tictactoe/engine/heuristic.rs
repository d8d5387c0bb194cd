//! Medium strategy: take a win, otherwise block one.

use crate::games::tictactoe::{Board, Mark, Outcome};

/// First candidate that wins for `me`, else the first that blocks the
/// other mark's immediate win. `None` means neither exists.
///
/// Candidates are scanned in the order given (ascending from
/// [`Board::empty_cells`]) and each is tried on a scratch copy.
pub fn win_or_block(board: &Board, candidates: &[usize], me: Mark) -> Option<usize> {
    completing_cell(board, candidates, me)
        .or_else(|| completing_cell(board, candidates, me.other()))
}

fn completing_cell(board: &Board, candidates: &[usize], mark: Mark) -> Option<usize> {
    candidates
        .iter()
        .copied()
        .find(|&index| board.with_move(index, mark).evaluate() == Outcome::Win(mark))
}
