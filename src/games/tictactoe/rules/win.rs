//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};

/// The eight winning index triples: rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark holding the first complete line, if any.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in WIN_LINES {
        if let Cell::Occupied(mark) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(mark);
        }
    }
    None
}
