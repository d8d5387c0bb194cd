//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::games::tictactoe::{Board, Cell};
use crate::session::GameSession;

/// Invariant: no cell is ever overwritten.
///
/// Replaying the history onto an empty board must only ever fill empty
/// cells and must reproduce the live board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();

        for mov in session.history() {
            if replayed.get(mov.index) != Some(Cell::Empty) {
                return false;
            }
            replayed = replayed.with_move(mov.index, mov.mark);
        }

        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
