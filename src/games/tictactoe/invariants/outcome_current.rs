//! Outcome invariant: the stored outcome matches the board.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: the session outcome equals a fresh evaluation of the board.
pub struct OutcomeCurrentInvariant;

impl Invariant<GameSession> for OutcomeCurrentInvariant {
    fn holds(session: &GameSession) -> bool {
        session.outcome() == session.board().evaluate()
    }

    fn description() -> &'static str {
        "Outcome is recomputed from the current board"
    }
}
