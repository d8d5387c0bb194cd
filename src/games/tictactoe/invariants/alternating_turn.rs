//! Alternating turn invariant: player, opponent, player, ...

use super::Invariant;
use crate::games::tictactoe::Mark;
use crate::session::GameSession;

/// Invariant: marks alternate, starting with the player.
///
/// The mark due to move must follow from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let expected = |i: usize| if i % 2 == 0 { Mark::Player } else { Mark::Opponent };

        let alternates = session
            .history()
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.mark == expected(i));

        alternates && session.to_move() == expected(session.history().len())
    }

    fn description() -> &'static str {
        "Marks alternate, player first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, MoveEngine};

    #[test]
    fn test_empty_game_holds() {
        let session = GameSession::new_game(Difficulty::Easy);
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_single_move_holds() {
        let mut session = GameSession::new_game(Difficulty::Easy);
        session.submit_player_move(4).unwrap();
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.to_move(), Mark::Opponent);
    }

    #[test]
    fn test_full_round_holds() {
        let mut session = GameSession::new_game(Difficulty::Hard);
        let mut engine = MoveEngine::seeded(1);
        session.play_turn(0, &mut engine).unwrap();
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.to_move(), Mark::Player);
    }
}
