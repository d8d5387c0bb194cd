//! Game session: one board, one difficulty, strict turn order.
//!
//! All game state lives in [`GameSession`] and is passed explicitly to
//! every engine call.

use crate::games::tictactoe::invariants::assert_invariants;
use crate::games::tictactoe::{
    Board, Difficulty, EngineError, IndexPicker, Mark, Move, MoveEngine, MoveError, Outcome,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Error from a session operation that involves the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The move was rejected.
    #[display("{}", _0)]
    Move(MoveError),
    /// The engine was asked to move when it could not.
    #[display("{}", _0)]
    Engine(EngineError),
}

impl std::error::Error for SessionError {}

/// One accepted move and the outcome it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Who moved.
    pub mark: Mark,
    /// Where (0-8).
    pub index: usize,
    /// Outcome after the move.
    pub outcome: Outcome,
}

/// A player move and the opponent's reply, if the game went on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// The player's move.
    pub player: TurnReport,
    /// The opponent's reply; `None` when the player's move ended the game.
    pub opponent: Option<TurnReport>,
}

impl RoundReport {
    /// Outcome after the whole round.
    pub fn outcome(&self) -> Outcome {
        self.opponent.unwrap_or(self.player).outcome
    }
}

/// A single-player game against the computer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    difficulty: Difficulty,
    outcome: Outcome,
    to_move: Mark,
    history: Vec<Move>,
}

impl GameSession {
    /// Starts a new game on an empty board. The player moves first.
    #[instrument]
    pub fn new_game(difficulty: Difficulty) -> Self {
        info!(%difficulty, "Starting new game");
        Self {
            board: Board::new(),
            difficulty,
            outcome: Outcome::InProgress,
            to_move: Mark::Player,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the outcome after the last move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the mark due to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Clears the board, keeping the difficulty.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn reset(&mut self) {
        *self = Self::new_game(self.difficulty);
    }

    /// Changes difficulty, which also starts a new game.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        *self = Self::new_game(difficulty);
    }

    /// Applies the player's move at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over, the opponent is due,
    /// or the cell is out of range or occupied. The session is unchanged.
    #[instrument(skip(self))]
    pub fn submit_player_move(&mut self, index: usize) -> Result<TurnReport, MoveError> {
        self.place(Mark::Player, index)
    }

    /// Lets the engine choose and apply the opponent's move.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Move`] if the game is over or it is the
    /// player's turn, and [`SessionError::Engine`] if the engine fails.
    #[instrument(skip(self, engine), fields(difficulty = %self.difficulty))]
    pub fn request_opponent_move<P: IndexPicker>(
        &mut self,
        engine: &mut MoveEngine<P>,
    ) -> Result<TurnReport, SessionError> {
        self.check_turn(Mark::Opponent)?;
        let index = engine.select_move(&self.board, self.difficulty)?;
        Ok(self.place(Mark::Opponent, index)?)
    }

    /// Player move followed by the opponent's reply unless the game ended.
    ///
    /// # Errors
    ///
    /// A rejected player move leaves the session unchanged. An engine
    /// error after the player's move was accepted keeps that move applied,
    /// with the opponent still due.
    #[instrument(skip(self, engine))]
    pub fn play_turn<P: IndexPicker>(
        &mut self,
        index: usize,
        engine: &mut MoveEngine<P>,
    ) -> Result<RoundReport, SessionError> {
        let player = self.submit_player_move(index)?;
        let opponent = if player.outcome.is_terminal() {
            None
        } else {
            Some(self.request_opponent_move(engine)?)
        };
        Ok(RoundReport { player, opponent })
    }

    fn check_turn(&self, mark: Mark) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        if self.to_move != mark {
            return Err(MoveError::WrongTurn(mark));
        }
        Ok(())
    }

    fn place(&mut self, mark: Mark, index: usize) -> Result<TurnReport, MoveError> {
        if let Err(e) = self
            .check_turn(mark)
            .and_then(|()| self.board.apply_move(index, mark))
        {
            warn!(%mark, index, error = %e, "Move rejected");
            return Err(e);
        }

        self.history.push(Move::new(mark, index));
        self.outcome = self.board.evaluate();
        self.to_move = mark.other();
        assert_invariants(self);

        debug!(%mark, index, outcome = %self.outcome, "Move applied");
        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        }
        Ok(TurnReport {
            mark,
            index,
            outcome: self.outcome,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new_game(Difficulty::default())
    }
}

/// Plays a whole game with the engine on both sides at `difficulty`.
///
/// # Errors
///
/// Only fails on an engine invariant violation, which indicates a bug.
#[instrument(skip(engine))]
pub fn play_engine_match<P: IndexPicker>(
    engine: &mut MoveEngine<P>,
    difficulty: Difficulty,
) -> Result<GameSession, SessionError> {
    let mut session = GameSession::new_game(difficulty);
    while !session.outcome().is_terminal() {
        match session.to_move() {
            Mark::Player => {
                let index = engine.select_move_as(session.board(), difficulty, Mark::Player)?;
                session.submit_player_move(index)?;
            }
            Mark::Opponent => {
                session.request_opponent_move(engine)?;
            }
        }
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::SequencePicker;

    #[test]
    fn test_new_game_is_empty() {
        let session = GameSession::new_game(Difficulty::Hard);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.to_move(), Mark::Player);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_player_cannot_move_twice() {
        let mut session = GameSession::new_game(Difficulty::Easy);
        session.submit_player_move(0).unwrap();
        assert_eq!(
            session.submit_player_move(1),
            Err(MoveError::WrongTurn(Mark::Player))
        );
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_opponent_waits_for_player() {
        let mut session = GameSession::new_game(Difficulty::Easy);
        let mut engine = MoveEngine::new(SequencePicker::new([0]));
        assert_eq!(
            session.request_opponent_move(&mut engine),
            Err(SessionError::Move(MoveError::WrongTurn(Mark::Opponent)))
        );
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = GameSession::new_game(Difficulty::Easy);
        let mut engine = MoveEngine::new(SequencePicker::new([0]));
        session.play_turn(4, &mut engine).unwrap();
        let before = session.clone();
        assert_eq!(
            session.play_turn(4, &mut engine),
            Err(SessionError::Move(MoveError::CellOccupied(4)))
        );
        assert_eq!(
            session.play_turn(12, &mut engine),
            Err(SessionError::Move(MoveError::OutOfRange(12)))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_set_difficulty_resets() {
        let mut session = GameSession::new_game(Difficulty::Easy);
        session.submit_player_move(4).unwrap();
        session.set_difficulty(Difficulty::Hard);
        assert_eq!(session, GameSession::new_game(Difficulty::Hard));
    }

    #[test]
    fn test_reset_keeps_difficulty() {
        let mut session = GameSession::new_game(Difficulty::Medium);
        session.submit_player_move(4).unwrap();
        session.reset();
        assert_eq!(session, GameSession::new_game(Difficulty::Medium));
    }

    #[test]
    fn test_accepted_player_move_waits_for_opponent() {
        // The state play_turn leaves behind if the engine step fails.
        let mut session = GameSession::new_game(Difficulty::Easy);
        session.submit_player_move(0).unwrap();
        assert_eq!(session.to_move(), Mark::Opponent);
        assert_eq!(session.history(), &[Move::new(Mark::Player, 0)]);
        assert_eq!(
            session.submit_player_move(1),
            Err(MoveError::WrongTurn(Mark::Player))
        );

        let mut engine = MoveEngine::new(SequencePicker::new([0]));
        let turn = session.request_opponent_move(&mut engine).unwrap();
        assert_eq!(turn.index, 1);
        assert_eq!(session.to_move(), Mark::Player);
    }

    #[test]
    fn test_round_report_outcome() {
        let mut session = GameSession::new_game(Difficulty::Easy);
        let mut engine = MoveEngine::new(SequencePicker::new([0]));
        let round = session.play_turn(4, &mut engine).unwrap();
        assert_eq!(round.player.index, 4);
        assert_eq!(round.opponent.map(|t| t.index), Some(0));
        assert_eq!(round.outcome(), Outcome::InProgress);
    }
}
