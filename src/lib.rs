//! Morpion - tic-tac-toe against a computer opponent.
//!
//! The crate is a pure game engine plus a small terminal front-end.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move application and win/draw evaluation
//! - **Engine**: opponent move selection (random, win/block, minimax)
//! - **Session**: explicit game state with strict turn order
//! - **Status**: localized status text for the front-end
//!
//! # Example
//!
//! ```
//! use morpion::{Difficulty, GameSession, MoveEngine, Outcome};
//!
//! # fn example() -> Result<(), morpion::SessionError> {
//! let mut session = GameSession::new_game(Difficulty::Hard);
//! let mut engine = MoveEngine::seeded(42);
//!
//! let round = session.play_turn(0, &mut engine)?;
//! assert_eq!(round.opponent.map(|turn| turn.index), Some(4));
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;
mod status;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{GameSession, RoundReport, SessionError, TurnReport, play_engine_match};

// Crate-level exports - Status messages
pub use status::{Language, celebrate, status_message};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, Cell, Difficulty, EngineError, IndexPicker, Mark, Move, MoveEngine,
    MoveError, Outcome, ParseBoardError, Position, RngPicker, SearchResult, SequencePicker,
    WIN_LINES, evaluate, minimax,
};

// Crate-level exports - Engine internals and invariants
pub use games::tictactoe::engine::heuristic::win_or_block;
pub use games::tictactoe::engine::minimax::{WIN_SCORE, best_move, terminal_score};
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, OutcomeCurrentInvariant, SessionInvariants,
};
