mod action;
mod difficulty;
pub mod engine;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use difficulty::Difficulty;
pub use engine::{
    EngineError, IndexPicker, MoveEngine, RngPicker, SearchResult, SequencePicker, minimax,
};
pub use phases::Outcome;
pub use position::Position;
pub use rules::{WIN_LINES, evaluate};
pub use types::{BOARD_SIZE, Board, Cell, Mark, ParseBoardError};
