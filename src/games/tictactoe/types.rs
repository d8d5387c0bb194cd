//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::rules;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mark {
    /// The human player (X, moves first).
    #[display("X")]
    Player,
    /// The computer opponent (O).
    #[display("O")]
    Opponent,
}

impl Mark {
    /// Returns the other mark.
    pub fn other(self) -> Self {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order (0-8). The board is `Copy`, so
/// speculative play always happens on a disposable copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.is_empty(i)).collect()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Classifies the board as in progress, won or drawn.
    pub fn evaluate(&self) -> super::Outcome {
        rules::evaluate(self)
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range indices, moves on a terminal board and
    /// occupied cells. A rejected move leaves the board untouched.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if index >= BOARD_SIZE {
            return Err(MoveError::OutOfRange(index));
        }
        let outcome = self.evaluate();
        if outcome.is_terminal() {
            return Err(MoveError::GameOver(outcome));
        }
        if !self.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }
        self.cells[index] = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns a scratch copy with `mark` placed at `index`.
    ///
    /// Only the index range is checked; the cell is overwritten as-is.
    /// Callers pass indices taken from [`Board::empty_cells`].
    pub fn with_move(&self, index: usize, mark: Mark) -> Self {
        let mut scratch = *self;
        if let Some(cell) = scratch.cells.get_mut(index) {
            *cell = Cell::Occupied(mark);
        }
        scratch
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// The text did not describe exactly nine cells.
    #[display("expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// A character was not a mark or an empty marker.
    #[display("unexpected character {:?}", _0)]
    BadChar(char),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses `X`/`O` marks and `.`, `-`, `_` or space as empty.
    /// Newlines and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(BOARD_SIZE);
        for c in s.chars() {
            let cell = match c {
                'X' | 'x' => Cell::Occupied(Mark::Player),
                'O' | 'o' => Cell::Occupied(Mark::Opponent),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                '\n' | '\r' | '|' => continue,
                other => return Err(ParseBoardError::BadChar(other)),
            };
            cells.push(cell);
        }
        let cells: [Cell; BOARD_SIZE] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| ParseBoardError::WrongLength(v.len()))?;
        Ok(Self { cells })
    }
}
