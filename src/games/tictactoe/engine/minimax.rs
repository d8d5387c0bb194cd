//! Hard strategy: exhaustive minimax without pruning.
//!
//! Scores are fixed per terminal outcome and not discounted by depth, so
//! a slow win ranks the same as an immediate one. The opponent maximizes,
//! the player minimizes, and the first child reaching the best score is
//! kept (ties go to the lowest index).

use crate::games::tictactoe::{Board, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a board the opponent has won.
pub const WIN_SCORE: i32 = 10;

/// Result of searching one node.
///
/// `index` is the chosen move at an in-progress node and `None` at a
/// terminal one. At the root it is the move to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move from this node.
    pub index: Option<usize>,
    /// Value of the node from the opponent's point of view.
    pub score: i32,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

/// Terminal score, or `None` while the game is in progress.
pub fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Win(Mark::Player) => Some(-WIN_SCORE),
        Outcome::Win(Mark::Opponent) => Some(WIN_SCORE),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

/// Searches every continuation with `mover` to play.
pub fn minimax(board: &Board, mover: Mark) -> SearchResult {
    if let Some(score) = terminal_score(board.evaluate()) {
        return SearchResult::terminal(score);
    }

    let mut best: Option<SearchResult> = None;
    for index in board.empty_cells() {
        let child = board.with_move(index, mover);
        let score = minimax(&child, mover.other()).score;
        let improves = match (best, mover) {
            (None, _) => true,
            (Some(b), Mark::Opponent) => score > b.score,
            (Some(b), Mark::Player) => score < b.score,
        };
        if improves {
            best = Some(SearchResult {
                index: Some(index),
                score,
            });
        }
    }

    // An in-progress board always has an empty cell.
    best.unwrap_or(SearchResult::terminal(0))
}

/// Best move for `mover`, or `None` if the board is already terminal.
#[instrument(skip(board))]
pub fn best_move(board: &Board, mover: Mark) -> Option<usize> {
    let result = minimax(board, mover);
    debug!(index = ?result.index, score = result.score, "Minimax search complete");
    result.index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(text: &str, mover: Mark) -> SearchResult {
        minimax(&text.parse().unwrap(), mover)
    }

    #[test]
    fn test_terminal_nodes_have_no_move() {
        assert_eq!(search("XXXOO....", Mark::Opponent), SearchResult::terminal(-10));
        assert_eq!(search("OOOXX.X..", Mark::Player), SearchResult::terminal(10));
        assert_eq!(search("XOXXOOOXX", Mark::Opponent), SearchResult::terminal(0));
    }

    #[test]
    fn test_takes_immediate_win() {
        let result = search("OO.XX.X..", Mark::Opponent);
        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_when_no_win() {
        // X threatens the top row; anything else loses at once.
        let result = search("XX..O....", Mark::Opponent);
        assert_eq!(result.index, Some(2));
    }

    #[test]
    fn test_player_minimizes() {
        let result = search("XX.OO....", Mark::Player);
        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, -WIN_SCORE);
    }

    #[test]
    fn test_lost_position_keeps_first_move() {
        // X has two open threats (2 and 6); every reply scores -10 and the
        // first candidate is kept.
        let result = search("XX.XO....", Mark::Opponent);
        assert_eq!(result.score, -WIN_SCORE);
        assert_eq!(result.index, Some(2));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let result = search(".........", Mark::Player);
        assert_eq!(result.score, 0);
        assert_eq!(result.index, Some(0));
    }
}
