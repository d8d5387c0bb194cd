//! Parsing of typed player input.

use morpion::{Difficulty, Position};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Move(Position),
    /// Switch difficulty (starts a new game).
    SetDifficulty(Difficulty),
    /// Start a new game.
    Reset,
    /// Leave.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses a line. Numbers are the cell numbers shown on the board (1-9).
    pub fn parse(line: &str) -> Self {
        let text = line.trim();
        match text.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Input::Quit,
            "r" | "reset" | "new" => return Input::Reset,
            _ => {}
        }
        if let Ok(difficulty) = text.parse::<Difficulty>() {
            return Input::SetDifficulty(difficulty);
        }
        match Position::parse_input(text) {
            Some(position) => Input::Move(position),
            None => Input::Unknown(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("quit\n"), Input::Quit);
        assert_eq!(Input::parse(" R "), Input::Reset);
        assert_eq!(Input::parse("Hard"), Input::SetDifficulty(Difficulty::Hard));
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(Input::parse("5"), Input::Move(Position::Center));
        assert_eq!(Input::parse("top-right"), Input::Move(Position::TopRight));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Input::parse("0"), Input::Unknown("0".to_string()));
        assert_eq!(Input::parse("please"), Input::Unknown("please".to_string()));
    }
}
