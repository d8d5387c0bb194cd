//! Named board positions, used to read player input.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (index 0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses player input: the number shown on the board (1-9) or a label.
    ///
    /// Labels match case-insensitively and ignore `-`, `_` and spaces, so
    /// `center`, `Top-left` and `bottom right` are all accepted.
    #[instrument]
    pub fn parse_input(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        Position::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_numbers_are_one_based() {
        assert_eq!(Position::parse_input("1"), Some(Position::TopLeft));
        assert_eq!(Position::parse_input(" 5 "), Some(Position::Center));
        assert_eq!(Position::parse_input("0"), None);
        assert_eq!(Position::parse_input("10"), None);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(Position::parse_input("center"), Some(Position::Center));
        assert_eq!(Position::parse_input("Top-left"), Some(Position::TopLeft));
        assert_eq!(
            Position::parse_input("bottom right"),
            Some(Position::BottomRight)
        );
        assert_eq!(Position::parse_input("middle"), None);
        assert_eq!(Position::parse_input(""), None);
    }
}
