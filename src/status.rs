//! Localized status text keyed by outcome.

use crate::games::tictactoe::{Mark, Outcome};
use serde::{Deserialize, Serialize};

/// Language of status messages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// French.
    #[default]
    #[serde(rename = "fr")]
    #[strum(to_string = "fr", serialize = "french")]
    French,
    /// English.
    #[serde(rename = "en")]
    #[strum(to_string = "en", serialize = "english")]
    English,
}

/// Status line shown for `outcome`.
pub fn status_message(outcome: Outcome, language: Language) -> &'static str {
    match (language, outcome) {
        (Language::French, Outcome::InProgress) => "x commence !",
        (Language::French, Outcome::Win(Mark::Player)) => "Vous avez gagné ! 🎉",
        (Language::French, Outcome::Win(Mark::Opponent)) => "o a gagné !",
        (Language::French, Outcome::Draw) => "Match nul !",
        (Language::English, Outcome::InProgress) => "X goes first!",
        (Language::English, Outcome::Win(Mark::Player)) => "You won! 🎉",
        (Language::English, Outcome::Win(Mark::Opponent)) => "O wins!",
        (Language::English, Outcome::Draw) => "It's a draw!",
    }
}

/// Whether the front-end should celebrate. Only a player win qualifies.
pub fn celebrate(outcome: Outcome) -> bool {
    outcome == Outcome::Win(Mark::Player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_messages() {
        assert_eq!(status_message(Outcome::Draw, Language::French), "Match nul !");
        assert_eq!(
            status_message(Outcome::Win(Mark::Opponent), Language::French),
            "o a gagné !"
        );
    }

    #[test]
    fn test_english_messages() {
        assert_eq!(
            status_message(Outcome::Win(Mark::Player), Language::English),
            "You won! 🎉"
        );
    }

    #[test]
    fn test_celebrate_only_player_win() {
        assert!(celebrate(Outcome::Win(Mark::Player)));
        assert!(!celebrate(Outcome::Win(Mark::Opponent)));
        assert!(!celebrate(Outcome::Draw));
        assert!(!celebrate(Outcome::InProgress));
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert_eq!("french".parse::<Language>(), Ok(Language::French));
    }
}
