//! Text rendering of game events.

use super::orchestrator::GameEvent;
use morpion::{Language, Position};

/// Renders one event as terminal text.
pub fn render(event: &GameEvent, language: Language) -> String {
    match event {
        GameEvent::NewGame { difficulty, status } => match language {
            Language::French => format!("Nouvelle partie ({difficulty}). {status}"),
            Language::English => format!("New game ({difficulty}). {status}"),
        },
        GameEvent::BoardChanged(board) => format!("\n{board}\n"),
        GameEvent::OpponentThinking => match language {
            Language::French => "o réfléchit...".to_string(),
            Language::English => "O is thinking...".to_string(),
        },
        GameEvent::MoveMade(turn) => {
            let place = Position::from_index(turn.index)
                .map(|p| p.label().to_string())
                .unwrap_or_else(|| turn.index.to_string());
            format!("{} -> {place}", turn.mark)
        }
        GameEvent::GameOver { status, celebrate } => {
            if *celebrate {
                format!("*** {status} ***")
            } else {
                status.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpion::{Difficulty, Mark, Outcome, TurnReport};

    #[test]
    fn test_render_move() {
        let event = GameEvent::MoveMade(TurnReport {
            mark: Mark::Opponent,
            index: 4,
            outcome: Outcome::InProgress,
        });
        assert_eq!(render(&event, Language::English), "O -> Center");
    }

    #[test]
    fn test_render_new_game() {
        let event = GameEvent::NewGame {
            difficulty: Difficulty::Medium,
            status: "x commence !",
        };
        assert_eq!(
            render(&event, Language::French),
            "Nouvelle partie (medium). x commence !"
        );
    }

    #[test]
    fn test_render_celebration() {
        let event = GameEvent::GameOver {
            status: "You won! 🎉",
            celebrate: true,
        };
        assert_eq!(render(&event, Language::English), "*** You won! 🎉 ***");
    }
}
