//! Game configuration loaded from TOML.

use crate::games::tictactoe::Difficulty;
use crate::status::Language;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a game session and its front-end.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Difficulty a new session starts with.
    difficulty: Difficulty,

    /// Pause before the opponent's reply is shown, in milliseconds.
    opponent_delay_ms: u64,

    /// Language of status messages.
    language: Language,

    /// Seed for the engine's random choices. Entropy when absent.
    seed: Option<u64>,
}

fn default_opponent_delay_ms() -> u64 {
    300
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            opponent_delay_ms: default_opponent_delay_ms(),
            language: Language::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Opponent delay as a [`Duration`].
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the opponent delay.
    pub fn with_opponent_delay_ms(mut self, delay_ms: u64) -> Self {
        self.opponent_delay_ms = delay_ms;
        self
    }

    /// Overrides the language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
