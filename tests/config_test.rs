//! Configuration file loading.

use morpion::{Difficulty, GameConfig, Language};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "difficulty = \"medium\"\nopponent_delay_ms = 0\nlanguage = \"en\"\nseed = 42"
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert_eq!(config.opponent_delay(), Duration::ZERO);
    assert_eq!(*config.language(), Language::English);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_overrides() {
    let config = GameConfig::default()
        .with_difficulty(Difficulty::Hard)
        .with_opponent_delay_ms(5)
        .with_language(Language::English)
        .with_seed(7);
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(config.opponent_delay(), Duration::from_millis(5));
    assert_eq!(*config.seed(), Some(7));
}
