//! Tests for loading game configuration.

use std::io::Write;
use std::time::Duration;
use tictactoe_ai::{DEFAULT_IDLE_WINDOW, GameConfig};

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(config.idle_timeout_ms(), 6000);
    assert_eq!(config.idle_window(), DEFAULT_IDLE_WINDOW);
    assert!(config.forced_move());
    assert!(config.audio_cues());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "idle_timeout_ms = 2500").unwrap();
    writeln!(file, "audio_cues = false").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.idle_window(), Duration::from_millis(2500));
    assert!(!config.audio_cues());
    assert!(config.forced_move());
    assert_eq!(config.log_file(), GameConfig::default().log_file());
}

#[test]
fn test_zero_timeout_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "idle_timeout_ms = 0").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("positive"));
}

#[test]
fn test_malformed_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "idle_timeout_ms = \"soon\"").unwrap();

    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_without_forced_move() {
    let config = GameConfig::default().without_forced_move();
    assert!(!config.forced_move());
    assert_eq!(config.idle_timeout_ms(), 6000);
}
