//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds the human may idle before the computer moves for them.
    #[getter(skip)]
    idle_timeout_ms: u64,

    /// Whether the idle timeout forces a computer move at all.
    #[getter(skip)]
    forced_move: bool,

    /// Ring the terminal bell for cues.
    #[getter(skip)]
    audio_cues: bool,

    /// File that receives log output while the TUI owns the terminal.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: 6_000,
            forced_move: true,
            audio_cues: true,
            log_file: PathBuf::from("tictactoe_ai.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.idle_timeout_ms == 0 {
            return Err(ConfigError::new("idle_timeout_ms must be positive"));
        }

        info!(idle_timeout_ms = config.idle_timeout_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Milliseconds the human may idle.
    pub fn idle_timeout_ms(&self) -> u64 {
        self.idle_timeout_ms
    }

    /// Whether an idle human gets a forced computer move.
    pub fn forced_move(&self) -> bool {
        self.forced_move
    }

    /// Whether cues ring the terminal bell.
    pub fn audio_cues(&self) -> bool {
        self.audio_cues
    }

    /// Idle window as a duration.
    pub fn idle_window(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    /// Turns the forced-move rule off.
    pub fn without_forced_move(mut self) -> Self {
        self.forced_move = false;
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
