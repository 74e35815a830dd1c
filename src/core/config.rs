//! Session configuration.
//!
//! `QuizConfig` carries the tunables of a session: countdown length, how many
//! questions a game draws, roster bounds, and name length. It can be built in
//! code or loaded from TOML; missing keys keep their defaults.
//!
//! ```
//! use party_quiz::core::QuizConfig;
//!
//! let config = QuizConfig::from_toml_str("countdown_secs = 10").unwrap();
//! assert_eq!(config.countdown_secs, 10);
//! assert_eq!(config.questions_per_game, 8);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerColor;

/// Fewest players a game can start with, whatever the config says.
pub const MIN_ROSTER: usize = 2;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    /// Seconds on the clock at the start of every turn.
    pub countdown_secs: u32,

    /// Questions drawn per game (fewer if the bank is smaller).
    pub questions_per_game: usize,

    /// Players required to start. At least `MIN_ROSTER`.
    pub min_players: usize,

    /// Roster cap. At most the palette size.
    pub max_players: usize,

    /// Maximum player name length, in characters.
    pub max_name_len: usize,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            countdown_secs: 15,
            questions_per_game: 8,
            min_players: 2,
            max_players: PlayerColor::PALETTE.len(),
            max_name_len: 20,
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the countdown length.
    #[must_use]
    pub fn with_countdown_secs(mut self, secs: u32) -> Self {
        self.countdown_secs = secs;
        self
    }

    /// Set the number of questions per game.
    #[must_use]
    pub fn with_questions_per_game(mut self, count: usize) -> Self {
        self.questions_per_game = count;
        self
    }

    /// Set the roster bounds.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the maximum name length.
    #[must_use]
    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_secs == 0 {
            return Err(ConfigError::Invalid("countdown_secs must be at least 1".into()));
        }
        if self.questions_per_game == 0 {
            return Err(ConfigError::Invalid("questions_per_game must be at least 1".into()));
        }
        if self.min_players < MIN_ROSTER {
            return Err(ConfigError::Invalid(format!(
                "min_players must be at least {}",
                MIN_ROSTER
            )));
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::Invalid(format!(
                "max_players ({}) is below min_players ({})",
                self.max_players, self.min_players
            )));
        }
        if self.max_players > PlayerColor::PALETTE.len() {
            return Err(ConfigError::Invalid(format!(
                "max_players ({}) exceeds the {}-color palette",
                self.max_players,
                PlayerColor::PALETTE.len()
            )));
        }
        if self.max_name_len == 0 {
            return Err(ConfigError::Invalid("max_name_len must be at least 1".into()));
        }
        Ok(())
    }
}
