//! Game configuration.

use crate::error::ConfigError;
use crate::policy::Difficulty;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who makes the first move. The starter always plays X.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Starter {
    /// The human moves first.
    #[default]
    Human,
    /// The computer moves first.
    Ai,
}

impl Starter {
    /// Mark played by the human.
    pub fn human_player(self) -> Player {
        match self {
            Starter::Human => Player::X,
            Starter::Ai => Player::O,
        }
    }

    /// Mark played by the computer.
    pub fn computer_player(self) -> Player {
        self.human_player().opponent()
    }
}

/// Configuration for a game controller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who moves first.
    #[serde(default)]
    starter: Starter,

    /// Strength of the computer opponent.
    #[serde(default)]
    difficulty: Difficulty,

    /// Seed for the random tier. Seeded from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a new configuration without a fixed seed.
    #[instrument]
    pub fn new(starter: Starter, difficulty: Difficulty) -> Self {
        Self {
            starter,
            difficulty,
            seed: None,
        }
    }

    /// Sets the starter.
    pub fn with_starter(mut self, starter: Starter) -> Self {
        self.starter = starter;
        self
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fixes the seed used by the random tier.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            starter = %config.starter,
            difficulty = %config.difficulty,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}
