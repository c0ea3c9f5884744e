//! Configuration file loading for the arena.
//!
//! This module provides types and functions for loading named players and
//! match presets from TOML files.

use ayo_ai::Difficulty;
use ayo_core::NotationError;
use ayo_engine::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Requested player was not found in the configuration.
    #[error("Player not found: {0}")]
    PlayerNotFound(String),
    /// Requested preset was not found in the configuration.
    #[error("Preset not found: {0}")]
    PresetNotFound(String),
    /// A preset opening is not valid position notation.
    #[error("Invalid opening '{opening}': {source}")]
    InvalidOpening {
        opening: String,
        #[source]
        source: NotationError,
    },
}

/// Configuration for a computer player.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Selector difficulty. Unknown names fall back to easy.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Fixed seed for this player, overriding the match seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Configuration for a match preset.
///
/// Presets define reusable match settings: number of games and the opening
/// positions to cycle through.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PresetConfig {
    /// Number of games to play in a match. Defaults to 10.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Opening positions in position notation.
    /// Defaults to empty (use the standard starting position).
    #[serde(default)]
    pub openings: Vec<String>,
}

fn default_games() -> u32 {
    10
}

fn default_max_plies() -> usize {
    1000
}

impl PresetConfig {
    /// Parses the preset's openings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOpening`] for the first opening that is
    /// not valid notation.
    pub fn opening_positions(&self) -> Result<Vec<Position>, ConfigError> {
        self.openings
            .iter()
            .map(|opening| {
                Position::from_notation(opening).map_err(|source| ConfigError::InvalidOpening {
                    opening: opening.clone(),
                    source,
                })
            })
            .collect()
    }
}

/// Main arena configuration structure.
///
/// Uses `arena.toml` in the current directory by default.
#[derive(Debug, Deserialize, Serialize)]
pub struct ArenaConfig {
    /// Map of player names to their configurations.
    #[serde(default)]
    pub players: HashMap<String, PlayerConfig>,
    /// Map of preset names to their configurations.
    #[serde(default)]
    pub presets: HashMap<String, PresetConfig>,
    /// Base seed for a match. Drawn at random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Plies after which a game is abandoned as unfinished.
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            players: HashMap::new(),
            presets: HashMap::new(),
            seed: None,
            max_plies: default_max_plies(),
        }
    }
}

impl ArenaConfig {
    /// Loads the arena configuration from [`Self::config_path()`].
    ///
    /// If the file does not exist, returns a default empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path())
    }

    /// Loads the arena configuration from a specific path, falling back to
    /// the default when the file does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// Currently returns `arena.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("arena.toml")
    }

    /// Retrieves a player configuration by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PlayerNotFound`] if no player with the given name exists.
    pub fn get_player(&self, name: &str) -> Result<&PlayerConfig, ConfigError> {
        self.players
            .get(name)
            .ok_or_else(|| ConfigError::PlayerNotFound(name.to_string()))
    }

    /// Resolves a player name: a configured player if one exists, otherwise
    /// the name read as a difficulty.
    pub fn resolve_player(&self, name: &str) -> PlayerConfig {
        self.get_player(name).cloned().unwrap_or_else(|_| PlayerConfig {
            difficulty: Difficulty::from(name),
            seed: None,
        })
    }

    /// Retrieves a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PresetNotFound`] if no preset with the given name exists.
    pub fn get_preset(&self, name: &str) -> Result<&PresetConfig, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
    }
}
