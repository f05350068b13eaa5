//! Session configuration.
//!
//! A `SessionConfig` fixes everything about a game that cannot change
//! while it is being played:
//! - Board edge length
//! - The tile value that wins
//! - How many tiles the opening board gets
//! - Spawn odds for a 4 instead of a 2
//! - An optional RNG seed for reproducible games

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grid::MIN_SIZE;

/// Board sizes offered to players.
pub const SUPPORTED_SIZES: [usize; 3] = [4, 5, 7];

/// Rejected configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("board size {0} is below the minimum of 2")]
    SizeTooSmall(usize),
    #[error("win tile {0} must be a power of two of at least 4")]
    InvalidWinTile(u64),
    #[error("four-tile probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error("initial tile count {count} must be between 1 and {cells}")]
    InvalidInitialTiles { count: usize, cells: usize },
}

/// Configuration for one game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Board edge length N (default: 4).
    pub size: usize,

    /// Reaching a tile of exactly this value wins (default: 2048).
    pub win_tile: u64,

    /// Tiles placed on a fresh board (default: 2). Each is a 2.
    pub initial_tiles: usize,

    /// Probability that a spawned tile is a 4 rather than a 2 (default: 0.1).
    pub four_probability: f64,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: 4,
            win_tile: 2048,
            initial_tiles: 2,
            four_probability: 0.1,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set the board edge length.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_win_tile(mut self, tile: u64) -> Self {
        self.win_tile = tile;
        self
    }

    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::SizeTooSmall(self.size));
        }
        if self.win_tile < 4 || !self.win_tile.is_power_of_two() {
            return Err(ConfigError::InvalidWinTile(self.win_tile));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::InvalidProbability(self.four_probability));
        }
        let cells = self.size * self.size;
        if self.initial_tiles == 0 || self.initial_tiles > cells {
            return Err(ConfigError::InvalidInitialTiles {
                count: self.initial_tiles,
                cells,
            });
        }
        Ok(())
    }

    /// Whether the board size is one of [`SUPPORTED_SIZES`].
    #[must_use]
    pub fn is_supported_size(&self) -> bool {
        SUPPORTED_SIZES.contains(&self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.win_tile, 2048);
        assert_eq!(config.initial_tiles, 2);
        assert!((config.four_probability - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
        assert!(config.is_supported_size());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_size(7)
            .with_seed(123)
            .with_win_tile(64)
            .with_initial_tiles(3)
            .with_four_probability(0.25);

        assert_eq!(config.size, 7);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.win_tile, 64);
        assert_eq!(config.initial_tiles, 3);
        assert_eq!(config.four_probability, 0.25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            SessionConfig::default().with_size(1).validate(),
            Err(ConfigError::SizeTooSmall(1))
        );
        assert_eq!(
            SessionConfig::default().with_win_tile(1000).validate(),
            Err(ConfigError::InvalidWinTile(1000))
        );
        assert_eq!(
            SessionConfig::default().with_win_tile(2).validate(),
            Err(ConfigError::InvalidWinTile(2))
        );
        assert_eq!(
            SessionConfig::default().with_four_probability(1.5).validate(),
            Err(ConfigError::InvalidProbability(1.5))
        );
        assert_eq!(
            SessionConfig::default().with_initial_tiles(0).validate(),
            Err(ConfigError::InvalidInitialTiles { count: 0, cells: 16 })
        );
        assert_eq!(
            SessionConfig::default().with_size(2).with_initial_tiles(5).validate(),
            Err(ConfigError::InvalidInitialTiles { count: 5, cells: 4 })
        );
        assert!(SessionConfig::default().with_size(2).with_initial_tiles(4).validate().is_ok());
    }

    #[test]
    fn test_unsupported_size_still_valid() {
        let config = SessionConfig::default().with_size(6);
        assert!(config.validate().is_ok());
        assert!(!config.is_supported_size());
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
