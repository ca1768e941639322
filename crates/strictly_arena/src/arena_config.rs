//! Arena configuration loaded from TOML.

use crate::players::StrategyKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_blokus::{GameConfig, Point, Variant};
use tracing::{debug, info, instrument};

/// Board layout and seating for arena games.
///
/// An explicit `size` with `start_positions` takes precedence over
/// `variant`. One seat is created per entry in `players`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Preset layout.
    #[serde(default = "default_variant")]
    variant: Variant,

    /// Custom board side, overriding the preset.
    #[serde(default)]
    size: Option<usize>,

    /// Custom start positions, required with `size`.
    #[serde(default)]
    start_positions: Option<Vec<Point>>,

    /// Strategy for each seat, in turn order.
    #[serde(default = "default_players")]
    players: Vec<StrategyKind>,
}

#[instrument]
fn default_variant() -> Variant {
    Variant::Duo
}

#[instrument]
fn default_players() -> Vec<StrategyKind> {
    vec![StrategyKind::Random, StrategyKind::Largest]
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(default_variant(), default_players())
    }
}

impl ArenaConfig {
    /// Creates a configuration on a preset layout.
    #[instrument(skip(players), fields(seats = players.len()))]
    pub fn new(variant: Variant, players: Vec<StrategyKind>) -> Self {
        Self {
            variant,
            size: None,
            start_positions: None,
            players,
        }
    }

    /// Replaces the preset with a custom board.
    pub fn with_board(mut self, size: usize, start_positions: Vec<Point>) -> Self {
        self.size = Some(size);
        self.start_positions = Some(start_positions);
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(variant = %config.variant, seats = config.players.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Builds the validated engine configuration for these seats.
    #[instrument(skip(self), fields(variant = %self.variant, seats = self.players.len()))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let num_players = u8::try_from(self.players.len())
            .map_err(|_| ConfigError::new(format!("Too many players: {}", self.players.len())))?;

        let config = match (self.size, &self.start_positions) {
            (Some(size), Some(starts)) => {
                GameConfig::new(num_players, size, starts.iter().copied())
            }
            (Some(_), None) => {
                return Err(ConfigError::new(
                    "A custom size needs start_positions".to_string(),
                ));
            }
            (None, Some(_)) => {
                return Err(ConfigError::new(
                    "Custom start_positions need a size".to_string(),
                ));
            }
            (None, None) => self.variant.config(num_players),
        };
        config.map_err(|e| ConfigError::new(format!("Invalid game setup: {}", e.message)))
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_duo_random_vs_largest() {
        let config = ArenaConfig::default();
        assert_eq!(*config.variant(), Variant::Duo);
        assert_eq!(
            config.players(),
            &vec![StrategyKind::Random, StrategyKind::Largest]
        );
        let game = config.game_config().unwrap();
        assert_eq!(game.num_players(), 2);
        assert_eq!(game.size(), 14);
    }

    #[test]
    fn test_custom_board_overrides_variant() {
        let config = ArenaConfig::new(Variant::Classic, vec![StrategyKind::Largest])
            .with_board(8, vec![Point::new(0, 0)]);
        let game = config.game_config().unwrap();
        assert_eq!(game.size(), 8);
        assert_eq!(game.start_positions().len(), 1);
    }

    #[test]
    fn test_too_many_seats_for_variant() {
        let config = ArenaConfig::new(Variant::Duo, vec![StrategyKind::Random; 3]);
        let err = config.game_config().unwrap_err();
        assert!(err.message.contains("Invalid game setup"));
    }

    #[test]
    fn test_size_without_starts_is_rejected() {
        let config: ArenaConfig = toml::from_str("size = 9\nplayers = [\"random\"]").unwrap();
        assert!(config.game_config().is_err());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: ArenaConfig = toml::from_str("").unwrap();
        assert_eq!(config, ArenaConfig::default());
    }
}
