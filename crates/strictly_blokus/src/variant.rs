//! Game construction parameters and board presets.

use crate::error::ConfigError;
use crate::types::Point;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{EnumIter, EnumString};
use tracing::instrument;

/// Fewest seats a game may have.
pub const MIN_PLAYERS: u8 = 1;
/// Most seats a game may have.
pub const MAX_PLAYERS: u8 = 4;
/// Smallest supported board side.
pub const MIN_SIZE: usize = 5;

/// Validated construction parameters for a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seated players, 1 through 4.
    #[getter(skip)]
    num_players: u8,
    /// Board side length, at least 5.
    #[getter(skip)]
    size: usize,
    /// Cells eligible for first placements.
    start_positions: BTreeSet<Point>,
}

impl GameConfig {
    /// Builds and validates a configuration.
    #[instrument(skip(start_positions))]
    pub fn new(
        num_players: u8,
        size: usize,
        start_positions: impl IntoIterator<Item = Point>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            num_players,
            size,
            start_positions: start_positions.into_iter().collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Number of seated players.
    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks player count, board size, start positions on the board and
    /// at least one start position per player.
    ///
    /// Deserialized configs are not validated until this runs.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::new(format!(
                "num_players must be between {} and {}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.num_players
            )));
        }
        if self.size < MIN_SIZE {
            return Err(ConfigError::new(format!(
                "size must be at least {}, got {}",
                MIN_SIZE, self.size
            )));
        }
        let side = i32::try_from(self.size)
            .map_err(|_| ConfigError::new(format!("size {} is too large", self.size)))?;
        if let Some(outside) = self
            .start_positions
            .iter()
            .find(|p| !(0..side).contains(&p.row) || !(0..side).contains(&p.col))
        {
            return Err(ConfigError::new(format!(
                "start position {} lies outside the {}x{} board",
                outside, self.size, self.size
            )));
        }
        if self.start_positions.len() < usize::from(self.num_players) {
            return Err(ConfigError::new(format!(
                "{} players need at least {} start positions, got {}",
                self.num_players,
                self.num_players,
                self.start_positions.len()
            )));
        }
        Ok(())
    }
}

/// Named board layouts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 5x5 with five shared starts; a rules sandbox.
    Mini,
    /// 11x11 solitaire from the centre.
    Mono,
    /// 14x14 two-player board.
    Duo,
    /// 20x20 four-corner board.
    Classic,
}

impl Variant {
    /// Board side length.
    pub fn size(self) -> usize {
        match self {
            Variant::Mini => 5,
            Variant::Mono => 11,
            Variant::Duo => 14,
            Variant::Classic => 20,
        }
    }

    /// Start positions of the layout.
    pub fn start_positions(self) -> Vec<Point> {
        let raw: &[(i32, i32)] = match self {
            Variant::Mini => &[(0, 0), (0, 4), (4, 4), (4, 0), (2, 2)],
            Variant::Mono => &[(5, 5)],
            Variant::Duo => &[(4, 4), (9, 9)],
            Variant::Classic => &[(0, 0), (0, 19), (19, 19), (19, 0)],
        };
        raw.iter().copied().map(Point::from).collect()
    }

    /// Seats the layout is usually played with.
    pub fn default_players(self) -> u8 {
        match self {
            Variant::Mini | Variant::Mono => 1,
            Variant::Duo => 2,
            Variant::Classic => 4,
        }
    }

    /// Builds a validated configuration for `num_players` on this layout.
    #[track_caller]
    pub fn config(self, num_players: u8) -> Result<GameConfig, ConfigError> {
        let config = GameConfig {
            num_players,
            size: self.size(),
            start_positions: self.start_positions().into_iter().collect(),
        };
        config.validate()?;
        Ok(config)
    }
}
