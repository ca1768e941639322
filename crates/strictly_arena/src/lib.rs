//! Strictly Arena - computer players for the Blokus engine
//!
//! Loads a seating from TOML, lets simple strategies play complete games
//! against each other and tallies the results. Everything here goes
//! through the public surface of `strictly_blokus`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena_config;
mod orchestrator;
mod players;

// Crate-level exports - Configuration
pub use arena_config::{ArenaConfig, ConfigError};

// Crate-level exports - Play
pub use orchestrator::{GameReport, Orchestrator, Tally};
pub use players::{LargestFirstStrategy, RandomStrategy, Strategy, StrategyKind};
