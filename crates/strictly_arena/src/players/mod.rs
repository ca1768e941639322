//! Computer players that pick among the engine's legal moves.

mod largest_first;
mod random;

pub use largest_first::LargestFirstStrategy;
pub use random::RandomStrategy;

use serde::{Deserialize, Serialize};
use strictly_blokus::{Blokus, Piece};
use strum::{EnumIter, EnumString};

/// Chooses a placement for the current player.
pub trait Strategy {
    /// Short name used in reports.
    fn name(&self) -> &str;

    /// Picks a legal piece, or `None` to retire.
    fn choose(&mut self, game: &Blokus) -> Option<Piece>;
}

/// Strategy names accepted in arena configs.
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
pub enum StrategyKind {
    /// Uniformly random legal move.
    Random,
    /// Biggest shape first.
    Largest,
}

impl StrategyKind {
    /// Instantiates the strategy; `seed` feeds the random ones.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(seed)),
            StrategyKind::Largest => Box::new(LargestFirstStrategy),
        }
    }
}
