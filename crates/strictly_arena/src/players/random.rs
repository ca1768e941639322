//! Uniformly random legal moves from a seeded generator.

use super::Strategy;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use strictly_blokus::{Blokus, Piece};
use tracing::{debug, instrument};

/// Picks uniformly among the available moves.
///
/// The same seed replays the same choices against the same positions.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a strategy seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    #[instrument(skip(self, game), fields(player = %game.current_player()))]
    fn choose(&mut self, game: &Blokus) -> Option<Piece> {
        let moves = game.available_moves();
        debug!(options = moves.len(), "Choosing random move");
        moves.choose(&mut self.rng).cloned()
    }
}
