//! Greedy player that sheds its biggest shapes first.

use super::Strategy;
use std::cmp::Reverse;
use strictly_blokus::{Blokus, Piece};
use tracing::{debug, instrument};

/// Plays the move covering the most squares; ties go to the earliest
/// enumerated move.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestFirstStrategy;

impl Strategy for LargestFirstStrategy {
    fn name(&self) -> &str {
        "largest"
    }

    #[instrument(skip(self, game), fields(player = %game.current_player()))]
    fn choose(&mut self, game: &Blokus) -> Option<Piece> {
        let moves = game.available_moves();
        debug!(options = moves.len(), "Choosing largest move");
        moves.into_iter().min_by_key(|piece| Reverse(piece.len()))
    }
}
