//! Game phase as seen by collaborators.

use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the game still accepts moves, and from whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The given player must place a piece or retire.
    Active(PlayerId),
    /// Every player has retired or played all their shapes.
    GameOver,
}

impl Phase {
    /// Returns the player to move, if the game is still running.
    pub fn active_player(&self) -> Option<PlayerId> {
        match self {
            Phase::Active(player) => Some(*player),
            Phase::GameOver => None,
        }
    }

    /// Returns true once no more moves are accepted.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Active(player) => write!(f, "{} to move", player),
            Phase::GameOver => write!(f, "Game over"),
        }
    }
}
