//! Turn validity invariant: the player to move can actually move.

use super::Invariant;
use crate::state::GameState;

/// Invariant: unless the game is over, the current player is seated, not
/// retired and still holds a shape.
pub struct TurnValidityInvariant;

impl Invariant<GameState> for TurnValidityInvariant {
    fn holds(state: &GameState) -> bool {
        state.game_over() || state.is_eligible(state.current_player())
    }

    fn description() -> &'static str {
        "Current player is eligible while the game is running"
    }
}
