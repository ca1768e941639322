//! Square conservation invariant: owned cells match placed squares.

use super::Invariant;
use crate::shape::ShapeKind;
use crate::state::GameState;
use strum::IntoEnumIterator;

/// Invariant: the cells a player owns number exactly the squares of the
/// kinds missing from their inventory.
pub struct SquareConservationInvariant;

impl Invariant<GameState> for SquareConservationInvariant {
    fn holds(state: &GameState) -> bool {
        state.players().all(|player| {
            let Some(inventory) = state.inventory(player) else {
                return false;
            };
            let placed: usize = ShapeKind::iter()
                .filter(|&kind| !inventory.contains(kind))
                .map(ShapeKind::square_count)
                .sum();
            state.board().count_owned(player) == placed
        })
    }

    fn description() -> &'static str {
        "Cells owned by each player equal the squares of their placed shapes"
    }
}
