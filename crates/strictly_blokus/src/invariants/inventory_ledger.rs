//! Inventory ledger invariant: inventories agree with what was placed.

use super::Invariant;
use crate::inventory::Inventory;
use crate::state::GameState;

/// Invariant: each player's inventory is the full set minus the kinds they
/// placed, and no player placed a kind twice.
pub struct InventoryLedgerInvariant;

impl Invariant<GameState> for InventoryLedgerInvariant {
    fn holds(state: &GameState) -> bool {
        if state.inventories().len() != usize::from(state.num_players()) {
            return false;
        }
        state.players().all(|player| {
            let mut expected = Inventory::full();
            let placed_once = state
                .history()
                .iter()
                .filter(|placement| placement.player == player)
                .all(|placement| expected.remove(placement.kind));
            placed_once && state.inventory(player) == Some(&expected)
        })
    }

    fn description() -> &'static str {
        "Inventories equal the full set minus each player's placed kinds"
    }
}
