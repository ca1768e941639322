//! Write-once board invariant: cells never change once covered.

use super::Invariant;
use crate::board::Board;
use crate::state::GameState;

/// Invariant: the board is exactly the replay of the placement history.
///
/// Replaying every placement onto an empty board must land each square on
/// an uncovered cell, and the result must equal the current board.
pub struct WriteOnceBoardInvariant;

impl Invariant<GameState> for WriteOnceBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new(state.board().size());
        for placement in state.history() {
            for &square in &placement.squares {
                if !replayed.occupy(square, placement.player, placement.kind) {
                    return false;
                }
            }
        }
        replayed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are write-once and match the placement history"
    }
}
