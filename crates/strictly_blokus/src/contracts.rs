//! Contract-based validation for Blokus transitions.
//!
//! A contract pairs the preconditions of an action with the postconditions
//! its successor state must satisfy: {P} action {Q}. Preconditions are
//! always checked; postconditions run in debug builds.

use crate::error::{AnchorNotSetError, BlokusError};
use crate::invariants::{BlokusInvariants, InvariantSet, describe};
use crate::piece::Piece;
use crate::rules::check_unplayed;
use crate::state::GameState;
use crate::types::PlayerId;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), BlokusError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), BlokusError>;
}

fn violation(description: impl Into<String>) -> BlokusError {
    let description = description.into();
    warn!(%description, "Postcondition failed");
    BlokusError::InvariantViolation { description }
}

fn check_invariants(after: &GameState) -> Result<(), BlokusError> {
    BlokusInvariants::check_all(after).map_err(|violations| violation(describe(&violations)))
}

/// Precondition: the piece has been anchored to the board.
pub struct AnchorIsSet;

impl AnchorIsSet {
    /// Fails with [`AnchorNotSetError`] for a loose piece.
    #[instrument(skip(piece), fields(kind = %piece.kind()))]
    pub fn check(piece: &Piece) -> Result<(), AnchorNotSetError> {
        match piece.anchor() {
            Some(_) => Ok(()),
            None => Err(AnchorNotSetError { kind: piece.kind() }),
        }
    }
}

/// Contract for placing a piece.
///
/// Preconditions:
/// - The piece is anchored
/// - The current player still holds its kind
///
/// Postconditions:
/// - Exactly one placement was appended
/// - Every previously covered cell is unchanged
/// - All [`BlokusInvariants`] hold
pub struct PlacementContract;

impl Contract<GameState, Piece> for PlacementContract {
    fn pre(state: &GameState, piece: &Piece) -> Result<(), BlokusError> {
        AnchorIsSet::check(piece)?;
        check_unplayed(state, piece)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), BlokusError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(violation("Placement must append exactly one history entry"));
        }
        let kept = before
            .board()
            .cells()
            .filter(|(_, cell)| cell.owner().is_some())
            .all(|(point, cell)| after.board().get(point) == Some(cell));
        if !kept {
            return Err(violation("Placement must not alter covered cells"));
        }
        check_invariants(after)
    }
}

/// Contract for retiring the current player.
///
/// Preconditions:
/// - The game is not over
/// - The retiring player is the current player
///
/// Postconditions:
/// - The retired set grew by exactly the retiring player
/// - The board is unchanged
/// - All [`BlokusInvariants`] hold
pub struct RetirementContract;

impl Contract<GameState, PlayerId> for RetirementContract {
    fn pre(state: &GameState, player: &PlayerId) -> Result<(), BlokusError> {
        if state.game_over() || *player != state.current_player() {
            return Err(BlokusError::InvariantViolation {
                description: format!("{} cannot retire now", player),
            });
        }
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), BlokusError> {
        let mut expected = before.retired().clone();
        expected.insert(before.current_player());
        if *after.retired() != expected || expected.len() != before.retired().len() + 1 {
            return Err(violation("Retirement must add exactly the current player"));
        }
        if after.board() != before.board() {
            return Err(violation("Retirement must not alter the board"));
        }
        check_invariants(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::catalog::ShapeCatalog;
    use crate::invariants::fixtures::duo_after_two_moves;
    use crate::placement::Placement;
    use crate::shape::ShapeKind;
    use crate::types::Point;

    #[test]
    fn test_precondition_requires_anchor() {
        let catalog = ShapeCatalog::standard().unwrap();
        let state = duo_after_two_moves();
        let loose = Piece::from_shape(catalog.get(ShapeKind::Two));
        assert!(matches!(
            PlacementContract::pre(&state, &loose),
            Err(BlokusError::AnchorNotSet(_))
        ));
    }

    #[test]
    fn test_precondition_requires_unplayed_kind() {
        let catalog = ShapeCatalog::standard().unwrap();
        let state = duo_after_two_moves();
        let used = Piece::from_shape(catalog.get(ShapeKind::One)).anchored_at(Point::new(5, 5));
        assert!(matches!(
            PlacementContract::pre(&state, &used),
            Err(BlokusError::AlreadyPlayed(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_placement() {
        let before = duo_after_two_moves();
        let mut after = before.clone();
        after.apply_placement(Placement::new(
            PlayerId::new(1),
            ShapeKind::Two,
            vec![Point::new(5, 5), Point::new(5, 6)],
        ));
        assert!(PlacementContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = duo_after_two_moves();
        let mut after = before.clone();
        after.apply_placement(Placement::new(
            PlayerId::new(1),
            ShapeKind::Two,
            vec![Point::new(5, 5), Point::new(5, 6)],
        ));
        after.board.force(Point::new(9, 9), Cell::Empty);
        assert!(matches!(
            PlacementContract::post(&before, &after),
            Err(BlokusError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_postcondition_requires_a_new_entry() {
        let before = duo_after_two_moves();
        assert!(PlacementContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_retirement_contract() {
        let before = duo_after_two_moves();
        assert!(RetirementContract::pre(&before, &PlayerId::new(1)).is_ok());
        assert!(RetirementContract::pre(&before, &PlayerId::new(2)).is_err());

        let mut after = before.clone();
        after.retire_current();
        assert!(RetirementContract::post(&before, &after).is_ok());
        assert!(RetirementContract::post(&before, &before).is_err());
    }
}
