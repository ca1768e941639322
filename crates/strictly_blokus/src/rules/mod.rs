//! Placement legality.
//!
//! Pure functions over a [`GameState`] and a candidate [`Piece`]. They never
//! mutate; [`crate::Blokus::place`] composes them with the state transition.

pub mod adjacency;
pub mod collision;

pub use adjacency::{covers_start_position, shares_corner_with, shares_edge_with};
pub use collision::{any_collision, any_wall_collision};

use crate::catalog::ShapeCatalog;
use crate::error::{AlreadyPlayedError, BlokusError};
use crate::moves::orientations;
use crate::piece::Piece;
use crate::state::GameState;
use tracing::{instrument, trace};

/// Fails with [`AlreadyPlayedError`] when the current player no longer holds
/// the piece's kind.
pub fn check_unplayed(state: &GameState, piece: &Piece) -> Result<(), AlreadyPlayedError> {
    let player = state.current_player();
    let held = state
        .inventory(player)
        .is_some_and(|inventory| inventory.contains(piece.kind()));
    if held {
        Ok(())
    } else {
        Err(AlreadyPlayedError {
            player,
            kind: piece.kind(),
        })
    }
}

/// Decides whether the current player may place `piece`.
///
/// Checks, in order: the kind is unplayed (an error otherwise), the piece
/// stays on the board and off covered cells, a first placement covers a
/// start position, and a later placement touches the player's own pieces at
/// a corner but never along an edge. Other players' pieces only matter as
/// obstacles.
#[instrument(level = "trace", skip(state, piece), fields(player = %state.current_player(), kind = %piece.kind(), anchor = ?piece.anchor()))]
pub fn legal_to_place(state: &GameState, piece: &Piece) -> Result<bool, BlokusError> {
    check_unplayed(state, piece)?;

    let board = state.board();
    if any_collision(board, piece)? {
        trace!("Rejected: collision");
        return Ok(false);
    }

    let player = state.current_player();
    if !state.has_placed(player) {
        let covers = covers_start_position(state.start_positions(), piece)?;
        if !covers {
            trace!("Rejected: first placement misses every start position");
        }
        return Ok(covers);
    }

    if shares_edge_with(board, player, piece)? {
        trace!("Rejected: shares an edge with own piece");
        return Ok(false);
    }
    let corner = shares_corner_with(board, player, piece)?;
    if !corner {
        trace!("Rejected: no corner contact with own pieces");
    }
    Ok(corner)
}

/// Whether `piece` has the geometry of some orientation of its kind's
/// template in `catalog`, up to translation.
pub fn matches_template(catalog: &ShapeCatalog, piece: &Piece) -> bool {
    let footprint = piece.normal_form();
    let matches = orientations(catalog.get(piece.kind()))
        .iter()
        .any(|orientation| orientation.normal_form() == footprint);
    if !matches {
        trace!(kind = %piece.kind(), "Rejected: geometry matches no orientation of the template");
    }
    matches
}
