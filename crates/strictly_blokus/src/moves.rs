//! Exhaustive legal-move enumeration.

use crate::catalog::ShapeCatalog;
use crate::piece::Piece;
use crate::rules::legal_to_place;
use crate::shape::Shape;
use crate::state::GameState;
use crate::types::Point;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument};

/// The distinct orientations of `shape`, unanchored.
///
/// Candidates are generated face up then face down, each with zero to three
/// right rotations; a candidate whose translated footprint matches an
/// earlier one is dropped. Yields between 1 and 8 pieces.
pub fn orientations(shape: &Shape) -> Vec<Piece> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for face_up in [true, false] {
        for rotation in 0..4 {
            let piece = Piece::new(shape, face_up, rotation);
            if seen.insert(piece.normal_form()) {
                distinct.push(piece);
            }
        }
    }
    distinct
}

/// Cells a legal placement by the current player must cover at least one of.
///
/// Before the player's first placement these are the uncovered start
/// positions. Afterwards they are uncovered cells diagonal to one of the
/// player's squares that do not share an edge with any of them.
pub fn target_cells(state: &GameState) -> BTreeSet<Point> {
    let board = state.board();
    let player = state.current_player();

    if !state.has_placed(player) {
        return state
            .start_positions()
            .iter()
            .copied()
            .filter(|&point| board.is_empty_at(point))
            .collect();
    }

    board
        .cells()
        .filter(|(_, cell)| cell.owner() == Some(player))
        .flat_map(|(point, _)| point.intercardinal_neighbors())
        .filter(|&point| board.is_empty_at(point))
        .filter(|&point| {
            !point
                .cardinal_neighbors()
                .into_iter()
                .any(|edge| board.is_owned_by(edge, player))
        })
        .collect()
}

/// Every piece the current player may legally place, each anchored.
///
/// Ordered by catalog kind, then orientation, then anchor. No two results
/// cover the same squares. Empty once the game is over.
#[instrument(skip_all, fields(player = %state.current_player()))]
pub fn available_moves(catalog: &ShapeCatalog, state: &GameState) -> Vec<Piece> {
    if state.game_over() {
        return Vec::new();
    }
    let Some(inventory) = state.inventory(state.current_player()) else {
        return Vec::new();
    };

    let targets = target_cells(state);
    let mut moves = Vec::new();
    for kind in inventory.kinds() {
        for oriented in orientations(catalog.get(kind)) {
            let anchors: BTreeSet<Point> = targets
                .iter()
                .flat_map(|&target| {
                    oriented
                        .shape()
                        .squares()
                        .iter()
                        .map(move |&offset| target - offset)
                })
                .collect();
            for anchor in anchors {
                let candidate = oriented.clone().anchored_at(anchor);
                if matches!(legal_to_place(state, &candidate), Ok(true)) {
                    moves.push(candidate);
                }
            }
        }
    }

    debug!(count = moves.len(), targets = targets.len(), "Enumerated moves");
    moves
}
