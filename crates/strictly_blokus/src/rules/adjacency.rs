//! Start-position, edge and corner relations between a piece and the board.

use crate::board::Board;
use crate::error::AnchorNotSetError;
use crate::piece::Piece;
use crate::types::{PlayerId, Point};
use std::collections::BTreeSet;

/// Whether some square of `piece` covers one of `start_positions`.
pub fn covers_start_position(
    start_positions: &BTreeSet<Point>,
    piece: &Piece,
) -> Result<bool, AnchorNotSetError> {
    Ok(piece
        .squares()?
        .iter()
        .any(|square| start_positions.contains(square)))
}

/// Whether `piece` would share an edge with a square owned by `player`.
pub fn shares_edge_with(
    board: &Board,
    player: PlayerId,
    piece: &Piece,
) -> Result<bool, AnchorNotSetError> {
    Ok(piece
        .cardinal_neighbors()?
        .into_iter()
        .any(|point| board.is_owned_by(point, player)))
}

/// Whether `piece` would touch a square owned by `player` at a corner.
pub fn shares_corner_with(
    board: &Board,
    player: PlayerId,
    piece: &Piece,
) -> Result<bool, AnchorNotSetError> {
    Ok(piece
        .intercardinal_neighbors()?
        .into_iter()
        .any(|point| board.is_owned_by(point, player)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShapeCatalog;
    use crate::shape::ShapeKind;

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    fn piece(kind: ShapeKind, row: i32, col: i32) -> Piece {
        let catalog = ShapeCatalog::standard().unwrap();
        Piece::from_shape(catalog.get(kind)).anchored_at(Point::new(row, col))
    }

    fn board_with_one_at(row: i32, col: i32, player: PlayerId) -> Board {
        let mut board = Board::new(14);
        board.occupy(Point::new(row, col), player, ShapeKind::One);
        board
    }

    #[test]
    fn test_covers_start_position() {
        let starts: BTreeSet<Point> = [Point::new(4, 4), Point::new(9, 9)].into();
        assert!(covers_start_position(&starts, &piece(ShapeKind::Two, 4, 3)).unwrap());
        assert!(!covers_start_position(&starts, &piece(ShapeKind::Two, 4, 5)).unwrap());
    }

    #[test]
    fn test_edge_contact_is_per_player() {
        let board = board_with_one_at(4, 4, P1);
        let touching = piece(ShapeKind::Two, 4, 5);
        assert!(shares_edge_with(&board, P1, &touching).unwrap());
        assert!(!shares_edge_with(&board, P2, &touching).unwrap());
    }

    #[test]
    fn test_corner_contact() {
        let board = board_with_one_at(4, 4, P1);
        assert!(shares_corner_with(&board, P1, &piece(ShapeKind::Two, 5, 5)).unwrap());
        assert!(!shares_edge_with(&board, P1, &piece(ShapeKind::Two, 5, 5)).unwrap());
        assert!(!shares_corner_with(&board, P1, &piece(ShapeKind::Two, 7, 7)).unwrap());
    }
}
