//! Pieces: shapes anchored to the board.

use crate::error::AnchorNotSetError;
use crate::shape::{Shape, ShapeKind};
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// An independently owned, possibly anchored, instance of a [`Shape`].
///
/// Each piece holds its own copy of the template, so flipping or rotating
/// one piece never disturbs another built from the same shape. Two pieces
/// are equal when they have the same kind and cover the same squares
/// (or, when unanchored, carry the same offsets).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Piece {
    shape: Shape,
    anchor: Option<Point>,
}

impl Piece {
    /// Copies `shape`, flips it when `face_up` is false, then applies
    /// `rotation % 4` right rotations.
    pub fn new(shape: &Shape, face_up: bool, rotation: usize) -> Self {
        let mut shape = shape.clone();
        if !face_up {
            shape.flip_horizontally();
        }
        for _ in 0..rotation % 4 {
            shape.rotate_right();
        }
        Self {
            shape,
            anchor: None,
        }
    }

    /// Copies `shape` in its catalog orientation.
    pub fn from_shape(shape: &Shape) -> Self {
        Self::new(shape, true, 0)
    }

    /// Builder form of [`Piece::set_anchor`].
    pub fn anchored_at(mut self, anchor: Point) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Returns the piece's own copy of its shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Returns the current anchor, if any.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Pins the shape origin to `anchor`. May be called any number of times.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = Some(anchor);
    }

    /// Number of squares the piece covers.
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// Always false for a parsed shape.
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    fn require_anchor(&self) -> Result<Point, AnchorNotSetError> {
        self.anchor.ok_or(AnchorNotSetError { kind: self.kind() })
    }

    /// Absolute board squares, in the shape's offset order.
    pub fn squares(&self) -> Result<Vec<Point>, AnchorNotSetError> {
        let anchor = self.require_anchor()?;
        Ok(self.shape.squares().iter().map(|&offset| anchor + offset).collect())
    }

    /// Absolute board squares as a set.
    pub fn footprint(&self) -> Result<BTreeSet<Point>, AnchorNotSetError> {
        Ok(self.squares()?.into_iter().collect())
    }

    /// Edge neighbours of the piece that are not part of it.
    pub fn cardinal_neighbors(&self) -> Result<BTreeSet<Point>, AnchorNotSetError> {
        self.neighbors(Point::cardinal_neighbors)
    }

    /// Corner neighbours of the piece that are not part of it.
    pub fn intercardinal_neighbors(&self) -> Result<BTreeSet<Point>, AnchorNotSetError> {
        self.neighbors(Point::intercardinal_neighbors)
    }

    fn neighbors(
        &self,
        around: fn(Point) -> [Point; 4],
    ) -> Result<BTreeSet<Point>, AnchorNotSetError> {
        let footprint = self.footprint()?;
        Ok(footprint
            .iter()
            .flat_map(|&square| around(square))
            .filter(|point| !footprint.contains(point))
            .collect())
    }

    /// Mirrors the piece about its anchor.
    pub fn flip_horizontally(&mut self) -> Result<(), AnchorNotSetError> {
        self.require_anchor()?;
        self.shape.flip_horizontally();
        Ok(())
    }

    /// Rotates the piece counter-clockwise about its anchor.
    pub fn rotate_left(&mut self) -> Result<(), AnchorNotSetError> {
        self.require_anchor()?;
        self.shape.rotate_left();
        Ok(())
    }

    /// Rotates the piece clockwise about its anchor.
    pub fn rotate_right(&mut self) -> Result<(), AnchorNotSetError> {
        self.require_anchor()?;
        self.shape.rotate_right();
        Ok(())
    }

    /// Offsets translated so the smallest row and column are zero.
    ///
    /// Two orientations with equal normal forms cover the same squares
    /// once anchored appropriately.
    pub fn normal_form(&self) -> BTreeSet<Point> {
        let squares = self.shape.squares();
        let min_row = squares.iter().map(|p| p.row).min().unwrap_or(0);
        let min_col = squares.iter().map(|p| p.col).min().unwrap_or(0);
        let corner = Point::new(min_row, min_col);
        squares.iter().map(|&p| p - corner).collect()
    }

    fn identity(&self) -> (ShapeKind, bool, BTreeSet<Point>) {
        let anchor = self.anchor.unwrap_or_default();
        let squares = self.shape.squares().iter().map(|&offset| anchor + offset).collect();
        (self.kind(), self.anchor.is_some(), squares)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShapeCatalog;
    use std::collections::HashSet;

    fn catalog() -> ShapeCatalog {
        ShapeCatalog::standard().unwrap()
    }

    fn set(raw: &[(i32, i32)]) -> BTreeSet<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_squares_require_anchor() {
        let catalog = catalog();
        let piece = Piece::from_shape(catalog.get(ShapeKind::One));
        assert_eq!(
            piece.squares(),
            Err(AnchorNotSetError {
                kind: ShapeKind::One
            })
        );
        assert!(piece.cardinal_neighbors().is_err());
        assert!(piece.intercardinal_neighbors().is_err());
    }

    #[test]
    fn test_anchor_can_be_moved() {
        let catalog = catalog();
        let mut piece = Piece::from_shape(catalog.get(ShapeKind::Two));
        piece.set_anchor(Point::new(0, 0));
        piece.set_anchor(Point::new(3, 2));
        assert_eq!(piece.squares().unwrap(), vec![Point::new(3, 2), Point::new(3, 3)]);
    }

    #[test]
    fn test_flip_then_rotate_order() {
        let catalog = catalog();
        // Flip first, then three right rotations.
        let piece = Piece::new(catalog.get(ShapeKind::Seven), false, 3).anchored_at(Point::new(2, 2));
        assert_eq!(
            piece.squares().unwrap(),
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2),
                Point::new(2, 3)
            ]
        );
    }

    #[test]
    fn test_rotation_is_taken_mod_four() {
        let catalog = catalog();
        let shape = catalog.get(ShapeKind::Seven);
        let a = Piece::new(shape, true, 1).anchored_at(Point::new(5, 5));
        let b = Piece::new(shape, true, 9).anchored_at(Point::new(5, 5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pieces_do_not_share_geometry() {
        let catalog = catalog();
        let shape = catalog.get(ShapeKind::L);
        let mut turned = Piece::from_shape(shape).anchored_at(Point::new(4, 4));
        let untouched = Piece::from_shape(shape).anchored_at(Point::new(4, 4));
        turned.rotate_right().unwrap();
        assert_ne!(turned.footprint().unwrap(), untouched.footprint().unwrap());
        assert_eq!(catalog.get(ShapeKind::L).squares(), untouched.shape().squares());
    }

    #[test]
    fn test_interactive_transforms_need_anchor() {
        let catalog = catalog();
        let mut piece = Piece::from_shape(catalog.get(ShapeKind::A));
        assert!(piece.rotate_right().is_err());
        piece.set_anchor(Point::new(2, 2));
        piece.rotate_right().unwrap();
        assert_eq!(
            piece.squares().unwrap(),
            vec![
                Point::new(2, 3),
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(3, 2)
            ]
        );
    }

    #[test]
    fn test_cardinal_neighbors() {
        let catalog = catalog();
        let piece = Piece::from_shape(catalog.get(ShapeKind::LetterO)).anchored_at(Point::new(1, 1));
        assert_eq!(
            piece.cardinal_neighbors().unwrap(),
            set(&[(0, 1), (0, 2), (1, 0), (1, 3), (2, 0), (2, 3), (3, 1), (3, 2)])
        );
    }

    #[test]
    fn test_intercardinal_neighbors_exclude_own_squares() {
        let catalog = catalog();
        let piece = Piece::from_shape(catalog.get(ShapeKind::Two)).anchored_at(Point::new(0, 0));
        assert_eq!(
            piece.intercardinal_neighbors().unwrap(),
            set(&[(-1, -1), (-1, 0), (-1, 1), (-1, 2), (1, -1), (1, 0), (1, 1), (1, 2)])
        );
    }

    #[test]
    fn test_equal_footprints_are_equal_moves() {
        let catalog = catalog();
        let shape = catalog.get(ShapeKind::Two);
        let right = Piece::new(shape, true, 0).anchored_at(Point::new(0, 0));
        let left = Piece::new(shape, true, 2).anchored_at(Point::new(0, 1));
        assert_eq!(right, left);

        let moves: HashSet<Piece> = [right, left].into_iter().collect();
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn test_normal_form_ignores_translation() {
        let catalog = catalog();
        let shape = catalog.get(ShapeKind::Three);
        let once = Piece::new(shape, true, 1);
        let thrice = Piece::new(shape, true, 3);
        assert_eq!(once.normal_form(), thrice.normal_form());
        assert_eq!(once.normal_form(), set(&[(0, 0), (1, 0), (2, 0)]));
    }
}
