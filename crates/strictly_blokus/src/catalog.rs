//! The fixed catalog of 21 shapes.

use crate::error::DefinitionError;
use crate::shape::{Shape, ShapeKind};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, instrument};

/// Textual definitions of the standard shapes, in catalog order.
///
/// `X` is a square, `O` the square offsets are measured from and `@` an
/// origin that is not itself covered (the V pentomino pivots on its empty
/// inner corner). The two symmetric shapes carry no origin and cannot be
/// transformed.
pub const DEFINITIONS: [(ShapeKind, &str); ShapeKind::COUNT] = [
    (ShapeKind::One, "
        X
    "),
    (ShapeKind::Two, "
        OX
    "),
    (ShapeKind::Three, "
        XOX
    "),
    (ShapeKind::C, "
        OX
        X
    "),
    (ShapeKind::Four, "
        XOXX
    "),
    (ShapeKind::Seven, "
        XX
         O
         X
    "),
    (ShapeKind::S, "
         OX
        XX
    "),
    (ShapeKind::LetterO, "
        XX
        XX
    "),
    (ShapeKind::A, "
         X
        XOX
    "),
    (ShapeKind::F, "
         XX
        XO
         X
    "),
    (ShapeKind::Five, "
        X
        X
        O
        X
        X
    "),
    (ShapeKind::L, "
        X
        X
        O
        XX
    "),
    (ShapeKind::N, "
         X
        OX
        X
        X
    "),
    (ShapeKind::P, "
        XX
        XO
        X
    "),
    (ShapeKind::T, "
        XXX
         O
         X
    "),
    (ShapeKind::U, "
        X X
        XOX
    "),
    (ShapeKind::V, "
          X
         @X
        XXX
    "),
    (ShapeKind::W, "
          X
         OX
        XX
    "),
    (ShapeKind::X, "
         X
        XOX
         X
    "),
    (ShapeKind::Y, "
         X
        XO
         X
         X
    "),
    (ShapeKind::Z, "
        XX
         O
         XX
    "),
];

/// Every shape kind with its parsed template, indexed by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Parses the standard [`DEFINITIONS`].
    #[instrument]
    pub fn standard() -> Result<Self, DefinitionError> {
        Self::from_definitions(DEFINITIONS)
    }

    /// Parses a catalog that defines every kind exactly once.
    #[instrument(skip(definitions))]
    pub fn from_definitions<'a>(
        definitions: impl IntoIterator<Item = (ShapeKind, &'a str)>,
    ) -> Result<Self, DefinitionError> {
        let mut slots: Vec<Option<Shape>> = vec![None; ShapeKind::COUNT];
        for (kind, pattern) in definitions {
            let shape = Shape::from_definition(kind, pattern)?;
            if slots[kind.index()].replace(shape).is_some() {
                return Err(DefinitionError::DuplicateShape { kind });
            }
        }

        let shapes = ShapeKind::iter()
            .zip(slots)
            .map(|(kind, slot)| slot.ok_or(DefinitionError::MissingShape { kind }))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(shapes = shapes.len(), "Shape catalog loaded");
        Ok(Self { shapes })
    }

    /// Returns the template for a kind.
    pub fn get(&self, kind: ShapeKind) -> &Shape {
        &self.shapes[kind.index()]
    }

    /// Iterates the templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Number of shapes, always 21.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Square count of a kind.
    pub fn square_count(&self, kind: ShapeKind) -> usize {
        self.get(kind).len()
    }

    /// Sum of the square counts of all shapes.
    pub fn total_squares(&self) -> usize {
        self.shapes.iter().map(Shape::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn offsets(catalog: &ShapeCatalog, kind: ShapeKind) -> Vec<(i32, i32)> {
        catalog.get(kind).squares().iter().map(|p| (p.row, p.col)).collect()
    }

    #[test]
    fn test_standard_catalog_parses() {
        let catalog = ShapeCatalog::standard().unwrap();
        assert_eq!(catalog.len(), 21);
        assert_eq!(catalog.total_squares(), 89);
        for (shape, kind) in catalog.iter().zip(ShapeKind::iter()) {
            assert_eq!(shape.kind(), kind);
            assert_eq!(shape.len(), kind.square_count());
        }
    }

    #[test]
    fn test_square_counts_by_size() {
        let catalog = ShapeCatalog::standard().unwrap();
        let mut by_size = [0; 6];
        for shape in catalog.iter() {
            by_size[shape.len()] += 1;
        }
        assert_eq!(by_size, [0, 1, 1, 2, 5, 12]);
    }

    #[test]
    fn test_only_symmetric_shapes_lack_origin() {
        let catalog = ShapeCatalog::standard().unwrap();
        for shape in catalog.iter() {
            let symmetric = matches!(shape.kind(), ShapeKind::One | ShapeKind::LetterO);
            assert_eq!(shape.transformable(), !symmetric, "{}", shape.kind());
        }
    }

    #[test]
    fn test_selected_offsets() {
        let catalog = ShapeCatalog::standard().unwrap();
        assert_eq!(catalog.get(ShapeKind::Five).origin(), Point::new(2, 0));
        assert_eq!(
            offsets(&catalog, ShapeKind::Five),
            vec![(-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0)]
        );
        assert_eq!(catalog.get(ShapeKind::N).origin(), Point::new(1, 0));
        assert_eq!(
            offsets(&catalog, ShapeKind::N),
            vec![(-1, 1), (0, 0), (0, 1), (1, 0), (2, 0)]
        );
        assert_eq!(
            offsets(&catalog, ShapeKind::V),
            vec![(-1, 1), (0, 1), (1, -1), (1, 0), (1, 1)]
        );
        assert_eq!(
            offsets(&catalog, ShapeKind::Y),
            vec![(-1, 0), (0, -1), (0, 0), (1, 0), (2, 0)]
        );
        assert_eq!(
            offsets(&catalog, ShapeKind::S),
            vec![(0, 0), (0, 1), (1, -1), (1, 0)]
        );
    }

    #[test]
    fn test_missing_and_duplicate_definitions() {
        let partial = DEFINITIONS.iter().copied().take(20);
        assert_eq!(
            ShapeCatalog::from_definitions(partial),
            Err(DefinitionError::MissingShape { kind: ShapeKind::Z })
        );

        let doubled = DEFINITIONS.iter().copied().chain([(ShapeKind::One, "X")]);
        assert_eq!(
            ShapeCatalog::from_definitions(doubled),
            Err(DefinitionError::DuplicateShape { kind: ShapeKind::One })
        );
    }
}
