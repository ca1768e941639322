//! Shape kinds and shape templates.
//!
//! A [`Shape`] is a template: a list of square offsets relative to an
//! origin. Transforms rewrite the offsets in place with exact integer
//! rotation matrices, so no orientation ever drifts.

use crate::error::DefinitionError;
use crate::types::Point;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};
use tracing::{instrument, trace};

/// Occupied square.
pub const OCCUPIED: char = 'X';
/// Occupied square that is also the origin.
pub const ORIGIN: char = 'O';
/// Origin that is not itself part of the shape.
pub const BARE_ORIGIN: char = '@';

/// The 21 free polyominoes of sizes 1 through 5.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeKind {
    /// Monomino.
    One,
    /// Domino.
    Two,
    /// Straight tromino.
    Three,
    /// Bent tromino.
    C,
    /// Straight tetromino.
    Four,
    /// L-tetromino, drawn as a 7.
    Seven,
    /// S-tetromino.
    S,
    /// Square tetromino.
    LetterO,
    /// T-tetromino.
    A,
    /// F-pentomino.
    F,
    /// Straight pentomino.
    Five,
    /// L-pentomino.
    L,
    /// N-pentomino.
    N,
    /// P-pentomino.
    P,
    /// T-pentomino.
    T,
    /// U-pentomino.
    U,
    /// V-pentomino.
    V,
    /// W-pentomino.
    W,
    /// X-pentomino.
    X,
    /// Y-pentomino.
    Y,
    /// Z-pentomino.
    Z,
}

impl ShapeKind {
    /// Position of this kind in catalog order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks a kind up by catalog position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Number of unit squares in shapes of this kind.
    pub fn square_count(self) -> usize {
        match self {
            ShapeKind::One => 1,
            ShapeKind::Two => 2,
            ShapeKind::Three | ShapeKind::C => 3,
            ShapeKind::Four | ShapeKind::Seven | ShapeKind::S | ShapeKind::LetterO | ShapeKind::A => 4,
            _ => 5,
        }
    }

    /// One-character symbol used when drawing a board.
    pub fn symbol(self) -> char {
        match self {
            ShapeKind::One => '1',
            ShapeKind::Two => '2',
            ShapeKind::Three => '3',
            ShapeKind::Four => '4',
            ShapeKind::Five => '5',
            ShapeKind::Seven => '7',
            ShapeKind::LetterO => 'O',
            ShapeKind::C => 'C',
            ShapeKind::S => 'S',
            ShapeKind::A => 'A',
            ShapeKind::F => 'F',
            ShapeKind::L => 'L',
            ShapeKind::N => 'N',
            ShapeKind::P => 'P',
            ShapeKind::T => 'T',
            ShapeKind::U => 'U',
            ShapeKind::V => 'V',
            ShapeKind::W => 'W',
            ShapeKind::X => 'X',
            ShapeKind::Y => 'Y',
            ShapeKind::Z => 'Z',
        }
    }
}

/// A named geometric template.
///
/// `squares` are offsets from `origin`, unique, in the row-major order of
/// the definition they were parsed from. `transformable` is false when the
/// definition carried no origin marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    kind: ShapeKind,
    origin: Point,
    transformable: bool,
    squares: Vec<Point>,
}

impl Shape {
    /// Builds a shape from parts. Duplicate offsets are dropped.
    pub(crate) fn new(
        kind: ShapeKind,
        origin: Point,
        transformable: bool,
        squares: Vec<Point>,
    ) -> Self {
        let mut unique = Vec::with_capacity(squares.len());
        for square in squares {
            if !unique.contains(&square) {
                unique.push(square);
            }
        }
        Self {
            kind,
            origin,
            transformable,
            squares: unique,
        }
    }

    /// Parses a shape from its textual definition.
    ///
    /// Rows use [`OCCUPIED`] for squares, [`ORIGIN`] for the square the
    /// offsets are measured from and blanks for empty cells. [`BARE_ORIGIN`]
    /// places the origin on an empty cell. Rows without markers are ignored
    /// and the common indentation of the remaining rows is stripped.
    ///
    /// Without an origin marker the offsets are measured from the top-left
    /// cell of the block and the shape is not transformable.
    #[instrument(skip(pattern))]
    pub fn from_definition(kind: ShapeKind, pattern: &str) -> Result<Self, DefinitionError> {
        let rows: Vec<&str> = pattern
            .lines()
            .filter(|line| line.chars().any(|c| matches!(c, OCCUPIED | ORIGIN | BARE_ORIGIN)))
            .collect();
        let indent = rows
            .iter()
            .map(|line| line.len() - line.trim_start_matches(' ').len())
            .min()
            .unwrap_or(0);

        let mut origin = None;
        let mut cells = Vec::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, marker) in line.chars().skip(indent).enumerate() {
                let point = Point::new(r as i32, c as i32);
                match marker {
                    OCCUPIED => cells.push(point),
                    ORIGIN | BARE_ORIGIN => {
                        if origin.replace(point).is_some() {
                            return Err(DefinitionError::MultipleOrigins { kind });
                        }
                        if marker == ORIGIN {
                            cells.push(point);
                        }
                    }
                    ' ' => {}
                    marker => return Err(DefinitionError::UnknownMarker { kind, marker }),
                }
            }
        }

        if cells.is_empty() {
            return Err(DefinitionError::NoSquares { kind });
        }

        let transformable = origin.is_some();
        let origin = origin.unwrap_or_default();
        let squares = cells.into_iter().map(|cell| cell - origin).collect();
        trace!(%kind, %origin, transformable, "Parsed shape definition");
        Ok(Self::new(kind, origin, transformable, squares))
    }

    /// Returns the shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the origin cell within the definition block.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Whether the definition named an explicit origin.
    pub fn transformable(&self) -> bool {
        self.transformable
    }

    /// Returns the offsets relative to the origin.
    pub fn squares(&self) -> &[Point] {
        &self.squares
    }

    /// Number of unit squares in the shape.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false for a parsed shape.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Mirrors across the vertical axis through the origin: `(r, c) -> (r, -c)`.
    pub fn flip_horizontally(&mut self) {
        for square in &mut self.squares {
            *square = Point::new(square.row, -square.col);
        }
    }

    /// Rotates 90 degrees counter-clockwise: `(r, c) -> (-c, r)`.
    pub fn rotate_left(&mut self) {
        for square in &mut self.squares {
            *square = Point::new(-square.col, square.row);
        }
    }

    /// Rotates 90 degrees clockwise: `(r, c) -> (c, -r)`.
    pub fn rotate_right(&mut self) {
        for square in &mut self.squares {
            *square = Point::new(square.col, -square.row);
        }
    }
}
