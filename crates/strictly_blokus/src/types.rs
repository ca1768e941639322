//! Core coordinate and player types.

use derive_more::{Add, Display, From, Sub};
use serde::{Deserialize, Serialize};

/// A board coordinate as `(row, col)`, with `(0, 0)` at the top-left.
///
/// Coordinates are signed so that a candidate square hanging off the board
/// (row `-1`, say) is still representable and can be rejected as a wall
/// collision rather than wrapping around.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    Sub,
    From,
    Display,
    Serialize,
    Deserialize,
)]
#[display("({}, {})", row, col)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Point {
    /// Vertical position, growing downwards.
    pub row: i32,
    /// Horizontal position, growing rightwards.
    pub col: i32,
}

impl Point {
    /// Offsets of the four edge-sharing neighbours.
    pub const CARDINAL: [Point; 4] = [
        Point::new(-1, 0),
        Point::new(1, 0),
        Point::new(0, -1),
        Point::new(0, 1),
    ];

    /// Offsets of the four corner-sharing neighbours.
    pub const INTERCARDINAL: [Point; 4] = [
        Point::new(-1, -1),
        Point::new(-1, 1),
        Point::new(1, -1),
        Point::new(1, 1),
    ];

    /// Creates a point.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the points directly above, below, left and right of this one.
    pub fn cardinal_neighbors(self) -> [Point; 4] {
        Self::CARDINAL.map(|delta| self + delta)
    }

    /// Returns the points diagonally adjacent to this one.
    pub fn intercardinal_neighbors(self) -> [Point; 4] {
        Self::INTERCARDINAL.map(|delta| self + delta)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.row, point.col)
    }
}

/// A seated player, numbered consecutively from 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display("Player {}", _0)]
#[serde(transparent)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates a player id. Ids are 1-based.
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Returns the 1-based player number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-player tables.
    pub(crate) fn index(self) -> Option<usize> {
        usize::from(self.0).checked_sub(1)
    }
}
