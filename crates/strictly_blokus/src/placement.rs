//! Record of a committed placement.

use crate::shape::ShapeKind;
use crate::types::{PlayerId, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in the game history: who placed what, and where.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The placing player.
    pub player: PlayerId,
    /// The shape consumed from their inventory.
    pub kind: ShapeKind,
    /// Board squares covered, in piece order.
    pub squares: Vec<Point>,
}

impl Placement {
    /// Creates a placement record.
    pub fn new(player: PlayerId, kind: ShapeKind, squares: Vec<Point>) -> Self {
        Self {
            player,
            kind,
            squares,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} placed {} on", self.player, self.kind)?;
        for square in &self.squares {
            write!(f, " {}", square)?;
        }
        Ok(())
    }
}
