//! Per-player record of unplayed shapes.

use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

/// The shape kinds a player has not yet placed.
///
/// Starts full and only ever shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    unplayed: [bool; ShapeKind::COUNT],
}

impl Inventory {
    /// All 21 kinds available.
    pub fn full() -> Self {
        Self {
            unplayed: [true; ShapeKind::COUNT],
        }
    }

    /// Whether `kind` is still available.
    pub fn contains(&self, kind: ShapeKind) -> bool {
        self.unplayed[kind.index()]
    }

    /// Marks `kind` as played. Returns false when it already was.
    pub(crate) fn remove(&mut self, kind: ShapeKind) -> bool {
        std::mem::replace(&mut self.unplayed[kind.index()], false)
    }

    /// Unplayed kinds in catalog order.
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        ShapeKind::iter().filter(|&kind| self.contains(kind))
    }

    /// Number of unplayed kinds.
    pub fn len(&self) -> usize {
        self.unplayed.iter().filter(|&&left| left).count()
    }

    /// Whether every kind has been played.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether no kind has been played yet.
    pub fn is_full(&self) -> bool {
        self.len() == ShapeKind::COUNT
    }

    /// Whether every kind in `other` is also in `self`.
    pub fn is_superset(&self, other: &Inventory) -> bool {
        ShapeKind::iter().all(|kind| self.contains(kind) || !other.contains(kind))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::full()
    }
}
