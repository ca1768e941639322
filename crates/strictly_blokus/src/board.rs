//! The square playing grid.

use crate::shape::ShapeKind;
use crate::types::{PlayerId, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single grid cell.
///
/// Occupied cells remember which kind of shape covers them. The engine
/// only needs the owner; the kind is kept for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No piece covers this cell.
    #[default]
    Empty,
    /// Covered by a piece.
    Occupied {
        /// Owner of the piece.
        player: PlayerId,
        /// Kind of the piece.
        kind: ShapeKind,
    },
}

impl Cell {
    /// Returns the owner, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { player, .. } => Some(player),
        }
    }
}

/// A `size` x `size` grid of cells in row-major order.
///
/// Cells are write-once: [`Board::occupy`] refuses to touch a cell that is
/// already covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, point: Point) -> Option<usize> {
        let row = usize::try_from(point.row).ok()?;
        let col = usize::try_from(point.col).ok()?;
        (row < self.size && col < self.size).then_some(row * self.size + col)
    }

    /// Whether the cell count matches the side length.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.size.checked_mul(self.size) == Some(self.cells.len())
    }

    /// Whether `point` lies on the board.
    pub fn contains(&self, point: Point) -> bool {
        self.offset(point).is_some()
    }

    /// Returns the cell at `point`, or `None` off the board.
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.offset(point).map(|i| self.cells[i])
    }

    /// Whether `point` is on the board and uncovered.
    pub fn is_empty_at(&self, point: Point) -> bool {
        matches!(self.get(point), Some(Cell::Empty))
    }

    /// Whether `point` is on the board and covered by `player`.
    pub fn is_owned_by(&self, point: Point, player: PlayerId) -> bool {
        self.get(point).and_then(Cell::owner) == Some(player)
    }

    /// Covers an empty cell. Returns false, leaving the board untouched,
    /// when the cell is off the board or already covered.
    pub(crate) fn occupy(&mut self, point: Point, player: PlayerId, kind: ShapeKind) -> bool {
        match self.offset(point) {
            Some(i) if self.cells[i] == Cell::Empty => {
                self.cells[i] = Cell::Occupied { player, kind };
                true
            }
            _ => false,
        }
    }

    /// Iterates every cell with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let point = Point::new((i / size) as i32, (i % size) as i32);
            (point, cell)
        })
    }

    /// Iterates the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells covered by `player`.
    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// Number of covered cells.
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Overwrites a cell regardless of its contents.
    #[cfg(test)]
    pub(crate) fn force(&mut self, point: Point, cell: Cell) {
        if let Some(i) = self.offset(point) {
            self.cells[i] = cell;
        }
    }
}

/// Draws the grid framed by `||`, two characters per cell: `. ` when empty,
/// otherwise the owner's number followed by the shape symbol.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "||".repeat(self.size + 2);
        writeln!(f, "{}", border)?;
        for row in self.rows() {
            write!(f, "||")?;
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, ". ")?,
                    Cell::Occupied { player, kind } => {
                        write!(f, "{}{}", player.get(), kind.symbol())?
                    }
                }
            }
            writeln!(f, "||")?;
        }
        write!(f, "{}", border)
    }
}
