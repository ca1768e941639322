//! Strictly Blokus - a contract-checked Blokus rule engine
//!
//! Players place polyomino pieces on a shared square grid. Every placement
//! after a player's first must touch their own pieces at a corner and never
//! along an edge. The game ends when every player has retired or placed all
//! 21 shapes; the best score wins.
//!
//! # Architecture
//!
//! - **Geometry**: [`ShapeCatalog`], [`Shape`] and [`Piece`]
//! - **State**: [`GameState`], [`Board`], [`Inventory`]
//! - **Rules**: pure legality predicates in [`rules`]
//! - **Moves**: exhaustive enumeration of legal pieces
//! - **Engine**: the [`Blokus`] facade, checked by [`contracts`] and [`invariants`]
//!
//! # Example
//!
//! ```
//! use strictly_blokus::{Blokus, Piece, Point, ShapeKind, Variant};
//!
//! # fn example() -> Result<(), strictly_blokus::BlokusError> {
//! let mut game = Blokus::from_variant(Variant::Duo, 2)?;
//!
//! let monomino = Piece::from_shape(game.shapes().get(ShapeKind::One))
//!     .anchored_at(Point::new(4, 4));
//! assert!(game.place(&monomino)?);
//!
//! let replies = game.available_moves();
//! assert!(!replies.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod catalog;
pub mod contracts;
mod error;
mod game;
mod inventory;
pub mod invariants;
mod moves;
mod phases;
mod piece;
mod placement;
pub mod rules;
mod shape;
mod state;
mod types;
mod variant;

// Crate-level exports - Geometry
pub use catalog::{DEFINITIONS, ShapeCatalog};
pub use piece::Piece;
pub use shape::{BARE_ORIGIN, OCCUPIED, ORIGIN, Shape, ShapeKind};
pub use types::{PlayerId, Point};

// Crate-level exports - State
pub use board::{Board, Cell};
pub use inventory::Inventory;
pub use placement::Placement;
pub use state::GameState;

// Crate-level exports - Engine
pub use game::{Blokus, COMPLETION_BONUS, MONOMINO_LAST_BONUS};
pub use moves::{available_moves, orientations, target_cells};
pub use phases::Phase;
pub use variant::{GameConfig, MAX_PLAYERS, MIN_PLAYERS, MIN_SIZE, Variant};

// Crate-level exports - Errors
pub use error::{AlreadyPlayedError, AnchorNotSetError, BlokusError, ConfigError, DefinitionError};
