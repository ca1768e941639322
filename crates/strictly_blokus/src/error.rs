//! Error types for the Blokus engine.
//!
//! Illegal placements are not errors: [`crate::Blokus::place`] reports them
//! by returning `Ok(false)`. The types here cover misuse of the API and
//! malformed input.

use crate::shape::ShapeKind;
use crate::types::PlayerId;
use derive_more::{Display, Error};
use tracing::instrument;

/// Invalid construction parameters for a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A shape kind that is no longer in the acting player's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{} has already played {}", player, kind)]
pub struct AlreadyPlayedError {
    /// The acting player.
    pub player: PlayerId,
    /// The shape they tried to use again.
    pub kind: ShapeKind,
}

/// A geometry query on a piece that has not been anchored to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Piece {} has no anchor", kind)]
pub struct AnchorNotSetError {
    /// Kind of the unanchored piece.
    pub kind: ShapeKind,
}

/// Malformed shape definition text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum DefinitionError {
    /// A character other than a marker or a blank.
    #[display("{} definition contains unknown marker {:?}", kind, marker)]
    UnknownMarker {
        /// Shape being parsed.
        kind: ShapeKind,
        /// Offending character.
        marker: char,
    },

    /// More than one origin marker in a single definition.
    #[display("{} definition has more than one origin", kind)]
    MultipleOrigins {
        /// Shape being parsed.
        kind: ShapeKind,
    },

    /// A definition without any occupied square.
    #[display("{} definition has no squares", kind)]
    NoSquares {
        /// Shape being parsed.
        kind: ShapeKind,
    },

    /// A catalog listing the same kind twice.
    #[display("{} is defined more than once", kind)]
    DuplicateShape {
        /// Repeated shape.
        kind: ShapeKind,
    },

    /// A catalog missing one of the 21 kinds.
    #[display("{} has no definition", kind)]
    MissingShape {
        /// Absent shape.
        kind: ShapeKind,
    },
}

/// Any error raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BlokusError {
    /// Invalid construction parameters.
    #[display("{}", _0)]
    Config(ConfigError),

    /// Shape already consumed by the acting player.
    #[display("{}", _0)]
    AlreadyPlayed(AlreadyPlayedError),

    /// Geometry query on an unanchored piece.
    #[display("{}", _0)]
    AnchorNotSet(AnchorNotSetError),

    /// Malformed shape catalog.
    #[display("{}", _0)]
    Definition(DefinitionError),

    /// A post-condition failed; the offending transition was discarded.
    #[display("Invariant violation: {}", description)]
    InvariantViolation {
        /// Descriptions of the violated invariants.
        description: String,
    },
}

impl From<ConfigError> for BlokusError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<AlreadyPlayedError> for BlokusError {
    fn from(err: AlreadyPlayedError) -> Self {
        Self::AlreadyPlayed(err)
    }
}

impl From<AnchorNotSetError> for BlokusError {
    fn from(err: AnchorNotSetError) -> Self {
        Self::AnchorNotSet(err)
    }
}

impl From<DefinitionError> for BlokusError {
    fn from(err: DefinitionError) -> Self {
        Self::Definition(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_tracks_location() {
        let err = ConfigError::new("size must be at least 5");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Config error: size must be at least 5"));
    }

    #[test]
    fn test_already_played_message() {
        let err = BlokusError::from(AlreadyPlayedError {
            player: PlayerId::new(2),
            kind: ShapeKind::Two,
        });
        assert_eq!(err.to_string(), "Player 2 has already played TWO");
    }
}
