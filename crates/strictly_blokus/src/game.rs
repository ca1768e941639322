//! The game facade: the only surface collaborators touch.

use crate::board::Board;
use crate::catalog::ShapeCatalog;
use crate::contracts::{Contract, PlacementContract, RetirementContract};
use crate::error::{BlokusError, ConfigError};
use crate::moves;
use crate::phases::Phase;
use crate::piece::Piece;
use crate::placement::Placement;
use crate::rules;
use crate::shape::ShapeKind;
use crate::state::GameState;
use crate::types::{PlayerId, Point};
use crate::variant::{GameConfig, Variant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// Bonus for placing every shape.
pub const COMPLETION_BONUS: i32 = 15;
/// Bonus for placing every shape with the monomino last.
pub const MONOMINO_LAST_BONUS: i32 = 20;

/// A Blokus game: shape catalog plus mutable state.
///
/// Every mutation is atomic. [`Blokus::place`] and [`Blokus::retire`]
/// build the successor state on a copy, check the transition's
/// postconditions in debug builds, and only then commit it.
///
/// A deserialized game is checked before it is accepted: the catalog must
/// be the standard one and the state must satisfy every invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct Blokus {
    catalog: ShapeCatalog,
    state: GameState,
}

/// A game as read back from storage, not yet checked.
#[derive(Deserialize)]
struct SavedGame {
    catalog: ShapeCatalog,
    state: GameState,
}

impl TryFrom<SavedGame> for Blokus {
    type Error = BlokusError;

    #[instrument(skip(saved), fields(players = saved.state.num_players(), placements = saved.state.history().len()))]
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        if saved.catalog != ShapeCatalog::standard()? {
            return Err(ConfigError::new("catalog differs from the standard shapes").into());
        }
        saved.state.validate()?;
        debug!("Saved game accepted");
        Ok(Self {
            catalog: saved.catalog,
            state: saved.state,
        })
    }
}

impl Blokus {
    /// Creates a game after validating the construction parameters.
    ///
    /// Fails with [`BlokusError::Config`] when `num_players` is outside
    /// 1..=4, `size` is below 5, a start position lies off the board, or
    /// there are fewer distinct start positions than players.
    #[instrument(skip(start_positions))]
    pub fn new(
        num_players: u8,
        size: usize,
        start_positions: impl IntoIterator<Item = Point>,
    ) -> Result<Self, BlokusError> {
        let config = GameConfig::new(num_players, size, start_positions)?;
        Self::from_config(config)
    }

    /// Creates a game from a (possibly deserialized) configuration.
    #[instrument(skip(config), fields(players = config.num_players(), size = config.size()))]
    pub fn from_config(config: GameConfig) -> Result<Self, BlokusError> {
        config.validate()?;
        let catalog = ShapeCatalog::standard()?;
        let state = GameState::new(
            config.num_players(),
            config.size(),
            config.start_positions().clone(),
        );
        info!("Game created");
        Ok(Self { catalog, state })
    }

    /// Creates a game on a preset layout.
    #[instrument]
    pub fn from_variant(variant: Variant, num_players: u8) -> Result<Self, BlokusError> {
        Self::from_config(variant.config(num_players)?)
    }

    /// The 21 shape templates.
    pub fn shapes(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// Alias of [`Blokus::shapes`].
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.state.board().size()
    }

    /// Cells eligible for first placements.
    pub fn start_positions(&self) -> &BTreeSet<Point> {
        self.state.start_positions()
    }

    /// Number of seated players.
    pub fn num_players(&self) -> u8 {
        self.state.num_players()
    }

    /// Player to move. Not meaningful once the game is over.
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// Players who retired.
    pub fn retired_players(&self) -> &BTreeSet<PlayerId> {
        self.state.retired()
    }

    /// Snapshot of the board.
    pub fn grid(&self) -> &Board {
        self.state.board()
    }

    /// Committed placements, oldest first.
    pub fn history(&self) -> &[Placement] {
        self.state.history()
    }

    /// The full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.state.game_over() {
            Phase::GameOver
        } else {
            Phase::Active(self.state.current_player())
        }
    }

    /// True when every player has retired or played all their shapes.
    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// Shapes `player` has not placed, in catalog order. Empty for an
    /// unknown player.
    pub fn remaining_shapes(&self, player: PlayerId) -> Vec<ShapeKind> {
        self.state
            .inventory(player)
            .map(|inventory| inventory.kinds().collect())
            .unwrap_or_default()
    }

    /// Score of `player`, or `None` for an unknown player.
    ///
    /// Minus the squares of every unplayed shape. A player who placed all
    /// 21 shapes earns [`COMPLETION_BONUS`], or [`MONOMINO_LAST_BONUS`]
    /// when the monomino went last.
    pub fn score(&self, player: PlayerId) -> Option<i32> {
        let inventory = self.state.inventory(player)?;
        let unplayed: usize = inventory
            .kinds()
            .map(|kind| self.catalog.square_count(kind))
            .sum();
        let mut score = -(unplayed as i32);
        if inventory.is_empty() {
            score += match self.state.last_placed(player) {
                Some(ShapeKind::One) => MONOMINO_LAST_BONUS,
                _ => COMPLETION_BONUS,
            };
        }
        Some(score)
    }

    /// Every player with the best score, ascending; `None` until the game
    /// is over.
    #[instrument(skip(self))]
    pub fn winners(&self) -> Option<Vec<PlayerId>> {
        if !self.game_over() {
            return None;
        }
        let scores: Vec<(PlayerId, i32)> = self
            .state
            .players()
            .filter_map(|player| self.score(player).map(|score| (player, score)))
            .collect();
        let best = scores.iter().map(|&(_, score)| score).max()?;
        let winners = scores
            .into_iter()
            .filter(|&(_, score)| score == best)
            .map(|(player, _)| player)
            .collect();
        Some(winners)
    }

    /// Whether `piece` would leave the board.
    pub fn any_wall_collision(&self, piece: &Piece) -> Result<bool, BlokusError> {
        rules::check_unplayed(&self.state, piece)?;
        Ok(rules::any_wall_collision(self.state.board(), piece)?)
    }

    /// Whether `piece` would leave the board or overlap a placed piece.
    pub fn any_collision(&self, piece: &Piece) -> Result<bool, BlokusError> {
        rules::check_unplayed(&self.state, piece)?;
        Ok(rules::any_collision(self.state.board(), piece)?)
    }

    /// Whether the current player may place `piece` now.
    ///
    /// A piece whose squares are not an orientation of its kind's template
    /// is never legal.
    pub fn legal_to_place(&self, piece: &Piece) -> Result<bool, BlokusError> {
        Ok(rules::legal_to_place(&self.state, piece)?
            && rules::matches_template(&self.catalog, piece))
    }

    /// Places `piece` for the current player if it is legal.
    ///
    /// Returns `Ok(false)`, with no effect, for an illegal placement, a
    /// piece that does not match its template, or once the game is over. Fails with [`BlokusError::AnchorNotSet`] for
    /// a loose piece and [`BlokusError::AlreadyPlayed`] for a kind the
    /// player already used.
    #[instrument(skip(self, piece), fields(player = %self.state.current_player(), kind = %piece.kind(), anchor = ?piece.anchor()))]
    pub fn place(&mut self, piece: &Piece) -> Result<bool, BlokusError> {
        if self.state.game_over() {
            warn!("Placement attempted after game over");
            return Ok(false);
        }

        PlacementContract::pre(&self.state, piece)?;
        if !self.legal_to_place(piece)? {
            debug!("Placement rejected");
            return Ok(false);
        }

        let player = self.state.current_player();
        let placement = Placement::new(player, piece.kind(), piece.squares()?);
        let mut next = self.state.clone();
        next.apply_placement(placement);

        #[cfg(debug_assertions)]
        PlacementContract::post(&self.state, &next)?;

        self.state = next;
        debug!(next = %self.state.current_player(), "Placement accepted");
        if self.state.game_over() {
            info!("Game over");
        }
        Ok(true)
    }

    /// Retires the current player for the rest of the game.
    ///
    /// A no-op once the game is over.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn retire(&mut self) -> Result<(), BlokusError> {
        if self.state.game_over() {
            warn!("Retirement attempted after game over");
            return Ok(());
        }

        let player = self.state.current_player();
        RetirementContract::pre(&self.state, &player)?;
        let mut next = self.state.clone();
        next.retire_current();

        #[cfg(debug_assertions)]
        RetirementContract::post(&self.state, &next)?;

        self.state = next;
        info!(%player, "Player retired");
        if self.state.game_over() {
            info!("Game over");
        }
        Ok(())
    }

    /// Every legal placement for the current player. Recomputed on each
    /// call; empty once the game is over.
    pub fn available_moves(&self) -> Vec<Piece> {
        moves::available_moves(&self.catalog, &self.state)
    }
}
