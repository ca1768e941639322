//! Mutable game state: board, inventories, turn and retirements.

use crate::board::Board;
use crate::error::ConfigError;
use crate::inventory::Inventory;
use crate::invariants::{BlokusInvariants, InvariantSet, describe};
use crate::placement::Placement;
use crate::shape::ShapeKind;
use crate::types::{PlayerId, Point};
use crate::variant::GameConfig;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Everything that changes while a game is played.
///
/// Only [`crate::Blokus`] mutates a state, and it does so on a clone that
/// is committed once the post-conditions hold.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The shared grid.
    pub(crate) board: Board,
    #[getter(skip)]
    pub(crate) num_players: u8,
    /// Unplayed kinds, one inventory per player, indexed by player number - 1.
    pub(crate) inventories: Vec<Inventory>,
    #[getter(skip)]
    pub(crate) current_player: PlayerId,
    /// Players who gave up their remaining turns.
    pub(crate) retired: BTreeSet<PlayerId>,
    /// Cells that may anchor a player's first placement.
    pub(crate) start_positions: BTreeSet<Point>,
    /// Committed placements, oldest first.
    pub(crate) history: Vec<Placement>,
}

impl GameState {
    /// Creates the opening state. Parameters are assumed validated.
    #[instrument(skip(start_positions), fields(starts = start_positions.len()))]
    pub fn new(num_players: u8, size: usize, start_positions: BTreeSet<Point>) -> Self {
        Self {
            board: Board::new(size),
            num_players,
            inventories: vec![Inventory::full(); usize::from(num_players)],
            current_player: PlayerId::new(1),
            retired: BTreeSet::new(),
            start_positions,
            history: Vec::new(),
        }
    }

    /// Number of seated players.
    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    /// Player whose turn it is. Not meaningful once the game is over.
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Every seated player, in turn order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        (1..=self.num_players).map(PlayerId::new)
    }

    /// Inventory of `player`, or `None` for an unknown player.
    pub fn inventory(&self, player: PlayerId) -> Option<&Inventory> {
        self.inventories.get(player.index()?)
    }

    /// Whether `player` still takes turns: seated, not retired and holding
    /// at least one shape.
    pub fn is_eligible(&self, player: PlayerId) -> bool {
        !self.retired.contains(&player)
            && self
                .inventory(player)
                .is_some_and(|inventory| !inventory.is_empty())
    }

    /// True once no player is eligible to move.
    pub fn game_over(&self) -> bool {
        !self.players().any(|player| self.is_eligible(player))
    }

    /// Whether `player` has placed at least one piece.
    pub fn has_placed(&self, player: PlayerId) -> bool {
        self.inventory(player)
            .is_some_and(|inventory| !inventory.is_full())
    }

    /// Kind of the last piece `player` placed.
    pub fn last_placed(&self, player: PlayerId) -> Option<ShapeKind> {
        self.history
            .iter()
            .rev()
            .find(|placement| placement.player == player)
            .map(|placement| placement.kind)
    }

    /// Writes a placement for the current player and passes the turn.
    ///
    /// Legality is the caller's concern; a write that lands on a covered
    /// cell or a kind that was already played is left for the invariants
    /// to report.
    pub(crate) fn apply_placement(&mut self, placement: Placement) {
        let player = placement.player;
        if let Some(inventory) = player
            .index()
            .and_then(|i| self.inventories.get_mut(i))
        {
            inventory.remove(placement.kind);
        }
        for &square in &placement.squares {
            self.board.occupy(square, player, placement.kind);
        }
        self.history.push(placement);
        self.advance_turn();
    }

    /// Retires the current player and passes the turn.
    pub(crate) fn retire_current(&mut self) {
        self.retired.insert(self.current_player);
        self.advance_turn();
    }

    /// Moves the turn to the next eligible player.
    ///
    /// Scans at most `num_players` seats starting after the current one,
    /// wrapping around. When nobody is eligible the current player is left
    /// unchanged and the game is over.
    pub(crate) fn advance_turn(&mut self) {
        let current = self.current_player.get();
        let next = self
            .players()
            .filter(|player| player.get() > current)
            .chain(self.players().filter(|player| player.get() <= current))
            .find(|&player| self.is_eligible(player));
        match next {
            Some(player) => {
                debug!(from = %self.current_player, to = %player, "Turn passed");
                self.current_player = player;
            }
            None => debug!("No eligible player remains"),
        }
    }

    /// Checks a state that was not built by [`GameState::new`], such as one
    /// read back from storage.
    ///
    /// Seating and board shape are checked before the invariants run.
    #[track_caller]
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        GameConfig::new(
            self.num_players,
            self.board.size(),
            self.start_positions.iter().copied(),
        )?;
        if !self.board.is_well_formed() {
            return Err(ConfigError::new(format!(
                "board cells do not form a {0}x{0} grid",
                self.board.size()
            )));
        }
        if self.inventories.len() != usize::from(self.num_players) {
            return Err(ConfigError::new(format!(
                "{} inventories for {} players",
                self.inventories.len(),
                self.num_players
            )));
        }

        let unseated = std::iter::once(self.current_player)
            .chain(self.retired.iter().copied())
            .chain(self.history.iter().map(|placement| placement.player))
            .find(|player| !(1..=self.num_players).contains(&player.get()));
        if let Some(player) = unseated {
            return Err(ConfigError::new(format!("{} is not seated", player)));
        }

        BlokusInvariants::check_all(self).map_err(|violations| {
            ConfigError::new(format!("inconsistent state: {}", describe(&violations)))
        })
    }
}
