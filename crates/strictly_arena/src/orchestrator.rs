//! Drives a game between strategies using only the engine's public surface.

use crate::arena_config::{ArenaConfig, ConfigError};
use crate::players::Strategy;
use derive_getters::Getters;
use std::fmt;
use strictly_blokus::{Blokus, BlokusError, PlayerId};
use tracing::{debug, info, instrument, warn};

/// Outcome of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameReport {
    /// Final score of every seat, in seat order.
    scores: Vec<(PlayerId, i32)>,
    /// Seats sharing the best score.
    winners: Vec<PlayerId>,
    /// Number of committed placements.
    placements: usize,
    /// Rendered final board.
    board: String,
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scores: Vec<String> = self
            .scores
            .iter()
            .map(|(player, score)| format!("{}: {}", player, score))
            .collect();
        let winners: Vec<String> = self.winners.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{} placements; scores [{}]; winners [{}]",
            self.placements,
            scores.join(", "),
            winners.join(", ")
        )
    }
}

/// Seats strategies at a game and plays it to the end.
pub struct Orchestrator {
    game: Blokus,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Orchestrator {
    /// Seats one strategy per player of `game`, in turn order.
    #[instrument(skip(game, strategies), fields(seats = strategies.len()))]
    pub fn new(game: Blokus, strategies: Vec<Box<dyn Strategy>>) -> Result<Self, ConfigError> {
        if strategies.len() != usize::from(game.num_players()) {
            return Err(ConfigError::new(format!(
                "{} strategies for {} players",
                strategies.len(),
                game.num_players()
            )));
        }
        Ok(Self { game, strategies })
    }

    /// Builds a fresh game from `config`, seeding each seat from `seed`.
    #[instrument(skip(config))]
    pub fn from_config(config: &ArenaConfig, seed: u64) -> Result<Self, ConfigError> {
        let game_config = config.game_config()?;
        let game = Blokus::from_config(game_config)
            .map_err(|e| ConfigError::new(format!("Failed to create game: {}", e)))?;
        let strategies = config
            .players()
            .iter()
            .enumerate()
            .map(|(seat, kind)| kind.build(seed.wrapping_mul(31).wrapping_add(seat as u64)))
            .collect();
        Self::new(game, strategies)
    }

    /// The game being played.
    pub fn game(&self) -> &Blokus {
        &self.game
    }

    /// Plays until the game is over.
    ///
    /// A strategy that has no move, or proposes one the engine rejects,
    /// retires its seat.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<GameReport, BlokusError> {
        while !self.game.game_over() {
            let player = self.game.current_player();
            let seat = usize::from(player.get()) - 1;
            let strategy = &mut self.strategies[seat];

            match strategy.choose(&self.game) {
                Some(piece) => {
                    debug!(%player, strategy = strategy.name(), kind = %piece.kind(), "Move chosen");
                    if !self.game.place(&piece)? {
                        warn!(%player, strategy = strategy.name(), "Engine rejected move, retiring");
                        self.game.retire()?;
                    }
                }
                None => {
                    debug!(%player, strategy = strategy.name(), "No move available");
                    self.game.retire()?;
                }
            }
        }

        let scores = (1..=self.game.num_players())
            .map(PlayerId::new)
            .filter_map(|player| self.game.score(player).map(|score| (player, score)))
            .collect();
        let report = GameReport {
            scores,
            winners: self.game.winners().unwrap_or_default(),
            placements: self.game.history().len(),
            board: self.game.grid().to_string(),
        };
        info!(%report, "Game finished");
        Ok(report)
    }
}

/// Wins and ties per seat across many games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games recorded.
    games: usize,
    /// Outright wins, indexed by seat.
    wins: Vec<usize>,
    /// Shared wins, indexed by seat.
    ties: Vec<usize>,
}

impl Tally {
    /// Creates an empty tally for `seats` players.
    pub fn new(seats: usize) -> Self {
        Self {
            games: 0,
            wins: vec![0; seats],
            ties: vec![0; seats],
        }
    }

    /// Adds a finished game.
    pub fn record(&mut self, report: &GameReport) {
        self.games += 1;
        let bucket = if report.winners.len() == 1 {
            &mut self.wins
        } else {
            &mut self.ties
        };
        for winner in &report.winners {
            let seat = usize::from(winner.get()) - 1;
            if let Some(count) = bucket.get_mut(seat) {
                *count += 1;
            }
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} games", self.games)?;
        for (seat, (wins, ties)) in self.wins.iter().zip(&self.ties).enumerate() {
            writeln!(f, "  Player {}: {} wins, {} ties", seat + 1, wins, ties)?;
        }
        Ok(())
    }
}
