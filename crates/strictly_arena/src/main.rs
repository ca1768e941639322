//! Strictly Arena - Unified CLI
//!
//! Runs computer players against the Blokus engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::collections::BTreeMap;
use std::path::Path;
use strictly_arena::{ArenaConfig, Orchestrator, Tally};
use strictly_blokus::{Blokus, Piece, Point, ShapeCatalog, ShapeKind, Variant};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Command::Simulate {
            config,
            games,
            seed,
            show_board,
        } => run_simulation(&config, games, seed, show_board),
        Command::Shapes => print_shapes(),
        Command::Moves { variant, players } => count_moves(variant, players),
    }
}

/// Plays `games` games and prints the tally.
#[instrument(skip(config_path, show_board), fields(config_path = %config_path.display()))]
fn run_simulation(config_path: &Path, games: u64, seed: u64, show_board: bool) -> Result<()> {
    let config = load_arena_config(config_path)?;
    let mut tally = Tally::new(config.players().len());

    for game in 0..games {
        let mut orchestrator = Orchestrator::from_config(&config, seed.wrapping_add(game))?;
        let report = orchestrator.play()?;
        println!("Game {}: {}", game + 1, report);
        if show_board {
            println!("{}", report.board());
        }
        tally.record(&report);
    }

    print!("{}", tally);
    Ok(())
}

#[instrument]
fn load_arena_config(config_path: &Path) -> Result<ArenaConfig> {
    info!("Loading arena configuration");

    if config_path.exists() {
        Ok(ArenaConfig::from_file(config_path)?)
    } else {
        info!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        Ok(ArenaConfig::default())
    }
}

/// Draws every catalog shape in its base orientation.
#[instrument]
fn print_shapes() -> Result<()> {
    let catalog = ShapeCatalog::standard()?;
    for shape in catalog.iter() {
        let cells = Piece::from_shape(shape).normal_form();
        let rows = cells.iter().map(|p| p.row).max().unwrap_or(0);
        let cols = cells.iter().map(|p| p.col).max().unwrap_or(0);

        println!("{} ({} squares)", shape.kind(), shape.len());
        for row in 0..=rows {
            let line: String = (0..=cols)
                .map(|col| {
                    if cells.contains(&Point::new(row, col)) {
                        shape.kind().symbol()
                    } else {
                        ' '
                    }
                })
                .collect();
            println!("  {}", line.trim_end());
        }
    }
    Ok(())
}

/// Prints how many opening moves each shape has on a layout.
#[instrument]
fn count_moves(variant: Variant, players: Option<u8>) -> Result<()> {
    let game = Blokus::from_variant(variant, players.unwrap_or(variant.default_players()))?;
    let moves = game.available_moves();

    let mut by_kind: BTreeMap<ShapeKind, usize> = BTreeMap::new();
    for piece in &moves {
        *by_kind.entry(piece.kind()).or_default() += 1;
    }

    println!("{} opening moves on {}", moves.len(), variant);
    for (kind, count) in by_kind {
        println!("  {:<8} {}", kind.to_string(), count);
    }
    Ok(())
}
