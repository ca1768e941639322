//! Command-line interface for strictly_arena.

use clap::{Parser, Subcommand};
use strictly_blokus::Variant;

/// Strictly Arena - computer players for the Blokus engine
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Pits simple Blokus strategies against each other", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games between the configured strategies
    Simulate {
        /// Path to arena configuration file
        #[arg(short, long, default_value = "arena.toml")]
        config: std::path::PathBuf,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u64,

        /// Base seed for the random strategies
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Print the final board of every game
        #[arg(long)]
        show_board: bool,
    },

    /// Print the shape catalog
    Shapes,

    /// Count the opening moves on a layout
    Moves {
        /// Board layout (mini, mono, duo, classic)
        #[arg(short, long, default_value = "duo")]
        variant: Variant,

        /// Seats to create; defaults to the layout's usual count
        #[arg(short, long)]
        players: Option<u8>,
    },
}
