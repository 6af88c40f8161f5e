//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};

/// Strictly Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults are used if it is missing)
    #[arg(short, long, default_value = "timeline.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin (`play <cell>`, `jump <move>`, `reset`, `quit`)
    Play,

    /// Play a sequence of cells and print the final position
    Replay {
        /// Cells to play in order (0-8, row-major)
        cells: Vec<usize>,

        /// Jump to this move after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
