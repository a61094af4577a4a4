//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_core::Position;

/// Rewind - two-player tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Two-player tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml when present)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// List the latest move first
        #[arg(long)]
        descending: bool,
    },

    /// Apply moves without a UI and print the resulting game
    Script {
        /// Cells in play order: an index (0-8, row-major) or a label such as
        /// `center`; illegal indices are ignored
        #[arg(value_parser = parse_cell)]
        cells: Vec<usize>,

        /// Step to travel to after the moves are played
        #[arg(long)]
        jump: Option<usize>,

        /// List the latest move first
        #[arg(long)]
        descending: bool,

        /// Print the game view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { descending: false }
    }
}

/// Reads a cell as a raw index or a position label.
///
/// Numbers pass through unchecked so out-of-range indices reach the game and
/// are ignored there.
fn parse_cell(s: &str) -> Result<usize, String> {
    s.trim()
        .parse::<usize>()
        .ok()
        .or_else(|| Position::from_label_or_number(s).map(Position::to_index))
        .ok_or_else(|| format!("unknown cell '{}'", s))
}
