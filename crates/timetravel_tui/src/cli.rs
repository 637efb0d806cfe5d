//! Command-line interface for the time-travel tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timetravel_tictactoe::Position;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./timetravel.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Replay moves without a terminal UI and print the resulting view as JSON
    Replay {
        /// Cells in play order, comma separated: indices (0-8) or labels like `center`
        #[arg(short, long, value_delimiter = ',', value_parser = parse_cell)]
        moves: Vec<usize>,

        /// Step to jump to after replaying
        #[arg(short, long)]
        jump: Option<usize>,
    },
}

/// Parses one `--moves` entry into a board index.
fn parse_cell(s: &str) -> Result<usize, String> {
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("unknown cell `{}` (expected 0-8 or a label like `top-left`)", s))
}
