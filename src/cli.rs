//! Command-line interface for rewind_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - terminal tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Tic-tac-toe with replayable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind_tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show the move history newest first
    #[arg(long, global = true)]
    pub reverse_history: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the effective configuration as TOML
    Config,
}
