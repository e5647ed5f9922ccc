//! Rewind Tic-Tac-Toe - terminal tic-tac-toe with replayable move history.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::AppConfig;
use rewind_tictactoe::cli::{Cli, Command};
use rewind_tictactoe::tui::run_tui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.reverse_history, cli.log_file);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config).context("Terminal UI failed"),
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
