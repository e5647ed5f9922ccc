//! Rewind Tic-Tac-Toe - terminal front end for the `rewind_core` game engine
//!
//! # Architecture
//!
//! - **Config**: TOML settings for history order, logging and colors
//! - **CLI**: clap definitions for the `rewind_tictactoe` binary
//! - **TUI**: ratatui board, clickable history list and input handling
//!
//! The game rules and time-travel history live in `rewind_core`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod tui;

pub use config::{AppConfig, ConfigError, Palette, Theme};
