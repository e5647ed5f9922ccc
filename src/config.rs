//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "rewind_tictactoe.toml";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Show the history list newest first.
    reverse_history: bool,

    /// File receiving tracing output.
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Colors used by the renderers.
    theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reverse_history: false,
            log_file: PathBuf::from("rewind_tictactoe.log"),
            log_filter: "info".to_string(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text and validates the theme.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.theme.palette()?;
        info!(reverse_history = config.reverse_history, "Config loaded");
        Ok(config)
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used when present and built-in defaults otherwise.
    #[instrument(skip(explicit))]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, reverse_history: bool, log_file: Option<PathBuf>) -> Self {
        if reverse_history {
            self.reverse_history = true;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Serializes the configuration back to TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Color names for the terminal renderers.
///
/// Values accept anything ratatui parses: names like `"blue"` or hex `"#444444"`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Marks on regular squares.
    normal: String,
    /// Marks on the winning line.
    highlight: String,
    /// Background of the square under the cursor.
    cursor: String,
    /// The active history entry.
    selected: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            normal: "#444444".to_string(),
            highlight: "blue".to_string(),
            cursor: "yellow".to_string(),
            selected: "cyan".to_string(),
        }
    }
}

impl Theme {
    /// Parses every color name.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            normal: parse_color("normal", &self.normal)?,
            highlight: parse_color("highlight", &self.highlight)?,
            cursor: parse_color("cursor", &self.cursor)?,
            selected: parse_color("selected", &self.selected)?,
        })
    }
}

/// Parsed theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Marks on regular squares.
    pub normal: Color,
    /// Marks on the winning line.
    pub highlight: Color,
    /// Background of the square under the cursor.
    pub cursor: Color,
    /// The active history entry.
    pub selected: Color,
}

/// Parses one theme color. Errors record the caller's location.
#[track_caller]
fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    match value.parse::<Color>() {
        Ok(color) => Ok(color),
        Err(_) => {
            let message = format!("Invalid color for theme.{}: {:?}", field, value);
            Err(ConfigError::new(message))
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
