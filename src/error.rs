//! Error types for the PopX TUI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fallible TUI operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that can occur outside the screens themselves.
///
/// Screens have no failure modes of their own: validation only toggles
/// whether a button is interactive, and unknown paths fall back to the
/// welcome screen.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `TuiConfig`.
    #[error("Invalid config file: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Terminal I/O error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl AppError {
    pub fn config_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::ConfigRead { path, source }
    }

    pub fn config_parse(path: PathBuf, source: serde_json::Error) -> Self {
        Self::ConfigParse { path, source }
    }
}
