//! # CLI Error Types
//!
//! Everything that can stop a run, from a bad config file to an unknown
//! menu code.

use bistro_core::CoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse the TOML config file.
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A selection refers to a code that is not on the menu.
    #[error("Menu code {0:04} is not on the menu")]
    UnknownCode(u32),

    /// Domain error from bistro-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
