//! CLI error types.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the `fate` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Rng(#[from] fate_core::RngError),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
