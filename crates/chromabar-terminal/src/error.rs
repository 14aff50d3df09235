//! Error types for chromabar-terminal.

use chromabar_core::ColorError;
use thiserror::Error;

/// Errors that can occur while configuring or driving a bar.
#[derive(Debug, Error)]
pub enum BarError {
    /// Invalid color, anchor set or size.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// IO error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BarError>;
