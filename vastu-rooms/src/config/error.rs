//! Configuration loading errors.

use thiserror::Error;

/// Configuration could not be loaded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    #[error("Failed to read config file: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
