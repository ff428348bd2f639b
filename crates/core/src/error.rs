//! Error types for fnkit
//!
//! The combinators themselves never fail. Errors only arise at the edges:
//! parsing scenario strings and loading format configuration.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for fnkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fnkit
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing a config file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A scenario case string was not in `input:expected` form
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    /// Configuration values out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    /// Configuration could not be rendered as TOML
    #[error("Config serialize error: {0}")]
    ConfigSerialize(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::ConfigSerialize(e.to_string())
    }
}

impl Error {
    /// Build an `InvalidScenario` error
    pub fn invalid_scenario(msg: impl Into<String>) -> Self {
        Error::InvalidScenario(msg.into())
    }

    /// Build an `InvalidConfig` error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}
