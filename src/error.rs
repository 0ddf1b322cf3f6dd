//! Error types for the roster tool.
//!
//! Storage failures never surface here: the session reports them on the
//! console and carries on. `RosterError` covers what stops the program, a bad
//! configuration or a failing console.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Console error: {0}")]
    Console(#[from] io::Error),
}

impl RosterError {
    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if reading from or writing to the console failed.
    #[must_use]
    pub const fn is_console(&self) -> bool {
        matches!(self, Self::Console(_))
    }
}

/// Result type alias for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;
