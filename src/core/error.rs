//! Error types for Riverbed
//!
//! Builder failures come from `riverbed_core` and are wrapped unchanged;
//! the remaining variants cover configuration loading.

use riverbed_core::BuilderError;
use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Riverbed
#[derive(Error, Debug)]
pub enum Error {
    /// Builder operation errors
    #[error("Builder error: {0}")]
    Builder(#[from] BuilderError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error was caused by caller input rather than the environment
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Builder(_) | Error::Config(_))
    }
}
