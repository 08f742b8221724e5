//! Error types for riverbed builders
//!
//! The core has exactly one failure mode: a delta-producing call was handed a
//! key that stands for "no key". Everything past delta construction (apply,
//! fold, merge) is total.

use thiserror::Error;

/// Result type used throughout the core crate
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Errors raised while constructing deltas
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A null/absent key was passed to a delta-producing operation
    #[error("Invalid key in {operation}: {key}")]
    InvalidKey {
        /// Operation that rejected the key (e.g. "values", "remove")
        operation: &'static str,
        /// Debug rendering of the offending key
        key: String,
    },
}

impl BuilderError {
    /// Create an invalid key error
    pub fn invalid_key(operation: &'static str, key: impl std::fmt::Debug) -> Self {
        Self::InvalidKey {
            operation,
            key: format!("{:?}", key),
        }
    }

    /// Check if this error was caused by an invalid key
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, BuilderError::InvalidKey { .. })
    }
}
