//! Type definitions shared by deltas, kernels and builders

/// Error types
pub mod error;

/// Key domains
pub mod key;

/// Bitset over enumerated keys
pub mod enum_set;

// Re-export commonly used items
pub use error::{BuilderError, Result};
pub use key::{all_keys, BuilderKey, EnumKey};
pub use enum_set::EnumKeySet;
