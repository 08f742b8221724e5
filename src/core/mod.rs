//! Core system plumbing
//!
//! Error handling and configuration for applications embedding the builders.

pub mod error;
pub mod config;

// Re-export commonly used items
pub use error::{Error, Result};
pub use config::{load_config_or_default, BuilderConfig, Config, LoggingConfig};
