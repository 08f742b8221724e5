//! Crate plumbing: logging macros and process-wide settings

/// Logging macros over `tracing`
pub mod logging;

/// Write-once fold settings
pub mod settings;

pub use settings::FoldSettings;
