//! Global constants used throughout riverbed
//!
//! Compile-time values shared by several modules, kept here to avoid magic
//! numbers.

/// Default chain depth past which an immutable builder replay logs a warning
///
/// Replaying is linear in chain length and happens on every `build`/`done`,
/// so a very long history is usually a sign that a builder is being used as
/// a log instead of being materialized and restarted.
pub const DEFAULT_CHAIN_DEPTH_WARNING: usize = 10_000;

/// `tracing` target used by every log statement in the crate
pub const LOG_TARGET: &str = "riverbed";
