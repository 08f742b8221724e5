//! Deltas: the unit of change posted to builders.
//!
//! A delta is validated once, at construction, and is immutable afterwards.
//! Mutable builders apply it to their kernel immediately; immutable builders
//! store it in their history and replay it on every materialization.

/// Map deltas and their constructors
pub mod map_delta;

// Re-export main types for convenience
pub use map_delta::{DeltaKind, MapDelta, Transform};
