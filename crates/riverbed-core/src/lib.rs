//! # Riverbed Core
//!
//! Delta-driven builders. Every builder operation is a delta posted to a
//! kernel; mutable builders apply deltas in place under a lock, immutable
//! builders keep a persistent history and replay it on every `build`/`done`.
//! This crate carries no I/O and only lightweight dependencies.

#![warn(missing_docs)]

/// Crate plumbing: logging macros and fold settings
pub mod core;

/// System constants
pub mod constants;

/// Type definitions: keys, key sets, errors
pub mod types;

/// Deltas posted to builders
pub mod delta;

/// Kernels that accumulate deltas into maps
pub mod kernel;

/// Generic mutable and immutable builder cores
pub mod builder;

/// Map builders
pub mod map;

/// List builders
pub mod list;

#[doc(hidden)]
pub use tracing;

// Re-export commonly used items
pub use types::{BuilderError, BuilderKey, EnumKey, EnumKeySet, Result};
pub use delta::{DeltaKind, MapDelta, Transform};
pub use kernel::{EnumMap, EnumMapKernel, HashMapKernel, MapKernel};
pub use builder::{ImmutableBuilder, ImmutableBuilderCore, MutableBuilder, MutableBuilderCore};
pub use map::{
    EnumMapBuilder, HashMapBuilder, ImmutableEnumMapBuilder, ImmutableHashMapBuilder,
    ImmutableMapBuilder, MutableMapBuilder,
};
pub use list::{ImmutableListBuilder, ListOp, MutableListBuilder};
