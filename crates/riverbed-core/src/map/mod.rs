//! Map builders: the delta vocabulary exposed as builder operations.
//!
//! Both variants are generic over a [`MapKernel`](crate::kernel::MapKernel),
//! so the same operations drive hash-backed and enumerated key domains.

/// Locked, in-place map builders
pub mod mutable;

/// Persistent, replaying map builders
pub mod immutable;

// Re-export main types for convenience
pub use immutable::{ImmutableEnumMapBuilder, ImmutableHashMapBuilder, ImmutableMapBuilder};
pub use mutable::{EnumMapBuilder, HashMapBuilder, MutableMapBuilder};
