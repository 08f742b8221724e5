//! Kernels: accumulate deltas and merge them into a finished mapping.
//!
//! Every kernel implements the same contract, independent of how it stores
//! keys:
//!
//! 1. Start from the registered defaults (last default wins per key).
//! 2. Drop every key that was explicitly removed or set.
//! 3. Apply pending writes: a literal replaces the default, updates compose
//!    in posting order on top of the literal or the default.
//!
//! Defaults commute with removals, literals and updates: posting a default
//! never overrides an explicit write, whatever the order. Among removals,
//! literals and updates on the same key the most recent one wins.
//! `reset` reverts individual keys to their default, `reset_all` reverts
//! every key and keeps defaults, `clear` forgets defaults as well.

use crate::delta::Transform;
use crate::types::BuilderKey;

/// Hash-backed kernel for unrestricted keys
pub mod hash_map_kernel;

/// Slot-backed kernel for enumerated keys
pub mod enum_map_kernel;

/// Ordinal-indexed map produced by the enumerated kernel
pub mod enum_map;

mod overrides;

pub use enum_map::EnumMap;
pub use enum_map_kernel::EnumMapKernel;
pub use hash_map_kernel::HashMapKernel;

/// Capability set shared by every key domain.
///
/// Kernels receive only validated keys; deltas reject absent keys before they
/// are applied. `merge` is referentially transparent and always returns a
/// freshly built value.
pub trait MapKernel {
    /// Key type of this domain
    type Key: BuilderKey;

    /// Value type stored by this kernel
    type Value: Clone + Send + Sync + 'static;

    /// Mapping produced by [`MapKernel::merge`]
    type Output;

    /// Set or update defaults
    fn defaults(&mut self, entries: &[(Self::Key, Self::Value)]);

    /// Set literal values
    fn values(&mut self, entries: &[(Self::Key, Self::Value)]);

    /// Remove keys from the result
    fn remove(&mut self, keys: &[Self::Key]);

    /// Compose functional updates onto keys
    fn update(&mut self, updates: &[(Self::Key, Transform<Self::Value>)]);

    /// Revert keys to their registered default
    fn reset(&mut self, keys: &[Self::Key]);

    /// Revert every key to its default, keeping defaults
    fn reset_all(&mut self);

    /// Forget everything, defaults included
    fn clear(&mut self);

    /// Compute the finished mapping
    fn merge(&self) -> Self::Output;

    /// Whether no default or pending write is held
    fn is_empty(&self) -> bool;
}
