//! List builders: append-only accumulation of items with a clear operation.
//!
//! Lists carry no keys, so list operations never fail.

/// Locked, in-place list builder
pub mod mutable;

/// Persistent, replaying list builder
pub mod immutable;

pub use immutable::ImmutableListBuilder;
pub use mutable::MutableListBuilder;

/// One change posted to a list builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp<E> {
    /// Append one item
    Add(E),
    /// Append items in order
    AddAll(Vec<E>),
    /// Drop every accumulated item
    Clear,
}

impl<E: Clone> ListOp<E> {
    /// Apply this operation to `items`
    pub fn apply(&self, items: &mut Vec<E>) {
        match self {
            ListOp::Add(item) => items.push(item.clone()),
            ListOp::AddAll(more) => items.extend_from_slice(more),
            ListOp::Clear => items.clear(),
        }
    }
}
