//! Builder cores: the mutable (in-place) and immutable (persistent history)
//! variants that every concrete builder wraps.
//!
//! Both are parameterized by collaborators rather than subclassed: an
//! initializer producing empty state, a mutator applying one delta, and one
//! or two constructors turning finished state into caller-chosen types.

/// Persistent history links
mod chain;

/// In-place builder
pub mod mutable;

/// Persistent-history builder
pub mod immutable;

pub use immutable::ImmutableBuilderCore;
pub use mutable::MutableBuilderCore;

/// A builder whose state is mutated in place.
pub trait MutableBuilder<P> {
    /// Merge the current state into the parent object.
    ///
    /// Invoking this repeatedly without intervening state changes produces
    /// equal results; it never clears accumulated state.
    fn merge(&self) -> P;
}

/// A builder that never changes once created.
pub trait ImmutableBuilder<R, P> {
    /// Build the root type by working up the builder hierarchy.
    ///
    /// Produces the same result as calling [`done`](Self::done) on this
    /// builder, then on the returned builder, and so on until the root.
    fn build(&self) -> R;

    /// Return the parent, enhanced by the operations performed on this
    /// builder. For a root builder this is the built instance.
    fn done(&self) -> P;
}
