use std::fmt;

use super::ListOp;
use crate::builder::{ImmutableBuilder, ImmutableBuilderCore};

/// Immutable list builder
pub struct ImmutableListBuilder<E, R, P> {
    core: ImmutableBuilderCore<Vec<E>, ListOp<E>, R, P>,
}

impl<E, R, P> ImmutableListBuilder<E, R, P>
where
    E: Clone + 'static,
    R: 'static,
    P: 'static,
{
    /// Create a root builder
    ///
    /// # Arguments
    ///
    /// * `root_constructor` - maps the items to the root type (`build`)
    /// * `parent_constructor` - maps the items to the parent type (`done`)
    pub fn new<RF, PF>(root_constructor: RF, parent_constructor: PF) -> Self
    where
        RF: Fn(Vec<E>) -> R + Send + Sync + 'static,
        PF: Fn(Vec<E>) -> P + Send + Sync + 'static,
    {
        Self {
            core: ImmutableBuilderCore::new(
                Vec::new,
                |items: &mut Vec<E>, op: &ListOp<E>| op.apply(items),
                parent_constructor,
                root_constructor,
            ),
        }
    }

    /// Derive a builder with one more item
    pub fn with_item(&self, item: E) -> Self {
        Self { core: self.core.with(ListOp::Add(item)) }
    }

    /// Derive a builder with more items, in order
    pub fn with_items(&self, items: impl IntoIterator<Item = E>) -> Self {
        Self { core: self.core.with(ListOp::AddAll(items.into_iter().collect())) }
    }

    /// Derive a builder with no items
    pub fn cleared(&self) -> Self {
        Self { core: self.core.with(ListOp::Clear) }
    }

    /// Construct the root type
    pub fn build(&self) -> R {
        self.core.build()
    }

    /// Construct the parent type
    pub fn done(&self) -> P {
        self.core.done()
    }

    /// Number of operations in this builder's history
    pub fn depth(&self) -> usize {
        self.core.depth()
    }
}

impl<E: Clone + 'static> ImmutableListBuilder<E, Vec<E>, Vec<E>> {
    /// Create a root builder whose `build` and `done` both return the items
    pub fn create() -> Self {
        Self::new(|items| items, |items| items)
    }
}

impl<E, R, P> Clone for ImmutableListBuilder<E, R, P> {
    fn clone(&self) -> Self {
        Self { core: self.core.clone() }
    }
}

impl<E, R, P> ImmutableBuilder<R, P> for ImmutableListBuilder<E, R, P>
where
    E: Clone + 'static,
    R: 'static,
    P: 'static,
{
    fn build(&self) -> R {
        ImmutableListBuilder::build(self)
    }

    fn done(&self) -> P {
        ImmutableListBuilder::done(self)
    }
}

impl<E, R, P> fmt::Debug for ImmutableListBuilder<E, R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImmutableListBuilder").field("core", &self.core).finish()
    }
}
