use std::fmt;

use super::ListOp;
use crate::builder::{MutableBuilder, MutableBuilderCore};

/// Mutable list builder
pub struct MutableListBuilder<E, P> {
    core: MutableBuilderCore<Vec<E>, ListOp<E>, P>,
}

impl<E, P> MutableListBuilder<E, P>
where
    E: Clone + 'static,
    P: 'static,
{
    /// Create a builder whose `merge` passes the items to `constructor`
    pub fn new<F>(constructor: F) -> Self
    where
        F: Fn(&[E]) -> P + Send + Sync + 'static,
    {
        Self {
            core: MutableBuilderCore::new(
                Vec::new,
                |items: &mut Vec<E>, op: &ListOp<E>| op.apply(items),
                move |items: &Vec<E>| constructor(items.as_slice()),
            ),
        }
    }

    /// Append one item
    pub fn add(&self, item: E) -> &Self {
        self.core.apply(ListOp::Add(item));
        self
    }

    /// Append items in order
    pub fn add_all(&self, items: impl IntoIterator<Item = E>) -> &Self {
        self.core.apply(ListOp::AddAll(items.into_iter().collect()));
        self
    }

    /// Drop every item
    pub fn clear(&self) -> &Self {
        self.core.apply(ListOp::Clear);
        self
    }

    /// Merge the current items through the constructor
    pub fn merge(&self) -> P {
        self.core.merge()
    }
}

impl<E: Clone + 'static> MutableListBuilder<E, Vec<E>> {
    /// Create a builder that merges to a copy of its items
    pub fn create() -> Self {
        Self::new(<[E]>::to_vec)
    }
}

impl<E, P> MutableBuilder<P> for MutableListBuilder<E, P>
where
    E: Clone + 'static,
    P: 'static,
{
    fn merge(&self) -> P {
        MutableListBuilder::merge(self)
    }
}

impl<E, P> fmt::Debug for MutableListBuilder<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableListBuilder").field("core", &self.core).finish()
    }
}
