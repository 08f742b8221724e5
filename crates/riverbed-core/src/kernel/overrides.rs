//! Per-key override state shared by the kernel implementations

use crate::delta::Transform;

/// What an override starts from before its transforms run
#[derive(Clone)]
pub(crate) enum Base<V> {
    /// Whatever default is registered at merge time
    Inherit,
    /// A literal value
    Value(V),
    /// Explicitly removed; the key is absent regardless of defaults
    Removed,
}

/// Pending write for one key: a base plus the updates composed onto it
#[derive(Clone)]
pub(crate) struct Override<V> {
    base: Base<V>,
    transforms: Vec<Transform<V>>,
}

impl<V: Clone> Override<V> {
    pub(crate) fn value(value: V) -> Self {
        Self { base: Base::Value(value), transforms: Vec::new() }
    }

    pub(crate) fn removed() -> Self {
        Self { base: Base::Removed, transforms: Vec::new() }
    }

    pub(crate) fn inherit() -> Self {
        Self { base: Base::Inherit, transforms: Vec::new() }
    }

    /// Compose another update after the ones already pending
    pub(crate) fn push(&mut self, transform: Transform<V>) {
        self.transforms.push(transform);
    }

    /// Whether the registered default still shows through this override
    pub(crate) fn inherits(&self) -> bool {
        matches!(self.base, Base::Inherit)
    }

    /// Final value for the key, or None if the key is absent from the merge
    pub(crate) fn resolve(&self, default: Option<&V>) -> Option<V> {
        let base = match &self.base {
            Base::Inherit => default.cloned(),
            Base::Value(value) => Some(value.clone()),
            Base::Removed => None,
        }?;
        Some(self.transforms.iter().fold(base, |acc, transform| transform(acc)))
    }
}
