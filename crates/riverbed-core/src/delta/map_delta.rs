//! Map deltas: validated, immutable descriptions of one kernel transition

use std::fmt;
use std::sync::Arc;

use crate::kernel::MapKernel;
use crate::types::{BuilderError, BuilderKey, Result};

/// Functional update applied to a value at merge time
pub type Transform<V> = Arc<dyn Fn(V) -> V + Send + Sync>;

/// Discriminant of a [`MapDelta`], for inspection and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeltaKind {
    /// Register default entries
    Defaults,
    /// Set literal entries
    Values,
    /// Remove keys
    Remove,
    /// Compose functional updates onto keys
    Update,
    /// Revert keys to their registered default
    Reset,
    /// Revert every key, keeping defaults
    ResetAll,
    /// Wipe everything, defaults included
    Clear,
    /// No effect
    Nop,
}

impl fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeltaKind::Defaults => "defaults",
            DeltaKind::Values => "values",
            DeltaKind::Remove => "remove",
            DeltaKind::Update => "update",
            DeltaKind::Reset => "reset",
            DeltaKind::ResetAll => "reset_all",
            DeltaKind::Clear => "clear",
            DeltaKind::Nop => "nop",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
enum Op<K, V> {
    Defaults(Vec<(K, V)>),
    Values(Vec<(K, V)>),
    Remove(Vec<K>),
    Update(Vec<(K, Transform<V>)>),
    Reset(Vec<K>),
    ResetAll,
    Clear,
    Nop,
}

/// One state transition for a map kernel.
///
/// A delta can only be built through its constructors, which reject absent
/// keys (see [`BuilderKey::is_absent`]) with [`BuilderError::InvalidKey`].
/// A kernel therefore never observes an invalid key. Constructors given an
/// empty collection return a no-op delta.
///
/// Deltas are immutable and cheap to clone; an immutable builder replays the
/// same delta on every `build`.
#[derive(Clone)]
pub struct MapDelta<K, V> {
    op: Op<K, V>,
}

fn require_keys<'a, K, I>(operation: &'static str, keys: I) -> Result<()>
where
    K: BuilderKey,
    I: IntoIterator<Item = &'a K>,
{
    match keys.into_iter().find(|key| key.is_absent()) {
        Some(key) => Err(BuilderError::invalid_key(operation, key)),
        None => Ok(()),
    }
}

fn entry_key<K, T>(entry: &(K, T)) -> &K {
    &entry.0
}

fn bare_key<K>(key: &K) -> &K {
    key
}

impl<K: BuilderKey, V> MapDelta<K, V> {
    fn collect<T>(
        operation: &'static str,
        items: impl IntoIterator<Item = T>,
        key_of: fn(&T) -> &K,
        wrap: fn(Vec<T>) -> Op<K, V>,
    ) -> Result<Self> {
        let items: Vec<T> = items.into_iter().collect();
        require_keys(operation, items.iter().map(key_of))?;
        Ok(Self::from_op(if items.is_empty() { Op::Nop } else { wrap(items) }))
    }

    fn from_op(op: Op<K, V>) -> Self {
        Self { op }
    }

    /// Register defaults. Later defaults override earlier ones per key, but
    /// never an explicit value or removal.
    pub fn defaults(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self> {
        Self::collect("defaults", entries, entry_key, Op::Defaults)
    }

    /// Register a single default
    pub fn default_entry(key: K, value: V) -> Result<Self> {
        Self::defaults([(key, value)])
    }

    /// Set literal values, replacing any default, removal or pending update
    pub fn values(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self> {
        Self::collect("values", entries, entry_key, Op::Values)
    }

    /// Set a single literal value
    pub fn value(key: K, value: V) -> Result<Self> {
        Self::values([(key, value)])
    }

    /// Remove keys; a removed key ignores its default
    pub fn remove(keys: impl IntoIterator<Item = K>) -> Result<Self> {
        Self::collect("remove", keys, bare_key, Op::Remove)
    }

    /// Remove a single key
    pub fn remove_key(key: K) -> Result<Self> {
        Self::remove([key])
    }

    /// Compose functional updates onto keys
    pub fn updates(updates: impl IntoIterator<Item = (K, Transform<V>)>) -> Result<Self> {
        Self::collect("update", updates, entry_key, Op::Update)
    }

    /// Compose a single functional update onto a key
    pub fn update<F>(key: K, transform: F) -> Result<Self>
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        let transform: Transform<V> = Arc::new(transform);
        Self::updates([(key, transform)])
    }

    /// Revert keys to whatever default is registered (or absence)
    pub fn reset(keys: impl IntoIterator<Item = K>) -> Result<Self> {
        Self::collect("reset", keys, bare_key, Op::Reset)
    }

    /// Revert a single key
    pub fn reset_key(key: K) -> Result<Self> {
        Self::reset([key])
    }

    /// Revert every key to its default, keeping the defaults themselves
    pub fn reset_all() -> Self {
        Self::from_op(Op::ResetAll)
    }

    /// Wipe all state including defaults
    pub fn clear() -> Self {
        Self::from_op(Op::Clear)
    }

    /// A delta with no effect
    pub fn nop() -> Self {
        Self::from_op(Op::Nop)
    }
}

impl<K, V> MapDelta<K, V> {
    /// Kind of transition this delta describes
    pub fn kind(&self) -> DeltaKind {
        match &self.op {
            Op::Defaults(_) => DeltaKind::Defaults,
            Op::Values(_) => DeltaKind::Values,
            Op::Remove(_) => DeltaKind::Remove,
            Op::Update(_) => DeltaKind::Update,
            Op::Reset(_) => DeltaKind::Reset,
            Op::ResetAll => DeltaKind::ResetAll,
            Op::Clear => DeltaKind::Clear,
            Op::Nop => DeltaKind::Nop,
        }
    }

    /// Number of keys this delta touches (0 for the whole-state kinds)
    pub fn len(&self) -> usize {
        match &self.op {
            Op::Defaults(e) | Op::Values(e) => e.len(),
            Op::Remove(k) | Op::Reset(k) => k.len(),
            Op::Update(u) => u.len(),
            Op::ResetAll | Op::Clear | Op::Nop => 0,
        }
    }

    /// Whether this delta touches no individual key
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether applying this delta has no effect
    pub fn is_nop(&self) -> bool {
        matches!(self.op, Op::Nop)
    }

    /// Apply this delta to a kernel
    pub fn apply_to<Kn>(&self, kernel: &mut Kn)
    where
        Kn: MapKernel<Key = K, Value = V>,
    {
        match &self.op {
            Op::Defaults(entries) => kernel.defaults(entries),
            Op::Values(entries) => kernel.values(entries),
            Op::Remove(keys) => kernel.remove(keys),
            Op::Update(updates) => kernel.update(updates),
            Op::Reset(keys) => kernel.reset(keys),
            Op::ResetAll => kernel.reset_all(),
            Op::Clear => kernel.clear(),
            Op::Nop => {}
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for MapDelta<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("MapDelta");
        out.field("kind", &self.kind());
        match &self.op {
            Op::Defaults(e) | Op::Values(e) => {
                out.field("keys", &e.iter().map(|(k, _)| k).collect::<Vec<_>>());
            }
            Op::Update(u) => {
                out.field("keys", &u.iter().map(|(k, _)| k).collect::<Vec<_>>());
            }
            Op::Remove(k) | Op::Reset(k) => {
                out.field("keys", k);
            }
            Op::ResetAll | Op::Clear | Op::Nop => {}
        }
        out.finish()
    }
}
