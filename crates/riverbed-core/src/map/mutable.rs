use std::collections::HashMap;
use std::fmt;

use crate::builder::{MutableBuilder, MutableBuilderCore};
use crate::delta::{MapDelta, Transform};
use crate::kernel::{EnumMap, EnumMapKernel, HashMapKernel, MapKernel};
use crate::types::Result;

type Key<Kn> = <Kn as MapKernel>::Key;
type Value<Kn> = <Kn as MapKernel>::Value;

/// Mutable map builder over any kernel.
///
/// Each operation validates its keys, then posts one delta to the owned
/// kernel. A call that fails validation changes nothing. Operations return
/// `&Self` so calls chain:
///
/// ```
/// use riverbed_core::map::HashMapBuilder;
///
/// let b = HashMapBuilder::<&str, u32>::create();
/// b.default_entry("port", 80)?.value("port", 8080)?.value("workers", 4)?;
/// assert_eq!(b.merge()["port"], 8080);
/// # Ok::<(), riverbed_core::BuilderError>(())
/// ```
pub struct MutableMapBuilder<Kn: MapKernel, P> {
    core: MutableBuilderCore<Kn, MapDelta<Key<Kn>, Value<Kn>>, P>,
}

/// Mutable builder over unrestricted keys
pub type HashMapBuilder<K, V, P = HashMap<K, V>> = MutableMapBuilder<HashMapKernel<K, V>, P>;

/// Mutable builder over an enumerated key domain
pub type EnumMapBuilder<K, V, P = EnumMap<K, V>> = MutableMapBuilder<EnumMapKernel<K, V>, P>;

impl<Kn, P> MutableMapBuilder<Kn, P>
where
    Kn: MapKernel + Default + 'static,
    P: 'static,
{
    /// Create a builder whose `merge` passes the merged map to `constructor`
    pub fn new<F>(constructor: F) -> Self
    where
        F: Fn(Kn::Output) -> P + Send + Sync + 'static,
    {
        Self {
            core: MutableBuilderCore::new(
                Kn::default,
                |kernel: &mut Kn, delta: &MapDelta<Key<Kn>, Value<Kn>>| delta.apply_to(kernel),
                move |kernel: &Kn| constructor(kernel.merge()),
            ),
        }
    }

    /// Post an already-built delta
    pub fn post(&self, delta: MapDelta<Key<Kn>, Value<Kn>>) -> &Self {
        self.core.apply(delta);
        self
    }

    /// Register defaults
    pub fn defaults(&self, entries: impl IntoIterator<Item = (Key<Kn>, Value<Kn>)>) -> Result<&Self> {
        Ok(self.post(MapDelta::defaults(entries)?))
    }

    /// Register one default
    pub fn default_entry(&self, key: Key<Kn>, value: Value<Kn>) -> Result<&Self> {
        Ok(self.post(MapDelta::default_entry(key, value)?))
    }

    /// Set values
    pub fn values(&self, entries: impl IntoIterator<Item = (Key<Kn>, Value<Kn>)>) -> Result<&Self> {
        Ok(self.post(MapDelta::values(entries)?))
    }

    /// Set one value
    pub fn value(&self, key: Key<Kn>, value: Value<Kn>) -> Result<&Self> {
        Ok(self.post(MapDelta::value(key, value)?))
    }

    /// Remove keys
    pub fn remove(&self, keys: impl IntoIterator<Item = Key<Kn>>) -> Result<&Self> {
        Ok(self.post(MapDelta::remove(keys)?))
    }

    /// Remove one key
    pub fn remove_key(&self, key: Key<Kn>) -> Result<&Self> {
        Ok(self.post(MapDelta::remove_key(key)?))
    }

    /// Compose updates onto keys
    pub fn updates(
        &self,
        updates: impl IntoIterator<Item = (Key<Kn>, Transform<Value<Kn>>)>,
    ) -> Result<&Self> {
        Ok(self.post(MapDelta::updates(updates)?))
    }

    /// Compose one update onto a key
    pub fn update<F>(&self, key: Key<Kn>, transform: F) -> Result<&Self>
    where
        F: Fn(Value<Kn>) -> Value<Kn> + Send + Sync + 'static,
    {
        Ok(self.post(MapDelta::update(key, transform)?))
    }

    /// Revert keys to their defaults
    pub fn reset(&self, keys: impl IntoIterator<Item = Key<Kn>>) -> Result<&Self> {
        Ok(self.post(MapDelta::reset(keys)?))
    }

    /// Revert one key to its default
    pub fn reset_key(&self, key: Key<Kn>) -> Result<&Self> {
        Ok(self.post(MapDelta::reset_key(key)?))
    }

    /// Clear all builder state except defaults
    pub fn reset_all(&self) -> &Self {
        self.post(MapDelta::reset_all())
    }

    /// Clear all builder state
    pub fn clear(&self) -> &Self {
        self.post(MapDelta::clear())
    }

    /// Merge the current state through the constructor
    pub fn merge(&self) -> P {
        self.core.merge()
    }

    /// Run `f` against the kernel under the builder lock
    pub fn inspect<X>(&self, f: impl FnOnce(&Kn) -> X) -> X {
        self.core.inspect(f)
    }
}

impl<Kn> MutableMapBuilder<Kn, Kn::Output>
where
    Kn: MapKernel + Default + 'static,
    Kn::Output: 'static,
{
    /// Create a builder that merges to the kernel's own map type
    pub fn create() -> Self {
        Self::new(|merged| merged)
    }
}

impl<Kn, P> MutableBuilder<P> for MutableMapBuilder<Kn, P>
where
    Kn: MapKernel + Default + 'static,
    P: 'static,
{
    fn merge(&self) -> P {
        MutableMapBuilder::merge(self)
    }
}

impl<Kn: MapKernel, P> fmt::Debug for MutableMapBuilder<Kn, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableMapBuilder").field("core", &self.core).finish()
    }
}
