use std::collections::HashMap;
use std::fmt;

use crate::builder::{ImmutableBuilder, ImmutableBuilderCore};
use crate::delta::{MapDelta, Transform};
use crate::kernel::{EnumMap, EnumMapKernel, HashMapKernel, MapKernel};
use crate::types::Result;

type Key<Kn> = <Kn as MapKernel>::Key;
type Value<Kn> = <Kn as MapKernel>::Value;

/// Immutable map builder over any kernel.
///
/// Every operation returns a new builder; the receiver keeps its own history.
///
/// ```
/// use riverbed_core::map::ImmutableHashMapBuilder;
///
/// let base = ImmutableHashMapBuilder::<&str, u32>::create().with_default("port", 80)?;
/// let custom = base.with_value("port", 8080)?;
/// assert_eq!(base.build()["port"], 80);
/// assert_eq!(custom.build()["port"], 8080);
/// # Ok::<(), riverbed_core::BuilderError>(())
/// ```
pub struct ImmutableMapBuilder<Kn: MapKernel, R, P> {
    core: ImmutableBuilderCore<Kn, MapDelta<Key<Kn>, Value<Kn>>, R, P>,
}

/// Immutable builder over unrestricted keys
pub type ImmutableHashMapBuilder<K, V, R = HashMap<K, V>, P = HashMap<K, V>> =
    ImmutableMapBuilder<HashMapKernel<K, V>, R, P>;

/// Immutable builder over an enumerated key domain
pub type ImmutableEnumMapBuilder<K, V, R = EnumMap<K, V>, P = EnumMap<K, V>> =
    ImmutableMapBuilder<EnumMapKernel<K, V>, R, P>;

impl<Kn, R, P> ImmutableMapBuilder<Kn, R, P>
where
    Kn: MapKernel + Default + 'static,
    R: 'static,
    P: 'static,
{
    /// Create a root builder
    ///
    /// # Arguments
    ///
    /// * `root_constructor` - maps the merged map to the root type (`build`)
    /// * `parent_constructor` - maps the merged map to the parent type (`done`)
    pub fn new<RF, PF>(root_constructor: RF, parent_constructor: PF) -> Self
    where
        RF: Fn(Kn::Output) -> R + Send + Sync + 'static,
        PF: Fn(Kn::Output) -> P + Send + Sync + 'static,
    {
        Self {
            core: ImmutableBuilderCore::new(
                Kn::default,
                |kernel: &mut Kn, delta: &MapDelta<Key<Kn>, Value<Kn>>| delta.apply_to(kernel),
                move |kernel: Kn| parent_constructor(kernel.merge()),
                move |kernel: Kn| root_constructor(kernel.merge()),
            ),
        }
    }

    /// Derive a builder with one more delta
    pub fn post(&self, delta: MapDelta<Key<Kn>, Value<Kn>>) -> Self {
        Self { core: self.core.with(delta) }
    }

    /// Derive a builder with defaults registered
    pub fn with_defaults(&self, entries: impl IntoIterator<Item = (Key<Kn>, Value<Kn>)>) -> Result<Self> {
        Ok(self.post(MapDelta::defaults(entries)?))
    }

    /// Derive a builder with one default registered
    pub fn with_default(&self, key: Key<Kn>, value: Value<Kn>) -> Result<Self> {
        Ok(self.post(MapDelta::default_entry(key, value)?))
    }

    /// Derive a builder with values set
    pub fn with_values(&self, entries: impl IntoIterator<Item = (Key<Kn>, Value<Kn>)>) -> Result<Self> {
        Ok(self.post(MapDelta::values(entries)?))
    }

    /// Derive a builder with one value set
    pub fn with_value(&self, key: Key<Kn>, value: Value<Kn>) -> Result<Self> {
        Ok(self.post(MapDelta::value(key, value)?))
    }

    /// Derive a builder with keys removed
    pub fn without(&self, keys: impl IntoIterator<Item = Key<Kn>>) -> Result<Self> {
        Ok(self.post(MapDelta::remove(keys)?))
    }

    /// Derive a builder with one key removed
    pub fn without_key(&self, key: Key<Kn>) -> Result<Self> {
        Ok(self.post(MapDelta::remove_key(key)?))
    }

    /// Derive a builder with updates composed onto keys
    pub fn with_updates(
        &self,
        updates: impl IntoIterator<Item = (Key<Kn>, Transform<Value<Kn>>)>,
    ) -> Result<Self> {
        Ok(self.post(MapDelta::updates(updates)?))
    }

    /// Derive a builder with one update composed onto a key
    pub fn with_update<F>(&self, key: Key<Kn>, transform: F) -> Result<Self>
    where
        F: Fn(Value<Kn>) -> Value<Kn> + Send + Sync + 'static,
    {
        Ok(self.post(MapDelta::update(key, transform)?))
    }

    /// Derive a builder with keys reverted to their defaults
    pub fn with_reset(&self, keys: impl IntoIterator<Item = Key<Kn>>) -> Result<Self> {
        Ok(self.post(MapDelta::reset(keys)?))
    }

    /// Derive a builder with one key reverted to its default
    pub fn with_reset_key(&self, key: Key<Kn>) -> Result<Self> {
        Ok(self.post(MapDelta::reset_key(key)?))
    }

    /// Derive a builder with every key reverted to its default
    pub fn with_reset_all(&self) -> Self {
        self.post(MapDelta::reset_all())
    }

    /// Derive a builder with all state cleared, defaults included
    pub fn cleared(&self) -> Self {
        self.post(MapDelta::clear())
    }

    /// Construct the root type
    pub fn build(&self) -> R {
        self.core.build()
    }

    /// Construct the parent type
    pub fn done(&self) -> P {
        self.core.done()
    }

    /// Number of deltas in this builder's history
    pub fn depth(&self) -> usize {
        self.core.depth()
    }
}

impl<Kn> ImmutableMapBuilder<Kn, Kn::Output, Kn::Output>
where
    Kn: MapKernel + Default + 'static,
    Kn::Output: 'static,
{
    /// Create a root builder whose `build` and `done` both return the map
    pub fn create() -> Self {
        Self::new(|merged| merged, |merged| merged)
    }
}

impl<Kn: MapKernel, R, P> Clone for ImmutableMapBuilder<Kn, R, P> {
    fn clone(&self) -> Self {
        Self { core: self.core.clone() }
    }
}

impl<Kn, R, P> ImmutableBuilder<R, P> for ImmutableMapBuilder<Kn, R, P>
where
    Kn: MapKernel + Default + 'static,
    R: 'static,
    P: 'static,
{
    fn build(&self) -> R {
        ImmutableMapBuilder::build(self)
    }

    fn done(&self) -> P {
        ImmutableMapBuilder::done(self)
    }
}

impl<Kn: MapKernel, R, P> fmt::Debug for ImmutableMapBuilder<Kn, R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImmutableMapBuilder").field("core", &self.core).finish()
    }
}
