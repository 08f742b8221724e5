//! Kernel for enumerated keys, backed by ordinal-indexed slots and a bitset

use std::fmt;

use super::enum_map::EnumMap;
use super::overrides::Override;
use super::MapKernel;
use crate::delta::Transform;
use crate::log_trace;
use crate::types::{EnumKey, EnumKeySet};

/// Map kernel for an [`EnumKey`] domain.
///
/// Semantically identical to [`HashMapKernel`](super::HashMapKernel); keys
/// index fixed slots instead of being hashed, and the set of overridden keys
/// is a bitset.
#[derive(Clone)]
pub struct EnumMapKernel<K: EnumKey, V> {
    /// Defaults accumulator, one slot per key
    defaults: Vec<Option<V>>,

    /// Pending writes, one slot per key
    overrides: Vec<Option<Override<V>>>,

    /// Keys with an occupied override slot
    seen: EnumKeySet<K>,
}

impl<K: EnumKey, V: Clone + Send + Sync + 'static> EnumMapKernel<K, V> {
    /// Create an empty kernel sized for `K::COUNT` keys
    pub fn new() -> Self {
        Self {
            defaults: std::iter::repeat_with(|| None).take(K::COUNT).collect(),
            overrides: std::iter::repeat_with(|| None).take(K::COUNT).collect(),
            seen: EnumKeySet::new(),
        }
    }

    fn set_override(&mut self, key: K, pending: Override<V>) {
        self.overrides[key.ordinal()] = Some(pending);
        self.seen.insert(key);
    }

    /// Keys with a pending value, removal or update
    pub fn overridden(&self) -> &EnumKeySet<K> {
        &self.seen
    }
}

impl<K: EnumKey, V: Clone + Send + Sync + 'static> Default for EnumMapKernel<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EnumKey, V: Clone + Send + Sync + 'static> MapKernel for EnumMapKernel<K, V> {
    type Key = K;
    type Value = V;
    type Output = EnumMap<K, V>;

    fn defaults(&mut self, entries: &[(K, V)]) {
        for (key, value) in entries {
            self.defaults[key.ordinal()] = Some(value.clone());
        }
    }

    fn values(&mut self, entries: &[(K, V)]) {
        for (key, value) in entries {
            self.set_override(*key, Override::value(value.clone()));
        }
    }

    fn remove(&mut self, keys: &[K]) {
        for key in keys {
            self.set_override(*key, Override::removed());
        }
    }

    fn update(&mut self, updates: &[(K, Transform<V>)]) {
        for (key, transform) in updates {
            self.overrides[key.ordinal()]
                .get_or_insert_with(Override::inherit)
                .push(transform.clone());
            self.seen.insert(*key);
        }
    }

    fn reset(&mut self, keys: &[K]) {
        for key in keys {
            self.overrides[key.ordinal()] = None;
            self.seen.remove(*key);
        }
    }

    fn reset_all(&mut self) {
        self.overrides.iter_mut().for_each(|slot| *slot = None);
        self.seen.clear();
    }

    fn clear(&mut self) {
        self.defaults.iter_mut().for_each(|slot| *slot = None);
        self.reset_all();
    }

    fn merge(&self) -> EnumMap<K, V> {
        log_trace!(overrides = self.seen.len(), "enum kernel merge");

        let mut merged = EnumMap::new();
        for (ordinal, default) in self.defaults.iter().enumerate() {
            let Some(key) = K::from_ordinal(ordinal) else {
                continue;
            };
            let value = match &self.overrides[ordinal] {
                Some(pending) => pending.resolve(default.as_ref()),
                None => default.clone(),
            };
            if let Some(value) = value {
                merged.insert(key, value);
            }
        }
        merged
    }

    fn is_empty(&self) -> bool {
        self.seen.is_empty() && self.defaults.iter().all(Option::is_none)
    }
}

impl<K: EnumKey, V> fmt::Debug for EnumMapKernel<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let defaults: Vec<K> = self
            .defaults
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .filter_map(|(ordinal, _)| K::from_ordinal(ordinal))
            .collect();
        f.debug_struct("EnumMapKernel")
            .field("defaults", &defaults)
            .field("overridden", &self.seen)
            .finish()
    }
}
