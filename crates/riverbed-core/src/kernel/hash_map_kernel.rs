//! Kernel for unrestricted keys, backed by hash maps

use std::collections::HashMap;
use std::fmt;

use ahash::AHashMap;

use super::overrides::Override;
use super::MapKernel;
use crate::delta::Transform;
use crate::log_trace;
use crate::types::BuilderKey;

/// Map kernel for any [`BuilderKey`].
#[derive(Clone)]
pub struct HashMapKernel<K, V> {
    /// Defaults accumulator, last write wins per key
    defaults: AHashMap<K, V>,

    /// Keys whose default has been overridden by a value, removal or update
    overrides: AHashMap<K, Override<V>>,
}

impl<K: BuilderKey, V: Clone + Send + Sync + 'static> HashMapKernel<K, V> {
    /// Create an empty kernel
    pub fn new() -> Self {
        Self {
            defaults: AHashMap::new(),
            overrides: AHashMap::new(),
        }
    }
}

impl<K: BuilderKey, V: Clone + Send + Sync + 'static> Default for HashMapKernel<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: BuilderKey, V: Clone + Send + Sync + 'static> MapKernel for HashMapKernel<K, V> {
    type Key = K;
    type Value = V;
    type Output = HashMap<K, V>;

    fn defaults(&mut self, entries: &[(K, V)]) {
        for (key, value) in entries {
            self.defaults.insert(key.clone(), value.clone());
        }
    }

    fn values(&mut self, entries: &[(K, V)]) {
        for (key, value) in entries {
            self.overrides.insert(key.clone(), Override::value(value.clone()));
        }
    }

    fn remove(&mut self, keys: &[K]) {
        for key in keys {
            self.overrides.insert(key.clone(), Override::removed());
        }
    }

    fn update(&mut self, updates: &[(K, Transform<V>)]) {
        for (key, transform) in updates {
            self.overrides
                .entry(key.clone())
                .or_insert_with(Override::inherit)
                .push(transform.clone());
        }
    }

    fn reset(&mut self, keys: &[K]) {
        for key in keys {
            self.overrides.remove(key);
        }
    }

    fn reset_all(&mut self) {
        self.overrides.clear();
    }

    fn clear(&mut self) {
        self.defaults.clear();
        self.overrides.clear();
    }

    fn merge(&self) -> HashMap<K, V> {
        log_trace!(
            defaults = self.defaults.len(),
            overrides = self.overrides.len(),
            "hash kernel merge"
        );

        let mut merged = HashMap::with_capacity(self.defaults.len() + self.overrides.len());

        // Defaults that nothing has overridden
        for (key, value) in &self.defaults {
            if !self.overrides.contains_key(key) {
                merged.insert(key.clone(), value.clone());
            }
        }

        // Pending writes, resolved against the current defaults
        for (key, pending) in &self.overrides {
            if let Some(value) = pending.resolve(self.defaults.get(key)) {
                merged.insert(key.clone(), value);
            }
        }

        merged
    }

    fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.overrides.is_empty()
    }
}

impl<K: fmt::Debug, V> fmt::Debug for HashMapKernel<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMapKernel")
            .field("defaults", &self.defaults.keys().collect::<Vec<_>>())
            .field("overridden", &self.overrides.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K: BuilderKey, V: Clone + Send + Sync + 'static> HashMapKernel<K, V> {
    /// Number of keys with a pending value, removal or update
    pub fn overridden(&self) -> usize {
        self.overrides.len()
    }

    /// Whether the default for `key` is currently shadowed
    pub fn is_overridden(&self, key: &K) -> bool {
        self.overrides.get(key).map_or(false, |o| !o.inherits())
    }
}
