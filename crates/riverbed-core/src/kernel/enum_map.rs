use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::types::EnumKey;

/// Map over an enumerated key domain, one slot per ordinal.
///
/// Iteration is in ordinal order.
#[derive(Clone, PartialEq, Eq)]
pub struct EnumMap<K: EnumKey, V> {
    slots: Vec<Option<V>>,
    len: usize,
    _marker: PhantomData<K>,
}

impl<K: EnumKey, V> EnumMap<K, V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(K::COUNT).collect(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Insert a value, returning the previous one
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.slots[key.ordinal()].replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Remove a value
    pub fn remove(&mut self, key: K) -> Option<V> {
        let previous = self.slots[key.ordinal()].take();
        if previous.is_some() {
            self.len -= 1;
        }
        previous
    }

    /// Value stored for `key`
    pub fn get(&self, key: K) -> Option<&V> {
        self.slots[key.ordinal()].as_ref()
    }

    /// Whether a value is stored for `key`
    pub fn contains_key(&self, key: K) -> bool {
        self.slots[key.ordinal()].is_some()
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every value
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Entries in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(ordinal, slot)| Some((K::from_ordinal(ordinal)?, slot.as_ref()?)))
    }

    /// Keys in ordinal order
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Values in key ordinal order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Convert into a standard hash map
    pub fn into_hash_map(self) -> HashMap<K, V> {
        self.slots
            .into_iter()
            .enumerate()
            .filter_map(|(ordinal, slot)| Some((K::from_ordinal(ordinal)?, slot?)))
            .collect()
    }
}

impl<K: EnumKey, V> Default for EnumMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EnumKey, V: fmt::Debug> fmt::Debug for EnumMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: EnumKey, V> FromIterator<(K, V)> for EnumMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: EnumKey, V> From<EnumMap<K, V>> for HashMap<K, V> {
    fn from(map: EnumMap<K, V>) -> Self {
        map.into_hash_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::enum_key! {
        enum Slot { First, Second, Third }
    }

    #[test]
    fn insert_get_remove_track_len() {
        let mut map = EnumMap::new();
        assert!(map.is_empty());
        assert_eq!(map.insert(Slot::Third, "c"), None);
        assert_eq!(map.insert(Slot::First, "a"), None);
        assert_eq!(map.insert(Slot::First, "A"), Some("a"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(Slot::First), Some(&"A"));
        assert!(!map.contains_key(Slot::Second));

        assert_eq!(map.remove(Slot::Third), Some("c"));
        assert_eq!(map.remove(Slot::Third), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iteration_follows_ordinals() {
        let map: EnumMap<Slot, u8> = [(Slot::Third, 3), (Slot::First, 1)].into_iter().collect();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![Slot::First, Slot::Third]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(format!("{:?}", map), "{First: 1, Third: 3}");

        let hashed: HashMap<Slot, u8> = map.into();
        assert_eq!(hashed.len(), 2);
        assert_eq!(hashed[&Slot::Third], 3);
    }
}
