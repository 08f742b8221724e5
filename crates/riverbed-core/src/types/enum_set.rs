//! Bitset over an enumerated key domain

use std::fmt;
use std::marker::PhantomData;

use super::key::EnumKey;

const WORD_BITS: usize = 64;

/// Set of enumerated keys packed one bit per ordinal.
#[derive(Clone, PartialEq, Eq)]
pub struct EnumKeySet<K: EnumKey> {
    words: Vec<u64>,
    _marker: PhantomData<K>,
}

impl<K: EnumKey> EnumKeySet<K> {
    /// Create an empty set sized for `K::COUNT` keys
    pub fn new() -> Self {
        Self {
            words: vec![0; (K::COUNT + WORD_BITS - 1) / WORD_BITS],
            _marker: PhantomData,
        }
    }

    #[inline]
    fn locate(key: K) -> (usize, u64) {
        let ordinal = key.ordinal();
        (ordinal / WORD_BITS, 1u64 << (ordinal % WORD_BITS))
    }

    /// Add a key, returning true if it was not already present
    pub fn insert(&mut self, key: K) -> bool {
        let (word, mask) = Self::locate(key);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    /// Remove a key, returning true if it was present
    pub fn remove(&mut self, key: K) -> bool {
        let (word, mask) = Self::locate(key);
        let present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        present
    }

    /// Check membership
    pub fn contains(&self, key: K) -> bool {
        let (word, mask) = Self::locate(key);
        self.words[word] & mask != 0
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Number of keys in the set
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Keys in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        (0..K::COUNT)
            .filter(move |ordinal| self.words[ordinal / WORD_BITS] & (1u64 << (ordinal % WORD_BITS)) != 0)
            .filter_map(K::from_ordinal)
    }
}

impl<K: EnumKey> Default for EnumKeySet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EnumKey> fmt::Debug for EnumKeySet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: EnumKey> FromIterator<K> for EnumKeySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::enum_key! {
        enum Wide {
            K00, K01, K02, K03, K04, K05, K06, K07, K08, K09,
            K10, K11, K12, K13, K14, K15, K16, K17, K18, K19,
            K20, K21, K22, K23, K24, K25, K26, K27, K28, K29,
            K30, K31, K32, K33, K34, K35, K36, K37, K38, K39,
            K40, K41, K42, K43, K44, K45, K46, K47, K48, K49,
            K50, K51, K52, K53, K54, K55, K56, K57, K58, K59,
            K60, K61, K62, K63, K64, K65, K66,
        }
    }

    #[test]
    fn insert_remove_across_word_boundary() {
        let mut set = EnumKeySet::<Wide>::new();
        assert!(set.is_empty());
        assert!(set.insert(Wide::K63));
        assert!(set.insert(Wide::K64));
        assert!(!set.insert(Wide::K64));
        assert!(set.contains(Wide::K63));
        assert!(set.contains(Wide::K64));
        assert!(!set.contains(Wide::K65));
        assert_eq!(set.len(), 2);

        assert!(set.remove(Wide::K63));
        assert!(!set.remove(Wide::K63));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Wide::K64]);
    }

    #[test]
    fn clear_empties_every_word() {
        let mut set: EnumKeySet<Wide> = [Wide::K00, Wide::K40, Wide::K66].into_iter().collect();
        assert_eq!(set.len(), 3);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set, EnumKeySet::default());
    }

    proptest::proptest! {
        #[test]
        fn matches_a_btree_set_model(ops in proptest::collection::vec((proptest::bool::ANY, 0usize..67), 0..200)) {
            let mut set = EnumKeySet::<Wide>::new();
            let mut model = std::collections::BTreeSet::new();
            for (insert, ordinal) in ops {
                let key = Wide::from_ordinal(ordinal).unwrap();
                if insert {
                    proptest::prop_assert_eq!(set.insert(key), model.insert(ordinal));
                } else {
                    proptest::prop_assert_eq!(set.remove(key), model.remove(&ordinal));
                }
            }
            proptest::prop_assert_eq!(set.len(), model.len());
            let ordinals: Vec<usize> = set.iter().map(EnumKey::ordinal).collect();
            proptest::prop_assert_eq!(ordinals, model.into_iter().collect::<Vec<_>>());
        }
    }
}
