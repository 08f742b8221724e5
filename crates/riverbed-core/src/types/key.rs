//! Key domains accepted by builders
//!
//! Two domains exist: unrestricted keys ([`BuilderKey`]) stored in hash maps,
//! and closed enumerations ([`EnumKey`]) stored in ordinal-indexed slots. An
//! enumerated key is also a `BuilderKey`, so every delta validates keys the
//! same way regardless of which kernel eventually receives it.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Capability required of every key posted to a builder.
///
/// Rust has no null reference, so a key type opts into the notion of an
/// absent key through [`BuilderKey::is_absent`]. `Option<T>` reports `None` as
/// absent; plain values are always present.
pub trait BuilderKey: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static {
    /// Whether this key stands for "no key" and must be rejected
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_present_key {
    ($($t:ty),* $(,)?) => {
        $(impl BuilderKey for $t {})*
    };
}

impl_present_key!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    char, bool, String, &'static str, Arc<str>, Box<str>,
);

impl<T: BuilderKey> BuilderKey for Option<T> {
    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, BuilderKey::is_absent)
    }
}

impl<A: BuilderKey, B: BuilderKey> BuilderKey for (A, B) {
    fn is_absent(&self) -> bool {
        self.0.is_absent() || self.1.is_absent()
    }
}

/// A closed enumeration usable as a key in bitset-backed kernels.
///
/// Ordinals must be dense: every value in `0..COUNT` maps to exactly one key.
/// Use [`enum_key!`](crate::enum_key) to declare one.
pub trait EnumKey: BuilderKey + Copy {
    /// Number of keys in the enumeration
    const COUNT: usize;

    /// Dense index of this key in `0..COUNT`
    fn ordinal(self) -> usize;

    /// Inverse of [`EnumKey::ordinal`]
    fn from_ordinal(ordinal: usize) -> Option<Self>;
}

/// Every key of an enumeration in ordinal order
pub fn all_keys<K: EnumKey>() -> impl Iterator<Item = K> {
    (0..K::COUNT).filter_map(K::from_ordinal)
}

/// Declare a fieldless enum and implement [`EnumKey`] for it.
///
/// The macro derives `Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd,
/// Ord`; do not derive them again.
///
/// ```
/// riverbed_core::enum_key! {
///     pub enum Field { Name, Email, Phone }
/// }
///
/// use riverbed_core::types::EnumKey;
/// assert_eq!(Field::COUNT, 3);
/// assert_eq!(Field::from_ordinal(1), Some(Field::Email));
/// ```
#[macro_export]
macro_rules! enum_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::types::BuilderKey for $name {}

        impl $crate::types::EnumKey for $name {
            const COUNT: usize = [$(stringify!($variant)),+].len();

            fn ordinal(self) -> usize {
                self as usize
            }

            fn from_ordinal(ordinal: usize) -> Option<Self> {
                const ALL: &[$name] = &[$($name::$variant),+];
                ALL.get(ordinal).copied()
            }
        }
    };
}
