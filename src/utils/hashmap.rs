//! A hash-map that behaves deterministically when the
//! `enhanced-determinism` feature is enabled.

/// Deterministic hash-map using [`indexmap::IndexMap`] and a platform-independent hasher.
#[cfg(feature = "enhanced-determinism")]
pub type FxHashMap32<K, V> =
    indexmap::IndexMap<K, V, core::hash::BuildHasherDefault<super::fx_hasher::FxHasher32>>;
#[cfg(feature = "enhanced-determinism")]
pub use {self::FxHashMap32 as HashMap, indexmap::map::Entry};

#[cfg(not(feature = "enhanced-determinism"))]
pub use hashbrown::hash_map::Entry;
/// Hash-map using [`hashbrown::HashMap`] with its default hasher.
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V, hashbrown::DefaultHashBuilder>;
