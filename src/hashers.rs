//! Type aliases for mappings and sets built on fast hashers.
//!
//! Every operation is generic over the hasher `S`, so these aliases are a
//! convenience only. `filter` and `map_values` carry the receiver's hasher
//! into their results.
//!
//! - `fxhash` feature: [`FxHashMap`], [`FxHashSet`] and, with `indexmap`,
//!   [`FxIndexMap`], [`FxIndexSet`] using `rustc_hash::FxBuildHasher`
//! - `ahash` feature: [`AHashedMap`], [`AHashedSet`] and, with `indexmap`,
//!   [`AHashedIndexMap`], [`AHashedIndexSet`] using `ahash::RandomState`
//!
//! `FxBuildHasher` is deterministic across runs, so `FxHashMap` iteration
//! order is reproducible for the same insertions.

#[cfg(feature = "fxhash")]
pub use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

/// Insertion-ordered map hashed with `FxBuildHasher`.
#[cfg(all(feature = "fxhash", feature = "indexmap"))]
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// Insertion-ordered set hashed with `FxBuildHasher`.
#[cfg(all(feature = "fxhash", feature = "indexmap"))]
pub type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;

/// `std` map hashed with `ahash::RandomState`.
#[cfg(feature = "ahash")]
pub type AHashedMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

/// `std` set hashed with `ahash::RandomState`.
#[cfg(feature = "ahash")]
pub type AHashedSet<T> = std::collections::HashSet<T, ahash::RandomState>;

/// Insertion-ordered map hashed with `ahash::RandomState`.
#[cfg(all(feature = "ahash", feature = "indexmap"))]
pub type AHashedIndexMap<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;

/// Insertion-ordered set hashed with `ahash::RandomState`.
#[cfg(all(feature = "ahash", feature = "indexmap"))]
pub type AHashedIndexSet<T> = indexmap::IndexSet<T, ahash::RandomState>;
