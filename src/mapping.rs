//! Functional operations over key-value mappings.
//!
//! [`MappingOps`] is implemented for `HashMap<K, V, S>`, `BTreeMap<K, V>` and,
//! with the `indexmap` feature, `IndexMap<K, V, S>`. Callbacks receive the key
//! and the value as two arguments. `first` reports the matching **key**.
//!
//! Pick `IndexMap` when the visiting order matters: it iterates in insertion
//! order. `BTreeMap` iterates in key order; `HashMap` in an unspecified order
//! that stays stable while the map is unchanged.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use fnops::prelude::*;
//!
//! let stock = BTreeMap::from([("apple", 3), ("kiwi", 0), ("pear", 7)]);
//!
//! let available = stock.filter(|_, count| *count > 0);
//! assert_eq!(available.len(), 2);
//!
//! let first_empty = stock.first(|_, count| *count == 0);
//! assert_eq!(first_empty, Some(&"kiwi"));
//!
//! let doubled = stock.map_values(|count| (*count > 0).then(|| count * 2));
//! assert_eq!(doubled["apple"], Slot::Value(6));
//! assert_eq!(doubled["kiwi"], Slot::Placeholder);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::flatten::{Flatten, Splice};
use crate::slot::Slot;

/// Eager functional operations over a mapping of unique keys to values.
pub trait MappingOps<K, V> {
    /// The same mapping shape holding `B` values, produced by
    /// [`map_values`](Self::map_values).
    type WithValues<B>;

    /// Returns a mapping of the pairs satisfying `predicate`.
    fn filter<P>(&self, predicate: P) -> Self
    where
        Self: Sized,
        K: Clone,
        V: Clone,
        P: FnMut(&K, &V) -> bool;

    /// Fallible [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_filter<P, E>(&self, predicate: P) -> Result<Self, E>
    where
        Self: Sized,
        K: Clone,
        V: Clone,
        P: FnMut(&K, &V) -> Result<bool, E>;

    /// Returns the key of the first pair satisfying `predicate`, or `None`.
    fn first<P>(&self, predicate: P) -> Option<&K>
    where
        P: FnMut(&K, &V) -> bool;

    /// Fallible [`first`](Self::first).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_first<P, E>(&self, predicate: P) -> Result<Option<&K>, E>
    where
        P: FnMut(&K, &V) -> Result<bool, E>;

    /// Maps every pair into a sequence of the mapping's length, with a
    /// placeholder wherever `mapper` returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fnops::{MappingOps, Slot};
    ///
    /// let ages = BTreeMap::from([("ada", 36), ("bob", 0)]);
    /// let labels = ages.map(|name, age| (*age > 0).then(|| format!("{name}:{age}")));
    /// assert_eq!(labels, vec![Slot::Value(String::from("ada:36")), Slot::Placeholder]);
    /// ```
    fn map<B, F>(&self, mapper: F) -> Vec<Slot<B>>
    where
        F: FnMut(&K, &V) -> Option<B>;

    /// Fallible [`map`](Self::map).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    fn try_map<B, F, E>(&self, mapper: F) -> Result<Vec<Slot<B>>, E>
    where
        F: FnMut(&K, &V) -> Result<Option<B>, E>;

    /// Returns a mapping with the same keys and every value replaced by
    /// `mapper(value)`, or by the placeholder where `mapper` returns `None`.
    fn map_values<B, F>(&self, mapper: F) -> Self::WithValues<Slot<B>>
    where
        K: Clone,
        F: FnMut(&V) -> Option<B>;

    /// Fallible [`map_values`](Self::map_values).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    fn try_map_values<B, F, E>(&self, mapper: F) -> Result<Self::WithValues<Slot<B>>, E>
    where
        K: Clone,
        F: FnMut(&V) -> Result<Option<B>, E>;

    /// Maps every pair to a [`Flatten`] and concatenates the contributions.
    /// Spliced mappings contribute their values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fnops::{Flatten, MappingOps};
    ///
    /// let groups = BTreeMap::from([("a", vec![1, 2]), ("b", vec![]), ("c", vec![3])]);
    /// let members: Vec<i32> = groups.flat_map(|_, members| Flatten::Splice(members.clone()));
    /// assert_eq!(members, vec![1, 2, 3]);
    /// ```
    fn flat_map<B, C, F>(&self, mapper: F) -> Vec<B>
    where
        C: Splice<B>,
        F: FnMut(&K, &V) -> Flatten<B, C>;

    /// Fallible [`flat_map`](Self::flat_map).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    fn try_flat_map<B, C, F, E>(&self, mapper: F) -> Result<Vec<B>, E>
    where
        C: Splice<B>,
        F: FnMut(&K, &V) -> Result<Flatten<B, C>, E>;

    /// Calls `procedure` once per pair.
    fn for_each<F>(&self, procedure: F)
    where
        F: FnMut(&K, &V);

    /// Fallible [`for_each`](Self::for_each).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `procedure`.
    fn try_for_each<F, E>(&self, procedure: F) -> Result<(), E>
    where
        F: FnMut(&K, &V) -> Result<(), E>;

    /// Left-folds the pairs into `initial` in iteration order.
    fn reduce<A, F>(&self, initial: A, combiner: F) -> A
    where
        F: FnMut(A, &K, &V) -> A;

    /// Fallible [`reduce`](Self::reduce).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `combiner`.
    fn try_reduce<A, F, E>(&self, initial: A, combiner: F) -> Result<A, E>
    where
        F: FnMut(A, &K, &V) -> Result<A, E>;

    /// Pairs each `(key, value)` positionally with `other`, stopping at the
    /// shorter side.
    fn zip<I>(&self, other: I) -> Vec<((&K, &V), I::Item)>
    where
        I: IntoIterator;
}

/// Implements `MappingOps` by delegating to `crate::algorithms`, splitting
/// each `(key, value)` element into two callback arguments.
macro_rules! impl_mapping_ops {
    (impl<$($generic:ident),*> MappingOps for $container:ty => $with_values:ty $(where $($bound:tt)+)?) => {
        impl<$($generic),*> MappingOps<K, V> for $container $(where $($bound)+)? {
            type WithValues<B> = $with_values;

            #[inline]
            fn filter<P>(&self, mut predicate: P) -> Self
            where
                K: Clone,
                V: Clone,
                P: FnMut(&K, &V) -> bool,
            {
                $crate::algorithms::filter(self, |(key, value): (&K, &V)| predicate(key, value))
            }

            #[inline]
            fn try_filter<P, E>(&self, mut predicate: P) -> Result<Self, E>
            where
                K: Clone,
                V: Clone,
                P: FnMut(&K, &V) -> Result<bool, E>,
            {
                $crate::algorithms::try_filter(self, |(key, value): (&K, &V)| predicate(key, value))
            }

            #[inline]
            fn first<P>(&self, mut predicate: P) -> Option<&K>
            where
                P: FnMut(&K, &V) -> bool,
            {
                $crate::algorithms::first(self, |(key, value): (&K, &V)| predicate(key, value))
                    .map(|(key, _)| key)
            }

            #[inline]
            fn try_first<P, E>(&self, mut predicate: P) -> Result<Option<&K>, E>
            where
                P: FnMut(&K, &V) -> Result<bool, E>,
            {
                let found = $crate::algorithms::try_first(self, |(key, value): (&K, &V)| {
                    predicate(key, value)
                })?;
                Ok(found.map(|(key, _)| key))
            }

            #[inline]
            fn map<B, F>(&self, mut mapper: F) -> Vec<Slot<B>>
            where
                F: FnMut(&K, &V) -> Option<B>,
            {
                $crate::algorithms::map(self, |(key, value): (&K, &V)| mapper(key, value))
            }

            #[inline]
            fn try_map<B, F, E>(&self, mut mapper: F) -> Result<Vec<Slot<B>>, E>
            where
                F: FnMut(&K, &V) -> Result<Option<B>, E>,
            {
                $crate::algorithms::try_map(self, |(key, value): (&K, &V)| mapper(key, value))
            }

            #[inline]
            fn map_values<B, F>(&self, mapper: F) -> Self::WithValues<Slot<B>>
            where
                K: Clone,
                F: FnMut(&V) -> Option<B>,
            {
                $crate::algorithms::map_values(self, mapper)
            }

            #[inline]
            fn try_map_values<B, F, E>(&self, mapper: F) -> Result<Self::WithValues<Slot<B>>, E>
            where
                K: Clone,
                F: FnMut(&V) -> Result<Option<B>, E>,
            {
                $crate::algorithms::try_map_values(self, mapper)
            }

            #[inline]
            fn flat_map<B, C, F>(&self, mut mapper: F) -> Vec<B>
            where
                C: Splice<B>,
                F: FnMut(&K, &V) -> Flatten<B, C>,
            {
                $crate::algorithms::flat_map(self, |(key, value): (&K, &V)| mapper(key, value))
            }

            #[inline]
            fn try_flat_map<B, C, F, E>(&self, mut mapper: F) -> Result<Vec<B>, E>
            where
                C: Splice<B>,
                F: FnMut(&K, &V) -> Result<Flatten<B, C>, E>,
            {
                $crate::algorithms::try_flat_map(self, |(key, value): (&K, &V)| mapper(key, value))
            }

            #[inline]
            fn for_each<F>(&self, mut procedure: F)
            where
                F: FnMut(&K, &V),
            {
                $crate::algorithms::for_each(self, |(key, value): (&K, &V)| procedure(key, value));
            }

            #[inline]
            fn try_for_each<F, E>(&self, mut procedure: F) -> Result<(), E>
            where
                F: FnMut(&K, &V) -> Result<(), E>,
            {
                $crate::algorithms::try_for_each(self, |(key, value): (&K, &V)| procedure(key, value))
            }

            #[inline]
            fn reduce<A, F>(&self, initial: A, mut combiner: F) -> A
            where
                F: FnMut(A, &K, &V) -> A,
            {
                $crate::algorithms::reduce(self, initial, |accumulator: A, (key, value): (&K, &V)| {
                    combiner(accumulator, key, value)
                })
            }

            #[inline]
            fn try_reduce<A, F, E>(&self, initial: A, mut combiner: F) -> Result<A, E>
            where
                F: FnMut(A, &K, &V) -> Result<A, E>,
            {
                $crate::algorithms::try_reduce(self, initial, |accumulator: A, (key, value): (&K, &V)| {
                    combiner(accumulator, key, value)
                })
            }

            #[inline]
            fn zip<I>(&self, other: I) -> Vec<((&K, &V), I::Item)>
            where
                I: IntoIterator,
            {
                $crate::algorithms::zip(self, other)
            }
        }
    };
}

impl_mapping_ops!(impl<K, V, S> MappingOps for HashMap<K, V, S> => HashMap<K, B, S> where K: Eq + Hash, S: BuildHasher + Clone);
impl_mapping_ops!(impl<K, V> MappingOps for BTreeMap<K, V> => BTreeMap<K, B> where K: Ord);

#[cfg(feature = "indexmap")]
impl_mapping_ops!(impl<K, V, S> MappingOps for indexmap::IndexMap<K, V, S> => indexmap::IndexMap<K, B, S> where K: Eq + Hash, S: BuildHasher + Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_first_returns_key() {
        let mapping = BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
        assert_eq!(mapping.first(|_, name| name.starts_with('t')), Some(&2));
    }

    #[rstest]
    fn test_filter_on_hash_map() {
        let mapping = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let odd = mapping.filter(|_, value| value % 2 == 1);
        assert_eq!(odd, HashMap::from([("a", 1), ("c", 3)]));
    }

    #[rstest]
    fn test_map_values_on_hash_map_keeps_keys() {
        let mapping = HashMap::from([("a", 1), ("b", 2)]);
        let mapped: HashMap<&str, Slot<i32>> = mapping.map_values(|value| Some(value * 100));
        assert_eq!(mapped, HashMap::from([("a", Slot::Value(100)), ("b", Slot::Value(200))]));
    }

    #[rstest]
    fn test_reduce_receives_key_and_value() {
        let mapping = BTreeMap::from([("x", 1), ("y", 2)]);
        let rendered = mapping.reduce(String::new(), |accumulator, key, value| {
            format!("{accumulator}{key}={value};")
        });
        assert_eq!(rendered, "x=1;y=2;");
    }

    #[rstest]
    fn test_zip_pairs_entries() {
        let mapping = BTreeMap::from([(1, 'a'), (2, 'b')]);
        assert_eq!(mapping.zip(vec![10]), vec![((&1, &'a'), 10)]);
    }

    #[rstest]
    fn test_try_first_error_passes_through() {
        let mapping = BTreeMap::from([(1, "1"), (2, "two")]);
        let result = mapping.try_first(|_, text| text.parse::<i32>().map(|n| n > 5));
        assert!(result.is_err());
    }

    #[cfg(feature = "indexmap")]
    #[rstest]
    fn test_index_map_first_with_trait_syntax() {
        let mapping: indexmap::IndexMap<&str, i32> = [("z", 1), ("a", 2)].into_iter().collect();
        assert_eq!(MappingOps::first(&mapping, |_, value| *value > 0), Some(&"z"));
    }
}
