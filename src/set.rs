//! Functional operations over unique-element sets.
//!
//! [`SetOps`] is implemented for `HashSet<T, S>`, `BTreeSet<T>` and, with the
//! `indexmap` feature, `IndexSet<T, S>`. `filter` keeps the receiver's type
//! and hasher; the other operations produce sequences, so `map` over a set
//! may hold equal values twice.
//!
//! `BTreeSet` and `IndexSet` have an inherent zero-argument `first()`, which
//! method-call syntax picks before this trait. Call the operation with trait
//! syntax on those types:
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use fnops::SetOps;
//!
//! let set = BTreeSet::from([1, 2, 3]);
//! assert_eq!(set.first(), Some(&1));
//! assert_eq!(SetOps::first(&set, |n| *n > 1), Some(&2));
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use fnops::prelude::*;
//!
//! let set: HashSet<i32> = (1..=4).collect();
//! let odd: HashSet<i32> = set.filter(|n| n % 2 == 1);
//! assert_eq!(odd, HashSet::from([1, 3]));
//!
//! let parities = set.map(|n| Some(n % 2));
//! assert_eq!(parities.len(), 4);
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::flatten::{Flatten, Splice};
use crate::slot::Slot;

/// Eager functional operations over a set.
///
/// Elements are visited in the set's own iteration order: ascending for
/// `BTreeSet`, insertion order for `IndexSet`, unspecified but stable for an
/// unchanged `HashSet`.
pub trait SetOps<T> {
    /// Returns a set of the elements satisfying `predicate`.
    fn filter<P>(&self, predicate: P) -> Self
    where
        Self: Sized,
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Fallible [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_filter<P, E>(&self, predicate: P) -> Result<Self, E>
    where
        Self: Sized,
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>;

    /// Returns the first element, in iteration order, satisfying `predicate`.
    fn first<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Fallible [`first`](Self::first).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_first<P, E>(&self, predicate: P) -> Result<Option<&T>, E>
    where
        P: FnMut(&T) -> Result<bool, E>;

    /// Maps every element into a sequence of the set's length, with a
    /// placeholder wherever `mapper` returns `None`.
    fn map<B, F>(&self, mapper: F) -> Vec<Slot<B>>
    where
        F: FnMut(&T) -> Option<B>;

    /// Fallible [`map`](Self::map).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    fn try_map<B, F, E>(&self, mapper: F) -> Result<Vec<Slot<B>>, E>
    where
        F: FnMut(&T) -> Result<Option<B>, E>;

    /// Maps every element to a [`Flatten`] and concatenates the contributions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use fnops::{Flatten, SetOps};
    ///
    /// let set = BTreeSet::from([1, 10]);
    /// let spread: Vec<i32> = set.flat_map(|n| Flatten::Splice(BTreeSet::from([*n, n + 1])));
    /// assert_eq!(spread, vec![1, 2, 10, 11]);
    /// ```
    fn flat_map<B, C, F>(&self, mapper: F) -> Vec<B>
    where
        C: Splice<B>,
        F: FnMut(&T) -> Flatten<B, C>;

    /// Fallible [`flat_map`](Self::flat_map).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    fn try_flat_map<B, C, F, E>(&self, mapper: F) -> Result<Vec<B>, E>
    where
        C: Splice<B>,
        F: FnMut(&T) -> Result<Flatten<B, C>, E>;

    /// Calls `procedure` once per element.
    fn for_each<F>(&self, procedure: F)
    where
        F: FnMut(&T);

    /// Fallible [`for_each`](Self::for_each).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `procedure`.
    fn try_for_each<F, E>(&self, procedure: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>;

    /// Left-folds the elements into `initial` in iteration order.
    fn reduce<A, F>(&self, initial: A, combiner: F) -> A
    where
        F: FnMut(A, &T) -> A;

    /// Fallible [`reduce`](Self::reduce).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `combiner`.
    fn try_reduce<A, F, E>(&self, initial: A, combiner: F) -> Result<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>;

    /// Pairs elements positionally with `other`, stopping at the shorter side.
    fn zip<I>(&self, other: I) -> Vec<(&T, I::Item)>
    where
        I: IntoIterator;
}

impl_element_ops!(impl<T, S> SetOps<T> for HashSet<T, S> where T: Eq + Hash, S: BuildHasher + Clone);
impl_element_ops!(impl<T> SetOps<T> for BTreeSet<T> where T: Ord);

#[cfg(feature = "indexmap")]
impl_element_ops!(impl<T, S> SetOps<T> for indexmap::IndexSet<T, S> where T: Eq + Hash, S: BuildHasher + Clone);
