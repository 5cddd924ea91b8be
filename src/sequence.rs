//! Functional operations over ordered sequences.
//!
//! [`SequenceOps`] is implemented for `Vec<T>` and `VecDeque<T>`. Every
//! operation visits elements in index order, borrows the receiver, and
//! returns a freshly allocated result.
//!
//! # Examples
//!
//! ```rust
//! use fnops::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! let evens = numbers.filter(|n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let sum = numbers.reduce(0, |accumulator, n| accumulator + n);
//! assert_eq!(sum, 15);
//!
//! let halves = numbers.map(|n| (n % 2 == 0).then(|| n / 2));
//! assert_eq!(halves[0], Slot::Placeholder);
//! assert_eq!(halves[1], Slot::Value(1));
//!
//! // The receiver is never modified
//! assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! `filter` copies the surviving elements, so it needs `T: Clone`:
//!
//! ```compile_fail
//! use fnops::SequenceOps;
//!
//! struct Ticket;
//!
//! let tickets = vec![Ticket, Ticket];
//! let _kept = tickets.filter(|_| true);
//! ```
//!
//! `map_values` belongs to mappings only:
//!
//! ```compile_fail
//! use fnops::prelude::*;
//!
//! let numbers = vec![1, 2, 3];
//! let _mapped = numbers.map_values(|n| Some(*n));
//! ```

use std::collections::VecDeque;

use crate::flatten::{Flatten, Splice};
use crate::slot::Slot;

/// Eager functional operations over an ordered, duplicate-permitting sequence.
///
/// Callbacks are invoked synchronously, in index order, and never stored.
/// A panicking callback unwinds through the operation; the `try_*` variants
/// return the callback's first `Err` as is and stop iterating.
pub trait SequenceOps<T> {
    /// Returns a sequence of the elements satisfying `predicate`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::SequenceOps;
    ///
    /// let words = vec!["apple", "kiwi", "banana"];
    /// assert_eq!(words.filter(|word| word.len() > 4), vec!["apple", "banana"]);
    /// ```
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
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::SequenceOps;
    ///
    /// let inputs = vec!["1", "x", "3"];
    /// let result = inputs.try_filter(|input| input.parse::<i32>().map(|n| n > 1));
    /// assert!(result.is_err());
    /// ```
    fn try_filter<P, E>(&self, predicate: P) -> Result<Self, E>
    where
        Self: Sized,
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>;

    /// Returns the first element satisfying `predicate`, or `None`.
    ///
    /// `predicate` is not called again after it first returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::SequenceOps;
    ///
    /// let values = vec![1, 4, 6];
    /// assert_eq!(values.first(|n| n % 2 == 0), Some(&4));
    /// assert_eq!(values.first(|n| *n > 10), None);
    /// ```
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

    /// Maps every element, keeping a [`Slot::Placeholder`] wherever `mapper`
    /// returns `None`. The result has exactly as many entries as the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::{SequenceOps, Slot};
    ///
    /// let inputs = vec!["1", "two", "3"];
    /// let parsed = inputs.map(|input| input.parse::<i32>().ok());
    /// assert_eq!(parsed, vec![Slot::Value(1), Slot::Placeholder, Slot::Value(3)]);
    /// ```
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
    /// `Nothing` adds nothing, `Single` adds one value and `Splice` adds the
    /// container's elements, one level deep.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::{Flatten, SequenceOps};
    ///
    /// let counts = vec![0, 1, 2];
    /// let repeated: Vec<i32> = counts.flat_map(|count| match *count {
    ///     0 => Flatten::Nothing,
    ///     1 => Flatten::Single(1),
    ///     n => Flatten::Splice(vec![n; n as usize]),
    /// });
    /// assert_eq!(repeated, vec![1, 2, 2]);
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

    /// Calls `procedure` once per element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::SequenceOps;
    ///
    /// let mut total = 0;
    /// vec![1, 2, 3].for_each(|n| total += n);
    /// assert_eq!(total, 6);
    /// ```
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

    /// Left-folds the elements into `initial`.
    ///
    /// An empty sequence returns `initial` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::SequenceOps;
    ///
    /// let letters = vec!["a", "b", "c"];
    /// let joined = letters.reduce(String::from(">"), |accumulator, letter| accumulator + *letter);
    /// assert_eq!(joined, ">abc");
    ///
    /// let empty: Vec<i32> = Vec::new();
    /// assert_eq!(empty.reduce(None, |_, n| Some(*n)), None);
    /// ```
    fn reduce<A, F>(&self, initial: A, combiner: F) -> A
    where
        F: FnMut(A, &T) -> A;

    /// Fallible [`reduce`](Self::reduce).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `combiner`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::SequenceOps;
    ///
    /// let values = vec![200u8, 100];
    /// let sum = values.try_reduce(0u8, |accumulator, n| accumulator.checked_add(*n).ok_or("overflow"));
    /// assert_eq!(sum, Err("overflow"));
    /// ```
    fn try_reduce<A, F, E>(&self, initial: A, combiner: F) -> Result<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>;

    /// Pairs elements positionally with `other`, stopping at the shorter side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::SequenceOps;
    ///
    /// let numbers = vec![1, 2, 3];
    /// assert_eq!(numbers.zip(["a", "b"]), vec![(&1, "a"), (&2, "b")]);
    /// ```
    fn zip<I>(&self, other: I) -> Vec<(&T, I::Item)>
    where
        I: IntoIterator;
}

impl_element_ops!(impl<T> SequenceOps<T> for Vec<T>);
impl_element_ops!(impl<T> SequenceOps<T> for VecDeque<T>);
