//! Flatten type - what a `flat_map` mapper contributes for one element.
//!
//! A `flat_map` mapper decides, per element, whether to contribute nothing,
//! a single value, or a whole container whose elements are spliced into the
//! output. Splicing is one level deep: a spliced `Vec<Vec<i32>>` contributes
//! its inner vectors, not their numbers.
//!
//! The [`Splice`] trait lists the containers that can be spliced. Mapping
//! shapes splice their **values**; keys are dropped.
//!
//! # Examples
//!
//! ```rust
//! use fnops::prelude::*;
//!
//! let words = vec!["ab", "", "c"];
//! let letters: Vec<char> = words.flat_map(|word| match word.len() {
//!     0 => Flatten::Nothing,
//!     1 => Flatten::Single(word.chars().next().unwrap()),
//!     _ => Flatten::Splice(word.chars().collect::<Vec<_>>()),
//! });
//! assert_eq!(letters, vec!['a', 'b', 'c']);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// The contribution of one element to a `flat_map` result.
///
/// `C` is the container type spliced by [`Flatten::Splice`]; it defaults to
/// `Vec<T>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flatten<T, C = Vec<T>> {
    /// Contribute nothing.
    Nothing,
    /// Append one value.
    Single(T),
    /// Append every element of the container, in its iteration order.
    Splice(C),
}

static_assertions::assert_impl_all!(Flatten<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Flatten<i32, std::rc::Rc<Vec<i32>>>: Send, Sync);

impl<T, C> Flatten<T, C> {
    /// Returns `true` if this contributes nothing.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

impl<T, C: Splice<T>> Flatten<T, C> {
    /// Appends this contribution to `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::Flatten;
    ///
    /// let mut target = vec![1];
    /// Flatten::<i32>::Nothing.append_to(&mut target);
    /// Flatten::<i32>::Single(2).append_to(&mut target);
    /// Flatten::Splice(vec![3, 4]).append_to(&mut target);
    /// assert_eq!(target, vec![1, 2, 3, 4]);
    /// ```
    pub fn append_to(self, target: &mut Vec<T>) {
        match self {
            Self::Nothing => {}
            Self::Single(value) => target.push(value),
            Self::Splice(container) => container.splice_into(target),
        }
    }
}

impl<T, C> From<Option<T>> for Flatten<T, C> {
    /// `Some(value)` becomes `Single(value)`, `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Single)
    }
}

/// A container whose elements can be spliced into a `flat_map` result.
pub trait Splice<T> {
    /// Moves the elements of `self` onto the end of `target`.
    fn splice_into(self, target: &mut Vec<T>);
}

impl<T> Splice<T> for Vec<T> {
    #[inline]
    fn splice_into(mut self, target: &mut Vec<T>) {
        target.append(&mut self);
    }
}

impl<T> Splice<T> for VecDeque<T> {
    #[inline]
    fn splice_into(self, target: &mut Vec<T>) {
        target.extend(self);
    }
}

impl<T, S> Splice<T> for HashSet<T, S> {
    #[inline]
    fn splice_into(self, target: &mut Vec<T>) {
        target.extend(self);
    }
}

impl<T> Splice<T> for BTreeSet<T> {
    #[inline]
    fn splice_into(self, target: &mut Vec<T>) {
        target.extend(self);
    }
}

impl<K, T, S> Splice<T> for HashMap<K, T, S> {
    #[inline]
    fn splice_into(self, target: &mut Vec<T>) {
        target.extend(self.into_values());
    }
}

impl<K, T> Splice<T> for BTreeMap<K, T> {
    #[inline]
    fn splice_into(self, target: &mut Vec<T>) {
        target.extend(self.into_values());
    }
}

#[cfg(feature = "indexmap")]
impl<T, S> Splice<T> for indexmap::IndexSet<T, S> {
    #[inline]
    fn splice_into(self, target: &mut Vec<T>) {
        target.extend(self);
    }
}

#[cfg(feature = "indexmap")]
impl<K, T, S> Splice<T> for indexmap::IndexMap<K, T, S> {
    #[inline]
    fn splice_into(self, target: &mut Vec<T>) {
        target.extend(self.into_values());
    }
}
