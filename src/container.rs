//! Container capabilities shared by every operation.
//!
//! The operations of [`SequenceOps`](crate::SequenceOps),
//! [`MappingOps`](crate::MappingOps) and [`SetOps`](crate::SetOps) are written
//! once, generically, against the small traits in this module:
//!
//! - [`Traverse`]: iterate elements by reference, in the container's order
//! - [`Rebuild`]: create an empty container of the same shape and insert into it
//! - [`CloneElements`]: turn a borrowed element back into an owned one
//! - [`RebuildValues`]: build the same mapping shape with another value type
//!
//! # Element Shape
//!
//! Rust cannot abstract over "`&T` for a set, `(&K, &V)` for a map" directly,
//! so [`Traverse::Element`] is a Generic Associated Type parameterized by the
//! borrow lifetime.
//!
//! # Iteration Order
//!
//! | Container              | Order                               |
//! |------------------------|-------------------------------------|
//! | `Vec`, `VecDeque`      | index order                         |
//! | `IndexMap`, `IndexSet` | insertion order                     |
//! | `BTreeMap`, `BTreeSet` | ascending key order                 |
//! | `HashMap`, `HashSet`   | unspecified, stable while unchanged |
//!
//! # Examples
//!
//! ```rust
//! use fnops::container::Traverse;
//!
//! let values = vec![3, 1, 2];
//! let seen: Vec<&i32> = values.elements().collect();
//! assert_eq!(seen, vec![&3, &1, &2]);
//! assert_eq!(values.element_count(), 3);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A container whose elements can be visited by reference.
pub trait Traverse {
    /// Shape name reported in trace events (`"sequence"`, `"mapping"`, `"set"`).
    const SHAPE: &'static str;

    /// A borrowed element: `&T`, or `(&K, &V)` for mappings.
    type Element<'a>: Copy
    where
        Self: 'a;

    /// Iterator over borrowed elements.
    type Elements<'a>: Iterator<Item = Self::Element<'a>>
    where
        Self: 'a;

    /// Iterates every element once, in the container's order.
    fn elements(&self) -> Self::Elements<'_>;

    /// Number of elements.
    fn element_count(&self) -> usize;
}

/// A container that can produce an empty sibling and grow it.
///
/// Hash containers carry their hasher over to the sibling.
pub trait Rebuild: Traverse + Sized {
    /// An owned element: `T`, or `(K, V)` for mappings.
    type Owned;

    /// Creates an empty container of the same shape.
    fn empty_like(&self) -> Self;

    /// Inserts an owned element.
    fn insert_element(&mut self, element: Self::Owned);
}

/// A container whose borrowed elements can be cloned into owned ones.
pub trait CloneElements: Rebuild {
    /// Clones a borrowed element.
    fn clone_element<'a>(element: Self::Element<'a>) -> Self::Owned
    where
        Self: 'a;
}

/// A mapping that can be rebuilt with a different value type.
pub trait RebuildValues: Traverse {
    /// Key type.
    type Key;

    /// Value type.
    type Value;

    /// The same mapping shape holding `B` values.
    type Rebuilt<B>: Rebuild<Owned = (Self::Key, B)>;

    /// Creates an empty mapping of the same shape holding `B` values.
    fn empty_with_values<B>(&self) -> Self::Rebuilt<B>;

    /// Splits a borrowed element into its key and value.
    fn entry<'a>(element: Self::Element<'a>) -> (&'a Self::Key, &'a Self::Value)
    where
        Self: 'a;
}

// =============================================================================
// Sequences
// =============================================================================

impl<T> Traverse for Vec<T> {
    const SHAPE: &'static str = "sequence";

    type Element<'a>
        = &'a T
    where
        Self: 'a;

    type Elements<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Rebuild for Vec<T> {
    type Owned = T;

    #[inline]
    fn empty_like(&self) -> Self {
        Self::new()
    }

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.push(element);
    }
}

impl<T: Clone> CloneElements for Vec<T> {
    #[inline]
    fn clone_element<'a>(element: &'a T) -> T
    where
        Self: 'a,
    {
        element.clone()
    }
}

impl<T> Traverse for VecDeque<T> {
    const SHAPE: &'static str = "sequence";

    type Element<'a>
        = &'a T
    where
        Self: 'a;

    type Elements<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> Rebuild for VecDeque<T> {
    type Owned = T;

    #[inline]
    fn empty_like(&self) -> Self {
        Self::new()
    }

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.push_back(element);
    }
}

impl<T: Clone> CloneElements for VecDeque<T> {
    #[inline]
    fn clone_element<'a>(element: &'a T) -> T
    where
        Self: 'a,
    {
        element.clone()
    }
}

// =============================================================================
// Sets
// =============================================================================

impl<T, S> Traverse for HashSet<T, S> {
    const SHAPE: &'static str = "set";

    type Element<'a>
        = &'a T
    where
        Self: 'a;

    type Elements<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T: Eq + Hash, S: BuildHasher + Clone> Rebuild for HashSet<T, S> {
    type Owned = T;

    #[inline]
    fn empty_like(&self) -> Self {
        Self::with_hasher(self.hasher().clone())
    }

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.insert(element);
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> CloneElements for HashSet<T, S> {
    #[inline]
    fn clone_element<'a>(element: &'a T) -> T
    where
        Self: 'a,
    {
        element.clone()
    }
}

impl<T> Traverse for BTreeSet<T> {
    const SHAPE: &'static str = "set";

    type Element<'a>
        = &'a T
    where
        Self: 'a;

    type Elements<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> Rebuild for BTreeSet<T> {
    type Owned = T;

    #[inline]
    fn empty_like(&self) -> Self {
        Self::new()
    }

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.insert(element);
    }
}

impl<T: Ord + Clone> CloneElements for BTreeSet<T> {
    #[inline]
    fn clone_element<'a>(element: &'a T) -> T
    where
        Self: 'a,
    {
        element.clone()
    }
}

#[cfg(feature = "indexmap")]
impl<T, S> Traverse for indexmap::IndexSet<T, S> {
    const SHAPE: &'static str = "set";

    type Element<'a>
        = &'a T
    where
        Self: 'a;

    type Elements<'a>
        = indexmap::set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "indexmap")]
impl<T: Eq + Hash, S: BuildHasher + Clone> Rebuild for indexmap::IndexSet<T, S> {
    type Owned = T;

    #[inline]
    fn empty_like(&self) -> Self {
        Self::with_hasher(self.hasher().clone())
    }

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.insert(element);
    }
}

#[cfg(feature = "indexmap")]
impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> CloneElements for indexmap::IndexSet<T, S> {
    #[inline]
    fn clone_element<'a>(element: &'a T) -> T
    where
        Self: 'a,
    {
        element.clone()
    }
}

// =============================================================================
// Mappings
// =============================================================================

impl<K, V, S> Traverse for HashMap<K, V, S> {
    const SHAPE: &'static str = "mapping";

    type Element<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;

    type Elements<'a>
        = std::collections::hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Clone> Rebuild for HashMap<K, V, S> {
    type Owned = (K, V);

    #[inline]
    fn empty_like(&self) -> Self {
        Self::with_hasher(self.hasher().clone())
    }

    #[inline]
    fn insert_element(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K, V, S> CloneElements for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    #[inline]
    fn clone_element<'a>((key, value): (&'a K, &'a V)) -> (K, V)
    where
        Self: 'a,
    {
        (key.clone(), value.clone())
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Clone> RebuildValues for HashMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Rebuilt<B> = HashMap<K, B, S>;

    #[inline]
    fn empty_with_values<B>(&self) -> HashMap<K, B, S> {
        HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone())
    }

    #[inline]
    fn entry<'a>(element: (&'a K, &'a V)) -> (&'a K, &'a V)
    where
        Self: 'a,
    {
        element
    }
}

impl<K, V> Traverse for BTreeMap<K, V> {
    const SHAPE: &'static str = "mapping";

    type Element<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;

    type Elements<'a>
        = std::collections::btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K: Ord, V> Rebuild for BTreeMap<K, V> {
    type Owned = (K, V);

    #[inline]
    fn empty_like(&self) -> Self {
        Self::new()
    }

    #[inline]
    fn insert_element(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K: Ord + Clone, V: Clone> CloneElements for BTreeMap<K, V> {
    #[inline]
    fn clone_element<'a>((key, value): (&'a K, &'a V)) -> (K, V)
    where
        Self: 'a,
    {
        (key.clone(), value.clone())
    }
}

impl<K: Ord, V> RebuildValues for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Rebuilt<B> = BTreeMap<K, B>;

    #[inline]
    fn empty_with_values<B>(&self) -> BTreeMap<K, B> {
        BTreeMap::new()
    }

    #[inline]
    fn entry<'a>(element: (&'a K, &'a V)) -> (&'a K, &'a V)
    where
        Self: 'a,
    {
        element
    }
}

#[cfg(feature = "indexmap")]
impl<K, V, S> Traverse for indexmap::IndexMap<K, V, S> {
    const SHAPE: &'static str = "mapping";

    type Element<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;

    type Elements<'a>
        = indexmap::map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Elements<'_> {
        self.iter()
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "indexmap")]
impl<K: Eq + Hash, V, S: BuildHasher + Clone> Rebuild for indexmap::IndexMap<K, V, S> {
    type Owned = (K, V);

    #[inline]
    fn empty_like(&self) -> Self {
        Self::with_hasher(self.hasher().clone())
    }

    #[inline]
    fn insert_element(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

#[cfg(feature = "indexmap")]
impl<K, V, S> CloneElements for indexmap::IndexMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    #[inline]
    fn clone_element<'a>((key, value): (&'a K, &'a V)) -> (K, V)
    where
        Self: 'a,
    {
        (key.clone(), value.clone())
    }
}

#[cfg(feature = "indexmap")]
impl<K: Eq + Hash, V, S: BuildHasher + Clone> RebuildValues for indexmap::IndexMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Rebuilt<B> = indexmap::IndexMap<K, B, S>;

    #[inline]
    fn empty_with_values<B>(&self) -> indexmap::IndexMap<K, B, S> {
        indexmap::IndexMap::with_capacity_and_hasher(self.len(), self.hasher().clone())
    }

    #[inline]
    fn entry<'a>(element: (&'a K, &'a V)) -> (&'a K, &'a V)
    where
        Self: 'a,
    {
        element
    }
}
