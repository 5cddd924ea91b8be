//! # fnops
//!
//! Eager functional operations over the standard container shapes.
//!
//! ## Overview
//!
//! This library adds declarative transformations to three container shapes
//! so calling code does not need hand-written loops:
//!
//! - **Sequences** ([`SequenceOps`]): `Vec`, `VecDeque`
//! - **Mappings** ([`MappingOps`]): `HashMap`, `BTreeMap`, `IndexMap`
//! - **Sets** ([`SetOps`]): `HashSet`, `BTreeSet`, `IndexSet`
//!
//! Each shape provides `filter`, `first`, `map`, `flat_map`, `for_each`,
//! `reduce` and `zip`; mappings add `map_values`. Every callback-taking
//! operation has a `try_*` twin that stops at the callback's first `Err` and
//! returns it unchanged.
//!
//! All operations borrow the receiver, never modify it, and materialize their
//! result immediately. Elements are visited in the container's own iteration
//! order (see [`container`]).
//!
//! ## Feature Flags
//!
//! - `indexmap` (default): `IndexMap` / `IndexSet` support
//! - `serde`: `Serialize` / `Deserialize` for [`Slot`] and [`Flatten`]
//! - `tracing`: `trace`-level events for every operation call
//! - `fxhash`, `ahash`: fast-hasher aliases in [`hashers`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnops::prelude::*;
//!
//! let scores = vec![72, 95, 58, 88];
//!
//! let passing = scores.filter(|score| *score >= 60);
//! assert_eq!(passing, vec![72, 95, 88]);
//!
//! let grades = scores.map(|score| (*score >= 90).then_some('A'));
//! assert_eq!(grades[1], Slot::Value('A'));
//! assert_eq!(grades[0], Slot::Placeholder);
//!
//! let total = scores.reduce(0, |accumulator, score| accumulator + score);
//! assert_eq!(total, 313);
//!
//! let labelled = scores.zip(["ann", "ben"]);
//! assert_eq!(labelled, vec![(&72, "ann"), (&95, "ben")]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the operation traits and the value types they produce.
///
/// # Usage
///
/// ```rust
/// use fnops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::flatten::{Flatten, Splice};
    pub use crate::mapping::MappingOps;
    pub use crate::sequence::SequenceOps;
    pub use crate::set::SetOps;
    pub use crate::slot::Slot;
}

#[macro_use]
mod macros;

mod algorithms;
pub mod container;
mod flatten;
mod mapping;
mod sequence;
mod set;
mod slot;

#[cfg(any(feature = "fxhash", feature = "ahash"))]
pub mod hashers;

pub use flatten::{Flatten, Splice};
pub use mapping::MappingOps;
pub use sequence::SequenceOps;
pub use set::SetOps;
pub use slot::{Slot, SlotError};
