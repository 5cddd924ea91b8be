//! Slot type - a mapped value or the placeholder marker.
//!
//! `map` and `map_values` never drop an element: when the mapper returns
//! `None`, the output keeps a [`Slot::Placeholder`] at that position. This
//! keeps "the mapper produced nothing" distinguishable from any null-like
//! value the mapper deliberately produced.
//!
//! # Examples
//!
//! ```rust
//! use fnops::Slot;
//!
//! // A mapper that produced a value
//! let value: Slot<i32> = Some(42).into();
//! assert_eq!(value, Slot::Value(42));
//!
//! // A mapper that produced nothing
//! let placeholder: Slot<i32> = None.into();
//! assert!(placeholder.is_placeholder());
//!
//! // A deliberate "null" stays a value
//! let explicit_null: Slot<Option<i32>> = Some(None).into();
//! assert_eq!(explicit_null, Slot::Value(None));
//! ```

use std::fmt;

/// One entry of a `map` result: either the mapped value or the placeholder.
///
/// With the `serde` feature the two variants are encoded as distinct tags
/// (`{"Value": ...}` and `"Placeholder"`), so `Slot::Value(None)` and
/// `Slot::Placeholder` survive a round trip.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot<T> {
    /// The mapper produced this value.
    Value(T),
    /// The mapper produced nothing for this element.
    #[default]
    Placeholder,
}

static_assertions::assert_impl_all!(Slot<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Slot<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Slot<std::rc::Rc<i32>>: Send, Sync);

impl<T> Slot<T> {
    /// Returns `true` if this slot holds a mapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::Slot;
    ///
    /// assert!(Slot::Value(1).is_value());
    /// assert!(!Slot::<i32>::Placeholder.is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this slot is the placeholder marker.
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns a reference to the mapped value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Placeholder => None,
        }
    }

    /// Converts `&Slot<T>` into `Slot<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Slot<&T> {
        match self {
            Self::Value(value) => Slot::Value(value),
            Self::Placeholder => Slot::Placeholder,
        }
    }

    /// Converts the slot into an `Option`, mapping the placeholder to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::Slot;
    ///
    /// assert_eq!(Slot::Value("a").into_option(), Some("a"));
    /// assert_eq!(Slot::<&str>::Placeholder.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Placeholder => None,
        }
    }

    /// Extracts the mapped value.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] if this slot is the placeholder marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::{Slot, SlotError};
    ///
    /// assert_eq!(Slot::Value(7).try_into_value(), Ok(7));
    /// assert_eq!(Slot::<i32>::Placeholder.try_into_value(), Err(SlotError));
    /// ```
    #[inline]
    pub fn try_into_value(self) -> Result<T, SlotError> {
        self.into_option().ok_or(SlotError)
    }

    /// Returns the mapped value or `default` for the placeholder.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// Applies `function` to the mapped value, keeping the placeholder as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnops::Slot;
    ///
    /// assert_eq!(Slot::Value(2).map(|n| n * 10), Slot::Value(20));
    /// assert_eq!(Slot::<i32>::Placeholder.map(|n| n * 10), Slot::Placeholder);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Slot<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Slot::Value(function(value)),
            Self::Placeholder => Slot::Placeholder,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Placeholder => formatter.write_str("Placeholder"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Slot<T> {
    /// `Some(value)` becomes `Value(value)`, `None` becomes `Placeholder`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Value(value),
            None => Self::Placeholder,
        }
    }
}

impl<T> From<Slot<T>> for Option<T> {
    #[inline]
    fn from(slot: Slot<T>) -> Self {
        slot.into_option()
    }
}

// =============================================================================
// Error
// =============================================================================

/// Returned when a placeholder is extracted as if it were a value.
///
/// # Examples
///
/// ```rust
/// use fnops::SlotError;
///
/// assert_eq!(
///     format!("{}", SlotError),
///     "slot holds the placeholder marker, not a mapped value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotError;

impl fmt::Display for SlotError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("slot holds the placeholder marker, not a mapped value")
    }
}

impl std::error::Error for SlotError {}
