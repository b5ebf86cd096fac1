//! The [`RefSequence`] type and its operations.
//!
//! `RefSequence<T>` is an ordered, finite list of [`ElementRef<T>`]s. It
//! tells a *nil* sequence (no backing list at all) apart from an *empty* one,
//! but every operation treats both as "no elements" on input. Where the two
//! differ on output is documented on the operation.
//!
//! The operations are split by concern:
//!
//! - `query`: membership, positional access, length, min/max
//! - `filter`: select, unselect, transform and predicate checks
//! - `ordering`: sort, sortedness, reverse
//! - `slice`: top/bottom, sub-slices, push/pop style helpers, diff, unique
//! - `json`: serde support and JSON text (feature `serde`)
//!
//! # Immutability
//!
//! Every operation borrows `self` and returns newly allocated storage. The
//! pointers inside the result are clones of the receiver's pointers unless
//! the operation builds new records (`map_values`, or `transform` for the
//! entries its callback replaces), so identity survives
//! `select`, `sort`, `reverse` and friends.
//!
//! ```rust
//! use refseq::prelude::*;
//!
//! let numbers = RefSequence::of([3, 1, 2]);
//! let odd = numbers.select(|number| number.is_some_and(|value| value % 2 == 1));
//!
//! assert_eq!(numbers.len(), 3); // Original unchanged
//! assert_eq!(odd.len(), 2);
//! assert!(odd.iter().all(|entry| numbers.contains(entry)));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::element::{ElementRef, ReferenceCounter};

mod filter;
mod ordering;
mod query;
mod slice;

#[cfg(feature = "serde")]
mod json;

/// An ordered sequence of possibly absent shared element references.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `len`         | O(1)       |
/// | `first`/`last`| O(1)       |
/// | `contains`    | O(n)       |
/// | `select`      | O(n)       |
/// | `min`/`max`   | O(n)       |
/// | `sort`        | O(n log n) |
/// | `reverse`     | O(n)       |
///
/// # Examples
///
/// ```rust
/// use refseq::prelude::*;
///
/// let nil: RefSequence<i32> = RefSequence::nil();
/// let empty: RefSequence<i32> = RefSequence::new();
///
/// assert!(nil.is_nil());
/// assert!(!empty.is_nil());
/// assert_eq!(nil.len(), empty.len());
/// assert_ne!(nil, empty);
/// ```
pub struct RefSequence<T> {
    /// `None` for a nil sequence.
    elements: Option<Vec<ElementRef<T>>>,
}

impl<T> RefSequence<T> {
    /// Creates a nil sequence.
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self { elements: None }
    }

    /// Creates an empty, non-nil sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let sequence: RefSequence<i32> = RefSequence::new();
    /// assert!(sequence.is_empty());
    /// assert!(!sequence.is_nil());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Some(Vec::new()),
        }
    }

    /// Builds a sequence that points at freshly allocated copies of `values`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let sequence = RefSequence::of(["a", "b"]);
    /// assert_eq!(sequence.len(), 2);
    /// assert_eq!(sequence.get(0).and_then(|entry| entry.as_deref()), Some(&"a"));
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Self {
        values
            .into_iter()
            .map(|value| Some(ReferenceCounter::new(value)))
            .collect()
    }

    /// Wraps `entries` as a non-nil sequence.
    pub(crate) fn from_entries(entries: Vec<ElementRef<T>>) -> Self {
        Self {
            elements: Some(entries),
        }
    }

    /// Wraps `entries`, mapping an empty list to the nil sequence.
    ///
    /// Operations that produce "absence of input" results go through here.
    pub(crate) fn nil_if_empty(entries: Vec<ElementRef<T>>) -> Self {
        if entries.is_empty() {
            Self::nil()
        } else {
            Self::from_entries(entries)
        }
    }

    /// Returns `true` if this is the nil sequence.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.elements.is_none()
    }

    /// Returns `true` if the sequence has no entries (nil or empty).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the entries as a slice; nil yields an empty slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[ElementRef<T>] {
        self.elements.as_deref().unwrap_or(&[])
    }

    /// Returns the entry at `index`, or `None` when out of bounds.
    ///
    /// The outer `Option` is the bounds check; the entry itself may be nil.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ElementRef<T>> {
        self.as_slice().get(index)
    }

    /// Returns an iterator over the entries.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ElementRef<T>> {
        self.as_slice().iter()
    }

    /// Consumes the sequence and returns its entries; nil yields `None`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Option<Vec<ElementRef<T>>> {
        self.elements
    }

    /// Keeps the receiver's nil/empty shape for operations that leave an
    /// input without entries unchanged.
    pub(crate) fn same_shape(&self, entries: Vec<ElementRef<T>>) -> Self {
        if self.is_nil() {
            Self::nil()
        } else {
            Self::from_entries(entries)
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for RefSequence<T> {
    /// Clones the pointers, never the records.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T> Default for RefSequence<T> {
    /// The default sequence is nil.
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> From<Vec<ElementRef<T>>> for RefSequence<T> {
    #[inline]
    fn from(entries: Vec<ElementRef<T>>) -> Self {
        Self::from_entries(entries)
    }
}

impl<T> FromIterator<ElementRef<T>> for RefSequence<T> {
    fn from_iter<I: IntoIterator<Item = ElementRef<T>>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for RefSequence<T> {
    type Item = ElementRef<T>;
    type IntoIter = std::vec::IntoIter<ElementRef<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.unwrap_or_default().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RefSequence<T> {
    type Item = &'a ElementRef<T>;
    type IntoIter = std::slice::Iter<'a, ElementRef<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Deep equality: the nil/empty shape must match and entries compare by the
/// records they point at.
///
/// This is the comparison for whole results. Membership (`contains`) uses
/// identity instead.
impl<T: PartialEq> PartialEq for RefSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for RefSequence<T> {}

impl<T: Hash> Hash for RefSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_nil().hash(state);
        self.len().hash(state);
        for entry in self {
            entry.as_deref().hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RefSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.elements {
            None => formatter.write_str("nil"),
            Some(entries) => formatter
                .debug_list()
                .entries(entries.iter().map(Option::as_deref))
                .finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for RefSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for entry in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            match entry {
                Some(element) => write!(formatter, "{element}")?,
                None => write!(formatter, "nil")?,
            }
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
