//! Sorting, sortedness checks and reversal.
//!
//! All of these copy the pointers into new storage before reordering. The
//! caller's sequence keeps its order, and a nil sequence stays nil while an
//! empty one stays empty.

use std::cmp::Ordering;

use super::RefSequence;
use crate::element::{OrderingKey, compare_by_key};

impl<T> RefSequence<T> {
    /// Returns a new sequence sorted by `comparator`.
    ///
    /// The sort is stable: entries that compare equal keep their relative
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let words = RefSequence::of(["pear", "fig", "kiwi"]);
    /// let by_length = words.sort_by(|left, right| left.map(|word| word.len()).cmp(&right.map(|word| word.len())));
    ///
    /// assert_eq!(by_length, RefSequence::of(["fig", "pear", "kiwi"]));
    /// assert_eq!(words, RefSequence::of(["pear", "fig", "kiwi"]));
    /// ```
    pub fn sort_by<F>(&self, comparator: F) -> Self
    where
        F: Fn(Option<&T>, Option<&T>) -> Ordering,
    {
        let mut entries = self.as_slice().to_vec();
        entries.sort_by(|left, right| comparator(left.as_deref(), right.as_deref()));
        self.same_shape(entries)
    }

    /// Returns a new sequence sorted by `comparator`, without the stability
    /// guarantee of [`sort_by`](Self::sort_by).
    pub fn sort_unstable_by<F>(&self, comparator: F) -> Self
    where
        F: Fn(Option<&T>, Option<&T>) -> Ordering,
    {
        let mut entries = self.as_slice().to_vec();
        entries.sort_unstable_by(|left, right| comparator(left.as_deref(), right.as_deref()));
        self.same_shape(entries)
    }

    /// Returns `true` if no entry ranks below its predecessor under
    /// `comparator`.
    ///
    /// Nil, empty and single-entry sequences are sorted.
    pub fn are_sorted_by<F>(&self, comparator: F) -> bool
    where
        F: Fn(Option<&T>, Option<&T>) -> Ordering,
    {
        self.as_slice()
            .windows(2)
            .all(|pair| comparator(pair[0].as_deref(), pair[1].as_deref()) != Ordering::Greater)
    }

    /// Returns a new sequence with the entries in reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let sequence = RefSequence::of([1, 2, 3]);
    /// assert_eq!(sequence.reverse(), RefSequence::of([3, 2, 1]));
    /// assert_eq!(sequence, RefSequence::of([1, 2, 3]));
    /// assert!(RefSequence::<i32>::nil().reverse().is_nil());
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.same_shape(self.iter().rev().cloned().collect())
    }
}

impl<T: OrderingKey> RefSequence<T> {
    /// Returns a new sequence sorted ascending by ordering key.
    ///
    /// Stable, with nil entries first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// struct Word(&'static str);
    ///
    /// impl OrderingKey for Word {
    ///     type Key = str;
    ///
    ///     fn ordering_key(&self) -> &str {
    ///         self.0
    ///     }
    /// }
    ///
    /// let words = RefSequence::of([Word("bar"), Word("Baz"), Word("qux"), Word("foo")]);
    /// let sorted = words.sort();
    ///
    /// assert_eq!(sorted.strings_using(|word| word.map_or("", |word| word.0).to_string()),
    ///            vec!["Baz", "bar", "foo", "qux"]);
    /// assert!(!words.are_sorted());
    /// assert!(sorted.are_sorted());
    /// ```
    #[must_use]
    pub fn sort(&self) -> Self {
        self.sort_by(compare_by_key)
    }

    /// Returns `true` if the entries are in non-decreasing key order.
    #[must_use]
    pub fn are_sorted(&self) -> bool {
        self.are_sorted_by(compare_by_key)
    }
}
