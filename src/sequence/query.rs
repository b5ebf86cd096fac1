//! Membership, positional access and statistics.

use std::cmp::Ordering;

use super::RefSequence;
use crate::element::{ElementRef, OrderingKey, compare_by_key, same_element, zero_element};

impl<T> RefSequence<T> {
    /// Returns the number of entries; nil has none.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if some entry is the very same reference as `target`.
    ///
    /// Membership is by identity: a nil target matches only a nil entry, and a
    /// record matches only when the entry points at the same allocation. A
    /// copy with equal fields is not a member, and neither is a
    /// default-valued record when the sequence holds nil.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let sequence = RefSequence::of(["a", "b"]);
    /// let a = sequence.first_or(None);
    ///
    /// assert!(sequence.contains(&a));
    /// assert!(!sequence.contains(&Some(ReferenceCounter::new("a"))));
    /// assert!(!sequence.contains(&None));
    /// ```
    #[must_use]
    pub fn contains(&self, target: &ElementRef<T>) -> bool {
        self.contains_by(target, same_element)
    }

    /// Returns `true` if `equality(entry, target)` holds for some entry.
    ///
    /// Pass [`crate::element::equal_contents`] for membership by value.
    pub fn contains_by<F>(&self, target: &ElementRef<T>, equality: F) -> bool
    where
        F: Fn(&ElementRef<T>, &ElementRef<T>) -> bool,
    {
        self.iter().any(|entry| equality(entry, target))
    }

    /// Returns the first entry, or `default` when there are none.
    ///
    /// The first entry is returned as is, so it may be nil.
    #[must_use]
    pub fn first_or(&self, default: ElementRef<T>) -> ElementRef<T> {
        self.as_slice().first().cloned().unwrap_or(default)
    }

    /// Returns the last entry, or `default` when there are none.
    #[must_use]
    pub fn last_or(&self, default: ElementRef<T>) -> ElementRef<T> {
        self.as_slice().last().cloned().unwrap_or(default)
    }
}

impl<T: Default> RefSequence<T> {
    /// Returns the first entry, or a fresh default record when there are none.
    ///
    /// Never returns nil for a nil or empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let nil: RefSequence<String> = RefSequence::nil();
    /// assert_eq!(nil.first().as_deref(), Some(&String::new()));
    /// ```
    #[must_use]
    pub fn first(&self) -> ElementRef<T> {
        self.as_slice().first().cloned().unwrap_or_else(zero_element)
    }

    /// Returns the last entry, or a fresh default record when there are none.
    #[must_use]
    pub fn last(&self) -> ElementRef<T> {
        self.as_slice().last().cloned().unwrap_or_else(zero_element)
    }

    /// Returns the entry ranked lowest by `comparator`.
    ///
    /// On ties the earliest entry wins. A nil or empty sequence yields a fresh
    /// default record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let words = RefSequence::of(["pear", "fig", "kiwi"]);
    /// let shortest = words.min_by(|left, right| left.map(|word| word.len()).cmp(&right.map(|word| word.len())));
    ///
    /// assert_eq!(shortest.as_deref(), Some(&"fig"));
    /// assert_eq!(RefSequence::<&str>::nil().min_by(|_, _| std::cmp::Ordering::Equal).as_deref(), Some(&""));
    /// ```
    pub fn min_by<F>(&self, comparator: F) -> ElementRef<T>
    where
        F: Fn(Option<&T>, Option<&T>) -> Ordering,
    {
        self.extreme_by(|candidate, best| comparator(candidate, best) == Ordering::Less)
    }

    /// Returns the entry ranked highest by `comparator`.
    ///
    /// On ties the earliest entry wins. A nil or empty sequence yields a fresh
    /// default record.
    pub fn max_by<F>(&self, comparator: F) -> ElementRef<T>
    where
        F: Fn(Option<&T>, Option<&T>) -> Ordering,
    {
        self.extreme_by(|candidate, best| comparator(candidate, best) == Ordering::Greater)
    }

    /// Scans once, replacing the running best only when `beats` holds
    /// strictly, which keeps the first of equal entries.
    fn extreme_by<F>(&self, beats: F) -> ElementRef<T>
    where
        F: Fn(Option<&T>, Option<&T>) -> bool,
    {
        let mut entries = self.iter();
        let Some(mut best) = entries.next() else {
            return zero_element();
        };

        for entry in entries {
            if beats(entry.as_deref(), best.as_deref()) {
                best = entry;
            }
        }

        best.clone()
    }
}

impl<T: OrderingKey + Default> RefSequence<T> {
    /// Returns the entry with the smallest ordering key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// #[derive(Default)]
    /// struct Name(String);
    ///
    /// impl OrderingKey for Name {
    ///     type Key = String;
    ///
    ///     fn ordering_key(&self) -> &String {
    ///         &self.0
    ///     }
    /// }
    ///
    /// let names = RefSequence::of(["bar", "Baz", "qux"].map(|name| Name(name.to_string())));
    /// assert_eq!(names.min().map(|name| name.0.clone()), Some("Baz".to_string()));
    /// assert_eq!(names.max().map(|name| name.0.clone()), Some("qux".to_string()));
    /// ```
    #[must_use]
    pub fn min(&self) -> ElementRef<T> {
        self.min_by(compare_by_key)
    }

    /// Returns the entry with the largest ordering key.
    #[must_use]
    pub fn max(&self) -> ElementRef<T> {
        self.max_by(compare_by_key)
    }
}
