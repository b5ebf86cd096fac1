//! Positional slicing, push/pop style helpers and identity-based set
//! operations.
//!
//! Set-like operations (`unique`, `are_unique`, `diff`) compare entries by
//! identity, the same rule as [`RefSequence::contains`]. All nil entries share
//! one identity.

use std::collections::HashSet;

use super::RefSequence;
use crate::element::{ElementRef, ReferenceCounter};

/// Address of the record an entry points at; `None` for nil.
fn identity<T>(entry: &ElementRef<T>) -> Option<*const T> {
    entry.as_ref().map(ReferenceCounter::as_ptr)
}

impl<T> RefSequence<T> {
    /// Returns a new sequence with `entries` after the receiver's entries.
    ///
    /// Appending nothing returns a copy with the receiver's nil/empty shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let sequence = RefSequence::of([1, 2]);
    /// let longer = sequence.append([Some(ReferenceCounter::new(3)), None]);
    ///
    /// assert_eq!(longer.len(), 4);
    /// assert_eq!(sequence.len(), 2);
    /// ```
    #[must_use]
    pub fn append<I>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = ElementRef<T>>,
    {
        let mut combined = self.as_slice().to_vec();
        let before = combined.len();
        combined.extend(entries);
        if combined.len() == before {
            self.clone()
        } else {
            Self::from_entries(combined)
        }
    }

    /// Returns a new sequence with the entries of `other` after the
    /// receiver's.
    #[must_use]
    pub fn extend(&self, other: &Self) -> Self {
        self.append(other.iter().cloned())
    }

    /// Returns a new sequence with `entries` in front of the receiver's
    /// entries.
    #[must_use]
    pub fn unshift<I>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = ElementRef<T>>,
    {
        let mut combined: Vec<ElementRef<T>> = entries.into_iter().collect();
        if combined.is_empty() {
            return self.clone();
        }
        combined.extend_from_slice(self.as_slice());
        Self::from_entries(combined)
    }

    /// Splits off the last entry.
    ///
    /// Returns the entry and the remaining entries. Without entries the
    /// receiver comes back unchanged next to `None`.
    #[must_use]
    pub fn pop(&self) -> (Option<ElementRef<T>>, Self) {
        match self.as_slice().split_last() {
            Some((last, rest)) => (Some(last.clone()), Self::from_entries(rest.to_vec())),
            None => (None, self.clone()),
        }
    }

    /// Splits off the first entry.
    #[must_use]
    pub fn shift(&self) -> (Option<ElementRef<T>>, Self) {
        match self.as_slice().split_first() {
            Some((first, rest)) => (Some(first.clone()), Self::from_entries(rest.to_vec())),
            None => (None, self.clone()),
        }
    }

    /// Returns at most the first `count` entries; nil if that is none.
    #[must_use]
    pub fn top(&self, count: usize) -> Self {
        Self::nil_if_empty(self.iter().take(count).cloned().collect())
    }

    /// Returns at most the last `count` entries, last entry first; nil if
    /// that is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let sequence = RefSequence::of([1, 2, 3]);
    /// assert_eq!(sequence.bottom(2), RefSequence::of([3, 2]));
    /// ```
    #[must_use]
    pub fn bottom(&self, count: usize) -> Self {
        Self::nil_if_empty(self.iter().rev().take(count).cloned().collect())
    }

    /// Returns every entry after the first `count`; nil if that is none.
    #[must_use]
    pub fn drop_top(&self, count: usize) -> Self {
        Self::nil_if_empty(self.iter().skip(count).cloned().collect())
    }

    /// Returns the entries in `start..end`.
    ///
    /// `end` is clamped to the length. A range that is empty after clamping
    /// yields nil.
    #[must_use]
    pub fn sub_slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        if start >= end {
            return Self::nil();
        }
        Self::from_entries(self.as_slice()[start..end].to_vec())
    }

    /// Returns `true` if no reference occurs twice.
    #[must_use]
    pub fn are_unique(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter().all(|entry| seen.insert(identity(entry)))
    }

    /// Returns the entries with repeated references removed, keeping the
    /// first occurrence of each.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let shared = Some(ReferenceCounter::new("a"));
    /// let copy = Some(ReferenceCounter::new("a"));
    /// let sequence: RefSequence<&str> = vec![shared.clone(), copy, shared].into();
    ///
    /// assert_eq!(sequence.unique().len(), 2);
    /// ```
    #[must_use]
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.len());
        self.same_shape(
            self.iter()
                .filter(|entry| seen.insert(identity(entry)))
                .cloned()
                .collect(),
        )
    }

    /// Compares two sequences by reference.
    ///
    /// Returns `(added, removed)`: the entries of `other` that `self` does
    /// not hold, and the entries of `self` that `other` does not hold. Each
    /// side is nil when empty.
    #[must_use]
    pub fn diff(&self, other: &Self) -> (Self, Self) {
        let ours: HashSet<_> = self.iter().map(identity).collect();
        let theirs: HashSet<_> = other.iter().map(identity).collect();

        let added = other
            .iter()
            .filter(|entry| !ours.contains(&identity(entry)))
            .cloned()
            .collect();
        let removed = self
            .iter()
            .filter(|entry| !theirs.contains(&identity(entry)))
            .cloned()
            .collect();

        (Self::nil_if_empty(added), Self::nil_if_empty(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::same_element;
    use rstest::rstest;

    fn letters() -> RefSequence<char> {
        RefSequence::of(['a', 'b', 'c', 'd'])
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec!['a', 'b'])]
    #[case(9, vec!['a', 'b', 'c', 'd'])]
    fn test_top(#[case] count: usize, #[case] expected: Vec<char>) {
        let top = letters().top(count);
        if expected.is_empty() {
            assert!(top.is_nil());
        } else {
            assert_eq!(top, RefSequence::of(expected));
        }
    }

    #[rstest]
    fn test_bottom_reverses() {
        assert_eq!(letters().bottom(3), RefSequence::of(['d', 'c', 'b']));
        assert!(letters().bottom(0).is_nil());
    }

    #[rstest]
    fn test_drop_top() {
        assert_eq!(letters().drop_top(1), RefSequence::of(['b', 'c', 'd']));
        assert!(letters().drop_top(4).is_nil());
    }

    #[rstest]
    #[case(1, 3, Some(vec!['b', 'c']))]
    #[case(2, 100, Some(vec!['c', 'd']))]
    #[case(3, 3, None)]
    #[case(3, 1, None)]
    #[case(7, 9, None)]
    fn test_sub_slice(#[case] start: usize, #[case] end: usize, #[case] expected: Option<Vec<char>>) {
        let slice = letters().sub_slice(start, end);
        match expected {
            Some(expected) => assert_eq!(slice, RefSequence::of(expected)),
            None => assert!(slice.is_nil()),
        }
    }

    #[rstest]
    fn test_append_nothing_keeps_shape() {
        assert!(RefSequence::<char>::nil().append([]).is_nil());
        assert!(!RefSequence::<char>::new().append([]).is_nil());
        assert!(RefSequence::<char>::nil().unshift([]).is_nil());
    }

    #[rstest]
    fn test_extend_and_unshift() {
        let left = RefSequence::of(['a']);
        let right = RefSequence::of(['b']);
        assert_eq!(left.extend(&right), RefSequence::of(['a', 'b']));
        assert_eq!(left.unshift(right.iter().cloned()), RefSequence::of(['b', 'a']));
    }

    #[rstest]
    fn test_pop_and_shift() {
        let sequence = letters();
        let (last, rest) = sequence.pop();
        assert!(same_element(&last.unwrap(), sequence.get(3).unwrap()));
        assert_eq!(rest, RefSequence::of(['a', 'b', 'c']));

        let (first, rest) = sequence.shift();
        assert!(same_element(&first.unwrap(), sequence.get(0).unwrap()));
        assert_eq!(rest, RefSequence::of(['b', 'c', 'd']));

        let (nothing, nil) = RefSequence::<char>::nil().pop();
        assert!(nothing.is_none());
        assert!(nil.is_nil());
    }

    #[rstest]
    fn test_unique_by_identity() {
        let shared = Some(ReferenceCounter::new('a'));
        let sequence: RefSequence<char> =
            vec![shared.clone(), None, Some(ReferenceCounter::new('a')), shared, None].into();
        assert!(!sequence.are_unique());

        let unique = sequence.unique();
        assert_eq!(unique.len(), 3);
        assert!(unique.are_unique());
        assert!(letters().are_unique());
    }

    #[rstest]
    fn test_diff_by_identity() {
        let sequence = letters();
        let kept = sequence.top(2);
        let extra = Some(ReferenceCounter::new('z'));
        let other = kept.append([extra.clone()]);

        let (added, removed) = sequence.diff(&other);
        assert_eq!(added.len(), 1);
        assert!(added.contains(&extra));
        assert_eq!(removed, RefSequence::of(['c', 'd']));

        let (added, removed) = sequence.diff(&sequence);
        assert!(added.is_nil());
        assert!(removed.is_nil());
    }
}
