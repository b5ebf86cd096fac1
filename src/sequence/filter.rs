//! Filtering, mapping and predicate checks.
//!
//! Callbacks receive `Option<&T>`: `None` for a nil entry. A callback that
//! cannot cope with nil is free to panic; the panic is not caught here.

use super::RefSequence;
use crate::element::{ElementRef, ReferenceCounter};

impl<T> RefSequence<T> {
    /// Returns the entries for which `predicate` holds, in their original
    /// order.
    ///
    /// The result shares pointers with `self`. It is nil when nothing is
    /// selected, including for nil and empty input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let letters = RefSequence::of(["a", "b", "c"]);
    /// let selected = letters.select(|letter| letter != Some(&"b"));
    ///
    /// assert_eq!(selected, RefSequence::of(["a", "c"]));
    /// assert!(RefSequence::<&str>::nil().select(|_| true).is_nil());
    /// ```
    pub fn select<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(Option<&T>) -> bool,
    {
        Self::nil_if_empty(
            self.iter()
                .filter(|entry| predicate(entry.as_deref()))
                .cloned()
                .collect(),
        )
    }

    /// Returns the entries for which `predicate` does not hold.
    ///
    /// Same ordering and nil rules as [`select`](Self::select).
    pub fn unselect<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(Option<&T>) -> bool,
    {
        self.select(|entry| !predicate(entry))
    }

    /// Maps every entry through `transform` into a new sequence.
    ///
    /// `transform` sees the entry itself and returns the entry to store, so
    /// it may hand back a clone of the pointer it was given to keep that
    /// element's identity. Nil and empty input yield nil.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let names = RefSequence::of(["a".to_string(), "b".to_string()]);
    /// let upper_b = names.transform(|entry| match entry.as_deref() {
    ///     Some(name) if name == "b" => Some(ReferenceCounter::new(name.to_uppercase())),
    ///     _ => entry.clone(),
    /// });
    ///
    /// assert_eq!(upper_b, RefSequence::of(["a".to_string(), "B".to_string()]));
    /// assert!(upper_b.contains(names.get(0).unwrap()));
    /// ```
    pub fn transform<U, F>(&self, transform: F) -> RefSequence<U>
    where
        F: FnMut(&ElementRef<T>) -> ElementRef<U>,
    {
        RefSequence::nil_if_empty(self.iter().map(transform).collect())
    }

    /// Maps every record through `map` into a new sequence of fresh pointers.
    ///
    /// Each `Some` produced is placed behind a newly allocated pointer;
    /// `None` becomes a nil entry. Nil and empty input yield nil.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let names = RefSequence::of(["a".to_string(), "b".to_string()]);
    /// let upper = names.map_values(|name| name.map(|name| name.to_uppercase()));
    ///
    /// assert_eq!(upper, RefSequence::of(["A".to_string(), "B".to_string()]));
    /// assert_eq!(names, RefSequence::of(["a".to_string(), "b".to_string()]));
    /// ```
    pub fn map_values<U, F>(&self, mut map: F) -> RefSequence<U>
    where
        F: FnMut(Option<&T>) -> Option<U>,
    {
        self.transform(|entry| map(entry.as_deref()).map(ReferenceCounter::new))
    }

    /// Returns `true` if `predicate` holds for every entry.
    ///
    /// Vacuously `true` for nil and empty sequences.
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(Option<&T>) -> bool,
    {
        self.iter().all(|entry| predicate(entry.as_deref()))
    }

    /// Returns `true` if `predicate` holds for at least one entry.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(Option<&T>) -> bool,
    {
        self.iter().any(|entry| predicate(entry.as_deref()))
    }

    /// Calls `action` on every entry in order and returns `self` for chaining.
    pub fn each<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(Option<&T>),
    {
        for entry in self {
            action(entry.as_deref());
        }
        self
    }

    /// Returns the index of the first entry matching `predicate`.
    pub fn find_first_using<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(Option<&T>) -> bool,
    {
        self.iter().position(|entry| predicate(entry.as_deref()))
    }

    /// Renders every entry as text with `render`.
    pub fn strings_using<F>(&self, mut render: F) -> Vec<String>
    where
        F: FnMut(Option<&T>) -> String,
    {
        self.iter().map(|entry| render(entry.as_deref())).collect()
    }

    /// Returns the entry at the first position matching `predicate`.
    ///
    /// The outer `Option` reports whether anything matched.
    pub fn find_using<F>(&self, predicate: F) -> Option<ElementRef<T>>
    where
        F: FnMut(Option<&T>) -> bool,
    {
        self.find_first_using(predicate)
            .and_then(|index| self.get(index).cloned())
    }
}
