//! Element references and the strategies used to compare them.
//!
//! A sequence never stores records directly. It stores [`ElementRef`]s,
//! shared pointers that may be absent, so two notions of "the same element"
//! exist side by side:
//!
//! - **Identity**: both references point at the same allocation
//!   ([`same_element`]). Membership tests use this.
//! - **Ordering key**: the records compare by one designated field
//!   ([`OrderingKey`], [`compare_by_key`]). `min`, `max` and `sort` use this.
//!
//! [`equal_contents`] is the structural alternative for callers that want
//! membership by value through `RefSequence::contains_by`.
//!
//! # Examples
//!
//! ```rust
//! use refseq::element::{ReferenceCounter, equal_contents, same_element};
//!
//! let original = Some(ReferenceCounter::new(String::from("a")));
//! let copy = Some(ReferenceCounter::new(String::from("a")));
//!
//! assert!(same_element(&original, &original.clone()));
//! assert!(!same_element(&original, &copy));
//! assert!(equal_contents(&original, &copy));
//! ```

use std::cmp::Ordering;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets sequences be shared across threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets sequences be shared across threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

/// A possibly absent shared reference to an element.
///
/// `None` is the nil reference. It is a value of its own and is never
/// confused with a reference to a default-constructed record.
pub type ElementRef<T> = Option<ReferenceCounter<T>>;

// =============================================================================
// OrderingKey
// =============================================================================

/// A record that designates one of its fields as its ordering key.
///
/// The key is what `RefSequence::min`, `max`, `sort` and `are_sorted`
/// compare. Keys are compared with their `Ord` implementation, so a `String`
/// or `str` key orders byte-wise: `"Baz" < "bar"`.
///
/// With the `derive` feature, `#[derive(OrderingKey)]` generates this impl
/// from a field marked `#[ordering_key]`.
///
/// # Examples
///
/// ```rust
/// use refseq::element::OrderingKey;
///
/// struct Car {
///     name: String,
///     color: String,
/// }
///
/// impl OrderingKey for Car {
///     type Key = str;
///
///     fn ordering_key(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let car = Car { name: "foo".to_string(), color: "red".to_string() };
/// assert_eq!(car.ordering_key(), "foo");
/// ```
pub trait OrderingKey {
    /// The type of the key field.
    type Key: Ord + ?Sized;

    /// Returns a reference to the key field.
    fn ordering_key(&self) -> &Self::Key;
}

// =============================================================================
// Strategies
// =============================================================================

/// Identity equality: true iff both references are nil, or both point at the
/// same allocation.
///
/// A nil reference never equals a reference to a default-valued record.
#[inline]
pub fn same_element<T>(left: &ElementRef<T>, right: &ElementRef<T>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
        _ => false,
    }
}

/// Structural equality: true iff both references are nil, or both records
/// compare equal by value.
#[inline]
pub fn equal_contents<T: PartialEq>(left: &ElementRef<T>, right: &ElementRef<T>) -> bool {
    left == right
}

/// Compares two possibly absent records by their ordering keys.
///
/// Nil orders before every record.
#[inline]
pub fn compare_by_key<T: OrderingKey + ?Sized>(left: Option<&T>, right: Option<&T>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => left.ordering_key().cmp(right.ordering_key()),
    }
}

/// Returns a reference to a freshly allocated default record.
///
/// Used as the fallback for `first`, `last`, `min` and `max` so that those
/// never hand back nil for an empty sequence.
#[inline]
#[must_use]
pub fn zero_element<T: Default>() -> ElementRef<T> {
    Some(ReferenceCounter::new(T::default()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Default, PartialEq)]
    struct Label {
        text: String,
    }

    impl OrderingKey for Label {
        type Key = str;

        fn ordering_key(&self) -> &str {
            &self.text
        }
    }

    fn label(text: &str) -> ElementRef<Label> {
        Some(ReferenceCounter::new(Label {
            text: text.to_string(),
        }))
    }

    #[rstest]
    fn test_same_element_nil_matches_nil() {
        assert!(same_element::<Label>(&None, &None));
    }

    #[rstest]
    fn test_same_element_nil_does_not_match_zero_value() {
        let zero = zero_element::<Label>();
        assert!(!same_element(&None, &zero));
        assert!(!same_element(&zero, &None));
    }

    #[rstest]
    fn test_same_element_clone_of_pointer_matches() {
        let original = label("a");
        let shared = original.clone();
        assert!(same_element(&original, &shared));
    }

    #[rstest]
    fn test_same_element_equal_copy_does_not_match() {
        assert!(!same_element(&label("a"), &label("a")));
    }

    #[rstest]
    fn test_equal_contents_equal_copy_matches() {
        assert!(equal_contents(&label("a"), &label("a")));
        assert!(!equal_contents(&label("a"), &label("b")));
        assert!(!equal_contents(&None, &zero_element::<Label>()));
    }

    #[rstest]
    #[case("Baz", "bar", Ordering::Less)]
    #[case("bar", "Baz", Ordering::Greater)]
    #[case("foo", "foo", Ordering::Equal)]
    fn test_compare_by_key_is_byte_wise(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        let left = Label {
            text: left.to_string(),
        };
        let right = Label {
            text: right.to_string(),
        };
        assert_eq!(compare_by_key(Some(&left), Some(&right)), expected);
    }

    #[rstest]
    fn test_compare_by_key_nil_orders_first() {
        let record = Label::default();
        assert_eq!(compare_by_key(None, Some(&record)), Ordering::Less);
        assert_eq!(compare_by_key(Some(&record), None), Ordering::Greater);
        assert_eq!(compare_by_key::<Label>(None, None), Ordering::Equal);
    }

    #[rstest]
    fn test_zero_element_is_fresh_default() {
        let first = zero_element::<Label>();
        let second = zero_element::<Label>();
        assert_eq!(first.as_deref(), Some(&Label::default()));
        assert!(!same_element(&first, &second));
    }

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
