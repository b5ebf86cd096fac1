//! # refseq
//!
//! Immutable utility operations over ordered sequences of shared element
//! references.
//!
//! ## Overview
//!
//! [`RefSequence`](sequence::RefSequence) holds an ordered list of
//! [`ElementRef`](element::ElementRef)s: reference-counted pointers to a
//! record, any of which may be absent (nil). It offers a fluent vocabulary
//! for the list manipulations that otherwise end up as hand-written loops:
//!
//! - **Membership**: `contains` by identity, `contains_by` with any equality
//! - **Filtering and mapping**: `select`, `unselect`, `transform`
//! - **Positional access**: `first`, `last`, `top`, `bottom`, `sub_slice`
//! - **Statistics**: `len`, `min`, `max`
//! - **Ordering**: `sort`, `are_sorted`, `reverse`
//! - **Serialization**: `json_string` and a serde implementation
//!
//! Every operation borrows the sequence and returns new storage; the
//! receiver and the records it points at are never modified.
//!
//! ## Feature Flags
//!
//! - `serde`: JSON serialization and deserialization (enabled by default)
//! - `arc`: use `Arc` instead of `Rc` for element pointers (enabled by default)
//! - `derive`: re-export `#[derive(OrderingKey)]` (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use refseq::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Car {
//!     name: String,
//! }
//!
//! impl OrderingKey for Car {
//!     type Key = str;
//!
//!     fn ordering_key(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! let cars = RefSequence::of(["bar", "Baz", "qux"].map(|name| Car { name: name.to_string() }));
//! let sorted = cars.sort();
//!
//! assert_eq!(sorted.first().map(|car| car.name.clone()), Some("Baz".to_string()));
//! assert!(!cars.are_sorted()); // Original unchanged
//! assert!(sorted.are_sorted());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use refseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::element::{ElementRef, OrderingKey, ReferenceCounter};
    pub use crate::sequence::RefSequence;

    #[cfg(feature = "serde")]
    pub use crate::error::SequenceError;

    #[cfg(feature = "derive")]
    pub use refseq_derive::OrderingKey;
}

pub mod element;
pub mod sequence;

#[cfg(feature = "serde")]
pub mod error;

#[cfg(feature = "derive")]
pub use refseq_derive::OrderingKey;
