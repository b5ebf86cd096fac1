//! Derive macros for refseq.
//!
//! This crate provides the [`OrderingKey`] derive macro, which marks one
//! field of a struct as the key that `RefSequence` uses for `min`, `max`,
//! `sort` and `are_sorted`.
//!
//! # Example
//!
//! ```rust,ignore
//! use refseq::element::OrderingKey;
//! use refseq_derive::OrderingKey;
//!
//! #[derive(Default, OrderingKey)]
//! struct Car {
//!     #[ordering_key]
//!     name: String,
//!     color: String,
//! }
//!
//! let car = Car { name: "bar".to_string(), color: "yellow".to_string() };
//! assert_eq!(car.ordering_key(), "bar");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod ordering_key;

use proc_macro::TokenStream;

/// Derive macro implementing `refseq::element::OrderingKey` for a struct.
///
/// Exactly one field must carry the `#[ordering_key]` attribute. The field's
/// type becomes the associated `Key` type and must implement `Ord`.
///
/// # Requirements
///
/// - The type must be a struct with named fields, or a tuple struct
/// - Exactly one field is annotated with `#[ordering_key]`
///
/// # Generated Code
///
/// For a field `name: String`, generates:
///
/// ```rust,ignore
/// impl ::refseq::element::OrderingKey for Car {
///     type Key = String;
///
///     fn ordering_key(&self) -> &Self::Key {
///         &self.name
///     }
/// }
/// ```
///
/// # Generics
///
/// Generic structs are supported; the generated impl carries the struct's
/// own bounds and where clause.
///
/// ```rust,ignore
/// #[derive(OrderingKey)]
/// struct Tagged<K: Ord> {
///     #[ordering_key]
///     key: K,
///     label: String,
/// }
/// ```
#[proc_macro_derive(OrderingKey, attributes(ordering_key))]
pub fn derive_ordering_key(input: TokenStream) -> TokenStream {
    ordering_key::derive_ordering_key_impl(input)
}
