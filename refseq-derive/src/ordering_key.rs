//! Implementation of the `#[derive(OrderingKey)]` macro.
//!
//! This module locates the single field annotated with `#[ordering_key]`
//! and generates an `OrderingKey` impl that borrows it.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Index, Member, parse_macro_input};

const ATTRIBUTE_NAME: &str = "ordering_key";

/// Main implementation of the `OrderingKey` derive macro.
pub fn derive_ordering_key_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_ordering_key(&input, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "OrderingKey can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "OrderingKey cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn key_attribute(field: &Field) -> Option<&Attribute> {
    field
        .attrs
        .iter()
        .find(|attribute| attribute.path().is_ident(ATTRIBUTE_NAME))
}

/// Finds the annotated field and returns how to reach it from `self`.
fn find_key_member<'a>(name: &Ident, fields: &'a Fields) -> Result<(Member, &'a Field), syn::Error> {
    let mut candidates = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| key_attribute(field).is_some());

    let Some((position, field)) = candidates.next() else {
        return Err(syn::Error::new_spanned(
            name,
            "OrderingKey requires exactly one field marked with #[ordering_key].",
        ));
    };

    if let Some((_, duplicate)) = candidates.next() {
        return Err(syn::Error::new_spanned(
            key_attribute(duplicate),
            "Only one field may be marked with #[ordering_key].",
        ));
    }

    let member = field.ident.as_ref().map_or_else(
        || Member::Unnamed(Index::from(position)),
        |identifier| Member::Named(identifier.clone()),
    );

    Ok((member, field))
}

fn generate_ordering_key(input: &DeriveInput, fields: &Fields) -> TokenStream2 {
    let name = &input.ident;

    if matches!(fields, Fields::Unit) {
        return syn::Error::new_spanned(
            name,
            "OrderingKey cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error();
    }

    let (member, field) = match find_key_member(name, fields) {
        Ok(found) => found,
        Err(error) => return error.to_compile_error(),
    };
    let key_type = &field.ty;

    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::refseq::element::OrderingKey for #name #type_generics #where_clause {
            type Key = #key_type;

            #[inline]
            fn ordering_key(&self) -> &Self::Key {
                &self.#member
            }
        }
    }
}
