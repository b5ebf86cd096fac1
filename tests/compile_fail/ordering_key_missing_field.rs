//! Test that a struct without an #[ordering_key] field produces a compile error.
#![allow(dead_code)]

use refseq::OrderingKey;

#[derive(OrderingKey)]
struct Person {
    name: String,
}

fn main() {}
