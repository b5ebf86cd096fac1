//! Test that marking two fields with #[ordering_key] produces a compile error.
#![allow(dead_code)]

use refseq::OrderingKey;

#[derive(OrderingKey)]
struct Person {
    #[ordering_key] first: String,
    #[ordering_key] last: String,
}

fn main() {}
