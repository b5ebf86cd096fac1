//! Test that deriving OrderingKey for a unit struct produces a compile error.
#![allow(dead_code)]

use refseq::OrderingKey;

#[derive(OrderingKey)]
struct Marker;

fn main() {}
