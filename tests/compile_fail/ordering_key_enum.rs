//! Test that deriving OrderingKey for an enum produces a compile error.
#![allow(dead_code)]

use refseq::OrderingKey;

#[derive(OrderingKey)]
enum Shape {
    Circle,
    Square,
}

fn main() {}
