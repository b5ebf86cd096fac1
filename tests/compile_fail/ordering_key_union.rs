//! Test that deriving OrderingKey for a union produces a compile error.
#![allow(dead_code)]

use refseq::OrderingKey;

#[derive(OrderingKey)]
union Bits {
    whole: u32,
    halves: [u16; 2],
}

fn main() {}
