#![cfg(all(feature = "arc", feature = "serde", feature = "derive"))]

//! Concurrent reads of one shared sequence.
//!
//! With the `arc` feature a `RefSequence` can be shared across threads, and
//! because no operation mutates it, every thread sees the same answers.

mod common;

use std::sync::Arc;
use std::thread;

use common::{Car, lineup};
use refseq::prelude::*;
use rstest::rstest;

fn assert_send_sync<T: Send + Sync>() {}

#[rstest]
fn test_sequence_is_send_and_sync() {
    assert_send_sync::<RefSequence<Car>>();
}

#[rstest]
fn test_concurrent_reads_agree() {
    let shared = Arc::new(lineup());
    let expected_sorted = shared.sort();
    let expected_json = shared.json_string();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sequence = Arc::clone(&shared);
            thread::spawn(move || (sequence.sort(), sequence.json_string(), sequence.min()))
        })
        .collect();

    for handle in handles {
        let (sorted, json, min) = handle.join().unwrap();
        assert_eq!(sorted, expected_sorted);
        assert_eq!(json, expected_json);
        assert_eq!(min.map(|record| record.name.clone()), Some("Baz".to_string()));
    }

    assert_eq!(*shared, lineup());
}
