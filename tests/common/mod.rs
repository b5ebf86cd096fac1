//! Shared fixtures for the integration tests.
//!
//! `Car` is the reference record: two string fields, ordered by `name`, and
//! serialized with capitalized field names.
//!
//! Each test binary compiles this module on its own and uses a subset of it,
//! so helpers that some binaries skip carry `#[allow(dead_code)]`.

use refseq::prelude::*;
use rstest::fixture;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, OrderingKey)]
#[serde(rename_all = "PascalCase")]
pub struct Car {
    #[ordering_key]
    pub name: String,
    pub color: String,
}

/// Allocates a new car behind a new pointer.
#[allow(dead_code)]
pub fn car(name: &str, color: &str) -> ElementRef<Car> {
    Some(ReferenceCounter::new(Car {
        name: name.to_string(),
        color: color.to_string(),
    }))
}

/// Builds a sequence of freshly allocated cars.
#[allow(dead_code)]
pub fn cars(pairs: &[(&str, &str)]) -> RefSequence<Car> {
    pairs.iter().map(|(name, color)| car(name, color)).collect()
}

/// Three distinct cars plus a default-valued one, each allocated once so
/// tests can check identity against them.
#[allow(dead_code)]
pub struct Garage {
    pub a: ElementRef<Car>,
    pub b: ElementRef<Car>,
    pub c: ElementRef<Car>,
    pub empty: ElementRef<Car>,
}

impl Garage {
    #[allow(dead_code)]
    pub fn abc(&self) -> RefSequence<Car> {
        vec![self.a.clone(), self.b.clone(), self.c.clone()].into()
    }
}

#[fixture]
#[allow(dead_code)]
pub fn garage() -> Garage {
    Garage {
        a: car("a", "green"),
        b: car("b", "blue"),
        c: car("c", "gray"),
        empty: Some(ReferenceCounter::new(Car::default())),
    }
}

/// The four-car line-up used by the statistics, sorting and JSON tests.
#[allow(dead_code)]
pub fn lineup() -> RefSequence<Car> {
    cars(&[
        ("bar", "yellow"),
        ("Baz", "black"),
        ("qux", "cyan"),
        ("foo", "red"),
    ])
}

/// Everything observable about a sequence: its shape, the address of every
/// record and the record's contents.
#[derive(Debug, PartialEq)]
#[allow(dead_code)]
struct Snapshot {
    nil: bool,
    entries: Vec<Option<(usize, Car)>>,
}

#[allow(dead_code)]
fn snapshot(sequence: &RefSequence<Car>) -> Snapshot {
    Snapshot {
        nil: sequence.is_nil(),
        entries: sequence
            .iter()
            .map(|entry| {
                entry
                    .as_ref()
                    .map(|record| (ReferenceCounter::as_ptr(record) as usize, (**record).clone()))
            })
            .collect(),
    }
}

/// Runs `operation` on `sequence` and asserts the sequence and the records it
/// points at are exactly as before.
#[allow(dead_code)]
pub fn assert_unchanged<R>(
    sequence: &RefSequence<Car>,
    operation: impl FnOnce(&RefSequence<Car>) -> R,
) -> R {
    let before = snapshot(sequence);
    let result = operation(sequence);
    assert_eq!(snapshot(sequence), before, "operation modified its input");
    result
}

/// Every input shape the operations must handle.
#[allow(dead_code)]
pub fn shapes() -> Vec<RefSequence<Car>> {
    vec![
        RefSequence::nil(),
        RefSequence::new(),
        cars(&[("foo", "red")]),
        vec![car("a", "green"), None, car("c", "gray")].into(),
        lineup(),
    ]
}
