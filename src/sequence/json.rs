//! JSON text and serde support.
//!
//! A sequence serializes as an array with one item per entry, nil entries as
//! `null`. Both the nil and the empty sequence serialize to `[]`, never to
//! `null`. Deserialization is the other way round: `null` gives the nil
//! sequence and `[]` the empty one.

use tracing::{debug, warn};

use super::RefSequence;
use crate::element::{ElementRef, ReferenceCounter};
use crate::error::SequenceError;

impl<T: serde::Serialize> RefSequence<T> {
    /// Returns the sequence as compact JSON text.
    ///
    /// Nil and empty sequences give `[]`. If an element fails to serialize
    /// the failure is logged and an empty string is returned; use
    /// [`to_json_string`](Self::to_json_string) to observe the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// #[derive(serde::Serialize)]
    /// #[serde(rename_all = "PascalCase")]
    /// struct Car {
    ///     name: String,
    ///     color: String,
    /// }
    ///
    /// let cars = RefSequence::of([Car { name: "foo".to_string(), color: "red".to_string() }]);
    /// assert_eq!(cars.json_string(), r#"[{"Name":"foo","Color":"red"}]"#);
    /// assert_eq!(RefSequence::<Car>::nil().json_string(), "[]");
    /// ```
    #[must_use]
    pub fn json_string(&self) -> String {
        match self.to_json_string() {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, entries = self.len(), "sequence could not be serialized");
                String::new()
            }
        }
    }

    /// Returns the sequence as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Serialize`] if an element's `Serialize`
    /// implementation fails.
    pub fn to_json_string(&self) -> Result<String, SequenceError> {
        serde_json::to_string(self).map_err(SequenceError::Serialize)
    }

    /// Returns the sequence as compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Serialize`] if an element's `Serialize`
    /// implementation fails.
    pub fn json_bytes(&self) -> Result<Vec<u8>, SequenceError> {
        serde_json::to_vec(self).map_err(SequenceError::Serialize)
    }
}

impl<T: serde::de::DeserializeOwned> RefSequence<T> {
    /// Parses a sequence from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Deserialize`] if `text` is neither `null` nor
    /// an array of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refseq::prelude::*;
    ///
    /// let parsed = RefSequence::<i32>::from_json_str("[1,null,3]").unwrap();
    /// assert_eq!(parsed.len(), 3);
    /// assert_eq!(parsed.get(1), Some(&None));
    /// assert!(RefSequence::<i32>::from_json_str("null").unwrap().is_nil());
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, SequenceError> {
        serde_json::from_str(text).map_err(|error| {
            debug!(%error, "sequence could not be deserialized");
            SequenceError::Deserialize(error)
        })
    }
}

// =============================================================================
// serde Implementations
// =============================================================================

impl<T: serde::Serialize> serde::Serialize for RefSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self {
            seq.serialize_element(&entry.as_deref())?;
        }
        seq.end()
    }
}

struct RefSequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

impl<T> RefSequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

impl<'de, T> serde::de::Visitor<'de> for RefSequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = RefSequence<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence or null")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(RefSequence::nil())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(RefSequence::nil())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut entries: Vec<ElementRef<T>> = Vec::with_capacity(capacity);
        while let Some(entry) = seq.next_element::<Option<T>>()? {
            entries.push(entry.map(ReferenceCounter::new));
        }
        Ok(RefSequence::from_entries(entries))
    }
}

impl<'de, T> serde::Deserialize<'de> for RefSequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_option(RefSequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
