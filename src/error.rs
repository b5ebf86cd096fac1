//! Error types for sequence serialization.
//!
//! The sequence operations themselves are total and never fail. Only the
//! fallible JSON entry points (`to_json_string`, `json_bytes`,
//! `from_json_str`) report errors, and only because an element's serde
//! implementation or the input text can.

/// Represents errors that can occur while converting a sequence to or from
/// JSON.
///
/// # Examples
///
/// ```rust
/// use refseq::prelude::*;
///
/// let error = RefSequence::<i32>::from_json_str("{").unwrap_err();
/// assert!(matches!(error, SequenceError::Deserialize(_)));
/// assert!(error.to_string().starts_with("failed to deserialize sequence"));
/// ```
#[derive(Debug)]
pub enum SequenceError {
    /// An element could not be serialized.
    Serialize(serde_json::Error),
    /// The input was not a JSON array of elements (or `null`).
    Deserialize(serde_json::Error),
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(error) => write!(formatter, "failed to serialize sequence: {error}"),
            Self::Deserialize(error) => {
                write!(formatter, "failed to deserialize sequence: {error}")
            }
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(error) | Self::Deserialize(error) => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    fn syntax_error() -> serde_json::Error {
        serde_json::from_str::<Vec<i32>>("[1,").unwrap_err()
    }

    #[rstest]
    fn test_display_names_direction() {
        let serialize = SequenceError::Serialize(syntax_error());
        let deserialize = SequenceError::Deserialize(syntax_error());
        assert!(serialize.to_string().starts_with("failed to serialize sequence: "));
        assert!(deserialize.to_string().starts_with("failed to deserialize sequence: "));
    }

    #[rstest]
    fn test_source_is_the_serde_error() {
        let error = SequenceError::Deserialize(syntax_error());
        let source = error.source().map(ToString::to_string);
        assert_eq!(source, Some(syntax_error().to_string()));
    }
}
