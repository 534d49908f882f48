//! Error types for decoding encoded graphs.
//!
//! Building and encoding graphs cannot fail. Only reading the wire format back
//! in can, when the input does not have the shape [`encode`](crate::Node::encode)
//! produces.

use thiserror::Error;

/// A wire-format input that could not be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {kind}")]
pub struct DecodeError {
    /// Location of the offending element, e.g. `$[0].connections[1].properties[0]`.
    pub path: String,
    /// What was wrong with it.
    pub kind: DecodeErrorKind,
}

/// The ways an element can fail to decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeErrorKind {
    /// Element had the wrong JSON type.
    #[error("expected {expected}, found {found}")]
    WrongType {
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type actually present.
        found: &'static str,
    },

    /// A required field is absent.
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// Property `type` is not one of the three known tags.
    #[error("unknown property type '{0}'")]
    UnknownPropertyType(String),

    /// Scheduled update `method` is not a known method name.
    #[error("unknown scheduling method '{0}'")]
    UnknownMethod(String),

    /// A value that none of the value kinds can hold (null, object, mixed array).
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),
}

impl DecodeError {
    /// Create an error at `path`.
    pub fn new(path: impl Into<String>, kind: DecodeErrorKind) -> Self {
        DecodeError {
            path: path.into(),
            kind,
        }
    }

    /// Create a wrong-type error.
    pub fn wrong_type(path: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::new(path, DecodeErrorKind::WrongType { expected, found })
    }

    /// Create a missing-field error.
    pub fn missing_field(path: impl Into<String>, field: &'static str) -> Self {
        Self::new(path, DecodeErrorKind::MissingField(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn wrong_type_display() {
        let err = DecodeError::wrong_type("$[0]", "object", "string");
        assert_eq!(err.to_string(), "$[0]: expected object, found string");
    }

    #[test]
    fn missing_field_display() {
        let err = DecodeError::missing_field("$[2].properties[0]", "label");
        assert_eq!(err.to_string(), "$[2].properties[0]: missing field 'label'");
    }

    #[test]
    fn unknown_method_display() {
        let err = DecodeError::new(
            "$[0].properties[0].value",
            DecodeErrorKind::UnknownMethod("setTargetAtTime".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "$[0].properties[0].value: unknown scheduling method 'setTargetAtTime'"
        );
    }

    #[test]
    fn source_is_none() {
        let err = DecodeError::missing_field("$", "type");
        assert!(err.source().is_none());
    }
}
