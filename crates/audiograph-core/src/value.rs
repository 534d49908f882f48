//! Opaque values carried by node properties and audio params.
//!
//! A [`Value`] is one of five primitive shapes the host understands. The model
//! never inspects them: no arithmetic, no coercion, no range checks. They only
//! pass through to the encoded tree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;

/// A primitive value attached to a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean flag (e.g. `loop`, `normalize`).
    Bool(bool),
    /// Double-precision number (most parameters).
    Float(f64),
    /// Ordered list of numbers (buffers, waveshaper curves, IIR coefficients).
    FloatList(Vec<f64>),
    /// Integer (e.g. `fftSize`).
    Int(i64),
    /// String (enumerated host options such as a filter `type`).
    String(String),
}

/// The primitive shape of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// See [`Value::Bool`].
    Bool,
    /// See [`Value::Float`].
    Float,
    /// See [`Value::FloatList`].
    FloatList,
    /// See [`Value::Int`].
    Int,
    /// See [`Value::String`].
    String,
}

impl ValueKind {
    /// Short lowercase name used in listings.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Float => "float",
            ValueKind::FloatList => "float list",
            ValueKind::Int => "int",
            ValueKind::String => "string",
        }
    }
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns the primitive shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Float(_) => ValueKind::Float,
            Value::FloatList(_) => ValueKind::FloatList,
            Value::Int(_) => ValueKind::Int,
            Value::String(_) => ValueKind::String,
        }
    }

    /// Encodes the value as a JSON value.
    ///
    /// Floats and ints both become JSON numbers. Non-finite floats have no
    /// JSON representation and encode as `null`.
    pub fn encode(&self) -> Json {
        match self {
            Value::Bool(b) => Json::Bool(*b),
            Value::Float(f) => Json::from(*f),
            Value::FloatList(list) => Json::Array(list.iter().map(|&f| Json::from(f)).collect()),
            Value::Int(i) => Json::from(*i),
            Value::String(s) => Json::String(s.clone()),
        }
    }
}

/// Wraps a boolean.
pub fn bool(value: bool) -> Value {
    Value::Bool(value)
}

/// Wraps a number.
pub fn float(value: f64) -> Value {
    Value::Float(value)
}

/// Wraps an ordered list of numbers.
pub fn float_list(values: impl Into<Vec<f64>>) -> Value {
    Value::FloatList(values.into())
}

/// Wraps an integer.
pub fn int(value: i64) -> Value {
    Value::Int(value)
}

/// Wraps a string.
pub fn string(value: impl Into<String>) -> Value {
    Value::String(value.into())
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Value::FloatList(values)
    }
}

impl From<&[f64]> for Value {
    fn from(values: &[f64]) -> Self {
        Value::FloatList(values.to_vec())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        crate::decode::decode_value(&json).map_err(serde::de::Error::custom)
    }
}
