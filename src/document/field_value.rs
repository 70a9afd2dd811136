//! Scalar field values.
//!
//! Documents hold JSON scalars only. A token-count field reads its source
//! value through [`FieldValue::as_analyzable_text`]:
//!
//! | Value | Text analyzed |
//! | --- | --- |
//! | `Text("a b")` | `a b` |
//! | `Integer(42)` | `42` |
//! | `Float(1.5)` | `1.5` |
//! | `Boolean(true)` | `true` |
//! | `Null` | none, `nullValue` applies |
//!
//! ```
//! use kazoe::document::field_value::FieldValue;
//! use serde_json::json;
//!
//! assert_eq!(FieldValue::from_json(&json!(42)).unwrap(), FieldValue::Integer(42));
//! assert!(FieldValue::from_json(&json!([1, 2])).is_err());
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{KazoeError, Result};

/// One scalar value. Serializes as the bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Convert a JSON scalar. Arrays and objects are a `Field` error.
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => FieldValue::Integer(i),
                (None, Some(f)) => FieldValue::Float(f),
                (None, None) => {
                    return Err(KazoeError::field(format!("Number {n} is out of range")));
                }
            },
            Value::Array(_) | Value::Object(_) => {
                return Err(KazoeError::field(format!("Expected a scalar, got {value}")));
            }
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The text an analyzer sees for this value; `None` for null.
    pub fn as_analyzable_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(text) => Some(Cow::Borrowed(text)),
            FieldValue::Boolean(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            FieldValue::Integer(i) => Some(Cow::Owned(i.to_string())),
            FieldValue::Float(f) => Some(Cow::Owned(f.to_string())),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}
