//! Flat documents of scalar field values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::field_value::FieldValue;
use crate::error::{KazoeError, Result};

/// Field name to value, serialized as a plain JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Parse one JSON object. Nested arrays and objects are a `Field` error
    /// naming the offending field.
    pub fn from_json(json: &str) -> Result<Self> {
        let Value::Object(object) = serde_json::from_str::<Value>(json)? else {
            return Err(KazoeError::field("Document must be a JSON object"));
        };

        object
            .iter()
            .map(|(name, value)| {
                FieldValue::from_json(value)
                    .map(|value| (name.clone(), value))
                    .map_err(|e| KazoeError::field(format!("Field '{name}': {e}")))
            })
            .collect()
    }

    /// Set a field, returning the value it replaced.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(name.into(), value)
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Document {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Fluent construction of a [`Document`].
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    pub fn text<S: Into<String>, T: Into<String>>(self, name: S, text: T) -> Self {
        self.value(name, FieldValue::Text(text.into()))
    }

    pub fn integer<S: Into<String>>(self, name: S, value: i64) -> Self {
        self.value(name, FieldValue::Integer(value))
    }

    pub fn value<S: Into<String>, V: Into<FieldValue>>(mut self, name: S, value: V) -> Self {
        self.document.insert(name, value.into());
        self
    }

    pub fn build(self) -> Document {
        self.document
    }
}
