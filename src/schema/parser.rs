//! Mapping definition parser.
//!
//! Reads the JSON mapping format:
//!
//! ```json
//! {
//!   "properties": {
//!     "body": { "type": "text", "analyzer": "standard" },
//!     "body_length": {
//!       "type": "derived-token-count",
//!       "sourceField": "body",
//!       "analyzer": "standard",
//!       "countPositionsWithIncrements": true,
//!       "nullValue": 0
//!     }
//!   }
//! }
//! ```
//!
//! A malformed `countPositionsWithIncrements` fails with
//! [`KazoeError::InvalidCountingMode`]; every other structural problem is a
//! [`KazoeError::Schema`] error.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::analysis::position::CountingMode;
use crate::error::{KazoeError, Result};
use crate::schema::config::MappingConfig;
use crate::schema::field::{
    DEFAULT_TEXT_ANALYZER, FieldSpec, TEXT_TYPE, TOKEN_COUNT_TYPE, TextFieldSpec,
};
use crate::schema::mapping::MappingSpec;
use crate::schema::token_count::TokenCountFieldSpec;

/// Parse a mapping definition from JSON text.
pub fn parse_mapping(json: &str, config: &MappingConfig) -> Result<MappingSpec> {
    let value: Value = serde_json::from_str(json)?;
    parse_mapping_value(&value, config)
}

/// Parse a mapping definition from a JSON value.
pub fn parse_mapping_value(value: &Value, config: &MappingConfig) -> Result<MappingSpec> {
    let root = value
        .as_object()
        .ok_or_else(|| KazoeError::schema("Mapping must be a JSON object"))?;

    let Some(properties) = root.get("properties") else {
        return Ok(MappingSpec::new());
    };
    let properties = properties
        .as_object()
        .ok_or_else(|| KazoeError::schema("[properties] must be a JSON object"))?;

    let mut fields = BTreeMap::new();
    for (name, field) in properties {
        let spec = parse_field(name, field, config)?;
        fields.insert(name.clone(), spec);
    }

    Ok(MappingSpec { properties: fields })
}

/// Parse one field definition.
pub fn parse_field(name: &str, value: &Value, config: &MappingConfig) -> Result<FieldSpec> {
    let object = value
        .as_object()
        .ok_or_else(|| KazoeError::schema(format!("Field [{name}] must be a JSON object")))?;

    let field_type = object
        .get("type")
        .ok_or_else(|| KazoeError::schema(format!("No type specified for field [{name}]")))?
        .as_str()
        .ok_or_else(|| KazoeError::schema(format!("[type] of field [{name}] must be a string")))?;

    match field_type {
        TEXT_TYPE => {
            let analyzer = optional_string(name, object, "analyzer")?
                .unwrap_or(DEFAULT_TEXT_ANALYZER)
                .to_string();
            Ok(FieldSpec::Text(TextFieldSpec { analyzer }))
        }
        TOKEN_COUNT_TYPE => {
            let source_field = required_string(name, object, "sourceField")?;
            let analyzer = required_string(name, object, "analyzer")?;
            let counting_mode = match object.get("countPositionsWithIncrements") {
                Some(flag) => parse_counting_mode(flag)?,
                None => config.default_counting_mode,
            };
            let null_value = match object.get("nullValue") {
                None | Some(Value::Null) => None,
                Some(value) => Some(value.as_i64().ok_or_else(|| {
                    KazoeError::schema(format!(
                        "[nullValue] of field [{name}] must be an integer, got {value}"
                    ))
                })?),
            };

            Ok(FieldSpec::TokenCount(TokenCountFieldSpec {
                source_field,
                analyzer,
                counting_mode,
                null_value,
            }))
        }
        other => Err(KazoeError::schema(format!(
            "No handler for type [{other}] declared on field [{name}]"
        ))),
    }
}

/// Read the `countPositionsWithIncrements` flag.
///
/// Accepts JSON booleans and the strings `"true"` and `"false"`.
pub fn parse_counting_mode(value: &Value) -> Result<CountingMode> {
    match value {
        Value::Bool(flag) => Ok(CountingMode::from_flag(*flag)),
        Value::String(s) if s == "true" => Ok(CountingMode::WithIncrements),
        Value::String(s) if s == "false" => Ok(CountingMode::WithoutIncrements),
        other => Err(KazoeError::invalid_counting_mode(format!(
            "[countPositionsWithIncrements] must be a boolean, got {other}"
        ))),
    }
}

fn optional_string<'a>(
    field: &str,
    object: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(KazoeError::schema(format!(
            "[{key}] of field [{field}] must be a string, got {other}"
        ))),
    }
}

fn required_string(field: &str, object: &Map<String, Value>, key: &str) -> Result<String> {
    optional_string(field, object, key)?
        .map(str::to_string)
        .ok_or_else(|| KazoeError::schema(format!("Field [{field}] requires [{key}]")))
}
