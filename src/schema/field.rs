//! Field definitions held by a mapping.

use std::sync::Arc;

use serde::Serialize;

use crate::analysis::analyzer::AnalyzerRegistry;
use crate::error::{KazoeError, Result};
use crate::schema::token_count::{TokenCountField, TokenCountFieldSpec};

/// Type name of text fields in mapping definitions.
pub const TEXT_TYPE: &str = "text";

/// Type name of token-count fields in mapping definitions.
pub const TOKEN_COUNT_TYPE: &str = "derived-token-count";

/// Analyzer used by text fields that do not name one.
pub const DEFAULT_TEXT_ANALYZER: &str = "standard";

/// Settings for a text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFieldSpec {
    /// Name of the analyzer for the field.
    pub analyzer: String,
}

impl TextFieldSpec {
    /// Create settings using the given analyzer.
    pub fn new<S: Into<String>>(analyzer: S) -> Self {
        TextFieldSpec {
            analyzer: analyzer.into(),
        }
    }
}

impl Default for TextFieldSpec {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_ANALYZER)
    }
}

/// A plain text field; the usual source of a token-count field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextField {
    name: String,
    analyzer: String,
}

impl TextField {
    /// Build a text field, resolving its analyzer.
    pub fn build<S: Into<String>>(
        name: S,
        spec: &TextFieldSpec,
        registry: &AnalyzerRegistry,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(KazoeError::schema("Field name cannot be empty"));
        }
        registry.resolve(&spec.analyzer)?;

        Ok(TextField {
            name,
            analyzer: spec.analyzer.clone(),
        })
    }

    /// Check that `incoming` can be merged into this field.
    ///
    /// A text field's analyzer cannot change once documents were analyzed
    /// with it.
    pub fn check_merge(&self, incoming: &TextFieldSpec) -> Result<()> {
        if incoming.analyzer != self.analyzer {
            return Err(KazoeError::merge_conflict(format!(
                "mapper [{}] has different [analyzer]: '{}' vs '{}'",
                self.name, self.analyzer, incoming.analyzer
            )));
        }
        Ok(())
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The analyzer name.
    pub fn analyzer(&self) -> &str {
        &self.analyzer
    }

    /// The settings that would rebuild this field.
    pub fn to_spec(&self) -> TextFieldSpec {
        TextFieldSpec::new(self.analyzer.clone())
    }
}

/// Settings for any field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum FieldSpec {
    /// A text field.
    #[serde(rename = "text")]
    Text(TextFieldSpec),
    /// A derived token-count field.
    #[serde(rename = "derived-token-count")]
    TokenCount(TokenCountFieldSpec),
}

impl FieldSpec {
    /// The type name as written in mapping definitions.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldSpec::Text(_) => TEXT_TYPE,
            FieldSpec::TokenCount(_) => TOKEN_COUNT_TYPE,
        }
    }
}

impl From<TextFieldSpec> for FieldSpec {
    fn from(spec: TextFieldSpec) -> Self {
        FieldSpec::Text(spec)
    }
}

impl From<TokenCountFieldSpec> for FieldSpec {
    fn from(spec: TokenCountFieldSpec) -> Self {
        FieldSpec::TokenCount(spec)
    }
}

/// A field definition inside a mapping generation.
///
/// Definitions are shared between generations through [`Arc`].
#[derive(Debug, Clone)]
pub enum FieldMapping {
    /// A text field.
    Text(Arc<TextField>),
    /// A derived token-count field.
    TokenCount(Arc<TokenCountField>),
}

impl FieldMapping {
    /// Build a fresh definition named `name` from `spec`.
    pub fn build(name: &str, spec: &FieldSpec, registry: &AnalyzerRegistry) -> Result<Self> {
        Ok(match spec {
            FieldSpec::Text(spec) => FieldMapping::Text(Arc::new(TextField::build(
                name, spec, registry,
            )?)),
            FieldSpec::TokenCount(spec) => FieldMapping::TokenCount(Arc::new(
                TokenCountField::build(name, spec, registry)?,
            )),
        })
    }

    /// Merge `incoming` into this definition.
    ///
    /// Text fields keep their shared definition when nothing changes;
    /// token-count fields always get a new one.
    pub fn merge(&self, incoming: &FieldSpec, registry: &AnalyzerRegistry) -> Result<Self> {
        match (self, incoming) {
            (FieldMapping::Text(current), FieldSpec::Text(spec)) => {
                current.check_merge(spec)?;
                Ok(FieldMapping::Text(Arc::clone(current)))
            }
            (FieldMapping::TokenCount(current), FieldSpec::TokenCount(spec)) => Ok(
                FieldMapping::TokenCount(Arc::new(current.merge(spec, registry)?)),
            ),
            (current, incoming) => Err(KazoeError::merge_conflict(format!(
                "mapper [{}] cannot be changed from type [{}] to [{}]",
                current.name(),
                current.type_name(),
                incoming.type_name()
            ))),
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        match self {
            FieldMapping::Text(field) => field.name(),
            FieldMapping::TokenCount(field) => field.name(),
        }
    }

    /// The type name as written in mapping definitions.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldMapping::Text(_) => TEXT_TYPE,
            FieldMapping::TokenCount(_) => TOKEN_COUNT_TYPE,
        }
    }

    /// The text field, if this is one.
    pub fn as_text(&self) -> Option<&Arc<TextField>> {
        match self {
            FieldMapping::Text(field) => Some(field),
            _ => None,
        }
    }

    /// The token-count field, if this is one.
    pub fn as_token_count(&self) -> Option<&Arc<TokenCountField>> {
        match self {
            FieldMapping::TokenCount(field) => Some(field),
            _ => None,
        }
    }

    /// The settings that would rebuild this definition.
    pub fn to_spec(&self) -> FieldSpec {
        match self {
            FieldMapping::Text(field) => FieldSpec::Text(field.to_spec()),
            FieldMapping::TokenCount(field) => FieldSpec::TokenCount(field.to_spec()),
        }
    }
}
