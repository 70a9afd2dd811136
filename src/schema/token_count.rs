//! Derived token-count field definitions.
//!
//! A token-count field is not supplied by documents. Its value is the number
//! of positions an analyzer produces for another field's text. The definition
//! is immutable: redefining it through [`TokenCountField::merge`] yields a new
//! definition and leaves the receiver, and everything already computed with
//! it, untouched.
//!
//! # Examples
//!
//! ```
//! use kazoe::analysis::analyzer::AnalyzerRegistry;
//! use kazoe::schema::token_count::{TokenCountField, TokenCountFieldSpec};
//!
//! let registry = AnalyzerRegistry::with_builtin().unwrap();
//!
//! let stage1 = TokenCountField::build(
//!     "body_length",
//!     &TokenCountFieldSpec::new("body", "keyword"),
//!     &registry,
//! )
//! .unwrap();
//! let stage2 = stage1
//!     .merge(&TokenCountFieldSpec::new("body", "standard"), &registry)
//!     .unwrap();
//!
//! assert_eq!(stage1.analyzer(), "keyword");
//! assert_eq!(stage2.analyzer(), "standard");
//! assert_eq!(stage1.count(&registry, "quick brown fox").unwrap(), 1);
//! assert_eq!(stage2.count(&registry, "quick brown fox").unwrap(), 3);
//! ```

use log::{debug, warn};
use serde::Serialize;

use crate::analysis::analyzer::AnalyzerRegistry;
use crate::analysis::position::{CountingMode, count_positions};
use crate::document::field_value::FieldValue;
use crate::error::{KazoeError, Result};

/// Settings for a token-count field, as written in a mapping definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCountFieldSpec {
    /// Field whose text is analyzed.
    pub source_field: String,
    /// Name of the analyzer to count with.
    pub analyzer: String,
    /// How positions are counted.
    #[serde(rename = "countPositionsWithIncrements")]
    pub counting_mode: CountingMode,
    /// Value indexed when the source value is missing or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub null_value: Option<i64>,
}

impl TokenCountFieldSpec {
    /// Create settings with the default counting mode and no null value.
    pub fn new<S: Into<String>, A: Into<String>>(source_field: S, analyzer: A) -> Self {
        TokenCountFieldSpec {
            source_field: source_field.into(),
            analyzer: analyzer.into(),
            counting_mode: CountingMode::default(),
            null_value: None,
        }
    }

    /// Set the counting mode.
    pub fn with_counting_mode(mut self, mode: CountingMode) -> Self {
        self.counting_mode = mode;
        self
    }

    /// Set the null value.
    pub fn with_null_value(mut self, null_value: i64) -> Self {
        self.null_value = Some(null_value);
        self
    }
}

/// An immutable token-count field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCountField {
    name: String,
    source_field: String,
    analyzer: String,
    counting_mode: CountingMode,
    null_value: Option<i64>,
}

impl TokenCountField {
    /// Build a definition named `name` from `spec`.
    ///
    /// The analyzer name is resolved against `registry` immediately; an
    /// unknown name fails with [`KazoeError::InvalidAnalyzerReference`].
    pub fn build<S: Into<String>>(
        name: S,
        spec: &TokenCountFieldSpec,
        registry: &AnalyzerRegistry,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(KazoeError::schema("Field name cannot be empty"));
        }
        if spec.source_field.is_empty() {
            return Err(KazoeError::schema(format!(
                "Field '{name}' must name a source field"
            )));
        }
        registry.resolve(&spec.analyzer)?;

        Ok(TokenCountField {
            name,
            source_field: spec.source_field.clone(),
            analyzer: spec.analyzer.clone(),
            counting_mode: spec.counting_mode,
            null_value: spec.null_value,
        })
    }

    /// Produce the definition that replaces this one under `incoming`.
    ///
    /// Analyzer, counting mode and null value are taken from `incoming`; the
    /// name and source field are kept. `self` is never modified, and nothing
    /// is produced when `incoming` names an unknown analyzer.
    pub fn merge(
        &self,
        incoming: &TokenCountFieldSpec,
        registry: &AnalyzerRegistry,
    ) -> Result<TokenCountField> {
        registry.resolve(&incoming.analyzer)?;

        if incoming.source_field != self.source_field {
            warn!(
                "Ignoring source field change for '{}': keeping '{}', not '{}'",
                self.name, self.source_field, incoming.source_field
            );
        }

        debug!(
            "Merged token count field '{}': analyzer {} -> {}, mode {} -> {}",
            self.name, self.analyzer, incoming.analyzer, self.counting_mode, incoming.counting_mode
        );

        Ok(TokenCountField {
            name: self.name.clone(),
            source_field: self.source_field.clone(),
            analyzer: incoming.analyzer.clone(),
            counting_mode: incoming.counting_mode,
            null_value: incoming.null_value,
        })
    }

    /// Count the positions of `text` with this field's analyzer and mode.
    pub fn count(&self, registry: &AnalyzerRegistry, text: &str) -> Result<usize> {
        let analyzer = registry.resolve(&self.analyzer)?;
        count_positions(analyzer.as_ref(), &self.name, text, self.counting_mode)
    }

    /// Compute the value this field indexes for a source value.
    ///
    /// Returns the null value (possibly `None`) when the source is missing or
    /// null. Non-text values are counted over their textual form.
    pub fn parse_value(
        &self,
        registry: &AnalyzerRegistry,
        value: Option<&FieldValue>,
    ) -> Result<Option<i64>> {
        let Some(text) = value.and_then(FieldValue::as_analyzable_text) else {
            return Ok(self.null_value);
        };

        let count = self.count(registry, &text)?;
        let count = i64::try_from(count).map_err(|_| {
            KazoeError::field(format!("Token count {count} overflows field '{}'", self.name))
        })?;
        Ok(Some(count))
    }

    /// The settings that would rebuild this definition.
    pub fn to_spec(&self) -> TokenCountFieldSpec {
        TokenCountFieldSpec {
            source_field: self.source_field.clone(),
            analyzer: self.analyzer.clone(),
            counting_mode: self.counting_mode,
            null_value: self.null_value,
        }
    }

    /// The derived field's own name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field whose text is counted.
    pub fn source_field(&self) -> &str {
        &self.source_field
    }

    /// The analyzer name.
    pub fn analyzer(&self) -> &str {
        &self.analyzer
    }

    /// The counting mode.
    pub fn counting_mode(&self) -> CountingMode {
        self.counting_mode
    }

    /// The null value.
    pub fn null_value(&self) -> Option<i64> {
        self.null_value
    }
}
