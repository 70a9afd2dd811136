//! Mapping generations.
//!
//! A [`Mapping`] is one immutable generation of the schema. Merging a
//! [`MappingSpec`] into it produces the next generation; the receiver stays
//! valid and unchanged, so documents parsed against it keep its settings.
//!
//! ```text
//! generation 1 ──merge(spec)──▶ generation 2 ──merge(spec)──▶ generation 3
//!    body ───────── shared Arc ────── body ───────── shared Arc ────── body
//!    len  (keyword)                   len  (standard)                  len ...
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::analysis::analyzer::AnalyzerRegistry;
use crate::error::{KazoeError, Result};
use crate::schema::config::MappingConfig;
use crate::schema::field::{FieldMapping, FieldSpec, TextField};
use crate::schema::parser;
use crate::schema::token_count::TokenCountField;

/// A mapping definition: field settings keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingSpec {
    /// Field settings.
    pub properties: BTreeMap<String, FieldSpec>,
}

impl MappingSpec {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the definition.
    pub fn with_field<S: Into<String>, F: Into<FieldSpec>>(mut self, name: S, spec: F) -> Self {
        self.properties.insert(name.into(), spec.into());
        self
    }

    /// Parse a definition from JSON text.
    pub fn from_json(json: &str, config: &MappingConfig) -> Result<Self> {
        parser::parse_mapping(json, config)
    }
}

/// One generation of the schema.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    version: u64,
    fields: BTreeMap<String, FieldMapping>,
}

impl Mapping {
    /// The empty generation every schema starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Produce the generation that follows this one once `incoming` is applied.
    ///
    /// Fields missing from `incoming` are shared with this generation. On
    /// failure no generation is produced.
    pub fn merge(
        &self,
        incoming: &MappingSpec,
        registry: &AnalyzerRegistry,
        config: &MappingConfig,
    ) -> Result<Mapping> {
        let mut fields = self.fields.clone();

        for (name, spec) in &incoming.properties {
            let field = match self.fields.get(name) {
                Some(current) => current.merge(spec, registry)?,
                None => FieldMapping::build(name, spec, registry)?,
            };
            fields.insert(name.clone(), field);
        }

        let next = Mapping {
            version: self.version + 1,
            fields,
        };
        next.validate(config)?;

        debug!(
            "Merged mapping version {} -> {} ({} fields updated, {} total)",
            self.version,
            next.version,
            incoming.properties.len(),
            next.fields.len()
        );

        Ok(next)
    }

    /// Check cross-field constraints.
    ///
    /// A token-count field never sources another token-count field. With
    /// `require_source_field`, its source must also be a declared text field.
    pub fn validate(&self, config: &MappingConfig) -> Result<()> {
        for field in self.token_count_fields() {
            let source = field.source_field();
            if self.token_count_field(source).is_some() {
                return Err(KazoeError::schema(format!(
                    "Field [{}] cannot count [{}], which is itself a derived token count",
                    field.name(),
                    source
                )));
            }
            if config.require_source_field && self.text_field(source).is_none() {
                return Err(KazoeError::schema(format!(
                    "Field [{}] counts source field [{}], which is not a text field",
                    field.name(),
                    source
                )));
            }
        }
        Ok(())
    }

    /// The generation number; the empty mapping is version 0.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get a field definition by name.
    pub fn get(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.get(name)
    }

    /// Get a text field by name.
    pub fn text_field(&self, name: &str) -> Option<&Arc<TextField>> {
        self.get(name).and_then(FieldMapping::as_text)
    }

    /// Get a token-count field by name.
    pub fn token_count_field(&self, name: &str) -> Option<&Arc<TokenCountField>> {
        self.get(name).and_then(FieldMapping::as_token_count)
    }

    /// All token-count fields, ordered by name.
    pub fn token_count_fields(&self) -> impl Iterator<Item = &Arc<TokenCountField>> {
        self.fields.values().filter_map(FieldMapping::as_token_count)
    }

    /// All fields, ordered by name.
    pub fn fields(&self) -> &BTreeMap<String, FieldMapping> {
        &self.fields
    }

    /// Check if a field exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The definition that would rebuild this generation from empty.
    pub fn to_spec(&self) -> MappingSpec {
        MappingSpec {
            properties: self
                .fields
                .iter()
                .map(|(name, field)| (name.clone(), field.to_spec()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::position::CountingMode;
    use crate::schema::field::TextFieldSpec;
    use crate::schema::token_count::TokenCountFieldSpec;

    fn registry() -> AnalyzerRegistry {
        AnalyzerRegistry::with_builtin().unwrap()
    }

    fn base(registry: &AnalyzerRegistry) -> Mapping {
        let spec = MappingSpec::new()
            .with_field("body", TextFieldSpec::default())
            .with_field("len", TokenCountFieldSpec::new("body", "keyword"));
        Mapping::empty()
            .merge(&spec, registry, &MappingConfig::default())
            .unwrap()
    }

    #[test]
    fn test_merge_builds_new_generation() {
        let registry = registry();
        let first = base(&registry);
        assert_eq!(first.version(), 1);
        assert_eq!(first.len(), 2);

        let update = MappingSpec::new().with_field(
            "len",
            TokenCountFieldSpec::new("body", "standard")
                .with_counting_mode(CountingMode::WithoutIncrements),
        );
        let second = first
            .merge(&update, &registry, &MappingConfig::default())
            .unwrap();

        assert_eq!(second.version(), 2);
        assert_eq!(first.token_count_field("len").unwrap().analyzer(), "keyword");
        assert_eq!(second.token_count_field("len").unwrap().analyzer(), "standard");
        assert!(Arc::ptr_eq(
            first.text_field("body").unwrap(),
            second.text_field("body").unwrap()
        ));
    }

    #[test]
    fn test_failed_merge_produces_nothing() {
        let registry = registry();
        let first = base(&registry);

        let update = MappingSpec::new()
            .with_field("title", TextFieldSpec::default())
            .with_field("len", TokenCountFieldSpec::new("body", "klingon"));
        let err = first
            .merge(&update, &registry, &MappingConfig::default())
            .unwrap_err();

        assert!(matches!(err, KazoeError::InvalidAnalyzerReference(_)));
        assert!(!first.has_field("title"));
        assert_eq!(first.version(), 1);
    }

    #[test]
    fn test_require_source_field() {
        let registry = registry();
        let strict = MappingConfig::default().with_require_source_field(true);

        let orphan = MappingSpec::new().with_field("len", TokenCountFieldSpec::new("body", "standard"));
        assert!(matches!(
            Mapping::empty().merge(&orphan, &registry, &strict),
            Err(KazoeError::Schema(_))
        ));
        assert!(
            Mapping::empty()
                .merge(&orphan, &registry, &MappingConfig::default())
                .is_ok()
        );

        let complete = orphan.with_field("body", TextFieldSpec::default());
        assert!(Mapping::empty().merge(&complete, &registry, &strict).is_ok());
    }

    #[test]
    fn test_chained_token_counts_are_rejected() {
        let registry = registry();
        let chained = MappingSpec::new()
            .with_field("a", TokenCountFieldSpec::new("b", "standard"))
            .with_field("b", TokenCountFieldSpec::new("c", "standard"));

        for config in [
            MappingConfig::default(),
            MappingConfig::default().with_require_source_field(true),
        ] {
            let err = Mapping::empty()
                .merge(&chained, &registry, &config)
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Schema error: Field [a] cannot count [b], which is itself a derived token count"
            );
        }
    }

    #[test]
    fn test_update_cannot_chain_onto_existing_count() {
        let registry = registry();
        let first = base(&registry);

        let update =
            MappingSpec::new().with_field("len_of_len", TokenCountFieldSpec::new("len", "keyword"));
        assert!(matches!(
            first.merge(&update, &registry, &MappingConfig::default()),
            Err(KazoeError::Schema(_))
        ));
        assert!(!first.has_field("len_of_len"));
    }

    #[test]
    fn test_to_spec_rebuilds() {
        let registry = registry();
        let first = base(&registry);
        let rebuilt = Mapping::empty()
            .merge(&first.to_spec(), &registry, &MappingConfig::default())
            .unwrap();
        assert_eq!(rebuilt.to_spec(), first.to_spec());
        assert_eq!(first.token_count_fields().count(), 1);
    }
}
