//! Holder of the current mapping generation.
//!
//! # Examples
//!
//! ```
//! use kazoe::schema::service::MappingService;
//!
//! let service = MappingService::with_builtin().unwrap();
//! let first = service
//!     .merge_json(r#"{"properties":{"len":{"type":"derived-token-count","sourceField":"body","analyzer":"keyword"}}}"#)
//!     .unwrap();
//! let second = service
//!     .merge_json(r#"{"properties":{"len":{"type":"derived-token-count","sourceField":"body","analyzer":"standard"}}}"#)
//!     .unwrap();
//!
//! assert_eq!(first.token_count_field("len").unwrap().analyzer(), "keyword");
//! assert_eq!(second.token_count_field("len").unwrap().analyzer(), "standard");
//! assert_eq!(service.current().version(), 2);
//! ```

use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;

use crate::analysis::analyzer::AnalyzerRegistry;
use crate::document::parser::DocumentParser;
use crate::error::Result;
use crate::schema::config::MappingConfig;
use crate::schema::mapping::{Mapping, MappingSpec};

/// Publishes mapping generations.
///
/// Merges are serialized by a write lock and the last one to finish becomes
/// current. Readers take a cheap `Arc` clone of the current generation.
pub struct MappingService {
    config: MappingConfig,
    registry: Arc<AnalyzerRegistry>,
    current: RwLock<Arc<Mapping>>,
}

impl MappingService {
    /// Create a service starting from the empty mapping.
    pub fn new(registry: Arc<AnalyzerRegistry>, config: MappingConfig) -> Self {
        MappingService {
            config,
            registry,
            current: RwLock::new(Arc::new(Mapping::empty())),
        }
    }

    /// Create a service with the built-in analyzers and default configuration.
    pub fn with_builtin() -> Result<Self> {
        Ok(Self::new(
            Arc::new(AnalyzerRegistry::with_builtin()?),
            MappingConfig::default(),
        ))
    }

    /// Merge `spec` into the current generation and publish the result.
    ///
    /// On failure the current generation stays in place.
    pub fn merge(&self, spec: &MappingSpec) -> Result<Arc<Mapping>> {
        let mut current = self.current.write();
        let next = Arc::new(current.merge(spec, &self.registry, &self.config)?);
        *current = Arc::clone(&next);

        info!("Published mapping version {}", next.version());
        Ok(next)
    }

    /// Parse a JSON mapping definition and merge it.
    pub fn merge_json(&self, json: &str) -> Result<Arc<Mapping>> {
        let spec = MappingSpec::from_json(json, &self.config)?;
        debug!("Parsed mapping definition with {} fields", spec.properties.len());
        self.merge(&spec)
    }

    /// The current generation.
    pub fn current(&self) -> Arc<Mapping> {
        Arc::clone(&self.current.read())
    }

    /// A document parser bound to the current generation.
    pub fn document_parser(&self) -> DocumentParser {
        DocumentParser::new(self.current(), Arc::clone(&self.registry))
    }

    /// The analyzer registry.
    pub fn registry(&self) -> &Arc<AnalyzerRegistry> {
        &self.registry
    }

    /// The configuration.
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }
}

impl std::fmt::Debug for MappingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingService")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("version", &self.current.read().version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KazoeError;

    #[test]
    fn test_failed_merge_keeps_current() {
        let service = MappingService::with_builtin().unwrap();
        let first = service
            .merge_json(r#"{"properties":{"body":{"type":"text"}}}"#)
            .unwrap();

        let err = service
            .merge_json(r#"{"properties":{"body":{"type":"text","analyzer":"keyword"}}}"#)
            .unwrap_err();
        assert!(matches!(err, KazoeError::MergeConflict(_)));
        assert!(Arc::ptr_eq(&first, &service.current()));

        let err = service
            .merge_json(r#"{"properties":{"len":{"type":"derived-token-count","sourceField":"body","analyzer":"standard","countPositionsWithIncrements":"maybe"}}}"#)
            .unwrap_err();
        assert!(matches!(err, KazoeError::InvalidCountingMode(_)));
        assert_eq!(service.current().version(), 1);
    }

    #[test]
    fn test_document_parser_uses_current() {
        let service = MappingService::with_builtin().unwrap();
        assert_eq!(service.document_parser().mapping().version(), 0);

        service
            .merge_json(r#"{"properties":{"body":{"type":"text"}}}"#)
            .unwrap();
        assert_eq!(service.document_parser().mapping().version(), 1);
    }
}
