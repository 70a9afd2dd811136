//! Name → analyzer registry.
//!
//! Field definitions refer to analyzers by name. The registry is the single
//! place those names are resolved; an unknown name is reported as
//! [`KazoeError::InvalidAnalyzerReference`].
//!
//! # Built-in Analyzers
//!
//! | Name | Pipeline |
//! | --- | --- |
//! | `standard` | `\w+` tokens, lowercase, English stop words |
//! | `simple` | `\w+` tokens, lowercase |
//! | `whitespace` | whitespace-separated tokens |
//! | `keyword` | the whole input as one token |
//!
//! # Examples
//!
//! ```
//! use kazoe::analysis::analyzer::AnalyzerRegistry;
//!
//! let registry = AnalyzerRegistry::with_builtin().unwrap();
//! assert!(registry.resolve("keyword").is_ok());
//! assert!(registry.resolve("klingon").is_err());
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::keyword::KeywordAnalyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::error::{KazoeError, Result};

/// Registry of named analyzers.
#[derive(Clone, Default)]
pub struct AnalyzerRegistry {
    analyzers: AHashMap<String, Arc<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in analyzers.
    pub fn with_builtin() -> Result<Self> {
        let mut registry = Self::new();

        registry.register("standard", Arc::new(PipelineAnalyzer::standard()?));
        registry.register("simple", Arc::new(PipelineAnalyzer::simple()?));
        registry.register("whitespace", Arc::new(PipelineAnalyzer::whitespace()));
        registry.register("keyword", Arc::new(KeywordAnalyzer));

        Ok(registry)
    }

    /// Register an analyzer under `name`, returning the analyzer it replaced.
    pub fn register<S: Into<String>>(
        &mut self,
        name: S,
        analyzer: Arc<dyn Analyzer>,
    ) -> Option<Arc<dyn Analyzer>> {
        self.analyzers.insert(name.into(), analyzer)
    }

    /// Look up an analyzer by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Analyzer>> {
        self.analyzers.get(name)
    }

    /// Resolve an analyzer by name, failing when the name is unknown.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Analyzer>> {
        self.analyzers
            .get(name)
            .cloned()
            .ok_or_else(|| KazoeError::invalid_analyzer_reference(name))
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.analyzers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.analyzers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered analyzers.
    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerRegistry")
            .field("analyzers", &self.names())
            .finish()
    }
}
