//! Field-dependent analysis.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Routes [`Analyzer::token_stream`] to an analyzer chosen by field name.
///
/// Fields without an override use the fallback analyzer, as does
/// [`Analyzer::analyze`], which has no field to route on.
///
/// ```
/// use std::sync::Arc;
///
/// use kazoe::analysis::analyzer::{Analyzer, KeywordAnalyzer, PerFieldAnalyzer, PipelineAnalyzer};
///
/// let analyzer = PerFieldAnalyzer::new(Arc::new(PipelineAnalyzer::standard().unwrap()))
///     .with_field("id", Arc::new(KeywordAnalyzer));
///
/// assert_eq!(analyzer.token_stream("id", "DOC 001").unwrap().count(), 1);
/// assert_eq!(analyzer.token_stream("title", "DOC 001").unwrap().count(), 2);
/// ```
#[derive(Clone)]
pub struct PerFieldAnalyzer {
    fallback: Arc<dyn Analyzer>,
    overrides: AHashMap<String, Arc<dyn Analyzer>>,
}

impl PerFieldAnalyzer {
    pub fn new(fallback: Arc<dyn Analyzer>) -> Self {
        PerFieldAnalyzer {
            fallback,
            overrides: AHashMap::new(),
        }
    }

    /// Use `analyzer` for `field`, replacing any earlier override.
    pub fn with_field<S: Into<String>>(mut self, field: S, analyzer: Arc<dyn Analyzer>) -> Self {
        self.overrides.insert(field.into(), analyzer);
        self
    }

    /// The analyzer `field` is routed to.
    pub fn analyzer_for(&self, field: &str) -> &Arc<dyn Analyzer> {
        self.overrides.get(field).unwrap_or(&self.fallback)
    }
}

impl Analyzer for PerFieldAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.fallback.analyze(text)
    }

    fn token_stream(&self, field_name: &str, text: &str) -> Result<TokenStream> {
        self.analyzer_for(field_name).token_stream(field_name, text)
    }

    fn name(&self) -> &str {
        "per_field"
    }
}

impl std::fmt::Debug for PerFieldAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut overrides: Vec<(&str, &str)> = self
            .overrides
            .iter()
            .map(|(field, analyzer)| (field.as_str(), analyzer.name()))
            .collect();
        overrides.sort_unstable();
        f.debug_struct("PerFieldAnalyzer")
            .field("fallback", &self.fallback.name())
            .field("overrides", &overrides)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::{KeywordAnalyzer, PipelineAnalyzer};

    fn analyzer() -> PerFieldAnalyzer {
        PerFieldAnalyzer::new(Arc::new(PipelineAnalyzer::standard().unwrap()))
            .with_field("tag", Arc::new(KeywordAnalyzer))
            .with_field("raw", Arc::new(PipelineAnalyzer::whitespace()))
    }

    fn texts(stream: TokenStream) -> Vec<String> {
        stream.map(|t| t.text).collect()
    }

    #[test]
    fn test_routes_by_field() {
        let analyzer = analyzer();

        assert_eq!(
            texts(analyzer.token_stream("tag", "The Fox").unwrap()),
            vec!["The Fox"]
        );
        assert_eq!(
            texts(analyzer.token_stream("raw", "The Fox").unwrap()),
            vec!["The", "Fox"]
        );
        assert_eq!(
            texts(analyzer.token_stream("title", "The Fox").unwrap()),
            vec!["fox"]
        );
        assert_eq!(analyzer.analyzer_for("unknown").name(), "standard");
    }

    #[test]
    fn test_analyze_uses_fallback() {
        assert_eq!(texts(analyzer().analyze("The Fox").unwrap()), vec!["fox"]);
    }

    #[test]
    fn test_debug_lists_overrides() {
        assert_eq!(
            format!("{:?}", analyzer()),
            "PerFieldAnalyzer { fallback: \"standard\", overrides: [(\"raw\", \"whitespace\"), (\"tag\", \"keyword\")] }"
        );
    }
}
