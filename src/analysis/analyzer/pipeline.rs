//! Tokenizer followed by a chain of filters.
//!
//! The built-in `standard`, `simple` and `whitespace` analyzers are all
//! pipelines:
//!
//! | Constructor | Tokenizer | Filters |
//! | --- | --- | --- |
//! | [`PipelineAnalyzer::standard`] | `\w+` | lowercase, English stop words |
//! | [`PipelineAnalyzer::simple`] | `\w+` | lowercase |
//! | [`PipelineAnalyzer::whitespace`] | whitespace | none |
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use kazoe::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use kazoe::analysis::token_filter::{LowercaseFilter, StopFilter};
//! use kazoe::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new("csv_tags", Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::new(["n/a"])));
//!
//! let stream = analyzer.analyze("Rust N/A Tokio").unwrap();
//! let increments: Vec<usize> = stream.map(|t| t.position_increment).collect();
//! assert_eq!(increments, vec![1, 2]);
//! assert_eq!(analyzer.name(), "csv_tags");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// A named tokenizer plus filters applied in insertion order.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    name: String,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// A pipeline with no filters yet.
    pub fn new<S: Into<String>>(name: S, tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: name.into(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Word runs, lowercased, English stop words removed with their gaps kept.
    pub fn standard() -> Result<Self> {
        Ok(Self::simple()?
            .add_filter(Arc::new(StopFilter::english()))
            .renamed("standard"))
    }

    /// Word runs, lowercased.
    pub fn simple() -> Result<Self> {
        Ok(Self::new("simple", Arc::new(RegexTokenizer::words()?))
            .add_filter(Arc::new(LowercaseFilter::new())))
    }

    /// Whitespace-separated runs, unchanged.
    pub fn whitespace() -> Self {
        Self::new("whitespace", Arc::new(WhitespaceTokenizer::new()))
    }

    /// Append a filter.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    fn renamed(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |stream, filter| {
                filter.filter(stream)
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters: Vec<&str> = self.filters.iter().map(|f| f.name()).collect();
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}
