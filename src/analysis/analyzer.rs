//! Analyzers: the capability, its implementations and the name registry.

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod canned;
pub mod keyword;
pub mod per_field;
pub mod pipeline;
pub mod registry;

pub use analyzer::Analyzer;
pub use canned::CannedAnalyzer;
pub use keyword::KeywordAnalyzer;
pub use per_field::PerFieldAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use registry::AnalyzerRegistry;
