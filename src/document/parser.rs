//! Document parser that computes derived token-count fields.
//!
//! A [`DocumentParser`] is bound to one mapping generation. Every token-count
//! field of that generation is computed from its source field and written
//! into the parsed document; all other fields pass through unchanged.
//!
//! # Architecture
//!
//! ```text
//! Document → DocumentParser → ParsedDocument
//!              ↓
//!        Mapping (token-count fields)
//!              ↓
//!        AnalyzerRegistry → count_positions
//! ```
//!
//! # Examples
//!
//! ```
//! use kazoe::document::document::Document;
//! use kazoe::document::field_value::FieldValue;
//! use kazoe::schema::service::MappingService;
//!
//! let service = MappingService::with_builtin().unwrap();
//! service
//!     .merge_json(r#"{"properties":{
//!         "body": {"type": "text"},
//!         "body_length": {"type": "derived-token-count", "sourceField": "body", "analyzer": "standard"}
//!     }}"#)
//!     .unwrap();
//!
//! let parser = service.document_parser();
//! let doc = Document::builder().text("body", "the quick fox and the").build();
//! let parsed = parser.parse(&doc).unwrap();
//!
//! assert_eq!(parsed.mapping_version, 1);
//! assert_eq!(parsed.document.get_field("body_length"), Some(&FieldValue::Integer(5)));
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::AnalyzerRegistry;
use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::{KazoeError, Result};
use crate::schema::mapping::Mapping;

/// A document with every derived field filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Version of the mapping generation used.
    pub mapping_version: u64,
    /// The document, including derived fields.
    pub document: Document,
}

/// Computes derived fields against a fixed mapping generation.
#[derive(Clone)]
pub struct DocumentParser {
    mapping: Arc<Mapping>,
    registry: Arc<AnalyzerRegistry>,
}

impl std::fmt::Debug for DocumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentParser")
            .field("mapping_version", &self.mapping.version())
            .field("registry", &self.registry)
            .finish()
    }
}

impl DocumentParser {
    /// Create a parser bound to `mapping`.
    pub fn new(mapping: Arc<Mapping>, registry: Arc<AnalyzerRegistry>) -> Self {
        DocumentParser { mapping, registry }
    }

    /// The mapping generation this parser uses.
    pub fn mapping(&self) -> &Arc<Mapping> {
        &self.mapping
    }

    /// Parse one document.
    ///
    /// Fails without a partial result if any derived field cannot be
    /// computed, or if the document supplies a derived field itself.
    pub fn parse(&self, doc: &Document) -> Result<ParsedDocument> {
        let mut document = doc.clone();

        for field in self.mapping.token_count_fields() {
            if doc.has_field(field.name()) {
                return Err(KazoeError::field(format!(
                    "Field '{}' is derived from '{}' and cannot be set directly",
                    field.name(),
                    field.source_field()
                )));
            }

            let source = doc.get_field(field.source_field());
            if let Some(count) = field.parse_value(&self.registry, source)? {
                document.insert(field.name(), FieldValue::Integer(count));
            }
        }

        Ok(ParsedDocument {
            mapping_version: self.mapping.version(),
            document,
        })
    }

    /// Parse many documents in parallel.
    ///
    /// Returns one result per input, in input order.
    pub fn parse_batch(&self, docs: &[Document]) -> Vec<Result<ParsedDocument>> {
        docs.par_iter().map(|doc| self.parse(doc)).collect()
    }
}
