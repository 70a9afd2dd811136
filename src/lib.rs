//! # Kazoe
//!
//! Derived token-count fields for document mappings.
//!
//! A token-count field stores the number of positions an analyzer produces
//! for another field's text. Its definition is immutable: changing the
//! analyzer or counting mode merges into a new definition inside a new
//! mapping generation, and everything built from the previous generation
//! keeps the previous settings.
//!
//! ## Features
//!
//! - Position counting that honors position increments, including the gap
//!   left after the last token
//! - Tokenizers, stop-word aware filters and named analyzers
//! - A JSON mapping format and immutable mapping generations
//! - Parallel derivation of counts for document batches
//!
//! ## Example
//!
//! ```
//! use kazoe::prelude::*;
//!
//! let service = MappingService::with_builtin().unwrap();
//! service
//!     .merge_json(r#"{"properties":{
//!         "title": {"type": "text"},
//!         "title_words": {"type": "derived-token-count", "sourceField": "title", "analyzer": "standard"}
//!     }}"#)
//!     .unwrap();
//!
//! let doc = Document::builder().text("title", "A Tale of Two Cities").build();
//! let parsed = service.document_parser().parse(&doc).unwrap();
//! assert_eq!(parsed.document.get_field("title_words"), Some(&FieldValue::Integer(5)));
//! ```

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod schema;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, AnalyzerRegistry};
    pub use crate::analysis::position::{CountingMode, count_positions};
    pub use crate::document::{Document, DocumentParser, FieldValue, ParsedDocument};
    pub use crate::error::{KazoeError, Result};
    pub use crate::schema::{
        Mapping, MappingConfig, MappingService, MappingSpec, TokenCountField, TokenCountFieldSpec,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
