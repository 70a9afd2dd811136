//! Document module for Kazoe.
//!
//! Documents are collections of field-value pairs. A [`parser::DocumentParser`]
//! bound to a mapping generation fills in the derived token-count fields.
//!
//! # Core Components
//!
//! - [`document::Document`] - The document structure with field-value pairs
//! - [`field_value::FieldValue`] - Enum representing different field value types
//! - [`parser::DocumentParser`] - Computes derived fields for one or many documents
//!
//! # Examples
//!
//! ```
//! use kazoe::document::document::Document;
//! use kazoe::document::field_value::FieldValue;
//!
//! let doc = Document::builder()
//!     .text("title", "Rust Programming")
//!     .integer("year", 2024)
//!     .build();
//!
//! assert_eq!(doc.get_field("year"), Some(&FieldValue::Integer(2024)));
//! ```

#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;
pub mod parser;

// Re-export commonly used types
pub use document::{Document, DocumentBuilder};
pub use field_value::FieldValue;
pub use parser::{DocumentParser, ParsedDocument};
