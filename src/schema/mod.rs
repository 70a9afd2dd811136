//! Schema module for Kazoe.
//!
//! This module provides field definitions, the mapping definition parser and
//! the immutable mapping generations that merges produce.

pub mod config;
pub mod field;
pub mod mapping;
pub mod parser;
pub mod service;
pub mod token_count;

// Re-export commonly used types
pub use config::MappingConfig;
pub use field::{FieldMapping, FieldSpec, TextField, TextFieldSpec};
pub use mapping::{Mapping, MappingSpec};
pub use service::MappingService;
pub use token_count::{TokenCountField, TokenCountFieldSpec};
