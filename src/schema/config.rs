//! Configuration for mapping merges.
//!
//! # Examples
//!
//! ```
//! use kazoe::analysis::position::CountingMode;
//! use kazoe::schema::config::MappingConfig;
//!
//! let config = MappingConfig::default();
//! assert_eq!(config.default_counting_mode, CountingMode::WithIncrements);
//! assert!(!config.require_source_field);
//!
//! let strict = MappingConfig::default()
//!     .with_default_counting_mode(CountingMode::WithoutIncrements)
//!     .with_require_source_field(true);
//! assert!(strict.require_source_field);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::position::CountingMode;

/// Settings applied when mapping definitions are parsed and merged.
///
/// Loaded from JSON by the CLI; missing keys take their default.
///
/// ```json
/// { "default_counting_mode": false, "require_source_field": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Mode used when a token-count field omits `countPositionsWithIncrements`.
    pub default_counting_mode: CountingMode,
    /// Require every token-count field to reference a declared text field.
    pub require_source_field: bool,
}

impl MappingConfig {
    /// Set the default counting mode.
    pub fn with_default_counting_mode(mut self, mode: CountingMode) -> Self {
        self.default_counting_mode = mode;
        self
    }

    /// Set whether source fields must be declared.
    pub fn with_require_source_field(mut self, require: bool) -> Self {
        self.require_source_field = require;
        self
    }
}
