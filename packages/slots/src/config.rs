//! Configuration constants and validation functions for the slots pipeline.

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotsError};

/// Default glob pattern selecting which documents are processed.
pub const DEFAULT_PATTERN: &str = "**/*.md";

/// Default front-matter delimiter token.
pub const DEFAULT_DELIMITER: &str = "---";

/// Reserved slot name for the document's primary body.
///
/// A leading unnamed segment and any delimiter block without a `slot` key
/// both use this name. Only the first slot in a sequence may replace the
/// document body; later slots with this name land in the mapping like any
/// other.
pub const PRIMARY_SLOT: &str = "contents";

/// Options recognized by the slots pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Glob pattern selecting which documents to process.
    pub pattern: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl Options {
    /// Options with the default pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document-selection pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }
}

/// Validate and compile a document-selection glob pattern.
///
/// # Arguments
/// * `pattern` - The glob pattern to compile
///
/// # Returns
/// * `Ok(Pattern)` if valid
/// * `Err(SlotsError::InvalidPattern)` if invalid
///
/// # Examples
/// ```
/// use pagefold_slots::config::validate_pattern;
///
/// assert!(validate_pattern("**/*.md").is_ok());
/// assert!(validate_pattern("[").is_err());
/// ```
pub fn validate_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|source| SlotsError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
