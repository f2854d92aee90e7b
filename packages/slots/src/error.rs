//! Error types for the slots pipeline.

use thiserror::Error;

/// Main error type for the slots library.
#[derive(Debug, Error)]
pub enum SlotsError {
    /// Invalid document-selection glob pattern.
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// The configured delimiter token is empty.
    #[error("Front-matter delimiter must not be empty")]
    EmptyDelimiter,

    /// A delimiter occurrence does not open a well-formed block.
    #[error("Malformed delimiter block: expected a line break after '{delimiter}'")]
    MalformedBlock { delimiter: String },

    /// Block metadata could not be parsed or re-serialized.
    #[error("YAML processing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Processing a single document failed.
    #[error("Failed to process '{path}': {source}")]
    Document {
        path: String,
        #[source]
        source: Box<SlotsError>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A path matched during source-tree discovery could not be read.
    #[error("Failed to resolve source path: {0}")]
    Walk(#[from] glob::GlobError),
}

/// Result type alias for slots operations.
pub type Result<T> = std::result::Result<T, SlotsError>;
