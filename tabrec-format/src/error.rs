//! Error types for tabular conversion

use std::path::PathBuf;
use thiserror::Error;

/// tabrec error types
#[derive(Debug, Error)]
pub enum TabrecError {
    /// Input path does not exist or cannot be opened.
    #[error("input not found: {path}")]
    NotFound {
        /// The path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Input bytes are not valid UTF-8.
    #[error("input {source_name} is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Decode {
        /// Human-readable name of the input (path or "<reader>").
        source_name: String,
        /// Byte offset up to which the input was valid UTF-8.
        valid_up_to: usize,
    },
    /// Tabular structure cannot be tokenized under the quoting convention.
    #[error("malformed input at row {row}: {reason}")]
    MalformedInput {
        /// 1-based physical row of the offending construct.
        row: u64,
        /// What the tokenizer could not accept.
        reason: String,
    },
    /// Output sink cannot be created, written, or renamed into place.
    #[error("cannot write output {path}")]
    Write {
        /// The output path involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A record value could not be encoded as JSON text.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// I/O operation failed while reading or writing a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TabrecError>;
