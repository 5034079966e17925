//! tabrec format - Core primitives for tabular-to-record conversion
//!
//! This crate provides the conversion pipeline's data model and codecs with
//! no file I/O dependencies. It includes:
//!
//! - The CSV tokenizer (comma separator, double-quote quoting)
//! - Header, record, and dataset structures
//! - Pretty JSON serialization
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod header;
pub mod json;
pub mod record;
pub mod tokenizer;

// Re-export commonly used types
pub use error::{Result, TabrecError};
pub use header::Header;
pub use json::{to_pretty_string, write_pretty, DEFAULT_INDENT_WIDTH};
pub use record::{Dataset, Record};
pub use tokenizer::tokenize;
