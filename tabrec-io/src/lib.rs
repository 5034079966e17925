//! tabrec I/O - File I/O and the high-level conversion API
//!
//! This crate provides the I/O layer around the `tabrec-format` primitives:
//!
//! - Input acquisition from paths or readers, with UTF-8 decoding
//! - Atomic output via temp-file-and-rename for path sinks
//! - The `ConvertRequest` / `ConvertSummary` runtime

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod reader;
pub mod sink;

// Re-export commonly used types
pub use reader::InputSource;
pub use sink::OutputSink;
pub use tabrec_format::{Dataset, Header, Record, Result, TabrecError, DEFAULT_INDENT_WIDTH};

use std::path::Path;

use tabrec_format::json;

/// High-level conversion options
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Indentation width in spaces for the pretty-printed output
    pub indent_width: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// A conversion to execute: where to read, where to write, and how.
#[derive(Debug)]
pub struct ConvertRequest {
    /// Tabular text input
    pub input: InputSource,
    /// JSON output destination
    pub output: OutputSink,
    /// Conversion options
    pub options: ConvertOptions,
}

/// What a completed conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Records written to the output array (one per data row)
    pub records_written: usize,
    /// Header columns the records were built against
    pub field_count: usize,
    /// Bytes written to the output sink
    pub bytes_written: u64,
}

/// Execute a conversion request end to end.
///
/// The input is read to completion, parsed, and serialized entirely in
/// memory before the output sink is touched; when any stage fails, a path
/// output is left exactly as it was. Errors are never recovered or retried
/// internally.
pub fn execute_convert(request: ConvertRequest) -> Result<ConvertSummary> {
    let text = reader::read_input(request.input)?;
    let dataset = Dataset::parse(&text)?;
    let rendered = json::to_pretty_string(&dataset, request.options.indent_width)?;
    let bytes_written = request.output.write_text(&rendered)?;
    Ok(ConvertSummary {
        records_written: dataset.len(),
        field_count: dataset.header().len(),
        bytes_written,
    })
}

/// Convert the CSV file at `input` into a JSON record array at `output`
/// using default options.
pub fn convert_path(input: &Path, output: &Path) -> Result<ConvertSummary> {
    execute_convert(ConvertRequest {
        input: InputSource::Path(input.to_path_buf()),
        output: OutputSink::Path(output.to_path_buf()),
        options: ConvertOptions::default(),
    })
}
