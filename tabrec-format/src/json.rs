//! Pretty JSON serialization of datasets
//!
//! Output is a JSON array of objects with key order matching the header's
//! column order. Values are always JSON strings and non-ASCII characters are
//! emitted literally, never as `\uXXXX` escapes.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

use crate::error::{Result, TabrecError};
use crate::record::Dataset;

/// Default indentation width in spaces
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Serialize a dataset as a pretty-printed JSON array into a writer.
pub fn write_pretty<W: Write>(dataset: &Dataset, writer: W, indent_width: usize) -> Result<()> {
    let indent = " ".repeat(indent_width);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(writer, formatter);
    dataset
        .serialize(&mut serializer)
        .map_err(TabrecError::Serialization)
}

/// Serialize a dataset as a pretty-printed JSON array string.
pub fn to_pretty_string(dataset: &Dataset, indent_width: usize) -> Result<String> {
    let mut buf = Vec::new();
    write_pretty(dataset, &mut buf, indent_width)?;
    // serde_json only emits valid UTF-8
    String::from_utf8(buf).map_err(|err| TabrecError::Serialization(serde_json::Error::custom(err)))
}
