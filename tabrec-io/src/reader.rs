//! Input acquisition: path or reader sources decoded to UTF-8 text

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use tabrec_format::{Result, TabrecError};

/// Where the tabular input comes from.
pub enum InputSource {
    /// Read the entire file at this path.
    Path(PathBuf),
    /// Drain an already-open reader.
    Reader(Box<dyn Read>),
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            InputSource::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

impl InputSource {
    /// Name used in diagnostics.
    fn display_name(&self) -> String {
        match self {
            InputSource::Path(path) => path.display().to_string(),
            InputSource::Reader(_) => "<reader>".to_string(),
        }
    }
}

/// Read the full input and decode it as UTF-8.
///
/// A path that is missing or inaccessible maps to
/// [`TabrecError::NotFound`]; bytes that are not valid UTF-8 map to
/// [`TabrecError::Decode`] with the offset of the first invalid byte.
pub(crate) fn read_input(source: InputSource) -> Result<String> {
    let name = source.display_name();
    let bytes = match source {
        InputSource::Path(path) => {
            fs::read(&path).map_err(|source| TabrecError::NotFound { path, source })?
        }
        InputSource::Reader(mut reader) => {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;
            bytes
        }
    };
    String::from_utf8(bytes).map_err(|err| TabrecError::Decode {
        source_name: name,
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}
