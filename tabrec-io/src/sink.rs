//! Output sinks with atomic path writes

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tabrec_format::{Result, TabrecError};
use tempfile::NamedTempFile;

/// Where the serialized JSON goes.
pub enum OutputSink {
    /// Replace the file at this path, atomically.
    Path(PathBuf),
    /// Write into an already-open writer.
    Writer(Box<dyn Write>),
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::Path(path) => f.debug_tuple("Path").field(path).finish(),
            OutputSink::Writer(_) => f.debug_tuple("Writer").finish(),
        }
    }
}

impl OutputSink {
    /// Write the full serialized text to the sink, returning bytes written.
    ///
    /// Path sinks go through a temporary file in the destination directory
    /// followed by a rename, so the target is either fully written or left
    /// untouched. Writer sinks are written directly.
    pub(crate) fn write_text(self, text: &str) -> Result<u64> {
        match self {
            OutputSink::Path(path) => write_atomic(&path, text),
            OutputSink::Writer(mut writer) => {
                writer.write_all(text.as_bytes())?;
                writer.flush()?;
                Ok(text.len() as u64)
            }
        }
    }
}

fn write_atomic(path: &Path, text: &str) -> Result<u64> {
    let wrap = |source: std::io::Error| TabrecError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(text.as_bytes()).map_err(wrap)?;
    tmp.flush().map_err(wrap)?;
    tmp.persist(path).map_err(|err| wrap(err.error))?;
    Ok(text.len() as u64)
}
