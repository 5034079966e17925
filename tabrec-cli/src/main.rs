//! tabrec CLI - Convert a CSV table to a JSON array of records
//!
//! Reads a UTF-8, comma-separated, optionally quoted table whose first row
//! is the header and writes a pretty-printed JSON array with one object per
//! data row, keys in header column order, all values as strings.

use clap::Parser;
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tabrec_io::{
    execute_convert, ConvertOptions, ConvertRequest, ConvertSummary, InputSource, OutputSink,
    DEFAULT_INDENT_WIDTH,
};

#[derive(Parser)]
#[command(name = "tabrec")]
#[command(about = "Convert a CSV table to a JSON array of records")]
#[command(version)]
struct Cli {
    /// Input file (CSV, first row is the header)
    input: PathBuf,
    /// Output file (JSON array; replaced atomically)
    #[arg(short, long)]
    output: PathBuf,
    /// Indentation width for the pretty-printed output
    #[arg(long, default_value_t = DEFAULT_INDENT_WIDTH)]
    indent: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let start = Instant::now();

    let request = ConvertRequest {
        input: InputSource::Path(cli.input),
        output: OutputSink::Path(cli.output.clone()),
        options: ConvertOptions {
            indent_width: cli.indent,
        },
    };
    let summary = execute_convert(request)?;

    let mut stderr = std::io::stderr().lock();
    report_summary(&mut stderr, &summary, &cli.output, start.elapsed())?;
    Ok(())
}

fn report_summary(
    writer: &mut dyn Write,
    summary: &ConvertSummary,
    output: &Path,
    elapsed: Duration,
) -> Result<(), Box<dyn Error>> {
    writeln!(
        writer,
        "Converted to {} (records: {}, fields: {}, bytes written: {}, elapsed: {:.2?})",
        output.display(),
        summary.records_written,
        summary.field_count,
        summary.bytes_written,
        elapsed
    )?;
    Ok(())
}
