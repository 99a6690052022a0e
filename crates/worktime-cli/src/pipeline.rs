//! Conversion pipeline: read markup, extract records, pivot, and
//! serialize to CSV.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use thiserror::Error;
use tracing::{debug, info, info_span};
use worktime_extract::extract_html;
use worktime_model::{GridCell, WideGrid};
use worktime_output::{WriteOptions, grid_csv};
use worktime_pivot::pivot_records;

/// Errors from the conversion pipeline, mapped to process exit codes.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The page parsed but produced no worktime records.
    #[error("no worktime records found in {}", path.display())]
    NoRecords {
        /// Path of the offending input.
        path: PathBuf,
    },
    /// Any downstream failure (CSV serialization, output write).
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

impl ConvertError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReadInput { .. } => 2,
            Self::NoRecords { .. } => 3,
            Self::Output(_) => 1,
        }
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Serialized CSV text.
    pub csv: String,
    /// Number of worktime records extracted.
    pub record_count: usize,
    /// Number of (order, process) groups in the pivoted grid.
    pub group_count: usize,
    /// Number of date columns in the pivoted grid.
    pub date_count: usize,
    /// First and last date column, when the grid has any.
    pub date_span: Option<(String, String)>,
}

/// Where the CSV ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Written to standard output.
    Stdout,
    /// Written to the given file.
    File(PathBuf),
}

/// Convert a worktime HTML report into pivoted CSV text.
///
/// # Errors
///
/// Returns [`ConvertError::ReadInput`] when the file cannot be read,
/// [`ConvertError::NoRecords`] when the page yields no records, and
/// [`ConvertError::Output`] when serialization fails.
pub fn convert_file(input: &Path, options: WriteOptions) -> Result<Conversion, ConvertError> {
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();
    let started = Instant::now();

    let markup = read_markup(input)?;

    let records = info_span!("extract").in_scope(|| extract_html(&markup));
    if records.is_empty() {
        return Err(ConvertError::NoRecords {
            path: input.to_path_buf(),
        });
    }

    let grid = info_span!("pivot").in_scope(|| pivot_records(&records));
    let csv = grid_csv(&grid, options).context("serialize grid to csv")?;

    let conversion = Conversion {
        csv,
        record_count: records.len(),
        group_count: grid.data_rows().len(),
        date_count: date_count(&grid),
        date_span: date_span(&grid),
    };

    info!(
        record_count = conversion.record_count,
        group_count = conversion.group_count,
        date_count = conversion.date_count,
        duration_ms = started.elapsed().as_millis(),
        "conversion complete"
    );

    Ok(conversion)
}

/// Write CSV text to a file, or to stdout when no path is given.
///
/// # Errors
///
/// Returns the underlying I/O error when the write fails.
pub fn write_output(csv: &str, output: Option<&Path>) -> io::Result<Destination> {
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        debug!(path = %path.display(), bytes = csv.len(), "wrote csv file");
        Ok(Destination::File(path.to_path_buf()))
    } else {
        io::stdout().write_all(csv.as_bytes())?;
        Ok(Destination::Stdout)
    }
}

fn read_markup(path: &Path) -> Result<String, ConvertError> {
    let bytes = std::fs::read(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = bytes.len(), "read input file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Number of date columns: everything after the two key columns.
fn date_count(grid: &WideGrid) -> usize {
    grid.header().map_or(0, |header| header.len().saturating_sub(2))
}

/// First and last date column of the header, when any exist.
fn date_span(grid: &WideGrid) -> Option<(String, String)> {
    let header = grid.header()?;
    let dates = header.get(2..)?;
    let first = dates.first()?;
    let last = dates.last()?;
    match (first, last) {
        (GridCell::Text(first), GridCell::Text(last)) => Some((first.clone(), last.clone())),
        _ => None,
    }
}
