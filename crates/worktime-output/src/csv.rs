//! CSV text assembly.

use csv::{Terminator, WriterBuilder};

use worktime_model::WideGrid;

use crate::error::{OutputError, Result};
use crate::format::render_grid;

/// UTF-8 byte-order mark, prefixed on request so spreadsheet imports
/// pick the right encoding.
const BOM: &str = "\u{feff}";

/// Record terminator for the serialized CSV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    /// Windows convention, what the report's spreadsheet consumers
    /// expect.
    #[default]
    Crlf,
    Lf,
}

/// Options controlling CSV assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub terminator: LineTerminator,
    pub bom: bool,
}

impl WriteOptions {
    #[must_use]
    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    #[must_use]
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }
}

/// Serializes pre-rendered rows into CSV text. Fields are quoted only
/// when they need it; every record ends with the configured
/// terminator.
pub fn csv_string(rows: &[Vec<String>], options: WriteOptions) -> Result<String> {
    let terminator = match options.terminator {
        LineTerminator::Crlf => Terminator::CRLF,
        LineTerminator::Lf => Terminator::Any(b'\n'),
    };
    let mut writer = WriterBuilder::new()
        .terminator(terminator)
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| OutputError::Buffer(error.to_string()))?;
    let mut text = String::from_utf8(bytes)?;
    if options.bom {
        text.insert_str(0, BOM);
    }
    Ok(text)
}

/// Renders and serializes the grid in one step.
pub fn grid_csv(grid: &WideGrid, options: WriteOptions) -> Result<String> {
    csv_string(&render_grid(grid), options)
}
