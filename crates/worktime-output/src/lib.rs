//! CSV rendering of the pivoted grid.
//!
//! Rendering happens in two steps: hour cells become text under the
//! half-hour formatting rule, then the csv writer assembles the rows
//! with the requested terminator and optional byte-order mark.

pub mod csv;
pub mod error;
pub mod format;

pub use crate::csv::{LineTerminator, WriteOptions, csv_string, grid_csv};
pub use error::{OutputError, Result};
pub use format::{format_hours, render_grid};
