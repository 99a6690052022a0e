//! Data-row extraction with date carry-forward.

use worktime_model::{ColumnRoles, WorktimeRecord};

/// Date state threaded across data rows.
///
/// The report prints a date only on the first row of each day; the
/// rows below inherit it. Until the first populated date cell every
/// row is unattributable and gets skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateCarry {
    current: Option<String>,
}

impl DateCarry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one row's raw date-cell text and returns the date the
    /// row belongs to, if one is known yet.
    pub fn advance(&mut self, cell: &str, year: &str, month: &str) -> Option<&str> {
        let trimmed = cell.trim();
        if !trimmed.is_empty() {
            self.current = Some(compose_date(trimmed, year, month));
        }
        self.current.as_deref()
    }
}

/// Builds a `yyyy-mm-dd` date from a day cell such as `5(月)` and the
/// report's period fields. Only the day is padded; the year and month
/// are used verbatim, so absent period fields degrade the date rather
/// than failing.
fn compose_date(cell: &str, year: &str, month: &str) -> String {
    let day = cell.split('(').next().unwrap_or(cell);
    format!("{year}-{month}-{day:0>2}")
}

/// Extracts one record from a data row, if it yields one.
///
/// Rows shorter than the header are layout artifacts and are skipped
/// without consulting their cells, which also keeps them from touching
/// the carried date.
pub fn extract_row(
    cells: &[String],
    roles: &ColumnRoles,
    header_len: usize,
    year: &str,
    month: &str,
    carry: &mut DateCarry,
) -> Option<WorktimeRecord> {
    if cells.len() < header_len {
        return None;
    }
    let date = carry
        .advance(role_text(cells, roles.date), year, month)?
        .to_string();
    Some(WorktimeRecord {
        order: role_text(cells, roles.order).to_string(),
        process: role_text(cells, roles.process).to_string(),
        date,
        hours: crate::duration::decode_duration(role_text(cells, roles.hours)),
        order_name: role_text(cells, roles.order_name).to_string(),
    })
}

/// Cell text for a resolved role; unresolved roles and out-of-range
/// positions read as empty.
fn role_text(cells: &[String], position: Option<usize>) -> &str {
    position
        .and_then(|index| cells.get(index))
        .map_or("", |cell| cell.trim())
}
