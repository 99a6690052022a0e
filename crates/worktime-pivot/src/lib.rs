//! Wide-grid pivoting of extracted records.
//!
//! The narrow per-entry records become a grid with one row per
//! (order, process) pair and one column per calendar day spanning the
//! records' date range. Days nobody booked still get a column so the
//! grid reads as a continuous timeline.

pub mod dates;

pub use dates::daily_axis;

use std::collections::BTreeMap;

use tracing::debug;
use worktime_model::layout::{ORDER_LABEL, PROCESS_LABEL};
use worktime_model::{GridCell, WideGrid, WorktimeRecord};

/// Pivots flat records into the wide grid.
///
/// The date axis runs from the lexicographic minimum to maximum record
/// date, valid because ISO dates sort like calendar dates. Groups are
/// emitted sorted by order then process; duplicate (order, process,
/// date) entries keep the last value seen; absent days fill with zero.
pub fn pivot_records(records: &[WorktimeRecord]) -> WideGrid {
    let Some(first_date) = records.iter().map(|record| record.date.as_str()).min() else {
        return WideGrid::new();
    };
    let Some(last_date) = records.iter().map(|record| record.date.as_str()).max() else {
        return WideGrid::new();
    };
    let dates = daily_axis(first_date, last_date);

    let mut groups: BTreeMap<(&str, &str), BTreeMap<&str, f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.order.as_str(), record.process.as_str()))
            .or_default()
            .insert(record.date.as_str(), record.hours);
    }

    let mut grid = WideGrid::new();
    let mut header = Vec::with_capacity(dates.len() + 2);
    header.push(GridCell::Text(ORDER_LABEL.to_string()));
    header.push(GridCell::Text(PROCESS_LABEL.to_string()));
    header.extend(dates.iter().map(|date| GridCell::Text(date.clone())));
    grid.push_row(header);

    for ((order, process), hours_by_date) in &groups {
        let mut row = Vec::with_capacity(dates.len() + 2);
        row.push(GridCell::Text((*order).to_string()));
        row.push(GridCell::Text((*process).to_string()));
        for date in &dates {
            let hours = hours_by_date.get(date.as_str()).copied().unwrap_or(0.0);
            row.push(GridCell::Hours(hours));
        }
        grid.push_row(row);
    }

    debug!(
        record_count = records.len(),
        group_count = groups.len(),
        date_count = dates.len(),
        "pivot complete"
    );
    grid
}
