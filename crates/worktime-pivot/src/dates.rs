//! Daily date-axis generation.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Generates every calendar day from `start` to `end` inclusive, in
/// ISO `yyyy-mm-dd` form, stepping month and year boundaries the
/// calendar way.
///
/// Bounds that do not parse as dates produce an empty axis; the grid
/// then carries no date columns, mirroring a report whose period
/// fields were unusable. A reversed range is likewise empty.
pub fn daily_axis(start: &str, end: &str) -> Vec<String> {
    let (Some(mut day), Some(last)) = (parse_iso_date(start), parse_iso_date(end)) else {
        return Vec::new();
    };
    let mut axis = Vec::new();
    while day <= last {
        axis.push(day.format(DATE_FORMAT).to_string());
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
    }
    axis
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
