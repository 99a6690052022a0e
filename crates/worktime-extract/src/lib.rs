//! Worktime record extraction.
//!
//! The export renders one fixed page: period input fields plus a grid
//! table whose first row is the header. Extraction walks that layout
//! and yields flat [`WorktimeRecord`]s. Anything unrecognized degrades
//! to empty fields or skipped rows; a page without usable data simply
//! yields no records.

pub mod duration;
pub mod headers;
pub mod locate;
pub mod rows;

pub use duration::decode_duration;
pub use headers::resolve_roles;
pub use locate::{ReportPeriod, grid_table, report_period};
pub use rows::{DateCarry, extract_row};

use tracing::debug;
use worktime_dom::{Document, DomError, LenientHtml, MarkupParse};
use worktime_model::WorktimeRecord;

/// Extracts every booking row from a parsed report page.
///
/// Returns an empty list when the grid table is missing or holds no
/// data rows.
pub fn extract_document(doc: &Document) -> Vec<WorktimeRecord> {
    let period = report_period(doc);
    let Some(table) = grid_table(doc) else {
        debug!("grid table not found");
        return Vec::new();
    };
    let table_rows = table.descendants_by_tag(&["tr"]);
    if table_rows.len() < 2 {
        debug!(row_count = table_rows.len(), "grid table has no data rows");
        return Vec::new();
    }

    let header_cells: Vec<String> = table_rows[0]
        .descendants_by_tag(&["th", "td"])
        .iter()
        .map(|cell| cell.text_content().trim().to_string())
        .collect();
    let roles = resolve_roles(&header_cells);
    if !roles.any_resolved() {
        debug!(
            header_count = header_cells.len(),
            "no known header labels resolved"
        );
    }

    let mut carry = DateCarry::new();
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in &table_rows[1..] {
        let cells: Vec<String> = row
            .descendants_by_tag(&["td"])
            .iter()
            .map(|cell| cell.text_content())
            .collect();
        match extract_row(
            &cells,
            &roles,
            header_cells.len(),
            &period.year,
            &period.month,
            &mut carry,
        ) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    debug!(
        record_count = records.len(),
        skipped_rows = skipped,
        year = %period.year,
        month = %period.month,
        "extraction complete"
    );
    records
}

/// Parses markup with the given provider and extracts its records.
pub fn extract_markup<P: MarkupParse>(
    provider: &P,
    markup: &str,
) -> Result<Vec<WorktimeRecord>, DomError> {
    let doc = provider.parse(markup)?;
    Ok(extract_document(&doc))
}

/// Extracts records from export markup with the default tolerant
/// provider. Unusable markup yields no records rather than an error.
pub fn extract_html(markup: &str) -> Vec<WorktimeRecord> {
    match extract_markup(&LenientHtml, markup) {
        Ok(records) => records,
        Err(error) => {
            debug!(%error, "markup rejected; extracting nothing");
            Vec::new()
        }
    }
}
