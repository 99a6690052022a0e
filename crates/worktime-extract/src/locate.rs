//! Fixed-id lookups on the report page.

use worktime_dom::{Document, Element};
use worktime_model::layout::{GRID_TABLE_ID, MONTH_FIELD_ID, YEAR_FIELD_ID};

/// The processing period the page was generated for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: String,
    pub month: String,
}

/// Reads the processing year and month input fields. Absent fields
/// read as empty strings; dates built from them degrade instead of
/// aborting the extraction.
pub fn report_period(doc: &Document) -> ReportPeriod {
    ReportPeriod {
        year: field_value(doc, YEAR_FIELD_ID),
        month: field_value(doc, MONTH_FIELD_ID),
    }
}

/// Locates the booking grid table by its fixed element id.
pub fn grid_table(doc: &Document) -> Option<&Element> {
    doc.element_by_id(GRID_TABLE_ID)
}

fn field_value(doc: &Document, id: &str) -> String {
    doc.element_by_id(id)
        .and_then(Element::input_value)
        .unwrap_or_default()
        .to_string()
}
