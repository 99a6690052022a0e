use serde::{Deserialize, Serialize};

/// One booking row recovered from the report: a manufacturing order,
/// the process worked on, the day, and the decoded hours.
///
/// Serialized field names match the JSON shape the downstream tooling
/// already consumes, hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorktimeRecord {
    pub order: String,
    pub process: String,
    /// Booking date in `yyyy-mm-dd` form. When the report's period
    /// fields are absent this degrades to a partial form such as
    /// `-01-05`; the record is still kept.
    pub date: String,
    /// Decimal hours decoded from the duration cell.
    pub hours: f64,
    /// Human-readable order description. Carried through for
    /// inspection but never part of the pivot key.
    pub order_name: String,
}
