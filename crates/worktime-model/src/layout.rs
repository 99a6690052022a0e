//! Fixed ids and header labels of the exported report.
//!
//! The export tool renders the same page layout on every run, so these
//! are compile-time constants rather than configuration.

/// Element id of the processing-year input field.
pub const YEAR_FIELD_ID: &str = "vD_SYORI_Y4";

/// Element id of the processing-month input field.
pub const MONTH_FIELD_ID: &str = "vD_SYORI_MM";

/// Element id of the grid table holding the booking rows.
pub const GRID_TABLE_ID: &str = "Grid1ContainerTbl";

/// Header label of the manufacturing-order column.
pub const ORDER_LABEL: &str = "製造オーダ";

/// Header label of the process column.
pub const PROCESS_LABEL: &str = "工程";

/// Header label of the date column.
pub const DATE_LABEL: &str = "日付";

/// Header label of the order-description column.
pub const ORDER_NAME_LABEL: &str = "製造オーダ名";

/// Header label of the detailed-hours column, the preferred hours
/// source when present.
pub const HOURS_DETAIL_LABEL: &str = "工数詳細";

/// Header label of the plain hours column, the fallback hours source.
pub const HOURS_LABEL: &str = "工数";
