/// Semantic role a report column can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Order,
    Process,
    Date,
    OrderName,
    Hours,
}

/// Resolved column positions for each role, produced once per table
/// from the header row.
///
/// A `None` position means the label was not found; cells read through
/// it come back empty rather than failing the extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub order: Option<usize>,
    pub process: Option<usize>,
    pub date: Option<usize>,
    pub order_name: Option<usize>,
    pub hours: Option<usize>,
}

impl ColumnRoles {
    pub fn position(&self, role: ColumnRole) -> Option<usize> {
        match role {
            ColumnRole::Order => self.order,
            ColumnRole::Process => self.process,
            ColumnRole::Date => self.date,
            ColumnRole::OrderName => self.order_name,
            ColumnRole::Hours => self.hours,
        }
    }

    /// True when at least one role resolved to a column.
    pub fn any_resolved(&self) -> bool {
        self.order.is_some()
            || self.process.is_some()
            || self.date.is_some()
            || self.order_name.is_some()
            || self.hours.is_some()
    }
}
