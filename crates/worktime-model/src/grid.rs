use serde::{Deserialize, Serialize};

/// One cell of the pivoted wide grid.
///
/// Label cells (headers and the order/process lead columns) stay text;
/// hour cells keep their numeric value so the output layer decides how
/// to render them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum GridCell {
    Text(String),
    Hours(f64),
}

/// Row-major wide grid: a header row followed by one row per
/// order/process group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WideGrid {
    pub rows: Vec<Vec<GridCell>>,
}

impl WideGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: Vec<GridCell>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&[GridCell]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Vec<GridCell>] {
        self.rows.get(1..).unwrap_or_default()
    }
}
