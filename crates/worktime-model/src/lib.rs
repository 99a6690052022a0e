pub mod grid;
pub mod layout;
pub mod record;
pub mod roles;

pub use grid::{GridCell, WideGrid};
pub use record::WorktimeRecord;
pub use roles::{ColumnRole, ColumnRoles};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_camel_case_names() {
        let record = WorktimeRecord {
            order: "A001".to_string(),
            process: "P1".to_string(),
            date: "2024-01-01".to_string(),
            hours: 2.5,
            order_name: "OrderA".to_string(),
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        assert!(json.contains("\"orderName\":\"OrderA\""));
        let round: WorktimeRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }

    #[test]
    fn roles_position_follows_fields() {
        let roles = ColumnRoles {
            order: Some(0),
            process: Some(1),
            date: None,
            order_name: Some(4),
            hours: Some(3),
        };
        assert_eq!(roles.position(ColumnRole::Order), Some(0));
        assert_eq!(roles.position(ColumnRole::Date), None);
        assert_eq!(roles.position(ColumnRole::Hours), Some(3));
        assert!(roles.any_resolved());
        assert!(!ColumnRoles::default().any_resolved());
    }

    #[test]
    fn grid_splits_header_from_data() {
        let mut grid = WideGrid::new();
        assert!(grid.is_empty());
        assert!(grid.header().is_none());
        assert!(grid.data_rows().is_empty());

        grid.push_row(vec![
            GridCell::Text("order".to_string()),
            GridCell::Text("2024-01-01".to_string()),
        ]);
        grid.push_row(vec![
            GridCell::Text("A001".to_string()),
            GridCell::Hours(2.5),
        ]);
        assert_eq!(grid.header().map(<[GridCell]>::len), Some(2));
        assert_eq!(grid.data_rows().len(), 1);
    }

    #[test]
    fn grid_cell_json_is_tagged() {
        let json = serde_json::to_string(&GridCell::Hours(1.25)).expect("serialize cell");
        assert_eq!(json, "{\"kind\":\"Hours\",\"value\":1.25}");
    }
}
