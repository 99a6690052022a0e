//! Integration tests for wide-grid pivoting.
//!
//! The property tests pin the axis and zero-fill guarantees: whatever
//! the input, the date columns form one unbroken daily run and every
//! unbooked cell reads as zero hours.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use worktime_model::{GridCell, WideGrid, WorktimeRecord};
use worktime_pivot::pivot_records;

fn record(order: &str, process: &str, date: &str, hours: f64) -> WorktimeRecord {
    WorktimeRecord {
        order: order.to_string(),
        process: process.to_string(),
        date: date.to_string(),
        hours,
        order_name: String::new(),
    }
}

fn cell_text(cell: &GridCell) -> &str {
    match cell {
        GridCell::Text(text) => text.as_str(),
        GridCell::Hours(_) => panic!("expected a text cell"),
    }
}

/// Reads the grid back as one record per (group, date) cell, which is
/// what re-pivoting consumes.
fn flatten(grid: &WideGrid) -> Vec<WorktimeRecord> {
    let header = grid.header().expect("grid header");
    let dates: Vec<&str> = header[2..].iter().map(cell_text).collect();
    let mut records = Vec::new();
    for row in grid.data_rows() {
        let order = cell_text(&row[0]);
        let process = cell_text(&row[1]);
        for (cell, date) in row[2..].iter().zip(&dates) {
            let GridCell::Hours(hours) = cell else {
                panic!("expected an hours cell");
            };
            records.push(record(order, process, date, *hours));
        }
    }
    records
}

#[test]
fn empty_input_gives_empty_grid() {
    assert!(pivot_records(&[]).is_empty());
}

#[test]
fn duplicate_entries_keep_the_last_value() {
    let grid = pivot_records(&[
        record("A001", "P1", "2024-01-01", 2.5),
        record("A001", "P1", "2024-01-01", 1.0),
    ]);
    assert_eq!(
        grid.rows,
        vec![
            vec![
                GridCell::Text("製造オーダ".to_string()),
                GridCell::Text("工程".to_string()),
                GridCell::Text("2024-01-01".to_string()),
            ],
            vec![
                GridCell::Text("A001".to_string()),
                GridCell::Text("P1".to_string()),
                GridCell::Hours(1.0),
            ],
        ]
    );
}

#[test]
fn gaps_between_dates_fill_with_zero() {
    let grid = pivot_records(&[
        record("A001", "P1", "2024-01-01", 1.0),
        record("A001", "P1", "2024-01-03", 2.0),
    ]);
    let header = grid.header().expect("header");
    assert_eq!(header.len(), 5);
    assert_eq!(cell_text(&header[3]), "2024-01-02");
    assert_eq!(grid.data_rows()[0][3], GridCell::Hours(0.0));
}

#[test]
fn every_group_spans_the_full_axis() {
    let grid = pivot_records(&[
        record("A001", "P1", "2024-01-31", 1.0),
        record("B002", "P2", "2024-02-02", 2.0),
    ]);
    let header = grid.header().expect("header");
    // Jan 31 through Feb 2.
    assert_eq!(header.len(), 2 + 3);
    for row in grid.data_rows() {
        assert_eq!(row.len(), header.len());
    }
    assert_eq!(grid.data_rows()[0][2], GridCell::Hours(1.0));
    assert_eq!(grid.data_rows()[0][4], GridCell::Hours(0.0));
    assert_eq!(grid.data_rows()[1][2], GridCell::Hours(0.0));
    assert_eq!(grid.data_rows()[1][4], GridCell::Hours(2.0));
}

#[test]
fn rows_sort_by_order_then_process_regardless_of_input_order() {
    let records = vec![
        record("B002", "P2", "2024-01-01", 1.0),
        record("A001", "P2", "2024-01-01", 1.0),
        record("B002", "P1", "2024-01-01", 1.0),
        record("A001", "P1", "2024-01-01", 1.0),
    ];
    let grid = pivot_records(&records);
    let leads: Vec<(&str, &str)> = grid
        .data_rows()
        .iter()
        .map(|row| (cell_text(&row[0]), cell_text(&row[1])))
        .collect();
    assert_eq!(
        leads,
        vec![
            ("A001", "P1"),
            ("A001", "P2"),
            ("B002", "P1"),
            ("B002", "P2"),
        ]
    );

    let mut reversed = records.clone();
    reversed.reverse();
    assert_eq!(pivot_records(&reversed), grid);
}

#[test]
fn degraded_dates_leave_rows_without_date_columns() {
    // Dates built without period fields do not parse, so the axis is
    // empty, but the groups still appear.
    let grid = pivot_records(&[record("A001", "P1", "--05", 2.0)]);
    assert_eq!(grid.header().map(<[GridCell]>::len), Some(2));
    assert_eq!(grid.data_rows().len(), 1);
    assert_eq!(grid.data_rows()[0].len(), 2);
}

#[test]
fn repivoting_the_grid_reproduces_it() {
    let grid = pivot_records(&[
        record("A001", "P1", "2024-01-01", 2.5),
        record("A001", "P2", "2024-01-03", 1.0),
        record("B002", "P1", "2024-01-02", 0.25),
    ]);
    assert_eq!(pivot_records(&flatten(&grid)), grid);
}

fn arb_record() -> impl Strategy<Value = WorktimeRecord> {
    (
        "[A-C][0-9]{2}",
        "P[1-4]",
        0u64..45,
        prop::sample::select(vec![0.0f64, 0.25, 0.5, 1.0, 2.5, 7.75]),
    )
        .prop_map(|(order, process, offset, hours)| {
            let base = NaiveDate::from_ymd_opt(2024, 2, 20).expect("valid base date");
            let day = base
                .checked_add_days(Days::new(offset))
                .expect("date in range");
            WorktimeRecord {
                order,
                process,
                date: day.format("%Y-%m-%d").to_string(),
                hours,
                order_name: String::new(),
            }
        })
}

proptest! {
    #[test]
    fn axis_is_contiguous_and_rows_align(records in prop::collection::vec(arb_record(), 1..40)) {
        let grid = pivot_records(&records);
        let header = grid.header().expect("header row");
        let dates: Vec<NaiveDate> = header[2..]
            .iter()
            .map(|cell| {
                NaiveDate::parse_from_str(cell_text(cell), "%Y-%m-%d").expect("axis date")
            })
            .collect();
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[0].succ_opt().expect("next day"), pair[1]);
        }

        let min = records.iter().map(|r| r.date.as_str()).min().expect("min date");
        let max = records.iter().map(|r| r.date.as_str()).max().expect("max date");
        let first = dates.first().expect("first axis day");
        let last = dates.last().expect("last axis day");
        prop_assert_eq!(first.format("%Y-%m-%d").to_string(), min);
        prop_assert_eq!(last.format("%Y-%m-%d").to_string(), max);

        for row in grid.data_rows() {
            prop_assert_eq!(row.len(), header.len());
        }
    }

    #[test]
    fn absent_days_fill_with_zero(records in prop::collection::vec(arb_record(), 1..40)) {
        let grid = pivot_records(&records);
        let header = grid.header().expect("header row");
        let booked: std::collections::BTreeSet<(&str, &str, &str)> = records
            .iter()
            .map(|r| (r.order.as_str(), r.process.as_str(), r.date.as_str()))
            .collect();
        for row in grid.data_rows() {
            let order = cell_text(&row[0]);
            let process = cell_text(&row[1]);
            for (cell, date_cell) in row[2..].iter().zip(&header[2..]) {
                let GridCell::Hours(hours) = cell else {
                    panic!("expected an hours cell");
                };
                if !booked.contains(&(order, process, cell_text(date_cell))) {
                    prop_assert_eq!(*hours, 0.0);
                }
            }
        }
    }
}
