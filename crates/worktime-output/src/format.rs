//! Hour-value rendering rules.

use worktime_model::{GridCell, WideGrid};

/// Formats decimal hours for the CSV: one fractional digit when the
/// value is a whole multiple of half an hour, two digits otherwise.
///
/// ```
/// use worktime_output::format_hours;
///
/// assert_eq!(format_hours(2.0), "2.0");
/// assert_eq!(format_hours(2.5), "2.5");
/// assert_eq!(format_hours(2.33), "2.33");
/// ```
pub fn format_hours(value: f64) -> String {
    if (value * 2.0).fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Renders every grid cell to its output text. Text cells pass
/// through unchanged; hour cells go through [`format_hours`].
pub fn render_grid(grid: &WideGrid) -> Vec<Vec<String>> {
    grid.rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    GridCell::Text(text) => text.clone(),
                    GridCell::Hours(value) => format_hours(*value),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use worktime_model::GridCell;

    #[test]
    fn half_hour_multiples_get_one_digit() {
        assert_eq!(format_hours(0.0), "0.0");
        assert_eq!(format_hours(2.0), "2.0");
        assert_eq!(format_hours(2.5), "2.5");
        assert_eq!(format_hours(7.5), "7.5");
        assert_eq!(format_hours(-0.5), "-0.5");
    }

    #[test]
    fn other_values_get_two_digits() {
        assert_eq!(format_hours(2.33), "2.33");
        assert_eq!(format_hours(0.75), "0.75");
        assert_eq!(format_hours(7.75), "7.75");
        // 10 minutes: rounds at the second digit.
        assert_eq!(format_hours(10.0 / 60.0), "0.17");
    }

    #[test]
    fn renders_text_and_hours_cells() {
        let mut grid = WideGrid::new();
        grid.push_row(vec![
            GridCell::Text("A001".to_string()),
            GridCell::Hours(2.5),
            GridCell::Hours(0.0),
        ]);
        assert_eq!(render_grid(&grid), vec![vec!["A001", "2.5", "0.0"]]);
    }
}
