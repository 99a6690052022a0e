use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use worktime_cli::pipeline::{Conversion, Destination};

/// Print a conversion summary table to stderr. Only called when the
/// CSV went to a file, so stdout stays clean either way.
pub fn print_summary(conversion: &Conversion, destination: &Destination) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        label_cell("Records"),
        Cell::new(conversion.record_count),
    ]);
    table.add_row(vec![label_cell("Groups"), Cell::new(conversion.group_count)]);
    table.add_row(vec![label_cell("Days"), days_cell(conversion)]);
    table.add_row(vec![label_cell("Output"), destination_cell(destination)]);
    table.add_row(vec![label_cell("Bytes"), Cell::new(conversion.csv.len())]);
    eprintln!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn days_cell(conversion: &Conversion) -> Cell {
    match &conversion.date_span {
        Some((first, last)) => Cell::new(format!(
            "{} ({first} .. {last})",
            conversion.date_count
        )),
        None => dim_cell(conversion.date_count),
    }
}

fn destination_cell(destination: &Destination) -> Cell {
    match destination {
        Destination::File(path) => Cell::new(path.display()),
        Destination::Stdout => dim_cell("stdout"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
