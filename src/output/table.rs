use crate::db::models::FlightRecord;
use crate::output::Output;
use comfy_table::{Cell, CellAlignment, ColumnConstraint, Table, Width, presets};

pub const EMPTY_MESSAGE: &str = "List of planes is empty.";

// header, absolute width, alignment of the body cells
const COLUMNS: [(&str, u16, CellAlignment); 4] = [
    ("No", 6, CellAlignment::Right),
    ("Destination", 32, CellAlignment::Left),
    ("Flight number", 22, CellAlignment::Left),
    ("Aircraft type", 17, CellAlignment::Right),
];

/// Renders the flights as a bordered table with a 1-based row index.
/// Returns `None` when there is nothing to show.
pub fn render_flights(flights: &[FlightRecord]) -> Option<String> {
    if flights.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);
    table.set_header(
        COLUMNS
            .iter()
            .map(|(title, _, _)| Cell::new(title).set_alignment(CellAlignment::Center)),
    );
    table.set_constraints(
        COLUMNS
            .iter()
            .map(|(_, width, _)| ColumnConstraint::Absolute(Width::Fixed(*width))),
    );
    for (column, (_, _, alignment)) in table.column_iter_mut().zip(COLUMNS.iter()) {
        column.set_cell_alignment(*alignment);
    }

    for (index, flight) in flights.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&flight.destination),
            Cell::new(flight.flight_number),
            Cell::new(&flight.type_title),
        ]);
    }

    Some(table.to_string())
}

pub fn display_flights(output: &Output, flights: &[FlightRecord]) -> std::io::Result<()> {
    match render_flights(flights) {
        Some(table) => output.println(table),
        None => output.println(EMPTY_MESSAGE),
    }
}
