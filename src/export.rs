//! Schedule export: CSV, plain-text table, and run summary.
//!
//! CSV layout is one record per (day, shift) in week then shift order:
//!
//! ```text
//! Day,Shift,Employees
//! Monday,Morning,"Alice, Bob"
//! Monday,Afternoon,
//! ```

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use csv::Writer;

use crate::error::Result;
use crate::models::{Day, ScheduleGrid, Shift};

/// CSV header row.
pub const CSV_HEADER: [&str; 3] = ["Day", "Shift", "Employees"];

/// Placeholder for empty cells in the text table.
pub const EMPTY_CELL: &str = "None Assigned";

/// Writes the grid as CSV to `writer`.
pub fn write_csv<W: Write>(grid: &ScheduleGrid, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for (day, shift, names) in grid.cells() {
        wtr.write_record([day.label(), shift.label(), names.join(", ").as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders the grid as a CSV string.
pub fn to_csv_string(grid: &ScheduleGrid) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(grid, &mut buf)?;
    let csv = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(csv)
}

/// Writes the grid as CSV to a file, replacing it if present.
pub fn export_csv(grid: &ScheduleGrid, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_csv(grid, file)
}

/// Renders the grid as an aligned text table, one row per day.
pub fn render_table(grid: &ScheduleGrid) -> String {
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(Day::ALL.len() + 1);
    rows.push([
        "Day".to_string(),
        Shift::Morning.to_string(),
        Shift::Afternoon.to_string(),
        Shift::Evening.to_string(),
    ]);
    for day in Day::ALL {
        let cell = |shift: Shift| {
            let names = grid.cell(day, shift);
            if names.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                names.join(" / ")
            }
        };
        rows.push([
            day.to_string(),
            cell(Shift::Morning),
            cell(Shift::Afternoon),
            cell(Shift::Evening),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (w, col) in widths.iter_mut().zip(row) {
            *w = (*w).max(col.chars().count());
        }
    }

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let line = row
            .iter()
            .zip(widths)
            .map(|(col, w)| format!("{col:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');
        if i == 0 {
            let rule = widths
                .iter()
                .map(|&w| "-".repeat(w))
                .collect::<Vec<_>>()
                .join("-+-");
            out.push_str(&rule);
            out.push('\n');
        }
    }
    out
}

/// One-line summary of a run's unresolved employees.
pub fn unresolved_message(unresolved: &BTreeSet<String>) -> String {
    if unresolved.is_empty() {
        return "The weekly schedule has been generated successfully!".to_string();
    }
    let names = unresolved.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    format!(
        "Partial schedule generated: the following employees could not be fully scheduled due to conflicts or work limit: {names}"
    )
}
