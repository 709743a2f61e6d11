//! CSV rendering for cell grids
//!
//! Output has no header row and no index column. Each grid row becomes one
//! record, fields are quoted only when they need it, and records end in `\n`.

use crate::error::SheetResult;
use crate::types::{CellValue, Grid};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Largest magnitude at which an integral float is still printed as an integer
const INTEGRAL_LIMIT: f64 = 1e15;

/// Write `grid` as CSV to any writer
pub fn write_csv<W: Write>(grid: &Grid, writer: W) -> SheetResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in grid.rows() {
        csv_writer.write_record(row.iter().map(format_cell))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render `grid` as a CSV string
pub fn to_csv_string(grid: &Grid) -> SheetResult<String> {
    let mut buffer = Vec::new();
    write_csv(grid, &mut buffer)?;
    // Every field is built from Rust strings, so the buffer is valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write `grid` as CSV to a file, replacing it if it exists
pub fn write_csv_file(grid: &Grid, path: &Path) -> SheetResult<()> {
    debug!(path = %path.display(), rows = grid.height(), cols = grid.width(), "writing csv");
    let file = File::create(path)?;
    write_csv(grid, file)
}

/// Render a single cell as CSV field text
pub fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) => format_number(*n),
        CellValue::Integer(i) => i.to_string(),
        CellValue::Bool(true) => "True".to_string(),
        CellValue::Bool(false) => "False".to_string(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        CellValue::Duration(days) => format_duration(*days),
        CellValue::Error(code) => code.clone(),
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < INTEGRAL_LIMIT {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Format a duration in days as `H:MM:SS`
fn format_duration(days: f64) -> String {
    let total = (days * 86_400.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
