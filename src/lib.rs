//! sheet2csv - spreadsheet to CSV conversion
//!
//! Converts the first sheet of a workbook to comma-separated text, merges an
//! "English" header range in place, and serves the conversion through a
//! one-page web form.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! sheet2csv::convert_file(Path::new("input.xlsx"), Path::new("output.csv"))?;
//! # Ok::<(), sheet2csv::SheetError>(())
//! ```

#[cfg(feature = "web")]
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

use std::path::Path;

// Re-export commonly used types
pub use config::WebConfig;
pub use error::{SheetError, SheetResult};
pub use types::{CellValue, Grid};

/// Convert the first sheet of `input` to a CSV file at `output`
pub fn convert_file(input: &Path, output: &Path) -> SheetResult<Grid> {
    let grid = excel::read_path(input)?;
    writer::write_csv_file(&grid, output)?;
    Ok(grid)
}

/// Convert an in-memory workbook to CSV text
pub fn convert_bytes(bytes: impl Into<Vec<u8>>) -> SheetResult<String> {
    let grid = excel::read_bytes(bytes)?;
    writer::to_csv_string(&grid)
}
