//! Spreadsheet access
//!
//! - Import: workbook (.xlsx/.xls/.xlsb/.ods) → `Grid` via calamine
//! - Header: merge the "English" header of an .xlsx in place via umya-spreadsheet

#[cfg(feature = "format")]
pub mod header;
pub mod importer;

#[cfg(feature = "format")]
pub use header::{format_english_header, HeaderOutcome};
pub use importer::{read_bytes, read_path};
