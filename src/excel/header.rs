//! "English" header merge
//!
//! Finds the first cell reading `english` (trimmed, any case) in the top rows
//! of the active sheet and merges it across to a fixed end column.

use crate::error::{SheetError, SheetResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use umya_spreadsheet::helper::coordinate::{column_index_from_string, coordinate_from_index};
use umya_spreadsheet::structs::{HorizontalAlignmentValues, VerticalAlignmentValues};
use umya_spreadsheet::Worksheet;

/// Last column covered by the merged header
pub const HEADER_END_COLUMN: &str = "BU";

/// Number of rows (from row 1) searched for the header cell
pub const HEADER_SCAN_ROWS: u32 = 5;

/// Text written into the merged header cell
pub const HEADER_LABEL: &str = "English";

/// Result of a header formatting run
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderOutcome {
    /// Header found and the workbook saved to `output`
    Merged {
        output: PathBuf,
        /// Coordinate of the header cell, e.g. `C2`
        cell: String,
        /// Merged range, e.g. `C2:BU2`; `None` when the cell is already at or past the end column
        range: Option<String>,
    },
    /// No header in the scanned rows; nothing was written
    NotFound,
}

/// Merge the English header of `input` and save the result.
///
/// `output` defaults to [`merged_output_path`] of the input.
pub fn format_english_header(input: &Path, output: Option<&Path>) -> SheetResult<HeaderOutcome> {
    let mut book = umya_spreadsheet::reader::xlsx::read(input)
        .map_err(|e| SheetError::Workbook(format!("Failed to read {}: {}", input.display(), e)))?;

    let sheet = book.get_active_sheet_mut();
    let Some((col, row)) = find_english_header(sheet) else {
        debug!(path = %input.display(), "no english header in first {} rows", HEADER_SCAN_ROWS);
        return Ok(HeaderOutcome::NotFound);
    };

    let cell = coordinate_from_index(&col, &row);
    let end_col = column_index_from_string(HEADER_END_COLUMN);
    let range = if col < end_col {
        let range = format!("{}:{}", cell, coordinate_from_index(&end_col, &row));
        sheet.add_merge_cells(range.as_str());
        Some(range)
    } else {
        None
    };

    let header = sheet.get_cell_mut((col, row));
    header.set_value(HEADER_LABEL);
    let alignment = header.get_style_mut().get_alignment_mut();
    alignment.set_horizontal(HorizontalAlignmentValues::Center);
    alignment.set_vertical(VerticalAlignmentValues::Center);

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => merged_output_path(input)?,
    };

    umya_spreadsheet::writer::xlsx::write(&book, &output)
        .map_err(|e| SheetError::Workbook(format!("Failed to write {}: {}", output.display(), e)))?;

    info!(output = %output.display(), cell = %cell, "merged english header");
    Ok(HeaderOutcome::Merged {
        output,
        cell,
        range,
    })
}

/// Locate the header cell as 1-based `(column, row)`.
///
/// Rows are scanned top to bottom, each row left to right; the first match wins.
pub fn find_english_header(sheet: &Worksheet) -> Option<(u32, u32)> {
    let last_col = sheet.get_highest_column();
    (1..=HEADER_SCAN_ROWS).find_map(|row| {
        (1..=last_col).find_map(|col| {
            sheet
                .get_cell((col, row))
                .filter(|cell| is_english_label(&cell.get_value()))
                .map(|_| (col, row))
        })
    })
}

fn is_english_label(value: &str) -> bool {
    value.trim().to_lowercase() == "english"
}

/// Default output path: `name.xlsx` → `name_merged.xlsx`, anything else gets
/// `_merged.xlsx` appended.
pub fn merged_output_path(input: &Path) -> SheetResult<PathBuf> {
    let raw = input
        .to_str()
        .ok_or_else(|| SheetError::InvalidPath(input.display().to_string()))?;

    let stem = if raw.to_ascii_lowercase().ends_with(".xlsx") {
        &raw[..raw.len() - ".xlsx".len()]
    } else {
        raw
    };
    Ok(PathBuf::from(format!("{}_merged.xlsx", stem)))
}
