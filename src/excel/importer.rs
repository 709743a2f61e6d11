//! Workbook reader - spreadsheet (.xlsx/.xls/.xlsb/.ods) → `Grid`

use crate::error::{SheetError, SheetResult};
use crate::types::{CellValue, Grid};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, DataType, Range, Reader};
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

/// Read the default (first) sheet of a workbook on disk
pub fn read_path<P: AsRef<Path>>(path: P) -> SheetResult<Grid> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening workbook");
    let mut workbook = open_workbook_auto(path)?;
    first_sheet(&mut workbook)
}

/// Read the default (first) sheet of an in-memory workbook.
///
/// The format is detected from the content, not from a file name.
pub fn read_bytes(bytes: impl Into<Vec<u8>>) -> SheetResult<Grid> {
    let cursor = Cursor::new(bytes.into());
    debug!(bytes = cursor.get_ref().len(), "opening uploaded workbook");
    let mut workbook = open_workbook_auto_from_rs(cursor)?;
    first_sheet(&mut workbook)
}

fn first_sheet<RS>(workbook: &mut calamine::Sheets<RS>) -> SheetResult<Grid>
where
    RS: Read + Seek,
{
    let range = workbook.worksheet_range_at(0).ok_or(SheetError::NoSheets)??;
    Ok(range_to_grid(&range))
}

/// Convert a calamine range to a grid anchored at A1.
///
/// calamine ranges start at the first used cell; the rows and columns
/// before it are emitted as empty cells so positions match the sheet.
pub(crate) fn range_to_grid(range: &Range<Data>) -> Grid {
    let Some((last_row, last_col)) = range.end() else {
        return Grid::new();
    };

    let rows = (0..=last_row)
        .map(|row| {
            (0..=last_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map(convert_cell)
                        .unwrap_or(CellValue::Empty)
                })
                .collect()
        })
        .collect();

    Grid::from_rows(rows)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(dt) if dt.is_duration() => CellValue::Duration(dt.as_f64()),
        Data::DateTime(dt) => match cell.as_datetime() {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match cell.as_datetime() {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Text(s.clone()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
