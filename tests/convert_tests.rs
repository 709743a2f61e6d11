//! Spreadsheet → CSV conversion tests

mod common;

use pretty_assertions::assert_eq;
use sheet2csv::{convert_bytes, convert_file, excel, CellValue};
use std::fs;
use tempfile::TempDir;

const MIXED_CSV: &str = "name,qty,price,active,since\n\
apple,3,1.25,True,2024-01-15 00:00:00\n\
\"pear, green\",,0.5,False,\n";

// ═══════════════════════════════════════════════════════════════════════════
// FILE CONVERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_matches_source_grid() {
    let dir = TempDir::new().unwrap();
    let input = common::mixed_values_workbook(dir.path());
    let output = dir.path().join("mixed.csv");

    let grid = convert_file(&input, &output).unwrap();

    assert_eq!(grid.height(), 3);
    assert_eq!(grid.width(), 5);
    assert_eq!(fs::read_to_string(&output).unwrap(), MIXED_CSV);
}

#[test]
fn test_convert_reads_first_sheet_only() {
    let dir = TempDir::new().unwrap();
    let input = common::mixed_values_workbook(dir.path());
    let output = dir.path().join("mixed.csv");

    convert_file(&input, &output).unwrap();

    assert!(!fs::read_to_string(&output)
        .unwrap()
        .contains("should not appear"));
}

#[test]
fn test_convert_ignores_active_sheet() {
    let dir = TempDir::new().unwrap();
    let input = common::active_second_sheet_workbook(dir.path());
    let output = dir.path().join("two_sheets.csv");

    convert_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "cover page,\n,English\n");
}

#[test]
fn test_convert_keeps_leading_blank_rows_and_columns() {
    let dir = TempDir::new().unwrap();
    let input = common::offset_workbook(dir.path());
    let output = dir.path().join("offset.csv");

    convert_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), ",,,\n,,,\n,,x,\n,,,42\n");
}

#[test]
fn test_convert_empty_sheet() {
    let dir = TempDir::new().unwrap();
    let input = common::empty_workbook(dir.path());
    let output = dir.path().join("empty.csv");

    let grid = convert_file(&input, &output).unwrap();

    assert!(grid.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_convert_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = common::offset_workbook(dir.path());
    let output = dir.path().join("offset.csv");
    fs::write(&output, "stale content that is longer than the new output\n").unwrap();

    convert_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), ",,,\n,,,\n,,x,\n,,,42\n");
}

#[test]
fn test_convert_missing_input_is_error() {
    let dir = TempDir::new().unwrap();
    let result = convert_file(&dir.path().join("nope.xlsx"), &dir.path().join("nope.csv"));
    assert!(result.is_err());
}

#[test]
fn test_convert_not_a_spreadsheet_is_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.xlsx");
    fs::write(&input, "plain text pretending to be a workbook").unwrap();

    assert!(convert_file(&input, &dir.path().join("notes.csv")).is_err());
}

// ═══════════════════════════════════════════════════════════════════════════
// IN-MEMORY CONVERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_bytes_matches_file_conversion() {
    let dir = TempDir::new().unwrap();
    let input = common::mixed_values_workbook(dir.path());
    let output = dir.path().join("mixed.csv");
    convert_file(&input, &output).unwrap();

    let from_bytes = convert_bytes(fs::read(&input).unwrap()).unwrap();

    assert_eq!(from_bytes, fs::read_to_string(&output).unwrap());
}

#[test]
fn test_read_bytes_cell_types() {
    let dir = TempDir::new().unwrap();
    let input = common::mixed_values_workbook(dir.path());

    let grid = excel::read_bytes(fs::read(&input).unwrap()).unwrap();

    assert_eq!(grid.get(0, 0), Some(&CellValue::Text("name".to_string())));
    assert_eq!(grid.get(1, 2), Some(&CellValue::Number(1.25)));
    assert_eq!(grid.get(1, 3), Some(&CellValue::Bool(true)));
    assert!(matches!(grid.get(1, 4), Some(CellValue::DateTime(_))));
    assert_eq!(grid.get(2, 1), Some(&CellValue::Empty));
}
