//! Shared fixture builders for integration tests

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::{Path, PathBuf};

/// Workbook with mixed value types on the first sheet and a decoy second sheet
pub fn mixed_values_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("mixed.xlsx");
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let sheet = workbook.add_worksheet();
    sheet.set_name("Data").unwrap();
    sheet.write_string(0, 0, "name").unwrap();
    sheet.write_string(0, 1, "qty").unwrap();
    sheet.write_string(0, 2, "price").unwrap();
    sheet.write_string(0, 3, "active").unwrap();
    sheet.write_string(0, 4, "since").unwrap();

    sheet.write_string(1, 0, "apple").unwrap();
    sheet.write_number(1, 1, 3.0).unwrap();
    sheet.write_number(1, 2, 1.25).unwrap();
    sheet.write_boolean(1, 3, true).unwrap();
    let date = ExcelDateTime::from_ymd(2024, 1, 15).unwrap();
    sheet
        .write_datetime_with_format(1, 4, &date, &date_format)
        .unwrap();

    // Row 3 leaves qty and active blank
    sheet.write_string(2, 0, "pear, green").unwrap();
    sheet.write_number(2, 2, 0.5).unwrap();
    sheet.write_boolean(2, 3, false).unwrap();

    let other = workbook.add_worksheet();
    other.set_name("Other").unwrap();
    other.write_string(0, 0, "should not appear").unwrap();

    workbook.save(&path).unwrap();
    path
}

/// Workbook whose only data sits at C3:D4
pub fn offset_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("offset.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(2, 2, "x").unwrap();
    sheet.write_number(3, 3, 42.0).unwrap();
    workbook.save(&path).unwrap();
    path
}

/// Workbook with an empty first sheet
pub fn empty_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("empty.xlsx");
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    workbook.save(&path).unwrap();
    path
}

/// Workbook with `label` written at the zero-based `(row, col)` position
pub fn header_workbook(dir: &Path, name: &str, row: u32, col: u16, label: &str) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Glossary").unwrap();
    sheet.write_string(row, col, label).unwrap();
    sheet.write_string(row + 1, col, "hello").unwrap();
    sheet.write_string(row + 1, col + 1, "world").unwrap();
    workbook.save(&path).unwrap();
    path
}

/// Two-sheet workbook whose second sheet ("Glossary") is the active one.
///
/// "Cover" holds `cover page` at A1 and `English` at B2; "Glossary" holds
/// `English` at C3.
pub fn active_second_sheet_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("two_sheets.xlsx");
    let mut workbook = Workbook::new();

    let cover = workbook.add_worksheet();
    cover.set_name("Cover").unwrap();
    cover.write_string(0, 0, "cover page").unwrap();
    cover.write_string(1, 1, "English").unwrap();

    let glossary = workbook.add_worksheet();
    glossary.set_name("Glossary").unwrap();
    glossary.set_active(true);
    glossary.write_string(2, 2, "English").unwrap();
    glossary.write_string(3, 2, "hello").unwrap();

    workbook.save(&path).unwrap();
    path
}
