//! Common test utilities: document builders and cell assertions.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use songsheet::document::MemorySheet;
use songsheet::{grid_from_strs, Area, CellValue, MemoryDocument};

pub const LYRICS: &str = "Letra";
pub const CHORDS: &str = "Acordes";
pub const PRINT: &str = "Impresión";
pub const TRAY: &str = "Ideas_Sueltas";

/// A sheet from string literals (`""` is an empty cell) with frozen panes.
pub fn sheet<R: AsRef<[&'static str]>>(
    name: &str,
    rows: &[R],
    frozen_rows: usize,
    frozen_columns: usize,
) -> MemorySheet {
    MemorySheet::with_cells(name, grid_from_strs(rows)).frozen(frozen_rows, frozen_columns)
}

/// Lyrics sheet with its side tray named range covering the last `tray` columns.
pub fn with_tray(doc: MemoryDocument, tray: usize) -> MemoryDocument {
    let columns = doc.sheet(LYRICS).unwrap().dimensions().columns;
    let x = i64::try_from(columns - tray).unwrap();
    doc.with_named_range(TRAY, LYRICS, Area::new(x, 0, i64::try_from(tray).unwrap(), 1))
}

/// Cell text of every row, with trailing empty cells dropped.
pub fn texts(doc: &MemoryDocument, sheet: &str) -> Vec<Vec<String>> {
    doc.sheet(sheet)
        .unwrap()
        .cells
        .iter()
        .map(|row| {
            let mut texts: Vec<String> = row.iter().map(CellValue::text).collect();
            while texts.last().is_some_and(String::is_empty) {
                texts.pop();
            }
            texts
        })
        .collect()
}

/// Owned rows for comparing against [`texts`].
pub fn rows<R: AsRef<[&'static str]>>(rows: &[R]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.as_ref().iter().map(|s| (*s).to_string()).collect())
        .collect()
}

pub fn assert_cell(doc: &MemoryDocument, sheet: &str, col: usize, row: usize, expected: &str) {
    let actual = doc.cell(sheet, col, row).text();
    assert_eq!(
        actual, expected,
        "{sheet} cell ({col}, {row}): expected {expected:?}, got {actual:?}"
    );
}

pub fn assert_blank(doc: &MemoryDocument, sheet: &str, col: usize, row: usize) {
    let value = doc.cell(sheet, col, row);
    assert!(value.is_blank(), "{sheet} cell ({col}, {row}) should be blank, got {value:?}");
}
