//! Print sheet tests for songsheet
//!
//! Tests for rendering the chords sheet onto the print sheet: page geometry
//! from the header/footer templates, section placement, footer repetition,
//! clearing of previous output and failure without partial writes.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::{assert_blank, assert_cell, sheet, CHORDS, PRINT};
use songsheet::document::MemorySheet;
use songsheet::{
    grid_from_strs, Area, Config, Document, LayoutConfig, MemoryDocument, Point, SongSheet,
    SongsheetError,
};

fn chords() -> MemorySheet {
    sheet(
        CHORDS,
        &[
            ["", "Am", ""],
            ["", "C", ""],
            ["", "Hello", ""],
            ["", "", ""],
            ["", "", ""],
            ["", "G", ""],
            ["", "World", ""],
        ],
        1,
        1,
    )
}

/// Print sheet with a `width` wide header of 3 rows and a footer at `footer_row`.
fn doc(width: i64, footer_row: i64) -> MemoryDocument {
    let mut print = MemorySheet::new(PRINT, 12, 12);
    print.cells = grid_from_strs(&[["Title"]]);
    let mut doc = MemoryDocument::new("My Song")
        .with_sheet(chords())
        .with_sheet(print)
        .with_named_range("Encabezado", PRINT, Area::new(0, 0, width, 3))
        .with_named_range("Pie_de_Página", PRINT, Area::new(0, footer_row, width, 1))
        .with_named_range("Título", PRINT, Area::new(1, 0, 1, 1));
    put(&mut doc, 0, footer_row, "page footer");
    doc
}

fn put(doc: &mut MemoryDocument, col: i64, row: i64, text: &str) {
    doc.write(PRINT, Area::new(col, row, 1, 1), &vec![vec![text.into()]])
        .unwrap();
}

#[test]
fn test_layout_config_from_templates() {
    let song = SongSheet::new(Config::default());
    let mut doc = doc(20, 30)
        .with_named_range("Espaciado_Horizontal", PRINT, Area::new(5, 0, 1, 1));
    put(&mut doc, 5, 0, "4");

    let config = song.print_layout_config(&doc).unwrap();
    assert_eq!(config, LayoutConfig::new(20, 30, 3).with_padding(4, 1));
}

#[test]
fn test_sections_stack_on_one_page() {
    let song = SongSheet::new(Config::default());
    let mut doc = doc(20, 30);

    let summary = song.render_print_sheet(&mut doc).unwrap();
    assert_eq!(summary.pages, 1);
    assert_eq!(summary.sections.len(), 2);
    assert_eq!(summary.positions, vec![Point::new(0, 3), Point::new(0, 6)]);

    assert_cell(&doc, PRINT, 0, 3, "C");
    assert_cell(&doc, PRINT, 0, 4, "Hello");
    assert_blank(&doc, PRINT, 0, 5);
    assert_cell(&doc, PRINT, 0, 6, "G");
    assert_cell(&doc, PRINT, 0, 7, "World");
    // templates kept
    assert_cell(&doc, PRINT, 0, 0, "Title");
    assert_cell(&doc, PRINT, 0, 30, "page footer");
}

#[test]
fn test_second_page_repeats_footer() {
    let song = SongSheet::new(Config::default());
    // pages are 4 wide and 5 tall; the header leaves 2 rows on page one
    let mut doc = doc(4, 5);

    let summary = song.render_print_sheet(&mut doc).unwrap();
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.positions, vec![Point::new(0, 3), Point::new(4, 0)]);

    assert_cell(&doc, PRINT, 0, 3, "C");
    assert_cell(&doc, PRINT, 0, 4, "Hello");
    assert_cell(&doc, PRINT, 4, 0, "G");
    assert_cell(&doc, PRINT, 4, 1, "World");
    assert_cell(&doc, PRINT, 0, 5, "page footer");
    assert_cell(&doc, PRINT, 4, 5, "page footer");
}

#[test]
fn test_previous_output_cleared() {
    let song = SongSheet::new(Config::default());
    let mut doc = doc(20, 30);
    put(&mut doc, 9, 10, "stale");

    song.render_print_sheet(&mut doc).unwrap();
    assert_blank(&doc, PRINT, 9, 10);
}

#[test]
fn test_section_too_wide_writes_nothing() {
    let song = SongSheet::new(Config::default());
    let mut doc = doc(2, 30);
    put(&mut doc, 9, 10, "stale");

    let result = song.render_print_sheet(&mut doc);
    assert!(matches!(
        result,
        Err(SongsheetError::SectionTooWide { index: 0, .. })
    ));
    assert_cell(&doc, PRINT, 9, 10, "stale");
}

#[test]
fn test_empty_song_prints_one_page() {
    let song = SongSheet::new(Config::default());
    let mut doc = doc(20, 30);
    doc.sheets[0] = sheet(CHORDS, &[["", "Am", ""]], 1, 1);

    let summary = song.render_print_sheet(&mut doc).unwrap();
    assert_eq!(summary.pages, 1);
    assert!(summary.sections.is_empty());
}

#[test]
fn test_open_writes_title() {
    let song = SongSheet::new(Config::default());
    let mut doc = doc(20, 30);
    song.on_open(&mut doc);
    assert_cell(&doc, PRINT, 1, 0, "My Song");
    assert!(doc.notices.is_empty());
}
