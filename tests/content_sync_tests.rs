//! Content sync tests for songsheet
//!
//! Tests for copying lyric edits onto the chords sheet and for restoring
//! lyric rows edited directly on the chords sheet:
//! - Chord rows are never touched
//! - Edits outside the lyrics working area (frozen panes, side tray) are ignored
//! - Targets past the end of the chords sheet grow it
//! - Partial overlaps only sync the intersection

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::{rows, sheet, texts, with_tray, CHORDS, LYRICS};
use songsheet::{Area, Config, MemoryDocument, SongSheet};

fn lyrics() -> [[&'static str; 8]; 5] {
    [
        ["1", "2", "3", "4", "5", "6", "7", "8"],
        ["2", " ", " ", " ", " ", " ", " ", " "],
        ["3", " ", " ", " ", " ", " ", " ", " "],
        ["4", " ", " ", "A", "B", "C", "t", "x"],
        ["5", " ", " ", "D", "E", "F", "u", "y"],
    ]
}

fn doc_with(chords: &[[&'static str; 5]]) -> MemoryDocument {
    let doc = MemoryDocument::new("Song")
        .with_sheet(sheet(LYRICS, &lyrics(), 3, 3))
        .with_sheet(sheet(CHORDS, chords, 2, 2));
    with_tray(doc, 2)
}

fn doc() -> MemoryDocument {
    doc_with(&[
        ["1", "2", "3", "4", "5"],
        ["2", " ", " ", " ", " "],
        ["3", " ", " ", " ", " "],
        ["4", " ", "a", "b", "c"],
        ["5", " ", " ", " ", " "],
        ["6", " ", "d", "e", "f"],
    ])
}

fn song() -> SongSheet {
    SongSheet::new(Config::default())
}

#[test]
fn test_edit_copied_to_lyric_rows() {
    let mut doc = doc();
    song().sync_lyrics_to_chords(&mut doc, Area::new(3, 3, 3, 2)).unwrap();

    assert_eq!(
        texts(&doc, CHORDS),
        rows(&[
            ["1", "2", "3", "4", "5"],
            ["2", " ", " ", " ", " "],
            ["3", " ", " ", " ", " "],
            ["4", " ", "A", "B", "C"],
            ["5", " ", " ", " ", " "],
            ["6", " ", "D", "E", "F"],
        ])
    );
}

#[test]
fn test_cells_outside_target_untouched() {
    let mut doc = doc();
    song().sync_lyrics_to_chords(&mut doc, Area::new(3, 3, 2, 1)).unwrap();

    assert_eq!(
        texts(&doc, CHORDS),
        rows(&[
            ["1", "2", "3", "4", "5"],
            ["2", " ", " ", " ", " "],
            ["3", " ", " ", " ", " "],
            ["4", " ", "A", "B", "c"],
            ["5", " ", " ", " ", " "],
            ["6", " ", "d", "e", "f"],
        ])
    );
}

#[test]
fn test_chord_rows_preserved() {
    let mut doc = doc_with(&[
        ["1", "2", "3", "4", "5"],
        ["2", " ", " ", " ", " "],
        ["3", " ", "x", "y", "z"],
        ["4", " ", "X", "Y", "Z"],
        ["5", " ", "p", "q", "r"],
        ["6", " ", "P", "Q", "R"],
    ]);
    song().sync_lyrics_to_chords(&mut doc, Area::new(3, 3, 3, 2)).unwrap();

    assert_eq!(
        texts(&doc, CHORDS),
        rows(&[
            ["1", "2", "3", "4", "5"],
            ["2", " ", " ", " ", " "],
            ["3", " ", "x", "y", "z"],
            ["4", " ", "A", "B", "C"],
            ["5", " ", "p", "q", "r"],
            ["6", " ", "D", "E", "F"],
        ])
    );
}

#[test]
fn test_edit_in_frozen_area_ignored() {
    let mut doc = doc();
    let before = texts(&doc, CHORDS);
    song().sync_lyrics_to_chords(&mut doc, Area::new(0, 0, 3, 3)).unwrap();
    assert_eq!(texts(&doc, CHORDS), before);
}

#[test]
fn test_edit_in_side_tray_ignored() {
    let mut doc = doc();
    let before = texts(&doc, CHORDS);
    song().sync_lyrics_to_chords(&mut doc, Area::new(6, 3, 2, 2)).unwrap();
    assert_eq!(texts(&doc, CHORDS), before);
}

#[test]
fn test_target_past_chords_edge_grows_sheet() {
    let wide_lyrics = [
        ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"],
        ["2", " ", " ", " ", " ", " ", " ", " ", " ", " "],
        ["3", " ", " ", " ", " ", " ", " ", " ", " ", " "],
        ["4", " ", " ", "A", "B", "C", "G", "H", "t", "x"],
        ["5", " ", " ", "D", "E", "F", "I", "J", "u", "y"],
    ];
    let doc = MemoryDocument::new("Song")
        .with_sheet(sheet(LYRICS, &wide_lyrics, 3, 3))
        .with_sheet(sheet(
            CHORDS,
            &[
                ["1", "2", "3", "4", "5"],
                ["2", " ", " ", " ", " "],
                ["3", " ", " ", " ", " "],
                ["4", " ", "a", "b", "c"],
                ["5", " ", " ", " ", " "],
                ["6", " ", "d", "e", "f"],
            ],
            2,
            2,
        ));
    let mut doc = with_tray(doc, 2);

    song().sync_lyrics_to_chords(&mut doc, Area::new(6, 3, 2, 2)).unwrap();

    let expected: Vec<Vec<String>> = vec![
        rows(&[["1", "2", "3", "4", "5"]]).remove(0),
        rows(&[["2", " ", " ", " ", " "]]).remove(0),
        rows(&[["3", " ", " ", " ", " "]]).remove(0),
        rows(&[["4", " ", "a", "b", "c", "G", "H"]]).remove(0),
        rows(&[["5", " ", " ", " ", " "]]).remove(0),
        rows(&[["6", " ", "d", "e", "f", "I", "J"]]).remove(0),
    ];
    assert_eq!(texts(&doc, CHORDS), expected);
}

#[test]
fn test_partial_overlap_syncs_intersection() {
    let mut doc = doc();
    song().sync_lyrics_to_chords(&mut doc, Area::new(2, 2, 3, 3)).unwrap();

    assert_eq!(
        texts(&doc, CHORDS),
        rows(&[
            ["1", "2", "3", "4", "5"],
            ["2", " ", " ", " ", " "],
            ["3", " ", " ", " ", " "],
            ["4", " ", "A", "B", "c"],
            ["5", " ", " ", " ", " "],
            ["6", " ", "D", "E", "f"],
        ])
    );
}

fn restore_doc() -> MemoryDocument {
    doc_with(&[
        ["1", "2", "3", "4", "5"],
        ["2", " ", " ", " ", " "],
        ["3", " ", "x", "y", "z"],
        ["4", " ", "a", "b", "c"],
        ["5", " ", "p", "q", "r"],
        ["6", " ", "d", "e", "f"],
    ])
}

const FIRST_PAIR_RESTORED: [[&str; 5]; 6] = [
    ["1", "2", "3", "4", "5"],
    ["2", " ", " ", " ", " "],
    ["3", " ", "x", "y", "z"],
    ["4", " ", "A", "B", "C"],
    ["5", " ", "p", "q", "r"],
    ["6", " ", "d", "e", "f"],
];

const BOTH_PAIRS_RESTORED: [[&str; 5]; 6] = [
    ["1", "2", "3", "4", "5"],
    ["2", " ", " ", " ", " "],
    ["3", " ", "x", "y", "z"],
    ["4", " ", "A", "B", "C"],
    ["5", " ", "p", "q", "r"],
    ["6", " ", "D", "E", "F"],
];

#[test]
fn test_restore_zero_height_is_noop() {
    let mut doc = restore_doc();
    let before = texts(&doc, CHORDS);
    song().restore_lyrics_in_chords(&mut doc, Area::new(2, 2, 3, 0)).unwrap();
    assert_eq!(texts(&doc, CHORDS), before);
}

#[test]
fn test_restore_pairs_touched_by_edit() {
    // (y, height) of the edit -> pairs restored
    let cases = [
        (2, 1, &FIRST_PAIR_RESTORED),
        (3, 1, &FIRST_PAIR_RESTORED),
        (2, 2, &FIRST_PAIR_RESTORED),
        (3, 2, &BOTH_PAIRS_RESTORED),
        (2, 3, &BOTH_PAIRS_RESTORED),
        (3, 3, &BOTH_PAIRS_RESTORED),
        (2, 4, &BOTH_PAIRS_RESTORED),
    ];

    for (y, height, expected) in cases {
        let mut doc = restore_doc();
        song()
            .restore_lyrics_in_chords(&mut doc, Area::new(2, y, 3, height))
            .unwrap();
        assert_eq!(texts(&doc, CHORDS), rows(expected), "edit at y={y} height={height}");
    }
}

#[test]
fn test_restore_in_frozen_area_ignored() {
    let mut doc = restore_doc();
    let before = texts(&doc, CHORDS);
    song().restore_lyrics_in_chords(&mut doc, Area::new(0, 0, 2, 2)).unwrap();
    assert_eq!(texts(&doc, CHORDS), before);
}

#[test]
fn test_restore_partial_overlap() {
    let mut doc = restore_doc();
    song().restore_lyrics_in_chords(&mut doc, Area::new(1, 1, 3, 3)).unwrap();

    assert_eq!(
        texts(&doc, CHORDS),
        rows(&[
            ["1", "2", "3", "4", "5"],
            ["2", " ", " ", " ", " "],
            ["3", " ", "x", "y", "z"],
            ["4", " ", "A", "B", "c"],
            ["5", " ", "p", "q", "r"],
            ["6", " ", "d", "e", "f"],
        ])
    );
}

#[test]
fn test_restore_past_lyrics_edge_blanks_cells() {
    let doc = MemoryDocument::new("Song")
        .with_sheet(sheet(LYRICS, &lyrics(), 3, 3))
        .with_sheet(sheet(
            CHORDS,
            &[
                ["1", "2", "3", "4", "5", "6", "7"],
                ["2", " ", " ", " ", " ", " ", " "],
                ["3", " ", "x", "y", "z", "w", "v"],
                ["4", " ", "a", "b", "c", "k", "l"],
            ],
            2,
            2,
        ));
    let mut doc = with_tray(doc, 2);

    // chords columns 5 and 6 map to lyrics columns 6 and 7, the side tray
    song().restore_lyrics_in_chords(&mut doc, Area::new(5, 3, 2, 1)).unwrap();

    assert_eq!(texts(&doc, CHORDS)[2], rows(&[["3", " ", "x", "y", "z", "w", "v"]])[0]);
    assert_eq!(texts(&doc, CHORDS)[3], rows(&[["4", " ", "a", "b", "c"]])[0]);
    common::assert_blank(&doc, CHORDS, 5, 3);
    common::assert_blank(&doc, CHORDS, 6, 3);
}
