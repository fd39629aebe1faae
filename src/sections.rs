//! Section detection on the chords grid.
//!
//! A chords grid alternates chord rows (even) and lyric rows (odd). Songs are
//! written in vertical super-columns, each starting where a lyric line starts,
//! and a super-column is cut into sections (verse, chorus, ...) at blank row
//! pairs. Sections are the atomic blocks the page layout engine places.

use crate::types::{CellValue, Grid, Section};

/// A vertical slice of the chords grid that starts at a lyric start.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionColumn {
    /// Column of the slice within the source grid.
    pub offset: usize,
    pub values: Grid,
}

fn cell(values: &Grid, row: usize, col: usize) -> Option<&CellValue> {
    values.get(row).and_then(|r| r.get(col))
}

fn is_blank_at(values: &Grid, row: usize, col: usize) -> bool {
    cell(values, row, col).is_none_or(CellValue::is_blank)
}

fn is_lyric_start(values: &Grid, col: usize) -> bool {
    (1..values.len())
        .step_by(2)
        .any(|row| !is_blank_at(values, row, col))
}

fn is_blank_column(values: &Grid, col: usize) -> bool {
    (0..values.len()).all(|row| is_blank_at(values, row, col))
}

fn is_blank_row(row: Option<&Vec<CellValue>>) -> bool {
    row.is_none_or(|cells| cells.iter().all(CellValue::is_blank))
}

/// Split the grid into super-columns at every column where a lyric line starts.
///
/// Leading blank columns are dropped; a super-column never starts inside a
/// chord-only or blank run.
pub fn split_into_section_columns(values: &Grid) -> Vec<SectionColumn> {
    let width = crate::types::grid_width(values);
    let Some(first) = (0..width).find(|&col| !is_blank_column(values, col)) else {
        return Vec::new();
    };

    let mut columns = Vec::new();
    let mut end = width;
    for col in (first..width).rev() {
        if col == first || is_lyric_start(values, col) {
            columns.push(SectionColumn {
                offset: col,
                values: slice_columns(values, col, end),
            });
            end = col;
        }
    }
    columns.reverse();
    columns
}

fn slice_columns(values: &Grid, start: usize, end: usize) -> Grid {
    values
        .iter()
        .map(|row| {
            (start..end)
                .map(|col| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Cut one super-column into sections at blank chord/lyric row pairs.
///
/// Returned sections have `column == 0`; [`detect_sections`] places them.
pub fn split_into_sections(values: &Grid) -> Vec<Section> {
    let pairs = values.len().div_ceil(2);
    let columns = crate::types::grid_width(values);
    let mut sections = Vec::new();
    let mut start: Option<usize> = None;

    for pair in 0..=pairs {
        let empty = pair == pairs
            || (is_blank_row(values.get(2 * pair)) && is_blank_row(values.get(2 * pair + 1)));

        match (empty, start) {
            (false, None) => start = Some(pair),
            (true, Some(first)) => {
                let (start_row, end_row) = (2 * first, 2 * pair);
                let rows = values.get(start_row..end_row.min(values.len())).unwrap_or(&[]);
                sections.push(Section {
                    column: 0,
                    columns,
                    start_row,
                    end_row,
                    width: calculate_section_width(rows),
                });
                start = None;
            }
            _ => {}
        }
    }

    sections
}

/// Columns needed to print `rows` (a section starting at a chord row).
///
/// Cells are about two characters wide. A lyric cell needs half its text
/// length from where it starts; the rightmost chord needs its own cell plus
/// half its name, since chord names overflow to the right.
pub fn calculate_section_width(rows: &[Vec<CellValue>]) -> usize {
    let mut width = 1;

    for (index, row) in rows.iter().enumerate() {
        let is_lyric_row = index % 2 == 1;
        if is_lyric_row {
            for (col, value) in row.iter().enumerate() {
                if !value.is_blank() {
                    width = width.max(col + value.text_len().div_ceil(2));
                }
            }
        } else if let Some((col, chord)) = row
            .iter()
            .enumerate()
            .rev()
            .find(|(_, value)| !value.is_blank())
        {
            width = width.max(col + 1 + chord.text_len().div_ceil(2));
        }
    }

    width
}

/// Find every section of the chords grid, left to right then top to bottom,
/// in the grid's own coordinates.
pub fn detect_sections(values: &Grid) -> Vec<Section> {
    let sections: Vec<Section> = split_into_section_columns(values)
        .into_iter()
        .flat_map(|column| {
            split_into_sections(&column.values)
                .into_iter()
                .map(move |section| Section {
                    column: column.offset,
                    ..section
                })
        })
        .collect();

    log::debug!("detected {} sections", sections.len());
    sections
}
