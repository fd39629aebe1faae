//! Utilities for parsing and formatting A1-style cell references and ranges.

use crate::geometry::{coord, index, Area};

/// Parse a cell reference like "A1" into (col, row), 0-indexed.
pub fn parse_cell_ref(cell_ref: &str) -> Option<(usize, usize)> {
    let mut col: usize = 0;
    let mut row: usize = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for ch in cell_ref.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() && !saw_row {
            let digit = u32::from(ch.to_ascii_uppercase()) - u32::from('A') + 1;
            col = col.checked_mul(26)?.checked_add(usize::try_from(digit).ok()?)?;
            saw_col = true;
        } else if let Some(digit) = ch.to_digit(10) {
            row = row.checked_mul(10)?.checked_add(usize::try_from(digit).ok()?)?;
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some((col - 1, row - 1))
}

/// Parse a range like "A1:B10" or "C3" into an [`Area`].
pub fn parse_range(range: &str) -> Option<Area> {
    let (start, end) = range.split_once(':').unwrap_or((range, range));
    let (start_col, start_row) = parse_cell_ref(start)?;
    let (end_col, end_row) = parse_cell_ref(end)?;

    let (left, right) = (start_col.min(end_col), start_col.max(end_col));
    let (top, bottom) = (start_row.min(end_row), start_row.max(end_row));
    Some(Area::new(
        coord(left),
        coord(top),
        coord(right - left + 1),
        coord(bottom - top + 1),
    ))
}

/// Column letters for a 0-indexed column ("A", "Z", "AA", ...).
pub fn column_name(col: usize) -> String {
    let mut name = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        // rem < 26
        name.push(char::from(b'A' + u8::try_from(rem).unwrap_or(0)));
        n = (n - 1) / 26;
    }
    name.iter().rev().collect()
}

/// A1 notation for a non-empty area; "A1" style for single cells.
pub fn format_range(area: &Area) -> String {
    let start = format!("{}{}", column_name(index(area.x())), index(area.y()) + 1);
    if area.width() <= 1 && area.height() <= 1 {
        return start;
    }
    let end = area.end();
    format!(
        "{start}:{}{}",
        column_name(index(end.x - 1)),
        index(end.y - 1) + 1
    )
}
