//! Structural change detection from stamped indexes.
//!
//! Before a structural edit the lyrics sheet's index row and column hold a
//! dense `1..=N` stamp. After the host inserts or removes rows/columns, the
//! stamp read back has holes (`None`, inserted cells) and gaps (removed cells).
//! [`detect_changes`] turns that sequence back into edit operations, and the
//! `apply_*` functions replay them on the parallel chords grid.

use crate::types::{CellValue, Grid, StructuralChange};

/// Physical chords rows per logical lyrics row (chord line + lyric line).
pub const ROWS_PER_LYRIC_ROW: usize = 2;

/// Infer the inserts and deletes that turned a `1..=N` stamp into `indexes`.
///
/// `from..=to` are the 1-based absolute bounds of the working area; changes are
/// clipped to them and reported relative to `from`. Changes come out in
/// descending position, so replaying them in order never shifts the position of
/// a change that is still pending.
pub fn detect_changes(indexes: &[Option<i64>], from: i64, to: i64) -> Vec<StructuralChange> {
    // Last stamp strictly to the left of each slot (0 when none).
    let mut predecessors = Vec::with_capacity(indexes.len());
    let mut last = 0;
    for value in indexes {
        predecessors.push(last);
        if let Some(v) = value {
            last = *v;
        }
    }

    let mut changes = Vec::new();
    let mut i = indexes.len();
    while i > 0 {
        i -= 1;
        let predecessor = predecessors.get(i).copied().unwrap_or(0);

        match indexes.get(i).copied().flatten() {
            None => {
                let end = i;
                while i > 0 && indexes.get(i - 1).is_some_and(Option::is_none) {
                    i -= 1;
                }
                let run = crate::geometry::coord(end - i + 1);
                // every slot in a null run shares the same predecessor, including a
                // leading run; this can split a replacement into delete + insert
                if let Some(change) = clip(predecessor.saturating_add(1), run, from, to) {
                    changes.push(change);
                }
            }
            Some(value) => {
                let expected = predecessor.saturating_add(1);
                if value > expected {
                    let gap = value.saturating_sub(expected);
                    if let Some(change) = clip(expected, gap.saturating_neg(), from, to) {
                        changes.push(change);
                    }
                }
            }
        }
    }

    log::debug!("detected structural changes {changes:?} within {from}..={to}");
    changes
}

/// Clip a change covering units `position..position+|span|` to `from..=to`.
///
/// Stamps are user-editable cells, so every step saturates.
fn clip(position: i64, span: i64, from: i64, to: i64) -> Option<StructuralChange> {
    let start = position.max(from);
    let end = position
        .saturating_add(span.saturating_abs())
        .saturating_sub(1)
        .min(to);
    if start > end {
        return None;
    }
    let length = end.saturating_sub(start).saturating_add(1);
    Some(StructuralChange {
        position: start.saturating_sub(from).saturating_add(1),
        span: if span < 0 { length.saturating_neg() } else { length },
    })
}

/// Replay column changes on a copy of `values`.
pub fn apply_structural_column_changes(values: &Grid, changes: &[StructuralChange]) -> Grid {
    let mut result = values.clone();
    for change in changes {
        for row in &mut result {
            splice(row, change, 1, || CellValue::Empty);
        }
    }
    result
}

/// Replay lyric-row changes on a copy of the chords grid `values`.
///
/// Every logical unit is a chord/lyric pair, i.e. two physical rows.
pub fn apply_structural_row_changes(values: &Grid, changes: &[StructuralChange]) -> Grid {
    let mut result = values.clone();
    if result.is_empty() {
        return result;
    }
    let width = crate::types::grid_width(values);
    for change in changes {
        splice(&mut result, change, ROWS_PER_LYRIC_ROW, || {
            vec![CellValue::Empty; width]
        });
    }
    result
}

/// Insert or remove `|span| * unit` items at unit `position` (1-based).
fn splice<T>(items: &mut Vec<T>, change: &StructuralChange, unit: usize, blank: impl Fn() -> T) {
    let at = crate::geometry::index(change.position.saturating_sub(1))
        .saturating_mul(unit)
        .min(items.len());
    let count = crate::geometry::index(change.span.saturating_abs()).saturating_mul(unit);

    if change.is_insertion() {
        items.splice(at..at, std::iter::repeat_with(blank).take(count));
    } else {
        let end = at.saturating_add(count).min(items.len());
        items.drain(at..end);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::grid_from_strs;

    fn stamps(values: &[i64]) -> Vec<Option<i64>> {
        values.iter().map(|&v| if v == 0 { None } else { Some(v) }).collect()
    }

    #[test]
    fn test_dense_sequence_has_no_changes() {
        assert!(detect_changes(&stamps(&[1, 2, 3, 4, 5]), 1, 5).is_empty());
        assert!(detect_changes(&[], 1, 0).is_empty());
        assert!(detect_changes(&stamps(&[1]), 1, 1).is_empty());
    }

    #[test]
    fn test_insertion_run() {
        assert_eq!(
            detect_changes(&stamps(&[1, 2, 0, 0, 0, 3, 4]), 1, 7),
            vec![StructuralChange::insertion(3, 3)]
        );
    }

    #[test]
    fn test_deletion_gap() {
        assert_eq!(
            detect_changes(&stamps(&[1, 2, 6, 7]), 1, 7),
            vec![StructuralChange::deletion(3, 3)]
        );
    }

    #[test]
    fn test_replacement_reports_delete_before_insert() {
        // columns 3 and 4 removed, two blank columns inserted in their place
        assert_eq!(
            detect_changes(&stamps(&[1, 2, 0, 0, 5, 6]), 1, 6),
            vec![StructuralChange::deletion(3, 2), StructuralChange::insertion(3, 2)]
        );
    }

    #[test]
    fn test_leading_nulls_with_gap() {
        assert_eq!(
            detect_changes(&stamps(&[0, 3, 4]), 1, 4),
            vec![StructuralChange::deletion(1, 2), StructuralChange::insertion(1, 1)]
        );
    }

    #[test]
    fn test_clip_partially_outside() {
        // deletion of units 2..=4, working area starts at 3
        assert_eq!(
            detect_changes(&stamps(&[1, 5, 6]), 3, 6),
            vec![StructuralChange::deletion(1, 2)]
        );
    }

    #[test]
    fn test_extreme_stamps_saturate() {
        // a huge first stamp reads as a deletion clipped to the working area
        assert_eq!(
            detect_changes(&[Some(i64::MAX), None], 1, 5),
            vec![StructuralChange::deletion(1, 5)]
        );
        assert!(detect_changes(&[Some(-i64::MAX), Some(i64::MAX)], 1, 5).is_empty());
        assert_eq!(
            detect_changes(&[Some(1), Some(i64::MAX)], 1, i64::MAX),
            vec![StructuralChange::deletion(2, i64::MAX - 2)]
        );
    }

    #[test]
    fn test_splice_clamps_past_end() {
        let grid = grid_from_strs(&[["A", "B"]]);
        let result = apply_structural_column_changes(&grid, &[StructuralChange::insertion(9, 1)]);
        assert_eq!(result, grid_from_strs(&[["A", "B", ""]]));
        let result = apply_structural_column_changes(&grid, &[StructuralChange::deletion(2, 5)]);
        assert_eq!(result, grid_from_strs(&[["A"]]));
    }

    #[test]
    fn test_row_insertion_uses_grid_width() {
        let grid = vec![vec![CellValue::from("A")], vec![CellValue::from("1"), CellValue::from("x")]];
        let result = apply_structural_row_changes(&grid, &[StructuralChange::insertion(1, 1)]);
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].len(), 2);
        assert!(result[1].iter().all(CellValue::is_blank));
    }
}
