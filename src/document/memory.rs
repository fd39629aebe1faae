//! In-memory reference host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Document, NamedRange, SheetDimensions};
use crate::error::{Result, SongsheetError};
use crate::geometry::{coord, index, Area};
use crate::types::{grid_width, CellValue, Grid, Notice};

/// One sheet: a sparse-at-the-edges grid plus its logical size.
///
/// `rows`/`columns` may exceed the stored cells; missing cells are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemorySheet {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    pub frozen_rows: usize,
    pub frozen_columns: usize,
    pub cells: Grid,
}

impl MemorySheet {
    pub fn new(name: impl Into<String>, columns: usize, rows: usize) -> Self {
        Self {
            name: name.into(),
            rows,
            columns,
            ..Self::default()
        }
    }

    /// A sheet sized to fit `cells`.
    pub fn with_cells(name: impl Into<String>, cells: Grid) -> Self {
        Self {
            name: name.into(),
            rows: cells.len(),
            columns: grid_width(&cells),
            cells,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn frozen(mut self, rows: usize, columns: usize) -> Self {
        self.frozen_rows = rows;
        self.frozen_columns = columns;
        self
    }

    pub fn dimensions(&self) -> SheetDimensions {
        SheetDimensions {
            rows: self.rows.max(self.cells.len()),
            columns: self.columns.max(grid_width(&self.cells)),
            frozen_rows: self.frozen_rows,
            frozen_columns: self.frozen_columns,
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> CellValue {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .cloned()
            .unwrap_or_default()
    }

    fn set(&mut self, col: usize, row: usize, value: CellValue) {
        if self.cells.len() <= row {
            self.cells.resize_with(row + 1, Vec::new);
        }
        if let Some(cells) = self.cells.get_mut(row) {
            if cells.len() <= col {
                cells.resize(col + 1, CellValue::Empty);
            }
            if let Some(cell) = cells.get_mut(col) {
                *cell = value;
            }
        }
        self.rows = self.rows.max(row + 1);
        self.columns = self.columns.max(col + 1);
    }
}

/// A whole document held in memory, serializable as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryDocument {
    pub name: String,
    pub sheets: Vec<MemorySheet>,
    pub named_ranges: BTreeMap<String, NamedRange>,
    /// Notifications raised so far, oldest first.
    pub notices: Vec<Notice>,
}

/// Which axis a structural edit runs along.
#[derive(Clone, Copy)]
enum Axis {
    Rows,
    Columns,
}

impl MemoryDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: MemorySheet) -> Self {
        self.sheets.push(sheet);
        self
    }

    #[must_use]
    pub fn with_named_range(mut self, name: impl Into<String>, sheet: &str, area: Area) -> Self {
        self.named_ranges.insert(
            name.into(),
            NamedRange {
                sheet: sheet.to_string(),
                area,
            },
        );
        self
    }

    /// # Errors
    /// Returns [`SongsheetError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns [`SongsheetError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    /// [`SongsheetError::MissingSheet`] for unknown sheets.
    pub fn sheet(&self, name: &str) -> Result<&MemorySheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SongsheetError::MissingSheet(name.to_string()))
    }

    fn sheet_mut(&mut self, name: &str) -> Result<&mut MemorySheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| SongsheetError::MissingSheet(name.to_string()))
    }

    /// Cell value at `(col, row)`; empty for unknown sheets or cells.
    pub fn cell(&self, sheet: &str, col: usize, row: usize) -> CellValue {
        self.sheet(sheet)
            .map(|s| s.cell(col, row))
            .unwrap_or_default()
    }

    /// Insert `count` empty rows before row `at` (0-based).
    ///
    /// # Errors
    /// [`SongsheetError::MissingSheet`] for unknown sheets.
    pub fn insert_rows(&mut self, sheet: &str, at: usize, count: usize) -> Result<()> {
        let target = self.sheet_mut(sheet)?;
        if at < target.cells.len() {
            let blank = std::iter::repeat_with(Vec::new).take(count);
            target.cells.splice(at..at, blank);
        }
        target.rows = target.dimensions().rows + count;
        self.shift_ranges(sheet, Axis::Rows, at, coord(count));
        Ok(())
    }

    /// Delete `count` rows starting at row `at` (0-based).
    ///
    /// # Errors
    /// [`SongsheetError::MissingSheet`] for unknown sheets.
    pub fn delete_rows(&mut self, sheet: &str, at: usize, count: usize) -> Result<()> {
        let target = self.sheet_mut(sheet)?;
        let rows = target.dimensions().rows;
        let end = at.saturating_add(count).min(target.cells.len());
        if at < end {
            target.cells.drain(at..end);
        }
        let removed = at.saturating_add(count).min(rows).saturating_sub(at);
        target.rows = rows - removed;
        self.shift_ranges(sheet, Axis::Rows, at, -coord(removed));
        Ok(())
    }

    /// Insert `count` empty columns before column `at` (0-based).
    ///
    /// # Errors
    /// [`SongsheetError::MissingSheet`] for unknown sheets.
    pub fn insert_columns(&mut self, sheet: &str, at: usize, count: usize) -> Result<()> {
        let target = self.sheet_mut(sheet)?;
        for row in &mut target.cells {
            if at < row.len() {
                row.splice(at..at, std::iter::repeat(CellValue::Empty).take(count));
            }
        }
        target.columns = target.dimensions().columns + count;
        self.shift_ranges(sheet, Axis::Columns, at, coord(count));
        Ok(())
    }

    /// Delete `count` columns starting at column `at` (0-based).
    ///
    /// # Errors
    /// [`SongsheetError::MissingSheet`] for unknown sheets.
    pub fn delete_columns(&mut self, sheet: &str, at: usize, count: usize) -> Result<()> {
        let target = self.sheet_mut(sheet)?;
        let columns = target.dimensions().columns;
        for row in &mut target.cells {
            let end = at.saturating_add(count).min(row.len());
            if at < end {
                row.drain(at..end);
            }
        }
        let removed = at.saturating_add(count).min(columns).saturating_sub(at);
        target.columns = columns - removed;
        self.shift_ranges(sheet, Axis::Columns, at, -coord(removed));
        Ok(())
    }

    /// Move or resize named ranges on `sheet` after inserting (`delta > 0`) or
    /// deleting (`delta < 0`) `|delta|` lines at `at`.
    fn shift_ranges(&mut self, sheet: &str, axis: Axis, at: usize, delta: i64) {
        let at = coord(at);
        for range in self.named_ranges.values_mut().filter(|r| r.sheet == sheet) {
            let area = range.area;
            let (start, len) = match axis {
                Axis::Rows => (area.y(), area.height()),
                Axis::Columns => (area.x(), area.width()),
            };
            let (start, len) = if delta >= 0 {
                shift_inserted(start, len, at, delta)
            } else {
                shift_deleted(start, len, at, -delta)
            };
            range.area = match axis {
                Axis::Rows => Area::new(area.x(), start, area.width(), len),
                Axis::Columns => Area::new(start, area.y(), len, area.height()),
            };
        }
    }
}

fn shift_inserted(start: i64, len: i64, at: i64, count: i64) -> (i64, i64) {
    if at <= start {
        (start + count, len)
    } else if at < start + len {
        (start, len + count)
    } else {
        (start, len)
    }
}

fn shift_deleted(start: i64, len: i64, at: i64, count: i64) -> (i64, i64) {
    let end = at + count;
    let overlap = ((start + len).min(end) - start.max(at)).max(0);
    let new_start = if start >= end {
        start - count
    } else if start > at {
        at
    } else {
        start
    };
    (new_start, len - overlap)
}

impl Document for MemoryDocument {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn dimensions(&self, sheet: &str) -> Result<SheetDimensions> {
        Ok(self.sheet(sheet)?.dimensions())
    }

    fn read(&self, sheet: &str, area: Area) -> Result<Grid> {
        let source = self.sheet(sheet)?;
        let values = (area.y()..area.end().y)
            .map(|row| {
                (area.x()..area.end().x)
                    .map(|col| {
                        if row < 0 || col < 0 {
                            CellValue::Empty
                        } else {
                            source.cell(index(col), index(row))
                        }
                    })
                    .collect()
            })
            .collect();
        Ok(values)
    }

    fn write(&mut self, sheet: &str, area: Area, values: &Grid) -> Result<()> {
        if area.x() < 0 || area.y() < 0 {
            return Err(SongsheetError::Host(format!(
                "cannot write outside the sheet at {area}"
            )));
        }
        let target = self.sheet_mut(sheet)?;
        let (width, height) = (index(area.width()), index(area.height()));
        let (x, y) = (index(area.x()), index(area.y()));

        for (r, row) in values.iter().take(height).enumerate() {
            for (c, value) in row.iter().take(width).enumerate() {
                target.set(x + c, y + r, value.clone());
            }
        }
        Ok(())
    }

    fn named_range(&self, name: &str) -> Option<NamedRange> {
        self.named_ranges.get(name).cloned()
    }

    fn notify(&mut self, notice: Notice) {
        log::info!("{}: {}", notice.title, notice.message);
        self.notices.push(notice);
    }
}
