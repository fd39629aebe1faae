//! Structural sync: replay row/column inserts and deletes made on the lyrics
//! sheet onto the chords sheet.

use crate::document::Document;
use crate::error::Result;
use crate::geometry::{coord, index, Area};
use crate::sheets::SongSheet;
use crate::space::Space;
use crate::structure::{
    apply_structural_column_changes, apply_structural_row_changes, detect_changes,
};
use crate::types::{blank_grid, grid_width, CellValue, Grid, StructuralChange};

/// Stamped index values read back from the lyrics sheet, before re-stamping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stamps {
    /// One entry per sheet column, from the index row.
    pub columns: Vec<Option<i64>>,
    /// One entry per sheet row, from the index column.
    pub rows: Vec<Option<i64>>,
}

impl Stamps {
    /// True when no index cell held a stamp (a sheet never stamped before).
    pub fn is_blank(&self) -> bool {
        self.columns.iter().chain(&self.rows).all(Option::is_none)
    }
}

/// Changes inferred for both axes, relative to the working-area origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct StructuralChanges {
    pub columns: Vec<StructuralChange>,
    pub rows: Vec<StructuralChange>,
}

impl StructuralChanges {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

fn stamp_line(len: usize) -> impl Iterator<Item = CellValue> {
    (1..=coord(len)).map(CellValue::from)
}

impl SongSheet {
    /// Write `1..=N` into the lyrics index row and index column, returning the
    /// values that were there before.
    ///
    /// # Errors
    /// Fails when the lyrics sheet is missing or the host rejects the write.
    pub fn stamp_indexes(&self, doc: &mut dyn Document) -> Result<Stamps> {
        let index_row = self.lyrics.index_row();
        let index_column = self.lyrics.index_column();

        let row_values = index_row.values(&*doc)?;
        let column_values = index_column.values(&*doc)?;

        let stamps = Stamps {
            columns: row_values
                .first()
                .map(|row| row.iter().map(CellValue::as_integer).collect())
                .unwrap_or_default(),
            rows: column_values
                .iter()
                .map(|row| row.first().and_then(CellValue::as_integer))
                .collect(),
        };

        let row_stamp: Grid = vec![stamp_line(stamps.columns.len()).collect()];
        let column_stamp: Grid = stamp_line(stamps.rows.len()).map(|v| vec![v]).collect();
        index_row.set_values(doc, &row_stamp)?;
        index_column.set_values(doc, &column_stamp)?;

        Ok(stamps)
    }

    /// Infer the structural edits made to the lyrics sheet since the last stamp.
    ///
    /// Column bounds run from the first unfrozen column to the end of the
    /// working area; when columns were deleted the tray's first stamp still
    /// marks the old end, so the larger of the two is used.
    ///
    /// # Errors
    /// Fails when the lyrics sheet is missing.
    pub fn detect_structural_changes(
        &self,
        doc: &dyn Document,
        stamps: &Stamps,
    ) -> Result<StructuralChanges> {
        let dims = doc.dimensions(self.lyrics.sheet().name())?;
        let main = self.lyrics.main().area(doc)?;
        let tray = self.lyrics.side_tray().area(doc)?;

        let tray_start = if tray.is_empty() {
            None
        } else {
            stamps.columns.get(index(tray.x())).copied().flatten()
        };
        let column_to = tray_start.map_or(main.end().x, |stamp| {
            main.end().x.max(stamp.saturating_sub(1))
        });
        let column_from = coord(dims.frozen_columns) + 1;

        let last_row_stamp = stamps.rows.iter().flatten().copied().max().unwrap_or(0);
        let row_to = main.end().y.max(last_row_stamp);
        let row_from = coord(dims.frozen_rows) + 1;

        Ok(StructuralChanges {
            columns: detect_changes(&stamps.columns, column_from, column_to),
            rows: detect_changes(&stamps.rows, row_from, row_to),
        })
    }

    /// Mirror structural edits of the lyrics sheet onto the chords sheet, then
    /// resync all lyrics.
    ///
    /// The first run on a sheet without stamps only primes the stamps.
    ///
    /// # Errors
    /// Fails when a sheet is missing or the host rejects a write.
    pub fn sync_structure(&self, doc: &mut dyn Document) -> Result<StructuralChanges> {
        let stamps = self.stamp_indexes(doc)?;
        if stamps.is_blank() {
            log::info!("index stamps primed, nothing to sync");
            return Ok(StructuralChanges::default());
        }

        let changes = self.detect_structural_changes(&*doc, &stamps)?;
        if !changes.is_empty() {
            self.apply_to_chords(doc, &changes)?;
        }

        let lyrics_main = self.lyrics.main().area(&*doc)?;
        self.sync_lyrics_to_chords(doc, lyrics_main)?;

        log::info!(
            "structural sync applied {} column and {} row changes",
            changes.columns.len(),
            changes.rows.len()
        );
        Ok(changes)
    }

    fn apply_to_chords(&self, doc: &mut dyn Document, changes: &StructuralChanges) -> Result<()> {
        let chords_main = self.chords.main().area(&*doc)?;
        let before = self.chords.main().values(&*doc)?;
        let after = apply_structural_row_changes(
            &apply_structural_column_changes(&before, &changes.columns),
            &changes.rows,
        );

        // cells vacated by deletions must be cleared too
        let width = grid_width(&before).max(grid_width(&after));
        let height = before.len().max(after.len());
        let mut padded = blank_grid(width, height);
        for (slot, row) in padded.iter_mut().zip(after) {
            for (cell, value) in slot.iter_mut().zip(row) {
                *cell = value;
            }
        }

        let target = Area::new(chords_main.x(), chords_main.y(), coord(width), coord(height));
        self.chords.sheet().region(target).set_values(doc, &padded)
    }
}
