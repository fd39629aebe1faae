//! Transposing every chord of the chords sheet, and the key cell that drives it.

use crate::chords::{mark_invalid, Chord};
use crate::document::Document;
use crate::error::Result;
use crate::geometry::Area;
use crate::sheets::SongSheet;
use crate::space::Space;
use crate::structure::ROWS_PER_LYRIC_ROW;
use crate::types::{CellValue, Grid};

impl SongSheet {
    fn transpose_cell(&self, cell: &CellValue, semitones: i64) -> CellValue {
        if cell.is_blank() {
            return cell.clone();
        }
        let text = cell.text();
        match Chord::parse(&text) {
            Some(chord) => chord
                .transpose(semitones)
                .render(self.config.prefer_flats)
                .into(),
            None => mark_invalid(&text).into(),
        }
    }

    /// Shift every chord row of the chords working area by `semitones`.
    ///
    /// Cells that are not chords get a `!` prefix. With `update_key` the key
    /// cell is transposed too.
    ///
    /// # Errors
    /// Fails when the chords sheet or a required named range is missing.
    pub fn transpose_all(&self, doc: &mut dyn Document, semitones: i64, update_key: bool) -> Result<()> {
        if semitones == 0 {
            return Ok(());
        }

        if update_key && doc.named_range(self.chords.key_range()).is_some() {
            // unlike chord cells, a blank key is marked too
            let key = self.chords.key();
            let current = key.get(&*doc)?;
            let updated = match Chord::parse(&current) {
                Some(chord) => chord.transpose(semitones).render(self.config.prefer_flats),
                None => mark_invalid(&current),
            };
            key.set(doc, updated)?;
        }

        let rows = self.chords.sheet().last_row_with_content(&*doc)?;
        let main = self.chords.main().area(&*doc)?;
        let area: Area = main.rows(rows);
        if area.is_empty() {
            return Ok(());
        }

        let space = self.chords.sheet().region(area);
        let values: Grid = space
            .values(&*doc)?
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                if row % ROWS_PER_LYRIC_ROW == 0 {
                    cells
                        .iter()
                        .map(|cell| self.transpose_cell(cell, semitones))
                        .collect()
                } else {
                    cells
                }
            })
            .collect();
        space.set_values(doc, &values)?;

        log::info!("transposed chords by {semitones} semitones");
        Ok(())
    }

    /// # Errors
    /// Same as [`SongSheet::transpose_all`].
    pub fn transpose_up(&self, doc: &mut dyn Document) -> Result<()> {
        self.transpose_all(doc, 1, true)
    }

    /// # Errors
    /// Same as [`SongSheet::transpose_all`].
    pub fn transpose_down(&self, doc: &mut dyn Document) -> Result<()> {
        self.transpose_all(doc, -1, true)
    }

    /// After an edit on the chords sheet: if the key cell changed and
    /// auto-transpose is on, move every chord by the old-to-new key distance.
    ///
    /// # Errors
    /// Fails when the chords header ranges are missing or a write fails.
    pub fn handle_key_change(
        &self,
        doc: &mut dyn Document,
        edited: Area,
        old_value: Option<&CellValue>,
    ) -> Result<()> {
        let Some(key_range) = doc.named_range(self.chords.key_range()) else {
            return Ok(());
        };
        if key_range.sheet != self.chords.sheet().name() || !key_range.area.overlaps_with(&edited) {
            return Ok(());
        }
        if doc.named_range(self.chords.auto_transpose_range()).is_none()
            || !self.chords.auto_transpose().get_or(&*doc, false)?
        {
            return Ok(());
        }

        let new_key = Chord::parse(&self.chords.key().get(&*doc)?);
        let old_key = old_value.and_then(|value| Chord::parse(&value.text()));
        if let (Some(old_key), Some(new_key)) = (old_key, new_key) {
            self.transpose_all(doc, old_key.semitones_to(&new_key), false)?;
        }
        Ok(())
    }

    /// Turn auto-transpose back off when it is switched on while the key
    /// cell does not hold a valid chord.
    ///
    /// # Errors
    /// Fails when the chords header ranges are missing or a write fails.
    pub fn disable_auto_transpose_if_key_invalid(&self, doc: &mut dyn Document, edited: Area) -> Result<()> {
        let Some(range) = doc.named_range(self.chords.auto_transpose_range()) else {
            return Ok(());
        };
        if range.sheet != self.chords.sheet().name() || !range.area.overlaps_with(&edited) {
            return Ok(());
        }

        let auto_transpose = self.chords.auto_transpose();
        if !auto_transpose.get_or(&*doc, false)? {
            return Ok(());
        }

        let key_is_valid = doc.named_range(self.chords.key_range()).is_some()
            && Chord::parse(&self.chords.key().get(&*doc)?).is_some();
        if !key_is_valid {
            log::info!("auto-transpose disabled: key is not a chord");
            auto_transpose.set(doc, false)?;
        }
        Ok(())
    }
}
