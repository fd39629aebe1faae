//! Content sync between the lyrics sheet and the lyric rows of the chords sheet.

use crate::cell_ref::format_range;
use crate::document::Document;
use crate::error::Result;
use crate::geometry::{coord, Area};
use crate::sheets::SongSheet;
use crate::space::Space;
use crate::structure::ROWS_PER_LYRIC_ROW;
use crate::types::CellValue;

impl SongSheet {
    /// Copy the lyrics in `edited` (lyrics sheet coordinates) onto the lyric
    /// rows of the chords sheet, leaving chord rows untouched.
    ///
    /// # Errors
    /// Fails when either sheet is missing or the host rejects the write.
    pub fn sync_lyrics_to_chords(&self, doc: &mut dyn Document, edited: Area) -> Result<()> {
        let lyrics_main = self.lyrics.main().area(&*doc)?;
        let chords_main = self.chords.main().area(&*doc)?;

        let source = lyrics_main.intersect(&edited);
        if source.is_empty() {
            return Ok(());
        }

        // each lyric row spans a chord row and a lyric row
        let target = source
            .relative_to(lyrics_main.start())
            .scale(1.0, 2.0)?
            .translate(chords_main.start());

        let source_values = self.lyrics.sheet().region(source).values(&*doc)?;
        let target_space = self.chords.sheet().region(target);
        let mut target_values = target_space.values(&*doc)?;

        for (offset, row) in source_values.into_iter().enumerate() {
            if let Some(slot) = target_values.get_mut(offset * ROWS_PER_LYRIC_ROW + 1) {
                *slot = row;
            }
        }

        target_space.set_values(doc, &target_values)?;
        log::debug!(
            "synced lyrics {} to chords {}",
            format_range(&source),
            format_range(&target)
        );
        Ok(())
    }

    /// Undo edits to the lyric rows of the chords sheet.
    ///
    /// Every chord/lyric pair touched by `edited` (chords sheet coordinates)
    /// gets its lyric row copied back from the lyrics sheet; cells beyond the
    /// lyrics working area come back blank.
    ///
    /// # Errors
    /// Fails when either sheet is missing or the host rejects the write.
    pub fn restore_lyrics_in_chords(&self, doc: &mut dyn Document, edited: Area) -> Result<()> {
        let lyrics_main = self.lyrics.main().area(&*doc)?;
        let chords_main = self.chords.main().area(&*doc)?;

        let touched = chords_main.intersect(&edited);
        if touched.is_empty() {
            return Ok(());
        }

        let rows = coord(ROWS_PER_LYRIC_ROW);
        let relative = touched.relative_to(chords_main.start());
        let first_pair = relative.y() / rows;
        let last_pair = (relative.end().y - 1) / rows;
        let pairs = last_pair - first_pair + 1;

        let target = Area::new(
            touched.x(),
            chords_main.y() + first_pair * rows,
            touched.width(),
            pairs * rows,
        );
        let source = Area::new(
            lyrics_main.x() + relative.x(),
            lyrics_main.y() + first_pair,
            touched.width(),
            pairs,
        );

        let source_values = self.lyrics.sheet().region(source).values(&*doc)?;
        let target_space = self.chords.sheet().region(target);
        let mut target_values = target_space.values(&*doc)?;

        for (offset, row) in source_values.into_iter().enumerate() {
            let y = source.y() + coord(offset);
            let restored = row
                .into_iter()
                .enumerate()
                .map(|(col, value)| {
                    let cell = Area::new(source.x() + coord(col), y, 1, 1);
                    if lyrics_main.overlaps_with(&cell) {
                        value
                    } else {
                        CellValue::Empty
                    }
                })
                .collect();
            if let Some(slot) = target_values.get_mut(offset * ROWS_PER_LYRIC_ROW + 1) {
                *slot = restored;
            }
        }

        target_space.set_values(doc, &target_values)?;
        log::debug!(
            "restored lyric rows {} from {}",
            format_range(&target),
            format_range(&source)
        );
        Ok(())
    }
}
