use serde::{Deserialize, Serialize};

use crate::geometry::{coord, Area};

/// A maximal run of non-blank chord/lyric row pairs inside one super-column.
///
/// Rows are physical rows of the chords grid: `start_row` is a chord row and
/// `end_row` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Absolute column where the section's super-column starts.
    pub column: usize,
    /// Number of columns in the super-column.
    pub columns: usize,
    pub start_row: usize,
    pub end_row: usize,
    /// Columns needed to print the section without clipping text.
    pub width: usize,
}

impl Section {
    pub fn height(&self) -> usize {
        self.end_row.saturating_sub(self.start_row)
    }

    /// Footprint of the section on a page.
    pub fn area(&self) -> Area {
        Area::new(
            coord(self.column),
            coord(self.start_row),
            coord(self.width),
            coord(self.height()),
        )
    }

    /// Cells that belong to the section in the chords grid.
    ///
    /// Text may overflow past the super-column when printed, but only the
    /// super-column's own cells are copied.
    pub fn source_area(&self) -> Area {
        self.area().columns(coord(self.columns))
    }
}
