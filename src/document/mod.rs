//! Host document interface.
//!
//! The engine never talks to a spreadsheet directly. Everything it needs from
//! the host (bulk reads and writes, sheet dimensions, named ranges and user
//! notifications) goes through [`Document`], so the algorithms can run against
//! the in-memory [`MemoryDocument`] in tests and in the CLI.

mod memory;

pub use memory::{MemoryDocument, MemorySheet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{coord, Area};
use crate::types::{Grid, Notice};

/// Size and frozen panes of one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetDimensions {
    pub rows: usize,
    pub columns: usize,
    pub frozen_rows: usize,
    pub frozen_columns: usize,
}

impl SheetDimensions {
    /// The whole sheet as an area at the origin.
    pub fn area(&self) -> Area {
        Area::new(0, 0, coord(self.columns), coord(self.rows))
    }
}

/// A document-wide named range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRange {
    pub sheet: String,
    pub area: Area,
}

/// The hosting grid document.
pub trait Document {
    /// Document title as the host shows it.
    fn name(&self) -> String;

    /// # Errors
    /// [`crate::error::SongsheetError::MissingSheet`] for unknown sheets.
    fn dimensions(&self, sheet: &str) -> Result<SheetDimensions>;

    /// Read `area` row-major; cells outside the sheet read as empty.
    fn read(&self, sheet: &str, area: Area) -> Result<Grid>;

    /// Write `values` at `area`, growing the sheet when the area extends past it.
    ///
    /// Only cells inside both `area` and `values` are written.
    fn write(&mut self, sheet: &str, area: Area, values: &Grid) -> Result<()>;

    fn named_range(&self, name: &str) -> Option<NamedRange>;

    /// Show a notification to the user.
    fn notify(&mut self, notice: Notice);

    /// Number of rows up to and including the last non-blank one.
    fn last_row_with_content(&self, sheet: &str) -> Result<usize> {
        let area = self.dimensions(sheet)?.area();
        let values = self.read(sheet, area)?;
        Ok(values
            .iter()
            .rposition(|row| row.iter().any(|cell| !cell.is_blank()))
            .map_or(0, |row| row + 1))
    }
}
