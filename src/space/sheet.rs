use super::{Space, SubSpace};
use crate::document::Document;
use crate::error::{Result, SongsheetError};
use crate::geometry::{coord, Area, Crop};

/// A whole sheet; the root of every projection chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSpace {
    name: String,
}

impl SheetSpace {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sheet without its frozen rows and columns.
    pub fn main(&self) -> SubSpace {
        let name = self.name.clone();
        self.sub_with(move |doc, area| {
            let dims = doc.dimensions(&name)?;
            Ok(area.crop(Crop {
                left: coord(dims.frozen_columns),
                top: coord(dims.frozen_rows),
                ..Crop::default()
            }))
        })
    }

    pub fn frozen_rows(&self) -> SubSpace {
        let name = self.name.clone();
        self.sub_with(move |doc, area| Ok(area.rows(coord(doc.dimensions(&name)?.frozen_rows))))
    }

    pub fn frozen_columns(&self) -> SubSpace {
        let name = self.name.clone();
        self.sub_with(move |doc, area| {
            Ok(area.columns(coord(doc.dimensions(&name)?.frozen_columns)))
        })
    }

    /// A fixed absolute region of this sheet.
    pub fn region(&self, area: Area) -> SubSpace {
        self.sub(move |_| area)
    }

    /// Area of the named range `name`, or `default` when it does not exist.
    ///
    /// # Errors
    /// [`SongsheetError::MissingNamedRange`] when the range is missing and no
    /// default is given.
    pub fn named_area(doc: &dyn Document, name: &str, default: Option<Area>) -> Result<Area> {
        doc.named_range(name)
            .map(|range| range.area)
            .or(default)
            .ok_or_else(|| SongsheetError::MissingNamedRange(name.to_string()))
    }

    /// Rows of the main area up to and including the last non-blank row.
    pub fn last_row_with_content(&self, doc: &dyn Document) -> Result<i64> {
        let dims = doc.dimensions(&self.name)?;
        let last = doc.last_row_with_content(&self.name)?;
        Ok(coord(last.saturating_sub(dims.frozen_rows)))
    }
}

impl Space for SheetSpace {
    fn sheet(&self) -> &str {
        &self.name
    }

    fn area(&self, doc: &dyn Document) -> Result<Area> {
        Ok(doc.dimensions(&self.name)?.area())
    }
}
