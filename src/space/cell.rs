use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::{Projection, Space};
use crate::document::Document;
use crate::error::{Result, SongsheetError};
use crate::geometry::Area;
use crate::types::{CellValue, FromCell};

/// A single logical cell read and written as `T`.
pub struct CellSpace<T> {
    parent: Rc<dyn Space>,
    projection: Projection,
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for CellSpace<T> {
    fn clone(&self) -> Self {
        Self {
            parent: Rc::clone(&self.parent),
            projection: Rc::clone(&self.projection),
            marker: PhantomData,
        }
    }
}

impl<T: FromCell> CellSpace<T> {
    pub fn new(
        parent: Rc<dyn Space>,
        projection: impl Fn(&dyn Document, Area) -> Result<Area> + 'static,
    ) -> Self {
        Self {
            parent,
            projection: Rc::new(projection),
            marker: PhantomData,
        }
    }

    fn raw(&self, doc: &dyn Document) -> Result<CellValue> {
        let values = self.values(doc)?;
        Ok(values
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .unwrap_or_default())
    }

    /// # Errors
    /// Fails when the area is not a single cell or the value does not convert.
    pub fn get(&self, doc: &dyn Document) -> Result<T> {
        T::from_cell(&self.raw(doc)?)
    }

    /// Like [`CellSpace::get`], but a blank cell yields `default`.
    pub fn get_or(&self, doc: &dyn Document, default: T) -> Result<T> {
        let value = self.raw(doc)?;
        if value.is_blank() {
            Ok(default)
        } else {
            T::from_cell(&value)
        }
    }

    /// # Errors
    /// Fails when the area is not a single cell or the host rejects the write.
    pub fn set(&self, doc: &mut dyn Document, value: T) -> Result<()>
    where
        T: Into<CellValue>,
    {
        self.set_values(doc, &vec![vec![value.into()]])
    }
}

impl<T> Space for CellSpace<T> {
    fn sheet(&self) -> &str {
        self.parent.sheet()
    }

    fn area(&self, doc: &dyn Document) -> Result<Area> {
        let parent = self.parent.area(doc)?;
        let area = (self.projection)(doc, parent)?;
        if area.width() != 1 || area.height() != 1 || area.x() < 0 || area.y() < 0 {
            return Err(SongsheetError::InvalidCellSpace(area));
        }
        Ok(area)
    }
}

impl<T> fmt::Debug for CellSpace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellSpace")
            .field("sheet", &self.sheet())
            .finish_non_exhaustive()
    }
}
