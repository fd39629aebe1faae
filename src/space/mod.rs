//! Coordinate projection: lazy views over regions of a document.
//!
//! A [`Space`] names a region (a sheet, its working area, a named cell) without
//! holding any of its geometry. Every access recomputes the area from the
//! parent chain and the document's current state, so a view never goes stale
//! after rows or columns are inserted.

mod cell;
mod sheet;
mod sub;

pub use cell::CellSpace;
pub use sheet::SheetSpace;
pub use sub::{Projection, SubSpace};

use std::rc::Rc;

use crate::document::Document;
use crate::error::Result;
use crate::geometry::Area;
use crate::types::{FromCell, Grid};

/// A lazily resolved rectangular region of one sheet.
pub trait Space {
    /// Name of the sheet the region lives on.
    fn sheet(&self) -> &str;

    /// Absolute area of the region in the document's current state.
    fn area(&self, doc: &dyn Document) -> Result<Area>;

    /// Read the region; an empty region reads as no rows.
    fn values(&self, doc: &dyn Document) -> Result<Grid> {
        let area = self.area(doc)?;
        if area.is_empty() {
            return Ok(Grid::new());
        }
        doc.read(self.sheet(), area)
    }

    /// Overwrite the region; writes to an empty region are dropped.
    fn set_values(&self, doc: &mut dyn Document, values: &Grid) -> Result<()> {
        let area = self.area(&*doc)?;
        if area.is_empty() {
            return Ok(());
        }
        doc.write(self.sheet(), area, values)
    }

    /// A child region computed from this region's area.
    fn sub(&self, f: impl Fn(Area) -> Area + 'static) -> SubSpace
    where
        Self: Sized + Clone + 'static,
    {
        SubSpace::new(Rc::new(self.clone()), move |_, area| Ok(f(area)))
    }

    /// A child region whose projection may consult the document.
    fn sub_with(
        &self,
        f: impl Fn(&dyn Document, Area) -> Result<Area> + 'static,
    ) -> SubSpace
    where
        Self: Sized + Clone + 'static,
    {
        SubSpace::new(Rc::new(self.clone()), f)
    }

    /// A typed single-cell child region.
    fn cell<T: FromCell>(
        &self,
        f: impl Fn(&dyn Document, Area) -> Result<Area> + 'static,
    ) -> CellSpace<T>
    where
        Self: Sized + Clone + 'static,
    {
        CellSpace::new(Rc::new(self.clone()), f)
    }
}
