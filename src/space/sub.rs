use std::fmt;
use std::rc::Rc;

use super::Space;
use crate::document::Document;
use crate::error::{Result, SongsheetError};
use crate::geometry::Area;

/// Maps a parent's current area to a child area.
pub type Projection = Rc<dyn Fn(&dyn Document, Area) -> Result<Area>>;

/// A region derived from a parent region by a projection.
#[derive(Clone)]
pub struct SubSpace {
    parent: Rc<dyn Space>,
    projection: Projection,
}

impl SubSpace {
    pub fn new(
        parent: Rc<dyn Space>,
        projection: impl Fn(&dyn Document, Area) -> Result<Area> + 'static,
    ) -> Self {
        Self {
            parent,
            projection: Rc::new(projection),
        }
    }
}

impl Space for SubSpace {
    fn sheet(&self) -> &str {
        self.parent.sheet()
    }

    fn area(&self, doc: &dyn Document) -> Result<Area> {
        let parent = self.parent.area(doc)?;
        let area = (self.projection)(doc, parent)?;
        if area.x() < 0 || area.y() < 0 {
            return Err(SongsheetError::InvalidSubSpace(area));
        }
        Ok(area)
    }
}

impl fmt::Debug for SubSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubSpace")
            .field("sheet", &self.sheet())
            .finish_non_exhaustive()
    }
}
