//! Rectangular areas on the cell grid.
//!
//! An [`Area`] never has a negative width or height: the constructor absorbs a
//! negative extent by moving the origin back, so every transform below is total.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;
use crate::error::{Result, SongsheetError};

/// A rectangle of cells: origin `(x, y)` plus `width` columns by `height` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawArea", into = "RawArea")]
pub struct Area {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

/// Amounts to trim from each side of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Crop {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

/// Wire shape of an area; goes through [`Area::new`] so extents get normalized.
#[derive(Serialize, Deserialize)]
struct RawArea {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl From<RawArea> for Area {
    fn from(raw: RawArea) -> Self {
        Area::new(raw.x, raw.y, raw.width, raw.height)
    }
}

impl From<Area> for RawArea {
    fn from(area: Area) -> Self {
        RawArea {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height,
        }
    }
}

impl Area {
    /// The canonical "no region" value.
    pub const EMPTY: Area = Area {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create an area; a negative `width`/`height` extends backwards from `(x, y)`.
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        let (x, width) = if width < 0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0 { (y + height, -height) } else { (y, height) };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn x(&self) -> i64 {
        self.x
    }

    pub const fn y(&self) -> i64 {
        self.y
    }

    pub const fn width(&self) -> i64 {
        self.width
    }

    pub const fn height(&self) -> i64 {
        self.height
    }

    pub const fn start(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// One past the bottom-right cell.
    pub const fn end(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub const fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn translate(&self, offset: Point) -> Area {
        Area::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    #[must_use]
    pub fn translate_to(&self, origin: Point) -> Area {
        Area::new(origin.x, origin.y, self.width, self.height)
    }

    /// Scale position and size by per-axis factors.
    ///
    /// The origin rounds down and the far edge rounds up, so a partially covered
    /// cell is always included. A zero factor collapses that axis.
    ///
    /// # Errors
    /// Returns [`SongsheetError::InvalidScale`] for negative or non-finite factors.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn scale(&self, x: f64, y: f64) -> Result<Area> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return Err(SongsheetError::InvalidScale { x, y });
        }

        let new_x = (self.x as f64 * x).floor();
        let new_y = (self.y as f64 * y).floor();
        let end_x = ((self.x + self.width) as f64 * x).ceil();
        let end_y = ((self.y + self.height) as f64 * y).ceil();

        Ok(Area::new(
            new_x as i64,
            new_y as i64,
            (end_x - new_x) as i64,
            (end_y - new_y) as i64,
        ))
    }

    /// Grow (or shrink) the size by the given amounts, keeping the origin.
    #[must_use]
    pub fn resize(&self, dx: i64, dy: i64) -> Area {
        Area::new(self.x, self.y, self.width + dx, self.height + dy)
    }

    /// Multiply the size by integer factors, keeping the origin.
    #[must_use]
    pub fn resize_by(&self, fx: i64, fy: i64) -> Area {
        Area::new(self.x, self.y, self.width * fx, self.height * fy)
    }

    #[must_use]
    pub fn resize_to(&self, width: i64, height: i64) -> Area {
        Area::new(self.x, self.y, width, height)
    }

    /// Keep the first `count` columns, or the last `-count` columns when negative.
    #[must_use]
    pub fn columns(&self, count: i64) -> Area {
        if count >= 0 {
            Area::new(self.x, self.y, count.min(self.width), self.height)
        } else {
            Area::new(
                self.x + (self.width + count).max(0),
                self.y,
                (-count).min(self.width),
                self.height,
            )
        }
    }

    /// Keep the first `count` rows, or the last `-count` rows when negative.
    #[must_use]
    pub fn rows(&self, count: i64) -> Area {
        if count >= 0 {
            Area::new(self.x, self.y, self.width, count.min(self.height))
        } else {
            Area::new(
                self.x,
                self.y + (self.height + count).max(0),
                self.width,
                (-count).min(self.height),
            )
        }
    }

    /// Express this area in coordinates whose origin is `origin`.
    #[must_use]
    pub fn relative_to(&self, origin: Point) -> Area {
        self.translate(-origin)
    }

    pub fn overlaps_with(&self, other: &Area) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// The shared region, or [`Area::EMPTY`] when the areas are disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Area) -> Area {
        if !self.overlaps_with(other) {
            return Area::EMPTY;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Area::new(
            x,
            y,
            (self.x + self.width).min(other.x + other.width) - x,
            (self.y + self.height).min(other.y + other.height) - y,
        )
    }

    #[must_use]
    pub fn crop(&self, crop: Crop) -> Area {
        Area::new(
            self.x + crop.left,
            self.y + crop.top,
            self.width - crop.left - crop.right,
            self.height - crop.top - crop.bottom,
        )
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Area({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}
