//! Grid points and size vectors.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::Area;

/// A position (or size vector) on the cell grid.
///
/// `x` is the column axis and `y` the row axis, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// The grid origin (A1).
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// A vector along the column axis.
    pub const fn along_x(x: i64) -> Self {
        Self { x, y: 0 }
    }

    /// A vector along the row axis.
    pub const fn along_y(y: i64) -> Self {
        Self { x: 0, y }
    }

    #[must_use]
    pub fn scale(self, factor: i64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// The area spanned from this point to `other`.
    #[must_use]
    pub fn to(self, other: Point) -> Area {
        self.by(other - self)
    }

    /// The area covering `size` cells starting at this point.
    ///
    /// Negative components extend backwards from this point, so the resulting
    /// area always has a non-negative width and height.
    #[must_use]
    pub fn by(self, size: Point) -> Area {
        Area::new(self.x, self.y, size.x, size.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.scale(-1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
