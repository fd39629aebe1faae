//! Integer grid geometry.
//!
//! This module handles:
//! - Points and size vectors on the cell grid
//! - Rectangular areas with non-negative extents
//! - Pure, composable area transforms (translate, scale, crop, intersect)

mod area;
mod point;

pub use area::{Area, Crop};
pub use point::Point;

/// Grid index to signed coordinate.
pub fn coord(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// Signed coordinate to grid index; negative coordinates clamp to 0.
pub fn index(coord: i64) -> usize {
    usize::try_from(coord).unwrap_or(0)
}
