//! Page layout engine for printing sections.
//!
//! This module handles:
//! - Stacking sections into columns under the page height
//! - Placing columns onto pages under the page width
//! - Justifying column gaps and computing absolute section positions

mod page_layout;

pub use page_layout::{
    calculate_layout, calculate_positions, LayoutColumn, LayoutPage, PageLayout, PlacedSection,
};
