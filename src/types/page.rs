use serde::{Deserialize, Serialize};

use crate::geometry::Crop;

/// Page geometry for the layout engine, in grid units.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Full page width; pages sit side by side at this stride.
    pub page_width: i64,
    /// Full page height.
    pub page_height: i64,
    /// Rows reserved for the title header on the first page only.
    pub header_height: i64,
    /// Blank border inside every page.
    pub margins: Crop,
    /// Minimum gap between adjacent columns on a page.
    pub horizontal_padding: i64,
    /// Gap between sections stacked in one column.
    pub vertical_padding: i64,
}

impl LayoutConfig {
    /// Page size with no margins or padding.
    pub fn new(page_width: i64, page_height: i64, header_height: i64) -> Self {
        Self {
            page_width,
            page_height,
            header_height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, horizontal: i64, vertical: i64) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Crop) -> Self {
        self.margins = margins;
        self
    }

    /// Width left for content on every page.
    pub fn available_width(&self) -> i64 {
        self.page_width - self.margins.left - self.margins.right
    }

    /// Height left for content on a page without the header.
    pub fn available_height(&self) -> i64 {
        self.page_height - self.margins.top - self.margins.bottom
    }

    /// Height left for content on page `page` (0-based).
    pub fn available_height_on(&self, page: usize) -> i64 {
        self.available_height() - self.header_offset(page)
    }

    /// Rows taken by the header on page `page`.
    pub fn header_offset(&self, page: usize) -> i64 {
        if page == 0 {
            self.header_height
        } else {
            0
        }
    }
}
