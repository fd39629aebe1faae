//! Greedy page packing of sections.
//!
//! Sections are stacked top to bottom into columns, and columns are placed left
//! to right onto fixed-size pages. Input order is song order and is never
//! changed. Once a page is full its columns are spread out so the leftover width
//! is shared evenly between the gaps.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SongsheetError};
use crate::geometry::{coord, Area, Point};
use crate::types::LayoutConfig;

/// A section placed in a column, `y` rows below the top of the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSection {
    /// Index into the input section list
    pub index: usize,
    /// Offset from the top of the column
    pub y: i64,
}

/// One column of stacked sections on a page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutColumn {
    /// Justified offset from the left content margin
    pub x: i64,
    /// Width of the widest member
    pub width: i64,
    /// Height of the stack, padding included
    pub height: i64,
    pub sections: Vec<PlacedSection>,
}

impl LayoutColumn {
    fn new(index: usize, area: &Area) -> Self {
        Self {
            x: 0,
            width: area.width(),
            height: area.height(),
            sections: vec![PlacedSection { index, y: 0 }],
        }
    }

    /// Input indices of the stacked sections, top to bottom.
    pub fn indices(&self) -> Vec<usize> {
        self.sections.iter().map(|s| s.index).collect()
    }
}

/// Columns of one page, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutPage {
    pub columns: Vec<LayoutColumn>,
}

impl LayoutPage {
    /// Width used by the columns with `padding` between each pair.
    fn used_width(&self, padding: i64) -> i64 {
        let widths: i64 = self.columns.iter().map(|c| c.width).sum();
        widths + padding * coord(self.columns.len())
    }

    /// Assign column offsets, spreading leftover width evenly over the gaps.
    fn justify(&mut self, available_width: i64, padding: i64) {
        let gaps = coord(self.columns.len().saturating_sub(1));
        let padding = if gaps > 0 {
            let widths: i64 = self.columns.iter().map(|c| c.width).sum();
            let extra = (available_width - widths - gaps * padding).max(0);
            padding + extra / gaps
        } else {
            padding
        };

        let mut x = 0;
        for column in &mut self.columns {
            column.x = x;
            x += column.width + padding;
        }
    }
}

/// Result of [`calculate_layout`]: pages, each holding columns of sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageLayout {
    pub pages: Vec<LayoutPage>,
}

impl PageLayout {
    /// Number of pages to print; an empty layout still prints one (for the footer).
    pub fn printed_pages(&self) -> usize {
        self.pages.len().max(1)
    }

    /// Number of placed sections.
    pub fn section_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|page| &page.columns)
            .map(|column| column.sections.len())
            .sum()
    }

    /// Absolute top-left position of every section, in input order.
    ///
    /// Pages sit side by side, `page_width` apart; the header only pushes
    /// content down on the first page.
    pub fn positions(&self, config: &LayoutConfig) -> Vec<Point> {
        let mut placed = Vec::with_capacity(self.section_count());

        for (page_index, page) in self.pages.iter().enumerate() {
            let page_x = coord(page_index) * config.page_width + config.margins.left;
            let page_y = config.margins.top + config.header_offset(page_index);
            for column in &page.columns {
                for section in &column.sections {
                    placed.push((
                        section.index,
                        Point::new(page_x + column.x, page_y + section.y),
                    ));
                }
            }
        }

        placed.sort_by_key(|(index, _)| *index);
        placed.into_iter().map(|(_, point)| point).collect()
    }
}

fn check_fits(index: usize, area: &Area, config: &LayoutConfig) -> Result<()> {
    let available_width = config.available_width();
    if area.width() > available_width {
        return Err(SongsheetError::SectionTooWide {
            index,
            width: area.width(),
            available: available_width,
        });
    }

    // Only the very first section is forced onto the first page.
    let available_height = if index == 0 {
        config.available_height_on(0)
    } else {
        config.available_height()
    };
    if area.height() > available_height {
        return Err(SongsheetError::SectionTooTall {
            index,
            height: area.height(),
            available: available_height,
        });
    }

    Ok(())
}

/// Pack `sections` (only their width and height matter) onto pages.
///
/// # Errors
/// Fails with [`SongsheetError::SectionTooWide`] or
/// [`SongsheetError::SectionTooTall`] when a section cannot fit on any page;
/// no partial layout is returned.
pub fn calculate_layout(sections: &[Area], config: &LayoutConfig) -> Result<PageLayout> {
    for (index, area) in sections.iter().enumerate() {
        check_fits(index, area, config)?;
    }

    let available_width = config.available_width();
    let hpad = config.horizontal_padding;
    let vpad = config.vertical_padding;

    let mut pages = Vec::new();
    let mut page = LayoutPage::default();
    let mut page_index = 0;
    let mut column: Option<LayoutColumn> = None;

    for (index, area) in sections.iter().enumerate() {
        if let Some(mut current) = column.take() {
            let column_x = page.used_width(hpad);
            let stacked_height = current.height + vpad + area.height();
            let stacked_width = current.width.max(area.width());

            if stacked_height <= config.available_height_on(page_index)
                && column_x + stacked_width <= available_width
            {
                current.sections.push(PlacedSection {
                    index,
                    y: current.height + vpad,
                });
                current.height = stacked_height;
                current.width = stacked_width;
                column = Some(current);
                continue;
            }
            page.columns.push(current);
        }

        let fits_on_page = page.columns.is_empty()
            || (page.used_width(hpad) + area.width() <= available_width
                && area.height() <= config.available_height_on(page_index));
        if !fits_on_page {
            page.justify(available_width, hpad);
            pages.push(std::mem::take(&mut page));
            page_index += 1;
        }
        column = Some(LayoutColumn::new(index, area));
    }

    if let Some(current) = column {
        page.columns.push(current);
    }
    if !page.columns.is_empty() {
        page.justify(available_width, hpad);
        pages.push(page);
    }

    let layout = PageLayout { pages };
    log::debug!(
        "laid out {} sections on {} pages",
        sections.len(),
        layout.pages.len()
    );
    Ok(layout)
}

/// Absolute position of every section, in input order.
///
/// # Errors
/// Same as [`calculate_layout`].
pub fn calculate_positions(sections: &[Area], config: &LayoutConfig) -> Result<Vec<Point>> {
    Ok(calculate_layout(sections, config)?.positions(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::geometry::Crop;

    fn block(width: i64, height: i64) -> Area {
        Area::new(0, 0, width, height)
    }

    #[test]
    fn test_justification_spreads_slack() {
        // two columns of 10 on a 45 wide page with padding 2: 23 slack goes to the gap
        let config = LayoutConfig::new(45, 50, 5).with_padding(2, 0);
        let layout = calculate_layout(&[block(10, 30), block(10, 30)], &config).unwrap();
        assert_eq!(layout.pages[0].columns[1].x, 35);

        let config = LayoutConfig::new(45, 50, 5).with_padding(2, 0);
        let layout =
            calculate_layout(&[block(10, 30), block(10, 30), block(10, 30)], &config).unwrap();
        // slack 45 - 30 - 4 = 11, floor(11 / 2) = 5 extra per gap
        let xs: Vec<i64> = layout.pages[0].columns.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![0, 17, 34]);
    }

    #[test]
    fn test_vertical_padding_not_redistributed() {
        let config = LayoutConfig::new(45, 50, 0).with_padding(0, 3);
        let layout = calculate_layout(&[block(10, 10), block(10, 10)], &config).unwrap();
        let column = &layout.pages[0].columns[0];
        assert_eq!(column.sections[1].y, 13);
        assert_eq!(column.height, 23);
    }

    #[test]
    fn test_positions_use_margins_and_page_stride() {
        let config = LayoutConfig::new(45, 50, 5).with_margins(Crop {
            left: 1,
            top: 2,
            right: 1,
            bottom: 2,
        });
        let positions =
            calculate_positions(&[block(40, 30), block(40, 30)], &config).unwrap();
        assert_eq!(positions, vec![Point::new(1, 7), Point::new(46, 2)]);
    }

    #[test]
    fn test_empty_layout_prints_one_page() {
        let layout = calculate_layout(&[], &LayoutConfig::new(45, 50, 5)).unwrap();
        assert!(layout.pages.is_empty());
        assert_eq!(layout.printed_pages(), 1);
        assert!(layout.positions(&LayoutConfig::new(45, 50, 5)).is_empty());
    }

    #[test]
    fn test_first_section_taller_than_first_page_fails() {
        let result = calculate_layout(&[block(10, 48)], &LayoutConfig::new(45, 50, 5));
        assert!(matches!(
            result,
            Err(SongsheetError::SectionTooTall {
                index: 0,
                height: 48,
                available: 45
            })
        ));
    }
}
