//! Rendering the chords sheet onto printable pages.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::Result;
use crate::geometry::{coord, Area, Point};
use crate::layout::calculate_layout;
use crate::sections::detect_sections;
use crate::sheets::SongSheet;
use crate::space::Space;
use crate::types::{CellValue, LayoutConfig, Section};

/// What a print run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintSummary {
    pub pages: usize,
    pub sections: Vec<Section>,
    /// Top-left of every section on the print sheet, same order as `sections`.
    pub positions: Vec<Point>,
}

impl SongSheet {
    /// Page geometry read from the print sheet.
    ///
    /// Pages are as wide as the header template and end where the footer
    /// template starts; the header only takes room on the first page.
    ///
    /// # Errors
    /// Fails when the header or footer named range is missing.
    pub fn print_layout_config(&self, doc: &dyn Document) -> Result<LayoutConfig> {
        let header = self.print.header().area(doc)?;
        let footer = self.print.footer().area(doc)?;
        let defaults = self.config.print;
        let (horizontal, vertical) = self
            .print
            .padding(doc, (defaults.horizontal_padding, defaults.vertical_padding))?;

        Ok(LayoutConfig::new(header.width(), footer.y(), header.end().y)
            .with_margins(defaults.margins)
            .with_padding(horizontal, vertical))
    }

    /// Lay out every section of the chords sheet onto the print sheet.
    ///
    /// Previous output is cleared (the header and footer templates stay), and
    /// the footer is repeated on every further page.
    ///
    /// # Errors
    /// Fails when a sheet or template range is missing, or when a section does
    /// not fit on a page; nothing is written in that case.
    pub fn render_print_sheet(&self, doc: &mut dyn Document) -> Result<PrintSummary> {
        let chords_main = self.chords.main().area(&*doc)?;
        let rows = self.chords.sheet().last_row_with_content(&*doc)?;
        let content = chords_main.rows(rows);
        let values = self.chords.sheet().region(content).values(&*doc)?;

        let sections = detect_sections(&values);
        let config = self.print_layout_config(&*doc)?;
        let areas: Vec<Area> = sections.iter().map(Section::area).collect();
        let layout = calculate_layout(&areas, &config)?;
        let positions = layout.positions(&config);
        let pages = layout.printed_pages();

        self.clear_print_sheet(doc)?;

        for (section, position) in sections.iter().zip(&positions) {
            let source = section.source_area().translate(content.start());
            let cells = self.chords.sheet().region(source).values(&*doc)?;
            let target = source.translate_to(*position);
            self.print.sheet().region(target).set_values(doc, &cells)?;
        }

        let footer = self.print.footer().area(&*doc)?;
        let footer_cells = self.print.sheet().region(footer).values(&*doc)?;
        for page in 1..pages {
            let copy = footer.translate(Point::along_x(coord(page) * config.page_width));
            self.print.sheet().region(copy).set_values(doc, &footer_cells)?;
        }

        log::info!("printed {} sections on {pages} pages", sections.len());
        Ok(PrintSummary {
            pages,
            sections,
            positions,
        })
    }

    /// Blank every cell of the print sheet outside the header and footer templates.
    fn clear_print_sheet(&self, doc: &mut dyn Document) -> Result<()> {
        let header = self.print.header().area(&*doc)?;
        let footer = self.print.footer().area(&*doc)?;
        let mut values = self.print.sheet().values(&*doc)?;

        for (y, row) in values.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                let cell = Area::new(coord(x), coord(y), 1, 1);
                if !header.overlaps_with(&cell) && !footer.overlaps_with(&cell) {
                    *value = CellValue::Empty;
                }
            }
        }

        self.print.sheet().set_values(doc, &values)
    }

    /// Write the document name into the title cell, when the document has one.
    ///
    /// # Errors
    /// Fails when the host rejects the write.
    pub fn update_title(&self, doc: &mut dyn Document) -> Result<()> {
        if doc.named_range(self.print.title_range()).is_none() {
            return Ok(());
        }
        let name = doc.name();
        self.print.title().set(doc, name)
    }
}
