//! The three sheets of a song sheet document and their named regions.

use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::geometry::{Area, Crop};
use crate::space::{CellSpace, SheetSpace, Space, SubSpace};

/// The lyrics sheet: one lyric line per row, plus a scratch tray on the right.
///
/// Row 0 and column 0 carry the stamped indexes used to detect structural edits.
#[derive(Debug, Clone)]
pub struct LyricsSheet {
    sheet: SheetSpace,
    side_tray_range: String,
}

impl LyricsSheet {
    pub fn sheet(&self) -> &SheetSpace {
        &self.sheet
    }

    /// Working area: the unfrozen part of the sheet minus the side tray.
    pub fn main(&self) -> SubSpace {
        let tray = self.side_tray_range.clone();
        self.sheet.main().sub_with(move |doc, area| {
            let width = SheetSpace::named_area(doc, &tray, Some(Area::EMPTY))?.width();
            Ok(area.crop(Crop {
                right: width,
                ..Crop::default()
            }))
        })
    }

    /// Trailing columns of the unfrozen area reserved for loose ideas.
    pub fn side_tray(&self) -> SubSpace {
        let tray = self.side_tray_range.clone();
        self.sheet.main().sub_with(move |doc, area| {
            let width = SheetSpace::named_area(doc, &tray, Some(Area::EMPTY))?.width();
            Ok(area.columns(-width))
        })
    }

    pub fn index_row(&self) -> SubSpace {
        self.sheet.sub(|area| area.rows(1))
    }

    pub fn index_column(&self) -> SubSpace {
        self.sheet.sub(|area| area.columns(1))
    }
}

/// The chords sheet: every lyric row becomes a chord row followed by a copy
/// of the lyric row.
#[derive(Debug, Clone)]
pub struct ChordsSheet {
    sheet: SheetSpace,
    header_range: String,
    key_range: String,
    auto_transpose_range: String,
}

impl ChordsSheet {
    pub fn sheet(&self) -> &SheetSpace {
        &self.sheet
    }

    pub fn main(&self) -> SubSpace {
        self.sheet.main()
    }

    pub fn header(&self) -> SubSpace {
        let name = self.header_range.clone();
        self.sheet
            .sub_with(move |doc, _| SheetSpace::named_area(doc, &name, None))
    }

    /// The song key, e.g. `Am`.
    pub fn key(&self) -> CellSpace<String> {
        let name = self.key_range.clone();
        self.header()
            .cell(move |doc, _| SheetSpace::named_area(doc, &name, None))
    }

    /// Whether editing the key transposes every chord.
    pub fn auto_transpose(&self) -> CellSpace<bool> {
        let name = self.auto_transpose_range.clone();
        self.header()
            .cell(move |doc, _| SheetSpace::named_area(doc, &name, None))
    }

    pub fn key_range(&self) -> &str {
        &self.key_range
    }

    pub fn auto_transpose_range(&self) -> &str {
        &self.auto_transpose_range
    }
}

/// The print sheet: a header and footer template with pages laid out
/// side by side between them.
#[derive(Debug, Clone)]
pub struct PrintSheet {
    sheet: SheetSpace,
    header_range: String,
    footer_range: String,
    title_range: String,
    horizontal_padding_range: String,
    vertical_padding_range: String,
}

impl PrintSheet {
    pub fn sheet(&self) -> &SheetSpace {
        &self.sheet
    }

    pub fn header(&self) -> SubSpace {
        let name = self.header_range.clone();
        self.sheet
            .sub_with(move |doc, _| SheetSpace::named_area(doc, &name, None))
    }

    pub fn footer(&self) -> SubSpace {
        let name = self.footer_range.clone();
        self.sheet
            .sub_with(move |doc, _| SheetSpace::named_area(doc, &name, None))
    }

    pub fn title(&self) -> CellSpace<String> {
        let name = self.title_range.clone();
        self.sheet
            .cell(move |doc, _| SheetSpace::named_area(doc, &name, None))
    }

    pub fn title_range(&self) -> &str {
        &self.title_range
    }

    /// Horizontal and vertical padding cells, falling back to `defaults`
    /// when a range is missing or its cell is blank.
    pub fn padding(&self, doc: &dyn Document, defaults: (i64, i64)) -> Result<(i64, i64)> {
        let read = |name: &str, default: i64| -> Result<i64> {
            if doc.named_range(name).is_none() {
                return Ok(default);
            }
            let owned = name.to_string();
            self.sheet
                .cell::<i64>(move |doc, _| SheetSpace::named_area(doc, &owned, None))
                .get_or(doc, default)
        };
        Ok((
            read(&self.horizontal_padding_range, defaults.0)?,
            read(&self.vertical_padding_range, defaults.1)?,
        ))
    }
}

/// Handle on a song sheet document's regions, built from a [`Config`].
///
/// Holds names only; every region is resolved against the document passed to
/// each operation.
#[derive(Debug, Clone)]
pub struct SongSheet {
    pub config: Config,
    pub lyrics: LyricsSheet,
    pub chords: ChordsSheet,
    pub print: PrintSheet,
}

impl SongSheet {
    pub fn new(config: Config) -> Self {
        let ranges = &config.ranges;
        let lyrics = LyricsSheet {
            sheet: SheetSpace::new(&config.sheets.lyrics),
            side_tray_range: ranges.side_tray.clone(),
        };
        let chords = ChordsSheet {
            sheet: SheetSpace::new(&config.sheets.chords),
            header_range: ranges.chords_header.clone(),
            key_range: ranges.key.clone(),
            auto_transpose_range: ranges.auto_transpose.clone(),
        };
        let print = PrintSheet {
            sheet: SheetSpace::new(&config.sheets.print),
            header_range: ranges.print_header.clone(),
            footer_range: ranges.print_footer.clone(),
            title_range: ranges.title.clone(),
            horizontal_padding_range: ranges.horizontal_padding.clone(),
            vertical_padding_range: ranges.vertical_padding.clone(),
        };
        Self {
            config,
            lyrics,
            chords,
            print,
        }
    }
}

impl Default for SongSheet {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
