//! Names and print defaults the engine looks up in a document.
//!
//! Every field has a default matching the stock song sheet template, so an
//! empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Crop;

/// Sheet names of a song sheet document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetNames {
    pub lyrics: String,
    pub chords: String,
    pub print: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            lyrics: "Letra".into(),
            chords: "Acordes".into(),
            print: "Impresión".into(),
        }
    }
}

/// Named ranges the engine reads or writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeNames {
    /// Scratch columns at the right edge of the lyrics sheet, never synced.
    pub side_tray: String,
    pub chords_header: String,
    pub key: String,
    pub auto_transpose: String,
    pub print_header: String,
    pub print_footer: String,
    pub title: String,
    pub horizontal_padding: String,
    pub vertical_padding: String,
}

impl Default for RangeNames {
    fn default() -> Self {
        Self {
            side_tray: "Ideas_Sueltas".into(),
            chords_header: "Encabezado_Acordes".into(),
            key: "Tonalidad".into(),
            auto_transpose: "Auto_Trasponer".into(),
            print_header: "Encabezado".into(),
            print_footer: "Pie_de_Página".into(),
            title: "Título".into(),
            horizontal_padding: "Espaciado_Horizontal".into(),
            vertical_padding: "Espaciado_Vertical".into(),
        }
    }
}

/// Print settings used when the document does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintDefaults {
    pub margins: Crop,
    pub horizontal_padding: i64,
    pub vertical_padding: i64,
}

impl Default for PrintDefaults {
    fn default() -> Self {
        Self {
            margins: Crop::default(),
            horizontal_padding: 2,
            vertical_padding: 1,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub sheets: SheetNames,
    pub ranges: RangeNames,
    pub print: PrintDefaults,
    /// Render transposed chords with flats instead of sharps.
    pub prefer_flats: bool,
}

impl Config {
    /// Parse a configuration from JSON; missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns [`crate::error::SongsheetError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
