//! Structured error types for songsheet.
//!
//! Every fallible operation in the crate returns [`Result`]. Hooks exposed to the
//! host catch these at the boundary and turn them into a single notification.

use crate::geometry::Area;

/// All errors that can occur while projecting, syncing or laying out a song sheet.
#[derive(Debug, thiserror::Error)]
pub enum SongsheetError {
    /// A sheet the configuration refers to does not exist in the document.
    #[error("Sheet \"{0}\" not found")]
    MissingSheet(String),

    /// A required named range is missing and no default was supplied.
    #[error("Named range \"{0}\" not found")]
    MissingNamedRange(String),

    /// A sub-space projected to an area with a negative origin.
    #[error("Invalid area for sub-space: {0}")]
    InvalidSubSpace(Area),

    /// A cell space projected to something other than a single cell.
    #[error("Cell space must be 1x1, got {0}")]
    InvalidCellSpace(Area),

    /// Scale factors must be finite and non-negative.
    #[error("Invalid scale factor: x={x}, y={y}")]
    InvalidScale { x: f64, y: f64 },

    /// A section is wider than the printable page width.
    #[error("Section {index} is {width} columns wide but pages only fit {available}")]
    SectionTooWide {
        index: usize,
        width: i64,
        available: i64,
    },

    /// A section is taller than the printable page height.
    #[error("Section {index} is {height} rows tall but the page only fits {available}")]
    SectionTooTall {
        index: usize,
        height: i64,
        available: i64,
    },

    /// A typed cell accessor found a value of the wrong type.
    #[error("Expected {expected} cell value, found \"{found}\"")]
    CellConversion {
        expected: &'static str,
        found: String,
    },

    /// The hosting document rejected an operation.
    #[error("Host error: {0}")]
    Host(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SongsheetError>;

#[cfg(target_arch = "wasm32")]
impl From<SongsheetError> for wasm_bindgen::JsValue {
    fn from(e: SongsheetError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
