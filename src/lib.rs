//! songsheet - lyrics and chords song sheet engine
//!
//! Keeps a lyrics grid and its derived chords grid in sync, transposes chords
//! and paginates song sections onto printable pages:
//! - Composable, non-mutating grid geometry
//! - Lazy projections over a host document's sheets and named ranges
//! - Structural edit detection from stamped row/column indexes
//! - Section detection and greedy page layout
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { Session, detect_sections } from 'songsheet';
//! await init();
//! const session = new Session(documentJson, undefined);
//! session.on_edit({ sheet: "Letra", area: { x: 3, y: 3, width: 1, height: 1 } });
//! const doc = session.document();
//! ```

pub mod cell_ref;
pub mod chords;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod hooks;
pub mod layout;
pub mod print;
pub mod sections;
pub mod session;
pub mod sheets;
pub mod space;
pub mod structure;
pub mod sync;
pub mod transpose;
pub mod types;

use wasm_bindgen::prelude::*;

pub use config::Config;
pub use document::{Document, MemoryDocument};
pub use error::{Result, SongsheetError};
pub use geometry::{Area, Crop, Point};
pub use session::Session;
pub use sheets::SongSheet;
pub use types::*;

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> std::result::Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Deserialization error: {e}")))
}

fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Set up panic messages and console logging (WASM only).
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        return;
    }
    log::info!("songsheet {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Infer structural changes from stamped indexes (`null` for unstamped cells).
///
/// # Errors
/// Returns an error if `indexes` is not an array of integers and nulls.
#[wasm_bindgen(js_name = detectChanges)]
pub fn detect_changes(indexes: JsValue, from: i32, to: i32) -> std::result::Result<JsValue, JsValue> {
    let indexes: Vec<Option<i64>> = from_js(indexes)?;
    to_js(&structure::detect_changes(&indexes, i64::from(from), i64::from(to)))
}

/// Replay column changes on a grid of cell values.
///
/// # Errors
/// Returns an error if the arguments do not deserialize.
#[wasm_bindgen(js_name = applyStructuralColumnChanges)]
pub fn apply_structural_column_changes(
    values: JsValue,
    changes: JsValue,
) -> std::result::Result<JsValue, JsValue> {
    let values: Grid = from_js(values)?;
    let changes: Vec<StructuralChange> = from_js(changes)?;
    to_js(&structure::apply_structural_column_changes(&values, &changes))
}

/// Replay lyric-row changes on a chords grid (two rows per unit).
///
/// # Errors
/// Returns an error if the arguments do not deserialize.
#[wasm_bindgen(js_name = applyStructuralRowChanges)]
pub fn apply_structural_row_changes(
    values: JsValue,
    changes: JsValue,
) -> std::result::Result<JsValue, JsValue> {
    let values: Grid = from_js(values)?;
    let changes: Vec<StructuralChange> = from_js(changes)?;
    to_js(&structure::apply_structural_row_changes(&values, &changes))
}

/// Detect the sections of a chords grid.
///
/// # Errors
/// Returns an error if `values` is not a grid of cell values.
#[wasm_bindgen(js_name = detectSections)]
pub fn detect_sections(values: JsValue) -> std::result::Result<JsValue, JsValue> {
    let values: Grid = from_js(values)?;
    to_js(&sections::detect_sections(&values))
}

/// Page positions for sections given as areas.
///
/// # Errors
/// Returns an error if a section does not fit on a page.
#[wasm_bindgen(js_name = calculatePositions)]
pub fn calculate_positions(sections: JsValue, config: JsValue) -> std::result::Result<JsValue, JsValue> {
    let sections: Vec<Area> = from_js(sections)?;
    let config: LayoutConfig = from_js(config)?;
    let positions = layout::calculate_positions(&sections, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&positions)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
