use serde::{Deserialize, Serialize};

use crate::error::{Result, SongsheetError};

/// A rectangular block of cell values, row-major.
pub type Grid = Vec<Vec<CellValue>>;

/// A single cell's value as the host stores it.
///
/// Serialized untagged, so JSON `null`, booleans, numbers and strings map
/// directly; dates are `{"serial": n}` (days since the host's epoch).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Boolean(bool),
    Number(f64),
    String(String),
    Date { serial: f64 },
}

impl CellValue {
    /// True for empty cells and strings that are empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Display text of the value, as the host would render it unformatted.
    pub fn text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Boolean(true) => "TRUE".into(),
            CellValue::Boolean(false) => "FALSE".into(),
            CellValue::Number(n) | CellValue::Date { serial: n } => n.to_string(),
            CellValue::String(s) => s.clone(),
        }
    }

    /// Rendered width in characters.
    pub fn text_len(&self) -> usize {
        match self {
            CellValue::String(s) => s.chars().count(),
            other => other.text().chars().count(),
        }
    }

    /// Integer value of a numeric cell (stamped indexes are whole numbers).
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
            CellValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// Explicit, fallible conversion from a cell value to a Rust type.
pub trait FromCell: Sized {
    fn from_cell(value: &CellValue) -> Result<Self>;
}

fn conversion_error(expected: &'static str, value: &CellValue) -> SongsheetError {
    SongsheetError::CellConversion {
        expected,
        found: value.text(),
    }
}

impl FromCell for String {
    fn from_cell(value: &CellValue) -> Result<Self> {
        Ok(value.text())
    }
}

impl FromCell for f64 {
    fn from_cell(value: &CellValue) -> Result<Self> {
        match value {
            CellValue::Number(n) | CellValue::Date { serial: n } => Ok(*n),
            CellValue::String(s) => s
                .trim()
                .parse()
                .map_err(|_| conversion_error("number", value)),
            _ => Err(conversion_error("number", value)),
        }
    }
}

impl FromCell for i64 {
    fn from_cell(value: &CellValue) -> Result<Self> {
        value
            .as_integer()
            .ok_or_else(|| conversion_error("integer", value))
    }
}

impl FromCell for bool {
    fn from_cell(value: &CellValue) -> Result<Self> {
        match value {
            CellValue::Boolean(b) => Ok(*b),
            CellValue::Empty => Ok(false),
            CellValue::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
            CellValue::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
            CellValue::String(s) if s.trim().is_empty() => Ok(false),
            _ => Err(conversion_error("boolean", value)),
        }
    }
}

impl<T: FromCell> FromCell for Option<T> {
    fn from_cell(value: &CellValue) -> Result<Self> {
        if value.is_blank() {
            Ok(None)
        } else {
            T::from_cell(value).map(Some)
        }
    }
}

/// A `width` x `height` grid of empty cells.
pub fn blank_grid(width: usize, height: usize) -> Grid {
    vec![vec![CellValue::Empty; width]; height]
}

/// Width of the widest row.
pub fn grid_width(grid: &Grid) -> usize {
    grid.iter().map(Vec::len).max().unwrap_or(0)
}

/// Build a grid from string literals; `""` becomes an empty cell.
pub fn grid_from_strs<R: AsRef<[&'static str]>>(rows: &[R]) -> Grid {
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|s| {
                    if s.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::from(*s)
                    }
                })
                .collect()
        })
        .collect()
}
