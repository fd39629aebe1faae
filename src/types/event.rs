use serde::{Deserialize, Serialize};

use super::CellValue;
use crate::geometry::Area;

/// Change classification reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    Edit,
    Format,
    InsertRow,
    InsertColumn,
    RemoveRow,
    RemoveColumn,
    InsertGrid,
    RemoveGrid,
    Other,
    /// Any kind this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl ChangeKind {
    /// Row/column inserts and removals, plus `Other`, which the host reports
    /// for edits it cannot classify.
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            ChangeKind::InsertRow
                | ChangeKind::InsertColumn
                | ChangeKind::RemoveRow
                | ChangeKind::RemoveColumn
                | ChangeKind::Other
        )
    }
}

/// A content edit on one sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditEvent {
    pub sheet: String,
    pub area: Area,
    /// Value of a single edited cell before the edit, when the host knows it.
    #[serde(default)]
    pub old_value: Option<CellValue>,
}

/// A change notification that carries no area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing notification (the host shows it as a toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}
