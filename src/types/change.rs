use serde::{Deserialize, Serialize};

/// One inferred structural edit along a single axis.
///
/// `position` is 1-based, relative to the working-area origin. A positive
/// `span` inserts that many units before `position`; a negative `span` removes
/// `|span|` units starting at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralChange {
    pub position: i64,
    pub span: i64,
}

impl StructuralChange {
    pub const fn insertion(position: i64, span: i64) -> Self {
        Self { position, span }
    }

    pub const fn deletion(position: i64, span: i64) -> Self {
        Self {
            position,
            span: -span,
        }
    }

    pub const fn is_insertion(&self) -> bool {
        self.span > 0
    }
}
