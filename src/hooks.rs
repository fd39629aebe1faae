//! Entry points the host calls on document events.
//!
//! Hooks never fail: any error is logged and shown to the user as a single
//! warning notification.

use crate::document::Document;
use crate::error::Result;
use crate::sheets::SongSheet;
use crate::space::Space;
use crate::types::{ChangeEvent, EditEvent, Notice, NoticeLevel};

fn guard(doc: &mut dyn Document, hook: &str, f: impl FnOnce(&mut dyn Document) -> Result<()>) {
    if let Err(e) = f(doc) {
        log::warn!("{hook} hook failed: {e}");
        doc.notify(Notice::new(
            NoticeLevel::Warning,
            format!("Unexpected error in {hook} hook"),
            e.to_string(),
        ));
    }
}

impl SongSheet {
    /// Document opened: refresh the title cell.
    pub fn on_open(&self, doc: &mut dyn Document) {
        guard(doc, "onOpen", |doc| self.update_title(doc));
    }

    /// Content edited on one sheet.
    pub fn on_edit(&self, doc: &mut dyn Document, event: &EditEvent) {
        guard(doc, "onEdit", |doc| {
            if event.sheet == self.lyrics.sheet().name() {
                self.sync_lyrics_to_chords(doc, event.area)
            } else if event.sheet == self.chords.sheet().name() {
                self.handle_key_change(doc, event.area, event.old_value.as_ref())?;
                self.disable_auto_transpose_if_key_invalid(doc, event.area)?;
                self.restore_lyrics_in_chords(doc, event.area)
            } else {
                Ok(())
            }
        });
    }

    /// Any change notification; structural ones trigger a structural sync.
    pub fn on_change(&self, doc: &mut dyn Document, event: &ChangeEvent) {
        if !event.kind.is_structural() {
            return;
        }
        guard(doc, "onChange", |doc| self.sync_structure(doc).map(|_| ()));
    }

    /// Run an action from the host menu, reporting failures like a hook.
    pub fn run_action(&self, doc: &mut dyn Document, action: Action) {
        guard(doc, action.name(), |doc| match action {
            Action::TransposeUp => self.transpose_up(doc),
            Action::TransposeDown => self.transpose_down(doc),
            Action::Print => self.render_print_sheet(doc).map(|_| ()),
            Action::StampIndexes => self.stamp_indexes(doc).map(|_| ()),
        });
    }
}

/// User-triggered actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    TransposeUp,
    TransposeDown,
    Print,
    StampIndexes,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::TransposeUp => "transposeUp",
            Action::TransposeDown => "transposeDown",
            Action::Print => "print",
            Action::StampIndexes => "stampIndexes",
        }
    }
}
