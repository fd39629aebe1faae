//! A song sheet bound to an in-memory document, exported to JavaScript.
//!
//! The host serializes its spreadsheet into a [`MemoryDocument`], forwards
//! events to the session and reads the updated document back.

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::document::MemoryDocument;
use crate::hooks::Action;
use crate::sheets::SongSheet;
use crate::types::{ChangeEvent, EditEvent, Notice};
use crate::{from_js, to_js};

#[wasm_bindgen]
pub struct Session {
    song: SongSheet,
    doc: MemoryDocument,
}

#[wasm_bindgen]
impl Session {
    /// Create a session from a serialized document and an optional config.
    ///
    /// # Errors
    /// Returns an error if either argument does not deserialize.
    #[wasm_bindgen(constructor)]
    pub fn new(document: JsValue, config: JsValue) -> std::result::Result<Session, JsValue> {
        let doc: MemoryDocument = from_js(document)?;
        let config: Config = if config.is_undefined() || config.is_null() {
            Config::default()
        } else {
            from_js(config)?
        };
        Ok(Self::from_parts(doc, config))
    }

    pub fn on_open(&mut self) {
        self.song.on_open(&mut self.doc);
    }

    /// # Errors
    /// Returns an error if `event` is not an edit event.
    pub fn on_edit(&mut self, event: JsValue) -> std::result::Result<(), JsValue> {
        let event: EditEvent = from_js(event)?;
        self.song.on_edit(&mut self.doc, &event);
        Ok(())
    }

    /// # Errors
    /// Returns an error if `event` is not a change event.
    pub fn on_change(&mut self, event: JsValue) -> std::result::Result<(), JsValue> {
        let event: ChangeEvent = from_js(event)?;
        self.song.on_change(&mut self.doc, &event);
        Ok(())
    }

    /// Run a menu action by name (`"transposeUp"`, `"print"`, ...).
    ///
    /// # Errors
    /// Returns an error for an unknown action name.
    pub fn run_action(&mut self, action: JsValue) -> std::result::Result<(), JsValue> {
        let action: Action = from_js(action)?;
        self.song.run_action(&mut self.doc, action);
        Ok(())
    }

    /// The current document, in the same shape the constructor accepts.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn document(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.doc)
    }

    /// Notifications raised since the last call.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn take_notices(&mut self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.drain_notices())
    }
}

impl Session {
    pub fn from_parts(doc: MemoryDocument, config: Config) -> Self {
        Self {
            song: SongSheet::new(config),
            doc,
        }
    }

    pub fn song(&self) -> &SongSheet {
        &self.song
    }

    pub fn doc(&self) -> &MemoryDocument {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut MemoryDocument {
        &mut self.doc
    }

    pub fn into_document(self) -> MemoryDocument {
        self.doc
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.doc.notices)
    }
}
