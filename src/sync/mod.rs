//! Keeping the chords sheet in step with the lyrics sheet.
//!
//! This module handles:
//! - Copying edited lyrics onto the lyric rows of the chords sheet
//! - Restoring lyric rows edited directly on the chords sheet
//! - Stamping indexes and replaying row/column inserts and deletes

mod content;
mod structural;

pub use structural::{Stamps, StructuralChanges};
