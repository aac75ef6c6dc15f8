//! # Saved Notes
//!
//! The bounded, most-recent-first list of submitted inputs, stored as a
//! JSON array under one fixed key. Loaded once at startup and rewritten
//! wholesale after every successful generation.

use log::{debug, info, warn};

use crate::core::store::{KeyValueStore, StoreError};

/// Storage key for the serialized saved-notes list.
pub const SAVED_NOTES_KEY: &str = "savedNotes";
pub const MAX_SAVED_NOTES: usize = 10;

/// Loads saved notes, falling back to an empty list when the entry is
/// missing, unreadable, or malformed. Over-long lists are truncated.
pub fn load_saved_notes(store: &dyn KeyValueStore) -> Vec<String> {
    let raw = match store.get(SAVED_NOTES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No saved notes stored yet");
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read saved notes: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(mut notes) => {
            notes.truncate(MAX_SAVED_NOTES);
            info!("Loaded {} saved notes", notes.len());
            notes
        }
        Err(e) => {
            warn!("Ignoring malformed saved notes: {}", e);
            Vec::new()
        }
    }
}

pub fn persist_saved_notes(store: &dyn KeyValueStore, notes: &[String]) -> Result<(), StoreError> {
    let json = serde_json::to_string(notes)?;
    store.set(SAVED_NOTES_KEY, &json)?;
    debug!("Persisted {} saved notes", notes.len());
    Ok(())
}
