//! Diary store: an ordered, newest-first list of entries

use crate::domain::DiaryEntry;
use crate::error::{BlossomError, Result};
use chrono::{DateTime, Local};

/// Message shown when the user tries to save an empty entry
pub const EMPTY_ENTRY_MESSAGE: &str = "Please write something before saving!";

/// Ordered collection of diary entries, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiaryStore {
    entries: Vec<DiaryEntry>,
}

impl DiaryStore {
    pub fn new() -> Self {
        DiaryStore::default()
    }

    /// Build a store from entries already in newest-first order
    pub fn from_entries(entries: Vec<DiaryEntry>) -> Self {
        DiaryStore { entries }
    }

    /// Create an entry from `text` and put it at the front.
    ///
    /// The id is the creation time in milliseconds. Two entries created within
    /// the same millisecond get consecutive ids so ids stay unique and increasing.
    pub fn add_entry(
        &mut self,
        text: &str,
        now: DateTime<Local>,
        timestamp_format: &str,
    ) -> Result<&DiaryEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BlossomError::Validation(EMPTY_ENTRY_MESSAGE.to_string()));
        }

        let mut id = now.timestamp_millis();
        if let Some(newest) = self.entries.first() {
            if id <= newest.id {
                id = newest.id + 1;
            }
        }

        let entry = DiaryEntry::new(id, text.to_string(), now, timestamp_format);
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    /// Remove the entry with `id`. Returns false when no entry matched.
    pub fn delete_entry(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Iterate entries newest first. The iterator is cheap to clone and restart.
    pub fn entries(&self) -> std::slice::Iter<'_, DiaryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: i64) -> Option<&DiaryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn as_slice(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
