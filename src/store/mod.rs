//! Entry storage.
//!
//! `EntryStore` is the seam between the presentation layer and persistence.
//! Every mutation rewrites the whole collection and hands the result back, so
//! callers can refresh derived views without re-reading.

mod file;

pub use file::JsonFileStore;

use crate::entry::MoodEntry;
use crate::errors::AppResult;
use crate::mood::Mood;
use chrono::NaiveDate;

/// Load, upsert and delete mood entries keyed by date.
pub trait EntryStore {
    /// All stored entries, in storage order.
    ///
    /// An absent or unreadable backing document yields an empty collection.
    fn load_all(&self) -> AppResult<Vec<MoodEntry>>;

    /// Inserts an entry for `date`, or replaces the mood and note of the
    /// existing one in place.
    fn upsert(&mut self, date: NaiveDate, mood: Mood, note: &str) -> AppResult<Vec<MoodEntry>>;

    /// Removes the entry for `date`. Deleting an absent date is a no-op.
    fn delete(&mut self, date: NaiveDate) -> AppResult<Vec<MoodEntry>>;
}

/// Applies an upsert to an in-memory collection.
pub(crate) fn apply_upsert(entries: &mut Vec<MoodEntry>, date: NaiveDate, mood: Mood, note: &str) {
    match entries.iter_mut().find(|e| e.date == date) {
        Some(existing) => {
            existing.mood = mood;
            existing.note = note.to_string();
        }
        None => entries.push(MoodEntry::new(date, mood, note)),
    }
}

/// Applies a delete to an in-memory collection. Returns whether anything was removed.
pub(crate) fn apply_delete(entries: &mut Vec<MoodEntry>, date: NaiveDate) -> bool {
    let before = entries.len();
    entries.retain(|e| e.date != date);
    entries.len() != before
}

/// Finds the entry for `date`.
pub fn find_entry(entries: &[MoodEntry], date: NaiveDate) -> Option<&MoodEntry> {
    entries.iter().find(|e| e.date == date)
}

/// Volatile store used in tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Vec<MoodEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }
}

impl EntryStore for MemoryStore {
    fn load_all(&self) -> AppResult<Vec<MoodEntry>> {
        Ok(self.entries.clone())
    }

    fn upsert(&mut self, date: NaiveDate, mood: Mood, note: &str) -> AppResult<Vec<MoodEntry>> {
        apply_upsert(&mut self.entries, date, mood, note);
        Ok(self.entries.clone())
    }

    fn delete(&mut self, date: NaiveDate) -> AppResult<Vec<MoodEntry>> {
        apply_delete(&mut self.entries, date);
        Ok(self.entries.clone())
    }
}
