//! The mood entry record.

use crate::mood::Mood;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One journal record: the mood and optional note for a calendar day.
///
/// `date` is the primary key; a store holds at most one entry per date.
/// Field order here is the field order of every serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: Mood, note: impl Into<String>) -> Self {
        Self {
            date,
            mood,
            note: note.into(),
        }
    }
}

/// Returns a copy of `entries` ordered by ascending date.
pub fn sorted_ascending(entries: &[MoodEntry]) -> Vec<MoodEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Returns a copy of `entries` ordered newest first.
pub fn sorted_descending(entries: &[MoodEntry]) -> Vec<MoodEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
