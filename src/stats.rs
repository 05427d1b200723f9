//! Derived statistics over the entry collection.

use crate::entry::MoodEntry;
use crate::mood::Mood;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Aggregates shown next to the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Number of tracked days.
    pub count: usize,
    /// Most frequent mood; `None` when there are no entries.
    pub most_frequent_mood: Option<Mood>,
    /// Share of positive moods, as a whole percentage.
    pub positive_percentage: u32,
    /// Consecutive days with an entry, ending today.
    pub streak: u32,
}

impl Stats {
    /// "1 day tracked" / "N days tracked".
    pub fn count_label(&self) -> String {
        if self.count > 1 {
            format!("{} days tracked", self.count)
        } else {
            format!("{} day tracked", self.count)
        }
    }
}

/// Computes all statistics for `entries` relative to `today`.
///
/// Ties for the most frequent mood go to the lowest-ranked mood, so the
/// result never depends on the order of `entries`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use moodlog::{compute_stats, Mood, MoodEntry};
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
/// let entries = vec![
///     MoodEntry::new(today, Mood::Good, ""),
///     MoodEntry::new(today.pred_opt().unwrap(), Mood::Good, ""),
///     MoodEntry::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), Mood::Stressed, ""),
/// ];
///
/// let stats = compute_stats(&entries, today);
/// assert_eq!(stats.count, 3);
/// assert_eq!(stats.most_frequent_mood, Some(Mood::Good));
/// assert_eq!(stats.positive_percentage, 67);
/// assert_eq!(stats.streak, 2);
/// ```
pub fn compute_stats(entries: &[MoodEntry], today: NaiveDate) -> Stats {
    let count = entries.len();

    Stats {
        count,
        most_frequent_mood: most_frequent_mood(entries),
        positive_percentage: positive_percentage(entries),
        streak: current_streak(entries, today),
    }
}

fn most_frequent_mood(entries: &[MoodEntry]) -> Option<Mood> {
    let mut freq: HashMap<Mood, usize> = HashMap::new();
    for entry in entries {
        *freq.entry(entry.mood).or_insert(0) += 1;
    }

    let mut best: Option<(Mood, usize)> = None;
    // Ascending rank with a strict comparison keeps the lowest rank on ties
    for mood in Mood::ALL {
        let n = freq.get(&mood).copied().unwrap_or(0);
        if n > 0 && best.map_or(true, |(_, max)| n > max) {
            best = Some((mood, n));
        }
    }
    best.map(|(mood, _)| mood)
}

fn positive_percentage(entries: &[MoodEntry]) -> u32 {
    let count = entries.len() as u64;
    if count == 0 {
        return 0;
    }
    let positive = entries.iter().filter(|e| e.mood.is_positive()).count() as u64;

    // round(100 * positive / count), half-up, in integers
    ((200 * positive + count) / (2 * count)) as u32
}

fn current_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let dates: HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();

    let mut streak = 0;
    let mut cursor = Some(today);
    while let Some(day) = cursor {
        if !dates.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}
