//! Projection of entries onto chart coordinates.
//!
//! The projector knows nothing about drawing. It maps a collection of entries
//! to points on a unit-width x axis and the 1-5 mood scale; any surface (the
//! terminal renderer in [`plot`], an SVG writer, ...) can draw from there.

pub mod plot;

use crate::entry::{sorted_ascending, MoodEntry};
use thiserror::Error;

/// Minimum number of entries needed to draw a line.
pub const MIN_CHART_ENTRIES: usize = 2;

/// A projected entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    /// Position along the time axis, in `[0, 1]`.
    pub x: f64,
    /// Mood rank, in `[1, 5]`.
    pub y: u8,
}

/// Returned when there are too few entries to chart.
///
/// Distinct from an empty point list so callers can show a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Not enough data to chart: {available} entries, at least {MIN_CHART_ENTRIES} required")]
pub struct InsufficientData {
    pub available: usize,
}

/// Projects `entries` to evenly spaced points in date order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use moodlog::{project_chart_points, ChartPoint, Mood, MoodEntry};
///
/// let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let d0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let entries = vec![
///     MoodEntry::new(d1, Mood::VeryGood, ""),
///     MoodEntry::new(d0, Mood::Stressed, ""),
/// ];
///
/// let points = project_chart_points(&entries).unwrap();
/// assert_eq!(points, vec![ChartPoint { x: 0.0, y: 1 }, ChartPoint { x: 1.0, y: 5 }]);
///
/// assert!(project_chart_points(&entries[..1]).is_err());
/// ```
pub fn project_chart_points(entries: &[MoodEntry]) -> Result<Vec<ChartPoint>, InsufficientData> {
    if entries.len() < MIN_CHART_ENTRIES {
        return Err(InsufficientData {
            available: entries.len(),
        });
    }

    let sorted = sorted_ascending(entries);
    let last = (sorted.len() - 1) as f64;

    Ok(sorted
        .iter()
        .enumerate()
        .map(|(i, entry)| ChartPoint {
            x: i as f64 / last,
            y: entry.mood.rank(),
        })
        .collect())
}
