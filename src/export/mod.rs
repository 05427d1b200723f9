//! JSON and CSV export of the entry collection.
//!
//! Both formats list entries in ascending date order. The CSV quotes every
//! field and doubles embedded quotes; newlines inside a note stay inside the
//! quoted field.

use crate::constants::{CSV_HEADER, DATE_FORMAT_ISO, EXPORT_FILE_PREFIX};
use crate::entry::{sorted_ascending, MoodEntry};
use crate::errors::ExportError;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fmt;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Formats `entries` in this format.
    pub fn render(self, entries: &[MoodEntry]) -> Result<String, ExportError> {
        match self {
            ExportFormat::Json => to_json(entries),
            ExportFormat::Csv => to_csv(entries),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Pretty-printed JSON array of `{date, mood, note}` records.
pub fn to_json(entries: &[MoodEntry]) -> Result<String, ExportError> {
    let sorted = sorted_ascending(entries);
    Ok(serde_json::to_string_pretty(&sorted)?)
}

/// CSV text with a `Date,Humeur,Note` header and one fully quoted row per entry.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use moodlog::{to_csv, Mood, MoodEntry};
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let csv = to_csv(&[MoodEntry::new(date, Mood::Good, r#"said "hi""#)]).unwrap();
/// assert_eq!(csv, "Date,Humeur,Note\n\"2024-02-01\",\"Bien\",\"said \"\"hi\"\"\"\n");
/// ```
pub fn to_csv(entries: &[MoodEntry]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for entry in sorted_ascending(entries) {
        let date = entry.date.to_string();
        writer.write_record([date.as_str(), entry.mood.label(), entry.note.as_str()])?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;

    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + body.len());
    out.push_str(CSV_HEADER);
    out.push('\n');
    out.push_str(&String::from_utf8(body)?);
    Ok(out)
}

/// `mood-entries-<date>.<ext>`
pub fn export_file_name(format: ExportFormat, today: NaiveDate) -> String {
    format!(
        "{}-{}.{}",
        EXPORT_FILE_PREFIX,
        today.format(DATE_FORMAT_ISO),
        format.extension()
    )
}
