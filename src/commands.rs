//! Command execution.
//!
//! Each command reads from or mutates an [`EntryStore`] and writes its
//! user-facing output to the supplied writer. The store and "today" are
//! injected so every command can be exercised against a `MemoryStore`.

use crate::chart::{plot, project_chart_points};
use crate::cli::Command;
use crate::dates::{parse_date, resolve_date};
use crate::entry::{sorted_descending, MoodEntry};
use crate::errors::{AppError, AppResult};
use crate::export::{export_file_name, ExportFormat};
use crate::mood::Mood;
use crate::stats::compute_stats;
use crate::store::{find_entry, EntryStore};
use crate::{atomic, constants};
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const NO_NOTE: &str = "(no note)";

/// Runs `command` against `store`.
pub fn run<S, W>(command: &Command, store: &mut S, today: NaiveDate, out: &mut W) -> AppResult<()>
where
    S: EntryStore,
    W: Write,
{
    debug!("Running command: {:?}", command);
    match command {
        Command::Log { mood, note, date } => {
            log_entry(store, out, today, mood.as_deref(), note, date.as_deref())
        }
        Command::Delete { date } => delete_entry(store, out, today, date.as_deref()),
        Command::Show { date } => show_entry(store, out, date),
        Command::List { mood } => list_entries(store, out, *mood),
        Command::Stats => show_stats(store, out, today),
        Command::Chart { width, height } => show_chart(store, out, *width, *height),
        Command::Export {
            format,
            output,
            stdout,
        } => export_entries(store, out, today, *format, output.as_deref(), *stdout),
    }
}

fn log_entry<S: EntryStore, W: Write>(
    store: &mut S,
    out: &mut W,
    today: NaiveDate,
    mood: Option<&str>,
    note: &str,
    date: Option<&str>,
) -> AppResult<()> {
    let mood = match mood.map(str::trim) {
        None | Some("") => return Err(AppError::Input("Choose a mood.".to_string())),
        Some(raw) => raw
            .parse::<Mood>()
            .map_err(|e| AppError::Input(e.to_string()))?,
    };
    let date = resolve_date(date, today)?;

    store.upsert(date, mood, note.trim())?;
    info!("Saved {} for {}", mood, date);
    writeln!(out, "Entry for {} saved.", date)?;
    Ok(())
}

fn delete_entry<S: EntryStore, W: Write>(
    store: &mut S,
    out: &mut W,
    today: NaiveDate,
    date: Option<&str>,
) -> AppResult<()> {
    let date = resolve_date(date, today)?;
    store.delete(date)?;
    info!("Deleted entry for {}", date);
    writeln!(out, "Entry {} deleted.", date)?;
    Ok(())
}

fn show_entry<S: EntryStore, W: Write>(store: &S, out: &mut W, date: &str) -> AppResult<()> {
    let date = parse_date(date.trim())
        .map_err(|e| AppError::Input(format!("Invalid date format '{}': {}", date, e)))?;
    let entries = store.load_all()?;

    match find_entry(&entries, date) {
        Some(entry) => write_entry(out, entry)?,
        None => writeln!(out, "No entry for {}.", date)?,
    }
    Ok(())
}

fn list_entries<S: EntryStore, W: Write>(
    store: &S,
    out: &mut W,
    filter: Option<Mood>,
) -> AppResult<()> {
    let entries: Vec<MoodEntry> = sorted_descending(&store.load_all()?)
        .into_iter()
        .filter(|e| filter.map_or(true, |mood| e.mood == mood))
        .collect();

    if entries.is_empty() {
        writeln!(out, "No entries yet.")?;
        return Ok(());
    }

    for entry in &entries {
        write_entry(out, entry)?;
    }
    Ok(())
}

/// One entry: header line, then the note indented below it.
fn write_entry<W: Write>(out: &mut W, entry: &MoodEntry) -> AppResult<()> {
    writeln!(out, "{}  {}", entry.date, entry.mood)?;
    if entry.note.is_empty() {
        writeln!(out, "    {}", NO_NOTE)?;
    } else {
        for line in entry.note.lines() {
            writeln!(out, "    {}", line)?;
        }
    }
    Ok(())
}

fn show_stats<S: EntryStore, W: Write>(store: &S, out: &mut W, today: NaiveDate) -> AppResult<()> {
    let stats = compute_stats(&store.load_all()?, today);
    let mood = stats
        .most_frequent_mood
        .map(|m| m.label())
        .unwrap_or("—");

    writeln!(out, "{}", stats.count_label())?;
    writeln!(out, "Most frequent mood: {}", mood)?;
    writeln!(out, "Positive moods: {}%", stats.positive_percentage)?;
    writeln!(out, "Current streak: {}", stats.streak)?;
    Ok(())
}

fn show_chart<S: EntryStore, W: Write>(
    store: &S,
    out: &mut W,
    width: usize,
    height: usize,
) -> AppResult<()> {
    match project_chart_points(&store.load_all()?) {
        Ok(points) => write!(out, "{}", plot::render(&points, width, height))?,
        Err(insufficient) => {
            debug!("{}", insufficient);
            writeln!(
                out,
                "Not enough data to draw a chart yet (at least 2 entries needed)."
            )?;
        }
    }
    Ok(())
}

fn export_entries<S: EntryStore, W: Write>(
    store: &S,
    out: &mut W,
    today: NaiveDate,
    format: ExportFormat,
    output: Option<&Path>,
    to_stdout: bool,
) -> AppResult<()> {
    let entries = store.load_all()?;
    let text = format.render(&entries)?;

    if to_stdout {
        write!(out, "{}", text)?;
        if !text.ends_with('\n') {
            writeln!(out)?;
        }
        return Ok(());
    }

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(export_file_name(format, today)));

    #[cfg(unix)]
    let mode = Some(constants::DEFAULT_FILE_PERMISSIONS);
    #[cfg(not(unix))]
    let mode = None;

    atomic::write_atomic(&path, text.as_bytes(), mode)?;
    info!("Exported {} entries as {} to {:?}", entries.len(), format, path);
    writeln!(
        out,
        "Exported {} to {}",
        entry_count_label(entries.len()),
        path.display()
    )?;
    Ok(())
}

fn entry_count_label(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}
