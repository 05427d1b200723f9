/*!
# moodlog

moodlog is a tiny daily mood journal: one mood and an optional note per calendar
day, with derived statistics, a mood-over-time chart, and JSON/CSV export.

## Core Operations

- `EntryStore::load_all`, `EntryStore::upsert`, `EntryStore::delete`
- `compute_stats`
- `project_chart_points`
- `to_json`, `to_csv`

## Architecture

- `mood` / `entry`: the data model
- `store`: the `EntryStore` seam with an in-memory and a JSON file implementation
- `stats`, `chart`, `export`: pure functions over entry snapshots
- `cli` / `commands`: the command-line presentation layer
- `config`, `logging`, `errors`, `constants`: ambient infrastructure

## Usage Example

```rust,no_run
use moodlog::{compute_stats, Config, EntryStore, JsonFileStore, Mood};

fn main() -> moodlog::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let mut store = JsonFileStore::open(&config.data_dir)?;
    let today = moodlog::dates::today();
    let entries = store.upsert(today, Mood::Good, "long walk")?;

    let stats = compute_stats(&entries, today);
    println!("{}", stats.count_label());
    Ok(())
}
```
*/

/// Whole-file atomic replacement
pub mod atomic;
/// Chart projection and terminal rendering
pub mod chart;
/// Command-line interface handling using clap
pub mod cli;
/// Command execution against an entry store
pub mod commands;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Date parsing helpers
pub mod dates;
/// The mood entry record
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// JSON and CSV export
pub mod export;
/// Tracing subscriber setup
pub mod logging;
/// The mood enumeration
pub mod mood;
/// Derived statistics
pub mod stats;
/// Entry storage
pub mod store;

// Re-export important types for convenience
pub use chart::{project_chart_points, ChartPoint, InsufficientData};
pub use cli::CliArgs;
pub use config::Config;
pub use entry::MoodEntry;
pub use errors::{AppError, AppResult};
pub use export::{to_csv, to_json, ExportFormat};
pub use mood::Mood;
pub use stats::{compute_stats, Stats};
pub use store::{EntryStore, JsonFileStore, MemoryStore};
