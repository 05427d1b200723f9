//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodlog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A tiny daily mood journal";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Default chart width in terminal cells (plot area only).
pub const DEFAULT_CHART_WIDTH: usize = 60;
/// Default chart height in terminal rows.
pub const DEFAULT_CHART_HEIGHT: usize = 5;

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_MOODLOG_DIR: &str = "MOODLOG_DIR";
/// Environment variable for specifying the log format.
pub const ENV_VAR_MOODLOG_LOG_FORMAT: &str = "MOODLOG_LOG_FORMAT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for the data directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".moodlog";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Store Layout
/// File name of the persisted entry document.
pub const STORE_FILE_NAME: &str = "mood_entries.json";
/// File name of the advisory lock guarding the entry document.
pub const STORE_LOCK_FILE_NAME: &str = "mood_entries.lock";
/// Suffix prepended to the timestamp of a quarantined store document.
pub const STORE_CORRUPT_SUFFIX: &str = "corrupt";
/// Current schema version of the store document.
pub const STORE_SCHEMA_VERSION: u32 = 1;
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Timestamp format used when quarantining a corrupt store document.
pub const QUARANTINE_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.3fZ";
/// Numbered suffixes tried when a quarantine name is already taken.
pub const MAX_QUARANTINE_ATTEMPTS: u32 = 100;

// Export
/// Prefix of exported file names.
pub const EXPORT_FILE_PREFIX: &str = "mood-entries";
/// Header row of the CSV export.
pub const CSV_HEADER: &str = "Date,Humeur,Note";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodlog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
