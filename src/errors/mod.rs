//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Storage corruption is deliberately absent from this taxonomy: a malformed
//! store document is recovered inside the store and never reaches callers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur when locking the entry store.
///
/// # Examples
///
/// ```
/// use moodlog::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::StoreBusy {
///     path: PathBuf::from("/path/to/mood_entries.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another moodlog process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// The store is already locked by another process.
    #[error("Mood store is currently being modified by another moodlog process: {path}. Please retry once it has finished.")]
    StoreBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Acquiring the lock failed for a technical reason.
    #[error("Failed to acquire lock for mood store {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Errors raised while writing the store document.
///
/// Decoding failures are not represented here; they trigger quarantine of the
/// document instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The entry document could not be serialized.
    #[error("Failed to serialize mood entries: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The temporary file could not be moved over the store document.
    #[error("Failed to replace store document {path}: {source}")]
    Persist {
        /// Destination path of the store document
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An unreadable document could not be moved aside and is left untouched.
    #[error("Store document {path} is unreadable and could not be moved aside; refusing to overwrite it")]
    Unrecoverable {
        /// Path of the unreadable store document
        path: PathBuf,
    },
}

/// Errors raised while formatting an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// JSON serialization failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer produced bytes that are not UTF-8.
    #[error("CSV export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodlog::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodlog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed user input (no mood chosen, bad date, ...).
    ///
    /// The operation is aborted before any state change.
    #[error("{0}")]
    Input(String),

    /// Errors writing the entry store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to store locking.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),

    /// Errors formatting an export.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use moodlog::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Input("Choose a mood.".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
