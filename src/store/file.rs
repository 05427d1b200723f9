//! JSON document store on the local filesystem.
//!
//! Layout of `mood_entries.json`:
//!
//! ```json
//! { "version": 1, "entries": [ { "date": "2024-05-01", "mood": "Bien", "note": "" } ] }
//! ```
//!
//! A bare JSON array (the unversioned layout) is read as version 0 and
//! rewritten as version 1 on the next mutation. Any other unreadable document
//! is moved aside as `mood_entries.json.corrupt-<timestamp>` (with a `-N`
//! suffix if that name is taken) and the store starts over empty. If it cannot
//! be moved, reads still see an empty store but writes are refused so the
//! document is never overwritten.

use super::{apply_delete, apply_upsert, EntryStore};
use crate::atomic::write_atomic;
use crate::constants::{
    MAX_QUARANTINE_ATTEMPTS, QUARANTINE_TIMESTAMP_FORMAT, STORE_CORRUPT_SUFFIX, STORE_FILE_NAME, STORE_LOCK_FILE_NAME,
    STORE_SCHEMA_VERSION,
};
use crate::entry::MoodEntry;
use crate::errors::{AppError, AppResult, LockError, StoreError};
use crate::mood::Mood;
use chrono::{DateTime, NaiveDate, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    entries: &'a [MoodEntry],
}

#[derive(Deserialize)]
struct Document {
    version: u32,
    entries: Vec<MoodEntry>,
}

/// Outcome of decoding the raw store document.
#[derive(Debug, PartialEq)]
enum Decoded {
    Current(Vec<MoodEntry>),
    Legacy(Vec<MoodEntry>),
    Unreadable(String),
}

fn decode(raw: &str) -> Decoded {
    if raw.trim().is_empty() {
        return Decoded::Current(Vec::new());
    }

    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => return Decoded::Unreadable(format!("invalid JSON: {}", e)),
    };

    if value.is_array() {
        return match serde_json::from_value::<Vec<MoodEntry>>(value) {
            Ok(entries) => Decoded::Legacy(entries),
            Err(e) => Decoded::Unreadable(format!("invalid unversioned entry list: {}", e)),
        };
    }

    match serde_json::from_value::<Document>(value) {
        Ok(doc) if doc.version == STORE_SCHEMA_VERSION => Decoded::Current(doc.entries),
        Ok(doc) => Decoded::Unreadable(format!("unsupported schema version {}", doc.version)),
        Err(e) => Decoded::Unreadable(format!("invalid document: {}", e)),
    }
}

/// Ensures the data directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            let permissions =
                fs::Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to set secure permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

/// Result of reading the store document.
struct Snapshot {
    entries: Vec<MoodEntry>,
    /// An unreadable document is still at the store path.
    stranded: bool,
}

impl Snapshot {
    fn readable(entries: Vec<MoodEntry>) -> Self {
        Self {
            entries,
            stranded: false,
        }
    }

    fn stranded() -> Self {
        Self {
            entries: Vec::new(),
            stranded: true,
        }
    }
}

/// Exclusive advisory lock held for the duration of a mutation.
struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Store persisted as a single versioned JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    lock_path: PathBuf,
    now: fn() -> DateTime<Utc>,
}

impl JsonFileStore {
    /// Opens the store inside `data_dir`, creating the directory if needed.
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        ensure_data_directory_exists(data_dir)?;
        Ok(Self {
            path: data_dir.join(STORE_FILE_NAME),
            lock_path: data_dir.join(STORE_LOCK_FILE_NAME),
            now: Utc::now,
        })
    }

    /// Path of the entry document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> AppResult<StoreLock> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: self.lock_path.clone(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!("Acquired store lock {:?}", self.lock_path);
                Ok(StoreLock { file })
            }
            Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
                Err(LockError::StoreBusy {
                    path: self.lock_path.clone(),
                }
                .into())
            }
            Err(source) => Err(LockError::AcquisitionFailed {
                path: self.lock_path.clone(),
                source,
            }
            .into()),
        }
    }

    fn read_document(&self) -> AppResult<Snapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No store document at {:?}, starting empty", self.path);
                return Ok(Snapshot::readable(Vec::new()));
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                // Not UTF-8
                return Ok(self.quarantine(&format!("unreadable text: {}", e)));
            }
            Err(e) => return Err(e.into()),
        };

        match decode(&raw) {
            Decoded::Current(entries) => {
                debug!("Loaded {} entries", entries.len());
                Ok(Snapshot::readable(entries))
            }
            Decoded::Legacy(entries) => {
                info!(
                    "Read {} entries from unversioned store document; it will be upgraded on next write",
                    entries.len()
                );
                Ok(Snapshot::readable(entries))
            }
            Decoded::Unreadable(reason) => Ok(self.quarantine(&reason)),
        }
    }

    /// Moves the unreadable document aside. Never fails: when the move is
    /// impossible the document stays where it is and the snapshot is marked
    /// stranded so no write replaces it.
    fn quarantine(&self, reason: &str) -> Snapshot {
        let stamp = (self.now)().format(QUARANTINE_TIMESTAMP_FORMAT).to_string();

        let Some(target) = self.free_quarantine_path(&stamp) else {
            warn!(
                "Store document unreadable ({}); no free quarantine name for {:?}, leaving it in place",
                reason, self.path
            );
            return Snapshot::stranded();
        };

        match fs::rename(&self.path, &target) {
            Ok(()) => {
                warn!(
                    "Store document unreadable ({}); moved to {:?} and starting empty",
                    reason, target
                );
                Snapshot::readable(Vec::new())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Store document already moved aside by another process");
                Snapshot::readable(Vec::new())
            }
            Err(e) => {
                warn!(
                    "Store document unreadable ({}); could not move it to {:?}: {}. Leaving it in place",
                    reason, target, e
                );
                Snapshot::stranded()
            }
        }
    }

    /// First `mood_entries.json.corrupt-<stamp>[-N]` name not already taken.
    fn free_quarantine_path(&self, stamp: &str) -> Option<PathBuf> {
        (0..MAX_QUARANTINE_ATTEMPTS)
            .map(|attempt| {
                let file_name = if attempt == 0 {
                    format!("{}.{}-{}", STORE_FILE_NAME, STORE_CORRUPT_SUFFIX, stamp)
                } else {
                    format!(
                        "{}.{}-{}-{}",
                        STORE_FILE_NAME, STORE_CORRUPT_SUFFIX, stamp, attempt
                    )
                };
                self.path.with_file_name(file_name)
            })
            .find(|candidate| fs::symlink_metadata(candidate).is_err())
    }

    fn write_document(&self, entries: &[MoodEntry]) -> AppResult<()> {
        let doc = DocumentRef {
            version: STORE_SCHEMA_VERSION,
            entries,
        };
        let json = serde_json::to_string_pretty(&doc).map_err(StoreError::Serialize)?;

        let mut contents = json.into_bytes();
        contents.push(b'\n');

        #[cfg(unix)]
        let mode = Some(crate::constants::DEFAULT_FILE_PERMISSIONS);
        #[cfg(not(unix))]
        let mode = None;

        write_atomic(&self.path, &contents, mode)?;
        debug!("Wrote {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    fn mutate<F>(&self, change: F) -> AppResult<Vec<MoodEntry>>
    where
        F: FnOnce(&mut Vec<MoodEntry>),
    {
        let _lock = self.lock()?;
        let snapshot = self.read_document()?;
        if snapshot.stranded {
            return Err(StoreError::Unrecoverable {
                path: self.path.clone(),
            }
            .into());
        }

        let mut entries = snapshot.entries;
        change(&mut entries);
        self.write_document(&entries)?;
        Ok(entries)
    }
}

impl EntryStore for JsonFileStore {
    fn load_all(&self) -> AppResult<Vec<MoodEntry>> {
        Ok(self.read_document()?.entries)
    }

    fn upsert(&mut self, date: NaiveDate, mood: Mood, note: &str) -> AppResult<Vec<MoodEntry>> {
        debug!("Upserting entry for {}", date);
        self.mutate(|entries| apply_upsert(entries, date, mood, note))
    }

    fn delete(&mut self, date: NaiveDate) -> AppResult<Vec<MoodEntry>> {
        debug!("Deleting entry for {}", date);
        self.mutate(|entries| {
            if !apply_delete(entries, date) {
                debug!("No entry for {}, nothing to delete", date);
            }
        })
    }
}
