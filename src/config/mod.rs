//! Configuration management for the moodlog application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DIR`: Path to the data directory (defaults to ~/.moodlog)
//! - `MOODLOG_LOG_FORMAT`: `text` (default) or `json`
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_MOODLOG_DIR, ENV_VAR_MOODLOG_LOG_FORMAT,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use crate::logging::LogFormat;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the moodlog application.
///
/// # Examples
///
/// ```
/// use moodlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/moodlog"),
///     log_format: None,
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory holding the entry store.
    pub data_dir: PathBuf,

    /// Log format requested through the environment, if any.
    ///
    /// The `--log-format` flag takes precedence over this value.
    pub log_format: Option<LogFormat>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand`, so `~` and
    /// `$VAR` references are resolved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `MOODLOG_LOG_FORMAT` names an unknown format
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MOODLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let log_format = match env::var(ENV_VAR_MOODLOG_LOG_FORMAT) {
            Ok(raw) => Some(raw.trim().parse::<LogFormat>()?),
            Err(_) => None,
        };

        Ok(Config {
            data_dir,
            log_format,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory is empty or relative.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn setup() {
        env::remove_var(ENV_VAR_MOODLOG_DIR);
        env::remove_var(ENV_VAR_MOODLOG_LOG_FORMAT);
    }

    #[test]
    fn test_debug_impl_redacts_path() {
        let config = Config {
            data_dir: PathBuf::from("/home/username/private/moods"),
            log_format: None,
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("/home/username/private/moods"));
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        setup();
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        env::set_var(ENV_VAR_MOODLOG_DIR, &dir_path);
        let config = Config::load().unwrap();
        env::remove_var(ENV_VAR_MOODLOG_DIR);

        assert_eq!(config.data_dir, PathBuf::from(dir_path));
        assert_eq!(config.log_format, None);
    }

    #[test]
    #[serial]
    fn test_load_defaults_under_home() {
        setup();
        let orig_home = env::var(ENV_VAR_HOME).ok();
        env::set_var(ENV_VAR_HOME, "/home/tester");

        let config = Config::load().unwrap();

        match orig_home {
            Some(val) => env::set_var(ENV_VAR_HOME, val),
            None => env::remove_var(ENV_VAR_HOME),
        }

        assert_eq!(config.data_dir, PathBuf::from("/home/tester/.moodlog"));
    }

    #[test]
    #[serial]
    fn test_load_rejects_unknown_log_format() {
        setup();
        env::set_var(ENV_VAR_MOODLOG_DIR, "/tmp/moodlog-config-test");
        env::set_var(ENV_VAR_MOODLOG_LOG_FORMAT, "xml");

        let result = Config::load();
        setup();

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("Unknown log format 'xml'")),
            _ => panic!("Expected Config error for unknown log format"),
        }
    }

    #[test]
    #[serial]
    fn test_load_accepts_json_log_format() {
        setup();
        env::set_var(ENV_VAR_MOODLOG_DIR, "/tmp/moodlog-config-test");
        env::set_var(ENV_VAR_MOODLOG_LOG_FORMAT, "json");

        let config = Config::load().unwrap();
        setup();

        assert_eq!(config.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_validate_relative_dir() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
            log_format: None,
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("must be an absolute path"));
            }
            _ => panic!("Expected Config error about relative path"),
        }
    }

    #[test]
    fn test_validate_empty_dir() {
        let config = Config {
            data_dir: PathBuf::from(""),
            log_format: None,
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("Data directory path is empty"));
            }
            _ => panic!("Expected Config error about empty data directory"),
        }
    }
}
