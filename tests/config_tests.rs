use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::tempdir;

use moodlog::config::Config;
use moodlog::errors::AppError;
use moodlog::logging::LogFormat;
use moodlog::JsonFileStore;

/// Restores an environment variable to its saved value when dropped
struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: Option<&str>) -> Self {
        let original = env::var(key).ok();
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(val) => env::set_var(self.key, val),
            None => env::remove_var(self.key),
        }
    }
}

#[test]
#[serial]
fn test_config_load_with_environment_vars() {
    let temp_dir = tempdir().unwrap();
    let dir_path = temp_dir.path().to_string_lossy().to_string();

    let _dir = EnvGuard::set("MOODLOG_DIR", Some(&dir_path));
    let _format = EnvGuard::set("MOODLOG_LOG_FORMAT", Some("json"));

    let config = Config::load().unwrap();

    assert_eq!(config.data_dir, PathBuf::from(&dir_path));
    assert_eq!(config.log_format, Some(LogFormat::Json));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_config_expands_home_reference() {
    let home = tempdir().unwrap();
    let home_str = home.path().to_string_lossy().to_string();

    let _home = EnvGuard::set("HOME", Some(&home_str));
    let _dir = EnvGuard::set("MOODLOG_DIR", Some("$HOME/moods"));
    let _format = EnvGuard::set("MOODLOG_LOG_FORMAT", None);

    let config = Config::load().unwrap();

    assert_eq!(config.data_dir, home.path().join("moods"));
    assert_eq!(config.log_format, None);
}

#[test]
#[serial]
fn test_config_load_with_fallbacks() {
    let home = tempdir().unwrap();
    let home_str = home.path().to_string_lossy().to_string();

    let _home = EnvGuard::set("HOME", Some(&home_str));
    let _dir = EnvGuard::set("MOODLOG_DIR", None);
    let _format = EnvGuard::set("MOODLOG_LOG_FORMAT", None);

    let config = Config::load().unwrap();

    assert_eq!(config.data_dir, home.path().join(".moodlog"));
}

#[test]
#[serial]
fn test_config_unknown_log_format_is_config_error() {
    let _format = EnvGuard::set("MOODLOG_LOG_FORMAT", Some("xml"));

    match Config::load() {
        Err(AppError::Config(msg)) => assert!(msg.contains("xml")),
        other => panic!("expected a configuration error, got {:?}", other),
    }
}

#[test]
fn test_store_creates_missing_data_dir() {
    let temp_dir = tempdir().unwrap();
    let data_dir = temp_dir.path().join("nested").join("moods");

    let config = Config {
        data_dir: data_dir.clone(),
        log_format: None,
    };
    config.validate().unwrap();

    JsonFileStore::open(&config.data_dir).unwrap();
    assert!(data_dir.is_dir());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&data_dir).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
