//! Structured logging setup.
//!
//! Logs go to stderr so command output on stdout stays clean for piping
//! (`moodlog export --stdout > file.csv`).

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, LOG_FORMAT_TEXT, VERBOSE_LOG_LEVEL};
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use std::str::FromStr;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}

/// Builds the level filter: `--verbose` forces debug, otherwise `RUST_LOG`
/// applies, falling back to info.
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_LOG_LEVEL);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `AppError::Config` if a global subscriber is already installed.
pub fn init(format: LogFormat, verbose: bool) -> AppResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_verbose_filter_is_debug() {
        assert_eq!(build_filter(true).to_string(), "debug");
    }
}
