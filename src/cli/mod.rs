use crate::constants::{APP_DESCRIPTION, APP_NAME, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::export::ExportFormat;
use crate::logging::LogFormat;
use crate::mood::Mood;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A tiny daily mood journal
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log line format (overrides MOODLOG_LOG_FORMAT)
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Records the mood (and an optional note) for a day, today by default
    Log {
        /// Stressé, Fatigué, Moyen, Bien, Très bien (accent-free spellings and 1-5 work too)
        mood: Option<String>,

        /// Free-form note
        #[arg(short = 'n', long, default_value = "")]
        note: String,

        /// Day to record (format: YYYY-MM-DD or YYYYMMDD)
        #[arg(short = 'd', long)]
        date: Option<String>,
    },

    /// Deletes the entry for a day, today by default
    Delete {
        /// Day to delete (format: YYYY-MM-DD or YYYYMMDD)
        date: Option<String>,
    },

    /// Shows the entry for a day
    Show {
        /// Day to show (format: YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// Lists entries, newest first
    List {
        /// Only list entries with this mood
        #[arg(short = 'm', long)]
        mood: Option<Mood>,
    },

    /// Shows days tracked, most frequent mood, positive share and current streak
    Stats,

    /// Draws mood over time
    Chart {
        /// Plot width in columns
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,

        /// Plot height in rows
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: usize,
    },

    /// Exports all entries as JSON or CSV
    Export {
        /// Output format
        #[arg(short = 'f', long, value_enum)]
        format: ExportFormat,

        /// Destination file (defaults to mood-entries-<today>.<ext> in the current directory)
        #[arg(short = 'o', long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_command() {
        let args = CliArgs::parse_from(["moodlog", "log", "bien", "-n", "sunny walk"]);
        assert!(!args.verbose);
        assert_eq!(
            args.command,
            Command::Log {
                mood: Some("bien".to_string()),
                note: "sunny walk".to_string(),
                date: None,
            }
        );
    }

    #[test]
    fn test_log_without_mood_parses() {
        // Missing mood is reported by the command, not by clap
        let args = CliArgs::parse_from(["moodlog", "log", "--date", "20240101"]);
        assert_eq!(
            args.command,
            Command::Log {
                mood: None,
                note: String::new(),
                date: Some("20240101".to_string()),
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["moodlog", "stats", "--verbose", "--log-format", "json"]);
        assert!(args.verbose);
        assert_eq!(args.log_format, Some(LogFormat::Json));
        assert_eq!(args.command, Command::Stats);
    }

    #[test]
    fn test_list_mood_filter() {
        let args = CliArgs::parse_from(["moodlog", "list", "--mood", "très bien"]);
        assert_eq!(
            args.command,
            Command::List {
                mood: Some(Mood::VeryGood)
            }
        );

        assert!(CliArgs::try_parse_from(["moodlog", "list", "--mood", "meh"]).is_err());
    }

    #[test]
    fn test_chart_defaults() {
        let args = CliArgs::parse_from(["moodlog", "chart"]);
        assert_eq!(
            args.command,
            Command::Chart {
                width: DEFAULT_CHART_WIDTH,
                height: DEFAULT_CHART_HEIGHT,
            }
        );
    }

    #[test]
    fn test_export_output_conflicts_with_stdout() {
        let result = CliArgs::try_parse_from([
            "moodlog", "export", "-f", "csv", "-o", "out.csv", "--stdout",
        ]);
        assert!(result.is_err());

        let args = CliArgs::parse_from(["moodlog", "export", "--format", "json", "--stdout"]);
        assert_eq!(
            args.command,
            Command::Export {
                format: ExportFormat::Json,
                output: None,
                stdout: true,
            }
        );
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliArgs::try_parse_from(["moodlog"]).is_err());
    }
}
