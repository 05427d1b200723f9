/*!
# moodlog - A Tiny Daily Mood Journal

Records one mood and optional note per day, and derives statistics, a chart
and exports from the collected entries.

## Usage

```
moodlog [OPTIONS] <COMMAND>

Commands:
  log     Records the mood (and an optional note) for a day, today by default
  delete  Deletes the entry for a day, today by default
  show    Shows the entry for a day
  list    Lists entries, newest first
  stats   Shows days tracked, most frequent mood, positive share and current streak
  chart   Draws mood over time
  export  Exports all entries as JSON or CSV

Options:
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Log line format [possible values: text, json]
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

- `MOODLOG_DIR`: The directory holding the entry store (defaults to "~/.moodlog")
- `MOODLOG_LOG_FORMAT`: `text` or `json`
- `RUST_LOG`: log filter when `--verbose` is not given
*/

use clap::Parser;
use moodlog::cli::CliArgs;
use moodlog::config::Config;
use moodlog::constants::{TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use moodlog::errors::AppResult;
use moodlog::{commands, dates, logging, JsonFileStore};
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use uuid::Uuid;

fn run(args: &CliArgs, config: &Config) -> AppResult<()> {
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let mut store = JsonFileStore::open(&config.data_dir)?;
    let today = dates::today();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&args.command, &mut store, today, &mut out)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let format = args.log_format.or(config.log_format).unwrap_or_default();
    if let Err(e) = logging::init(format, args.verbose) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting moodlog");

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logged once here, at the application boundary
            error!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
