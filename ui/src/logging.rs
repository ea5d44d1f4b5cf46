use std::fs::{File, OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILTER_ENV: &str = "AURA_LOG";
const LOG_FILE_ENV: &str = "AURA_LOG_FILE";
const LOG_DIR: &str = "tmp";
const LOG_BASENAME: &str = "aura";

fn log_path() -> PathBuf {
    let ts_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let pid = std::process::id();
    let filename = format!("{LOG_BASENAME}_{ts_ms}_pid{pid}.log");
    Path::new(LOG_DIR).join(filename)
}

fn file_logging_enabled() -> bool {
    std::env::var(LOG_FILE_ENV)
        .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

// No subscriber is installed yet when this runs, so failures go to stderr.
fn open_log_file() -> Option<File> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        if let Err(err) = create_dir_all(parent) {
            eprintln!("[log] failed to create log dir {:?}: {err}", parent);
            return None;
        }
    }
    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
    {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("[log] failed to open log file {:?}: {err}", path);
            None
        }
    }
}

/// Install the global tracing subscriber. Safe to call more than once.
///
/// The filter comes from `AURA_LOG` (default `info`). Setting `AURA_LOG_FILE=1`
/// mirrors output to a per-process file under `tmp/`.
pub fn init_logging() {
    static INIT: OnceLock<()> = OnceLock::new();

    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

        let file_layer = if file_logging_enabled() {
            open_log_file().map(|file| {
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
            })
        } else {
            None
        };

        let result = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .with(file_layer)
            .try_init();

        if let Err(err) = result {
            eprintln!("[log] tracing subscriber already installed: {err}");
        }
    });
}
