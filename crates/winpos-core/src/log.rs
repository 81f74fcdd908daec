//! `tracing` subscriber setup for the command-line tool.
//!
//! Library code only emits events. The binary calls [`init`] once at
//! startup; lines go to stderr and, when `file` is enabled, are also
//! appended to `~/.config/winpos/logs/winpos.log`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_FILE_NAME: &str = "winpos.log";
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const DEFAULT_LEVEL: &str = "warn";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum log level: "trace", "debug", "info", "warn", or "error".
    pub level: String,
    /// Whether to also append to the log file.
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.into(),
            file: false,
        }
    }
}

impl LogConfig {
    /// Lowercases the level and replaces unknown names with the default.
    pub fn validate(&mut self) {
        let level = self.level.trim().to_ascii_lowercase();
        self.level = if LEVELS.contains(&level.as_str()) {
            level
        } else {
            DEFAULT_LEVEL.into()
        };
    }

    /// Returns the filter directive to use, honoring `--verbose`.
    pub fn directive(&self, verbose: bool) -> &str {
        if verbose { "debug" } else { &self.level }
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// Does nothing if a subscriber is already installed.
pub fn init(config: &LogConfig, verbose: bool) {
    let filter = EnvFilter::try_new(config.directive(verbose))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let file_layer = config.file.then(open_log_file).flatten().map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .try_init();
}

/// Opens the log file, warning on stderr if it cannot be created.
///
/// The subscriber is not installed yet, so stderr is the only channel.
fn open_log_file() -> Option<File> {
    let Some(dir) = crate::config::config_dir() else {
        eprintln!("Warning: could not determine home directory; file logging disabled");
        return None;
    };
    let log_dir = dir.join("logs");

    match open_log_file_in(&log_dir) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "Warning: {}: {e}; file logging disabled",
                log_dir.join(LOG_FILE_NAME).display()
            );
            None
        }
    }
}

/// Creates `log_dir` if needed and opens `winpos.log` inside it for append.
fn open_log_file_in(log_dir: &Path) -> io::Result<File> {
    fs::create_dir_all(log_dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))
}
