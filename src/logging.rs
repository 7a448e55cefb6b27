//! Logging setup
//!
//! Console output goes to stderr (stdout carries command results). When a log
//! directory is given, every event is also written, without ANSI colours, to
//! a timestamped file in that directory.

use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging options
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Directory for the log file; `None` logs to the console only
    pub log_dir: Option<PathBuf>,
    /// File name inside `log_dir`; defaults to a timestamped name
    pub file_name: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_name: None,
        }
    }
}

/// Name of the log file for a session started at `started`
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!("opensea_client_{}.log", started.format("%Y%m%d_%H%M%S"))
}

/// Create `dir` if needed and open `name` inside it for writing
pub fn open_log_file(dir: &Path, name: &str) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    let file = File::options().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber. Returns the log file path, if any.
pub fn init(config: &LogConfig) -> Result<Option<PathBuf>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (path, file_layer) = match &config.log_dir {
        Some(dir) => {
            let name = config
                .file_name
                .clone()
                .unwrap_or_else(|| log_file_name(Local::now()));
            let (path, file) = open_log_file(dir, &name)?;
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(path), Some(layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::config(format!("failed to initialize logging: {e}")))?;

    match &path {
        Some(p) => info!(
            "=== New logging session started with log file: {} ===",
            p.display()
        ),
        None => info!("=== New logging session started ==="),
    }

    Ok(path)
}
