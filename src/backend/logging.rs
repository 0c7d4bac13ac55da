/**
 * Logging Setup
 *
 * `Logging::init` installs the global `tracing` subscriber. It is called
 * once from `main`; nothing here runs at import time.
 *
 * # Layers
 *
 * - Console: `fmt` layer filtered by `RUST_LOG`, falling back to the
 *   configured level
 * - File (optional): non-ANSI `fmt` layer at DEBUG, appending to the
 *   configured path
 */

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, LevelFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, Layer};

use crate::shared::LogSettings;

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("failed to install subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Handle to the installed subscriber
#[derive(Debug)]
pub struct Logging {
    file_path: Option<PathBuf>,
}

impl Logging {
    /// Build and install the global subscriber
    pub fn init(settings: &LogSettings) -> Result<Self, LoggingError> {
        let console_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&settings.level))?;
        let console = fmt::layer().with_target(true).with_filter(console_filter);

        let file_path = settings
            .path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let file_layer = match &file_path {
            Some(path) => {
                let file = open_log_file(path)?;
                Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .with_filter(LevelFilter::DEBUG),
                )
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(console)
            .with(file_layer)
            .try_init()?;

        tracing::debug!("Logging initialized (file: {:?})", file_path);
        Ok(Self { file_path })
    }

    /// Path of the log file, if file logging is enabled
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

fn open_log_file(path: &Path) -> Result<std::fs::File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.display().to_string(),
            source,
        })
}
