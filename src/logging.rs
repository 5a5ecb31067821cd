//! Tracing initialization: console output plus an optional daily-rolling
//! log file. Retention is left to external log management.

use crate::config::ChatConfig;
use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
    /// Console output enabled.
    pub console_enabled: bool,
    /// File output directory; `None` disables file output.
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_enabled: true,
            log_dir: None,
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_log_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn without_console(mut self) -> Self {
        self.console_enabled = false;
        self
    }
}

/// Carries the engine's configured log level into logging initialization.
impl From<&ChatConfig> for LogConfig {
    fn from(config: &ChatConfig) -> Self {
        Self::default().with_level(config.log_level.clone())
    }
}

/// Initializes the global tracing subscriber. Returns the appender guard
/// when file logging is enabled; the caller must keep it alive for the
/// process lifetime or buffered lines are lost.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let console_layer = config
        .console_enabled
        .then(|| fmt::layer().with_target(true).boxed());

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = rolling::daily(dir, "campus-chat.log");
            let (writer, guard) = non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
