use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

const LOG_FILE_PREFIX: &str = "amara-replay.log";

/// Keeps the background file writer alive; logs still buffered are flushed on drop.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Non-blocking daily rolling writer, or `None` when file logging is off or the
/// directory cannot be created.
pub fn file_writer(config: &Config) -> Option<(NonBlocking, WorkerGuard)> {
    if !config.file_logs {
        return None;
    }
    if let Err(err) = std::fs::create_dir_all(&config.log_dir) {
        eprintln!("file logs disabled, cannot create {}: {err}", config.log_dir.display());
        return None;
    }
    let appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, LOG_FILE_PREFIX);
    Some(tracing_appender::non_blocking(appender))
}

/// Installs the global subscriber. Human-readable logs go to stderr so the replay
/// result on stdout stays machine-readable.
pub fn init_tracing(config: &Config) -> LogGuard {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    LogGuard { _file: guard }
}
