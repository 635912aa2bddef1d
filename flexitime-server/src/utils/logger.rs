//! Logging Infrastructure
//!
//! Structured logging setup for both development and production.
//! `RUST_LOG` takes precedence over the configured level.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON formatting and file output
///
/// File output is only enabled when `log_dir` exists. A second call is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let log_dir = log_dir.map(Path::new).filter(|dir| dir.exists());

    let result = match (json, log_dir) {
        (true, Some(dir)) => builder
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, "flexitime-server"))
            .try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(dir)) => builder
            .with_writer(tracing_appender::rolling::daily(dir, "flexitime-server"))
            .try_init(),
        (false, None) => builder.try_init(),
    };

    if result.is_err() {
        tracing::debug!("logger already initialized");
    }
}
