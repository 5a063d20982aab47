use crate::config::LoggingConfig;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, appending to the configured
/// log file. `RUST_LOG` wins over the configured level when set.
pub fn init(config: &LoggingConfig) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_directive(&config.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

/// Maps a bare level name to a filter directive. Unknown names fall back to
/// info; anything containing '=' is passed through as a full directive.
pub fn build_directive(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }

    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        "off" => "off",
        _ => "info",
    }
    .to_string()
}
