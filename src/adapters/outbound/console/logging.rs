use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::options::domain::{LogConfig, LogLevel, LogSink};
use crate::shared::Result;

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(config: &LogConfig) -> &'static str {
    match (config.sink, config.level) {
        (LogSink::Null, _) => "off",
        (LogSink::Stderr, LogLevel::Info) => "info",
        (LogSink::Stderr, LogLevel::Debug) => "debug",
    }
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    // silent mode ignores RUST_LOG
    if config.is_silent() {
        return EnvFilter::new(default_directive(config));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(config)))
}

/// Installs the process-wide tracing subscriber described by `config`.
///
/// Log records go to stderr so stdout stays reserved for the resolved
/// options. Must be called at most once per process.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(build_filter(config))
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}
