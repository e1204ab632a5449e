use serde::Serialize;

/// Severity threshold requested for the process logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Debug,
}

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSink {
    Stderr,
    /// Discard everything (silent mode)
    Null,
}

/// Logger configuration derived from the verbosity flags.
///
/// The resolver only describes the desired logger; the binary installs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogConfig {
    pub level: LogLevel,
    pub sink: LogSink,
}

impl LogConfig {
    pub fn verbose() -> Self {
        Self {
            level: LogLevel::Debug,
            sink: LogSink::Stderr,
        }
    }

    pub fn silent() -> Self {
        Self {
            level: LogLevel::Info,
            sink: LogSink::Null,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.sink == LogSink::Null
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            sink: LogSink::Stderr,
        }
    }
}
