//! Log Sink Pass-Through
//!
//! An optional leveled logging sink accepted at selector construction
//! and handed to the backend untouched. The selector itself never calls
//! it; its own diagnostics go through `tracing`.

use std::fmt;
use std::sync::Arc;

/// Severity levels a [`LogSink`] must accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Fine-grained diagnostics
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected but recoverable
    Warn,
    /// Operation failed
    Error,
}

impl LogLevel {
    /// Get string representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A leveled message sink supplied by the embedding application.
pub trait LogSink: Send + Sync {
    /// Record one message at the given level.
    fn log(&self, level: LogLevel, message: &str);
}

/// Shared handle to an optional log sink.
pub type SharedLogSink = Arc<dyn LogSink>;
