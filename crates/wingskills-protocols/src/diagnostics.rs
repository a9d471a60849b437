//! Verbose skill diagnostics.
//!
//! Skills report what they are doing (validated fields, merged headers,
//! elapsed time, raw results) through a [`Diagnostics`] handle. The handle is
//! a no-op unless the host runs in debug mode, so none of this output is
//! needed for correctness. Hosts decide where lines end up by injecting a
//! [`DiagnosticSink`].

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Severity tag attached to every diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => f.write_str("INFO"),
            LogLevel::Error => f.write_str("ERROR"),
        }
    }
}

/// Receiver of diagnostic lines.
pub trait DiagnosticSink: Send + Sync {
    /// Emit one line on behalf of `source` (usually a skill id).
    fn emit(&self, level: LogLevel, source: &str, message: &str);
}

/// Sink forwarding diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: LogLevel, source: &str, message: &str) {
        match level {
            LogLevel::Info => tracing::info!(skill = source, "{}", message),
            LogLevel::Error => tracing::error!(skill = source, "{}", message),
        }
    }
}

/// Sink keeping every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, oldest first.
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().clone()
    }

    /// Recorded messages without their level.
    pub fn messages(&self) -> Vec<String> {
        self.lines.lock().iter().map(|(_, msg)| msg.clone()).collect()
    }

    /// Whether any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|(_, msg)| msg.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, level: LogLevel, _source: &str, message: &str) {
        self.lines.lock().push((level, message.to_string()));
    }
}

/// Conditional diagnostic emitter handed to skills.
#[derive(Clone)]
pub struct Diagnostics {
    enabled: bool,
    source: String,
    sink: Arc<dyn DiagnosticSink>,
}

impl Diagnostics {
    /// Create a handle writing to `sink` when `enabled` is set.
    pub fn new(enabled: bool, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            enabled,
            source: "wingskills".to_string(),
            sink,
        }
    }

    /// A handle that never emits anything.
    pub fn disabled() -> Self {
        Self::new(false, Arc::new(TracingSink))
    }

    /// Tag emitted lines with `source`.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Emit an `INFO` line. The message is only rendered when enabled.
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Info, message);
    }

    /// Emit an `ERROR` line. The message is only rendered when enabled.
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Error, message);
    }

    fn emit(&self, level: LogLevel, message: impl fmt::Display) {
        if self.enabled {
            self.sink.emit(level, &self.source, &message.to_string());
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::disabled()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("enabled", &self.enabled)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
