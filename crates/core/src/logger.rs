//! Logger collaborator for store diagnostics
//!
//! The store reports operational events through this trait rather than
//! logging directly, so embedding hosts control where diagnostics go.
//! Calls are fire-and-forget: implementations must not fail and the store
//! never consumes a return value.

use parking_lot::Mutex;
use std::sync::Arc;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Normal operation progress
    Info,
    /// Recovered anomaly, operation continued
    Warning,
    /// Failure about to be signaled to the caller
    Error,
}

/// Diagnostic sink the store reports to
pub trait Logger: Send + Sync {
    /// Report normal operation progress
    fn info(&self, message: &str);

    /// Report a recovered anomaly
    fn warning(&self, message: &str);

    /// Report a failure about to be signaled to the caller
    fn error(&self, message: &str);
}

/// Logger forwarding to the `tracing` macros
///
/// Events are emitted under the `subvault::store` target so hosts can
/// filter store diagnostics with the usual `tracing` directives.
/// This is the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "subvault::store", "{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "subvault::store", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "subvault::store", "{}", message);
    }
}

/// Logger capturing messages in memory
///
/// Clones share the same buffer, so a test can keep one handle while the
/// store owns another and assert on what was reported.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl RecordingLogger {
    /// Create an empty recording logger
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages at the given level, in emission order
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Captured info messages
    pub fn infos(&self) -> Vec<String> {
        self.messages_at(LogLevel::Info)
    }

    /// Captured warning messages
    pub fn warnings(&self) -> Vec<String> {
        self.messages_at(LogLevel::Warning)
    }

    /// Captured error messages
    pub fn errors(&self) -> Vec<String> {
        self.messages_at(LogLevel::Error)
    }

    /// True when any message at `level` contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    /// Total number of captured messages across all levels
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when nothing has been captured yet
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Discard all captured messages
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.entries.lock().push((LogLevel::Info, message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.entries
            .lock()
            .push((LogLevel::Warning, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.entries
            .lock()
            .push((LogLevel::Error, message.to_string()));
    }
}
