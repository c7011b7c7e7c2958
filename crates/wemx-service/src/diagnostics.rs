//! Diagnostic sinks
//!
//! Out-of-band error reporting for failures an adapter deliberately does not
//! propagate to its caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Severity of a diagnostic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A single recorded diagnostic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    /// Category tag, e.g. `contabo::cancel::server::<id>`
    pub tag: String,

    pub message: String,

    pub severity: Severity,

    pub recorded_at: DateTime<Utc>,
}

/// Accepts `(tag, message, severity)` triples
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, tag: &str, message: &str, severity: Severity);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn record(&self, tag: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!(tag, %severity, "{}", message),
            Severity::Warning => tracing::warn!(tag, %severity, "{}", message),
            Severity::Error | Severity::Critical => {
                tracing::error!(tag, %severity, "{}", message)
            }
        }
    }
}

/// Keeps every entry in memory
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded entries, oldest first
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic elsewhere must not lose entries
    fn lock(&self) -> MutexGuard<'_, Vec<DiagnosticEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticsSink for MemoryDiagnostics {
    fn record(&self, tag: &str, message: &str, severity: Severity) {
        let entry = DiagnosticEntry {
            tag: tag.to_string(),
            message: message.to_string(),
            severity,
            recorded_at: Utc::now(),
        };
        self.lock().push(entry);
    }
}
