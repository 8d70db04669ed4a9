//! Logging and notification collaborators.
//!
//! The approval chain and the enrollment workflow never perform side
//! effects themselves; decisions and progress are reported through these
//! injected traits. Both are observational only: implementations must not
//! propagate failures, and nothing in the control-flow engines reads them
//! back.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::clock::Clock;

/// Append-only, best-effort activity log. `destination` is a coarse tag
/// grouping related entries (e.g. `"enrollment"`, `"grades"`).
pub trait ActivityLog: Send + Sync {
    /// Records one message under the given destination tag.
    fn record(&self, message: &str, destination: &str);
}

/// Fire-and-forget notification channel; no delivery guarantee is modeled.
pub trait Notifier: Send + Sync {
    /// Sends one notification message.
    fn notify(&self, message: &str);
}

/// Production [`ActivityLog`] that emits `tracing` events.
#[derive(Debug, Clone, Copy)]
pub struct TracingActivityLog;

impl ActivityLog for TracingActivityLog {
    fn record(&self, message: &str, destination: &str) {
        tracing::info!(destination, "{message}");
    }
}

/// Production [`Notifier`] that emits `tracing` events.
#[derive(Debug, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(channel = "notification", "{message}");
    }
}

/// One clock-stamped entry in a [`JournalLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
    /// The destination tag the entry was recorded under.
    pub destination: String,
    /// The recorded message.
    pub message: String,
}

/// In-memory append-only journal. Retains every recorded entry with a
/// clock stamp so callers can inspect the audit trail.
pub struct JournalLog {
    clock: Box<dyn Clock>,
    entries: Mutex<Vec<JournalEntry>>,
}

impl JournalLog {
    /// Creates an empty journal stamped by the given clock.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all recorded entries, in append order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl ActivityLog for JournalLog {
    fn record(&self, message: &str, destination: &str) {
        let entry = JournalEntry {
            recorded_at: self.clock.now(),
            destination: destination.to_owned(),
            message: message.to_owned(),
        };
        self.entries.lock().unwrap().push(entry);
    }
}
