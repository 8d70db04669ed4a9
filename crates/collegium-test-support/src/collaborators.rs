//! Test collaborators — recording and silent `ActivityLog`/`Notifier`
//! implementations for tests.

use std::sync::Mutex;

use collegium_core::collaborators::{ActivityLog, Notifier};

/// An activity log that records every `(message, destination)` pair.
#[derive(Debug, Default)]
pub struct RecordingActivityLog {
    records: Mutex<Vec<(String, String)>>,
}

impl RecordingActivityLog {
    /// Creates an empty recording log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded `(message, destination)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn records(&self) -> Vec<(String, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl ActivityLog for RecordingActivityLog {
    fn record(&self, message: &str, destination: &str) {
        self.records
            .lock()
            .unwrap()
            .push((message.to_owned(), destination.to_owned()));
    }
}

/// A notifier that records every message.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all notified messages.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

/// An activity log that discards everything. For tests that do not inspect
/// the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentActivityLog;

impl ActivityLog for SilentActivityLog {
    fn record(&self, _message: &str, _destination: &str) {}
}

/// A notifier that discards everything. For tests that do not inspect
/// notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str) {}
}
