//! Progress sinks that do not draw anything.

use std::sync::{Arc, Mutex};

use arcgen_core::application::ports::ProgressSink;

/// Discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&self, _: u8, _: Option<&str>) {}
}

/// Logs each update as a tracing event and keeps a copy for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    events: Arc<Mutex<Vec<(u8, Option<String>)>>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentages reported so far.
    pub fn percents(&self) -> Vec<u8> {
        self.events
            .lock()
            .map(|events| events.iter().map(|(percent, _)| *percent).collect())
            .unwrap_or_default()
    }

    /// Status texts reported so far.
    pub fn statuses(&self) -> Vec<String> {
        self.events
            .lock()
            .map(|events| events.iter().filter_map(|(_, s)| s.clone()).collect())
            .unwrap_or_default()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&self, percent: u8, status: Option<&str>) {
        tracing::info!(percent, status, "Progress");
        if let Ok(mut events) = self.events.lock() {
            events.push((percent, status.map(str::to_string)));
        }
    }
}
