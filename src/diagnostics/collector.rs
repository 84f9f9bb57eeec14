// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Widgets hold a [`DiagnosticsHandle`]; the collector drains the channel
//! into its circular buffer whenever the app has finished handling a message.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    DiagnosticReport, ErrorEvent, SerializableEvent, UserAction, WarningEvent,
};
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Every method is non-blocking and drops the event when the
/// channel is full (backpressure protection).
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for event offsets.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

/// Events that can wait in the channel between two drains.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Renders all stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path`, creating parent directories.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.export_json()?)?;
        Ok(())
    }

    fn build_report(&self) -> DiagnosticReport {
        let events = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();
        DiagnosticReport::new(self.collection_started_at_utc, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::NextSlide);
        handle.log_state(AppStateEvent::SliderPaused);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn buffer_keeps_most_recent_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();
        for index in 0..20 {
            handle.log_action(UserAction::GoToSlide { index });
        }
        collector.process_pending();

        assert_eq!(collector.len(), 16);
        let first = collector.iter().next().map(|event| event.kind.clone());
        assert_eq!(
            first,
            Some(DiagnosticEventKind::UserAction {
                action: UserAction::GoToSlide { index: 4 },
                details: None,
            })
        );
    }

    #[test]
    fn export_json_contains_events_and_count() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_warning(WarningEvent::new(WarningType::Storage, "disk full"));
        handle.log_error(ErrorEvent::new(ErrorType::Other, "boom"));
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["event_count"], 2);
        assert_eq!(value["events"][0]["type"], "warning");
        assert_eq!(value["events"][0]["event"]["category"], "storage");
        assert_eq!(value["events"][1]["event"]["message"], "boom");
        assert!(value["events"][1]["offset_ms"].is_u64());
    }

    #[test]
    fn export_to_file_writes_report() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_action(UserAction::ToggleTheme);
        collector.process_pending();

        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("reports").join("diagnostics.json");
        collector.export_to_file(&path).expect("export should succeed");

        let content = fs::read_to_string(&path).expect("report written");
        assert!(content.contains("toggle_theme"));
    }

    #[test]
    fn dropped_collector_does_not_block_handles() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        drop(collector);
        handle.log_action(UserAction::OpenSearch);
    }
}
