// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostics report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

use super::DiagnosticEventKind;

/// Report produced by [`super::DiagnosticsCollector::export_json`].
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub app_version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub collection_started_at: DateTime<Utc>,
    pub event_count: usize,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(collection_started_at: DateTime<Utc>, events: Vec<SerializableEvent>) -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            collection_started_at,
            event_count: events.len(),
            events,
        }
    }
}

/// An event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    pub fn new(timestamp: Instant, started_at: Instant, kind: DiagnosticEventKind) -> Self {
        let offset = timestamp.saturating_duration_since(started_at);
        Self {
            offset_ms: u64::try_from(offset.as_millis()).unwrap_or(u64::MAX),
            kind,
        }
    }
}
