// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting page activity.
//!
//! Widgets record what the user did and what went wrong through a
//! [`DiagnosticsHandle`]; the [`DiagnosticsCollector`] keeps the most recent
//! events in a memory-bounded circular buffer and renders them as a JSON
//! report on demand.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event wrapper
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`DiagnosticReport`]: Serializable export format

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
pub use report::{DiagnosticReport, SerializableEvent};
