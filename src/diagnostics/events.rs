// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured while the page runs: user
//! gestures, widget state changes, and problems the widgets recovered from.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Slider
    // ==========================================================================
    NextSlide,
    PreviousSlide,
    GoToSlide { index: usize },

    // ==========================================================================
    // Theme
    // ==========================================================================
    ToggleTheme,

    // ==========================================================================
    // Overlays
    // ==========================================================================
    ToggleMobileMenu,
    OpenSearch,
    CloseSearch,

    // ==========================================================================
    // Content
    // ==========================================================================
    OpenArticle,
    Share {
        /// Share target network (e.g. `facebook`).
        network: String,
    },
    ScrollToTop,
    ScrollToBottom,

    // ==========================================================================
    // Forms
    // ==========================================================================
    SubmitNewsletter,
    SubmitSearch,

    CloseNotification,
}

/// Widget state transitions worth correlating with user actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// All widgets mounted.
    Booted { locale: String, theme: String },
    ThemeApplied { theme: String },
    SliderPaused,
    SliderResumed,
    PageHidden,
    PageVisible,
    ViewportResized { width: f64 },
}

/// Category of a recovered problem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The preference cell could not be read or written.
    Storage,
    /// A warning-kind notification was shown to the user.
    Notification,
    Other,
}

/// Category of a runtime fault.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A widget targeted an element that is gone.
    Dom,
    Storage,
    /// An error-kind notification was shown to the user.
    Notification,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub category: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(category: WarningType, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub category: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(category: ErrorType, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// Types of diagnostic events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// Optional context (e.g. article title, search query length).
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    AppState {
        state: AppStateEvent,
    },

    Warning {
        event: WarningEvent,
    },

    Error {
        event: ErrorEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::AppState {
            state: AppStateEvent::PageHidden,
        });
        assert!(event.timestamp >= before);
    }

    #[test]
    fn user_action_serializes_with_tags() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::GoToSlide { index: 2 },
            details: None,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains("\"action\":\"go_to_slide\""));
        assert!(json.contains("\"index\":2"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn warning_event_deserializes_from_json() {
        let json = r#"{"type":"warning","event":{"category":"storage","message":"quota"}}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        match kind {
            DiagnosticEventKind::Warning { event } => {
                assert_eq!(event.category, WarningType::Storage);
                assert_eq!(event.message, "quota");
            }
            _ => panic!("expected Warning variant"),
        }
    }
}
