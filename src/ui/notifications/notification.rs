// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of a notification; determines its background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    /// Parses a kind name. Unknown names fall back to [`Kind::Info`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Kind::Success,
            "warning" => Kind::Warning,
            "error" => Kind::Error,
            _ => Kind::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Info => "info",
            Kind::Success => "success",
            Kind::Warning => "warning",
            Kind::Error => "error",
        }
    }

    /// Background color of the notification element.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Kind::Info => palette::INFO_600,
            Kind::Success => palette::SUCCESS_600,
            Kind::Warning => palette::WARNING_600,
            Kind::Error => palette::ERROR_600,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    /// Virtual time at which it was shown.
    created_at: Duration,
}

impl Notification {
    pub fn new(kind: Kind, message: impl Into<String>, created_at: Duration) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Duration {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(NotificationId::new(), NotificationId::new());
    }

    #[test]
    fn unknown_kind_falls_back_to_info() {
        assert_eq!(Kind::parse("fatal"), Kind::Info);
        assert_eq!(Kind::parse("fatal").color(), "#2563EB");
        assert_eq!(Kind::parse("error").color(), "#DC2626");
    }
}
