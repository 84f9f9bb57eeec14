// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for widget unit tests.
//!
//! [`Harness`] owns everything a [`Shell`] borrows, seeded with the sample
//! news page, an in-memory preference cell and the `en-US` translations.

use crate::app::Message;
use crate::config::Config;
use crate::diagnostics::{DiagnosticsCollector, DiagnosticsHandle};
use crate::dom::{sample, MemoryDocument};
use crate::i18n::I18n;
use crate::preferences::{MemoryStorage, PreferenceStore};
use crate::scheduler::Scheduler;
use crate::ui::{Effects, Shell};
use chrono::{Local, TimeZone};
use std::time::Duration;

pub struct Harness {
    pub doc: MemoryDocument,
    pub timers: Scheduler<Message>,
    pub preferences: PreferenceStore,
    pub i18n: I18n,
    pub collector: DiagnosticsCollector,
    pub handle: DiagnosticsHandle,
    pub effects: Effects,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_document(sample::news_page())
    }

    pub fn with_document(doc: MemoryDocument) -> Self {
        let collector = DiagnosticsCollector::default();
        let preferences = PreferenceStore::new(Box::new(MemoryStorage::new()), collector.handle());
        let epoch = Local
            .with_ymd_and_hms(2024, 3, 15, 9, 30, 0)
            .single()
            .unwrap_or_else(Local::now);
        Self {
            doc,
            timers: Scheduler::new(epoch),
            preferences,
            i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
            handle: collector.handle(),
            collector,
            effects: Effects::default(),
        }
    }

    pub fn shell(&mut self) -> Shell<'_> {
        Shell::new(
            &mut self.doc,
            &mut self.timers,
            &mut self.preferences,
            &self.i18n,
            &self.handle,
            &mut self.effects,
        )
    }

    /// Pops every timer message due within `delay`, in firing order.
    pub fn fire(&mut self, delay: Duration) -> Vec<Message> {
        let until = self.timers.now() + delay;
        let mut fired = Vec::new();
        while let Some(message) = self.timers.pop_due(until) {
            fired.push(message);
        }
        self.timers.settle(until);
        fired
    }

    /// Texts of the notices collected so far, draining them.
    pub fn take_notices(&mut self) -> Vec<String> {
        self.effects
            .notices
            .drain(..)
            .map(|notice| notice.text)
            .collect()
    }
}
