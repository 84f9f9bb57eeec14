// SPDX-License-Identifier: MPL-2.0
//! Per-update context handed to widgets.

use crate::app::Message;
use crate::diagnostics::DiagnosticsHandle;
use crate::dom::Document;
use crate::i18n::I18n;
use crate::preferences::PreferenceStore;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::ui::notifications::Kind;
use std::time::Duration;

/// A notification requested by a widget, shown once the widget returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: Kind,
    pub text: String,
}

/// Side effects collected while a widget handles one message.
#[derive(Debug, Default)]
pub struct Effects {
    pub notices: Vec<Notice>,
    /// Messages to run after the current one completes.
    pub follow_ups: Vec<Message>,
    /// Set when a widget moved the window; scroll gates must re-run.
    pub scrolled: bool,
}

/// Everything a widget may touch while handling a message.
///
/// Widgets never call each other. They reach the notification sink and
/// sibling widgets only through [`Shell::notify`] and [`Shell::send`].
pub struct Shell<'a> {
    pub document: &'a mut dyn Document,
    pub timers: &'a mut Scheduler<Message>,
    pub preferences: &'a mut PreferenceStore,
    pub i18n: &'a I18n,
    pub diagnostics: &'a DiagnosticsHandle,
    effects: &'a mut Effects,
}

impl<'a> Shell<'a> {
    pub fn new(
        document: &'a mut dyn Document,
        timers: &'a mut Scheduler<Message>,
        preferences: &'a mut PreferenceStore,
        i18n: &'a I18n,
        diagnostics: &'a DiagnosticsHandle,
        effects: &'a mut Effects,
    ) -> Self {
        Self {
            document,
            timers,
            preferences,
            i18n,
            diagnostics,
            effects,
        }
    }

    pub fn notify(&mut self, kind: Kind, text: impl Into<String>) {
        self.effects.notices.push(Notice {
            kind,
            text: text.into(),
        });
    }

    /// Queues `message` to run after the current handler.
    pub fn send(&mut self, message: impl Into<Message>) {
        self.effects.follow_ups.push(message.into());
    }

    /// Scrolls the window and marks the scroll gates for re-evaluation.
    pub fn scroll_to(&mut self, top: f64) {
        self.document.scroll_to(top);
        self.effects.scrolled = true;
    }

    pub fn tr(&self, key: &str) -> String {
        self.i18n.tr(key)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.i18n.tr_with_args(key, args)
    }

    /// One-shot timer delivering `message` after `delay`, replacing any timer
    /// held in `slot`.
    pub fn restart_timeout(
        &mut self,
        slot: &mut Option<TimerHandle>,
        delay: Duration,
        message: impl Into<Message>,
    ) {
        self.timers.restart_timeout(slot, delay, message.into());
    }

    /// Repeating timer delivering `message` every `period`, replacing any
    /// timer held in `slot`.
    pub fn restart_interval(
        &mut self,
        slot: &mut Option<TimerHandle>,
        period: Duration,
        message: impl Into<Message>,
    ) {
        self.timers.restart_interval(slot, period, message.into());
    }

    pub fn cancel(&mut self, slot: &mut Option<TimerHandle>) {
        self.timers.cancel_slot(slot);
    }
}
