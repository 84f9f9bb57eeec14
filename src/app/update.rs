// SPDX-License-Identifier: MPL-2.0
//! Update loop and message handlers.
//!
//! One message runs to completion before the next. After each handler the
//! loop drains what the widget asked for through its shell: notices go to
//! the notification center, follow-up messages join the queue, and a
//! programmatic scroll re-runs the visibility gates.

use super::{App, Message, Widgets};
use crate::diagnostics::{AppStateEvent, ErrorEvent, ErrorType};
use crate::dom::Document;
use crate::error::{Error, Result};
use crate::ui::notifications::Kind;
use crate::ui::{Notice, Shell};
use std::collections::VecDeque;
use std::mem;

impl<D: Document> App<D> {
    /// Handles `message` and everything it triggers.
    pub fn update(&mut self, message: Message) {
        let mut queue = VecDeque::from([message]);
        while let Some(message) = queue.pop_front() {
            self.guarded(|widgets, shell| handle(widgets, shell, message));
            queue.extend(self.flush_effects());
        }
        self.collector.process_pending();
    }

    /// Runs `f` against the widgets with a fresh shell, reporting a failure
    /// instead of propagating it.
    pub(super) fn guarded<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Widgets, &mut Shell<'_>) -> Result<()>,
    {
        let result = {
            let mut shell = self.runtime.shell();
            f(&mut self.widgets, &mut shell)
        };
        if let Err(err) = result {
            self.report_fault(&err);
        }
    }

    /// Shows pending notices and re-runs the scroll gates if needed.
    /// Returns the follow-up messages to queue.
    pub(super) fn flush_effects(&mut self) -> Vec<Message> {
        loop {
            let notices = mem::take(&mut self.runtime.effects.notices);
            for notice in notices {
                self.show(&notice);
            }
            if !mem::take(&mut self.runtime.effects.scrolled) {
                break;
            }
            self.guarded(|widgets, shell| widgets.gates.on_scroll(shell.document));
        }
        mem::take(&mut self.runtime.effects.follow_ups)
    }

    fn show(&mut self, notice: &Notice) {
        let mut shell = self.runtime.shell();
        let result = self
            .widgets
            .notifications
            .notify(&mut shell, &notice.text, notice.kind);
        if let Err(err) = result {
            // The sink itself failed; there is nothing left to show this with
            eprintln!("Failed to show notification: {err}");
            self.runtime
                .diagnostics
                .log_error(ErrorEvent::new(fault_type(&err), err.to_string()));
        }
    }

    fn report_fault(&mut self, err: &Error) {
        eprintln!("Unexpected error: {err}");
        self.runtime
            .diagnostics
            .log_error(ErrorEvent::new(fault_type(err), err.to_string()));
        let text = self.runtime.i18n.tr("notification-unexpected-error");
        self.runtime.effects.notices.push(Notice {
            kind: Kind::Error,
            text,
        });
    }
}

fn fault_type(err: &Error) -> ErrorType {
    match err {
        Error::Dom(_) => ErrorType::Dom,
        Error::Storage(_) => ErrorType::Storage,
        Error::Io(_) | Error::Config(_) | Error::I18n(_) => ErrorType::Other,
    }
}

fn handle(widgets: &mut Widgets, shell: &mut Shell<'_>, message: Message) -> Result<()> {
    match message {
        Message::Notification(message) => widgets.notifications.update(shell, message),
        Message::Theme(message) => widgets.theme.update(shell, message),
        Message::Slider(message) => match widgets.slider.as_mut() {
            Some(slider) => slider.update(shell, message),
            None => Ok(()),
        },
        Message::Ticker(message) => match widgets.ticker.as_mut() {
            Some(ticker) => ticker.update(shell, message),
            None => Ok(()),
        },
        Message::Clock(message) => match widgets.clock.as_mut() {
            Some(clock) => clock.update(shell, message),
            None => Ok(()),
        },
        Message::Overlay(message) => widgets.overlays.update(shell, message),
        Message::Newsletter(message) => match widgets.newsletter.as_mut() {
            Some(newsletter) => newsletter.update(shell, message),
            None => Ok(()),
        },
        Message::Search(message) => widgets.search.update(shell, message),
        Message::Navigation(message) => widgets.navigation.update(shell, message),
        Message::Articles(message) => widgets.articles.update(shell, message),
        Message::Scrolled => widgets.gates.on_scroll(shell.document),
        Message::ImageLoaded(img) => widgets.gates.image_loaded(shell.document, img),
        Message::VisibilityChanged { hidden } => set_page_hidden(widgets, shell, hidden),
    }
}

/// Pauses the timed widgets while the page is in the background and
/// catches the clock up when it returns.
fn set_page_hidden(widgets: &mut Widgets, shell: &mut Shell<'_>, hidden: bool) -> Result<()> {
    shell.diagnostics.log_state(if hidden {
        AppStateEvent::PageHidden
    } else {
        AppStateEvent::PageVisible
    });
    if let Some(slider) = widgets.slider.as_mut() {
        slider.set_hidden(shell, hidden);
    }
    if let Some(ticker) = widgets.ticker.as_mut() {
        ticker.set_hidden(shell, hidden)?;
    }
    match widgets.clock.as_ref() {
        Some(clock) if !hidden => clock.render(shell),
        _ => Ok(()),
    }
}
