// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.

use super::notification::{Kind, Notification, NotificationId};
use crate::config::{NOTIFICATION_EXIT_MS, NOTIFICATION_TIMEOUT_MS};
use crate::diagnostics::{ErrorEvent, ErrorType, UserAction, WarningEvent, WarningType};
use crate::dom::{contract as c, Document, NodeId};
use crate::error::Result;
use crate::scheduler::TimerHandle;
use crate::ui::design_tokens::{motion, palette};
use crate::ui::Shell;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Start the exit transition of a notification.
    Retire(NotificationId),
    /// Remove a retired notification from the tree.
    Detach(NotificationId),
    /// A click anywhere on the page; retires the notification when it hit
    /// the close button.
    Clicked(NodeId),
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    element: NodeId,
    close_button: NodeId,
    timer: Option<TimerHandle>,
}

/// Owns the single visible notification.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Entry>,
    /// Entries playing their exit transition.
    leaving: Vec<Entry>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`, removing any notification already on the page.
    pub fn notify(&mut self, shell: &mut Shell<'_>, message: &str, kind: Kind) -> Result<NotificationId> {
        self.clear(shell)?;

        match kind {
            Kind::Warning => shell
                .diagnostics
                .log_warning(WarningEvent::new(WarningType::Notification, message)),
            Kind::Error => shell
                .diagnostics
                .log_error(ErrorEvent::new(ErrorType::Notification, message)),
            Kind::Info | Kind::Success => {}
        }

        let notification = Notification::new(kind, message, shell.timers.now());
        let id = notification.id();
        let (element, close_button) = render(shell, &notification)?;

        let mut entry = Entry {
            notification,
            element,
            close_button,
            timer: None,
        };
        shell.restart_timeout(
            &mut entry.timer,
            Duration::from_millis(NOTIFICATION_TIMEOUT_MS),
            Message::Retire(id),
        );
        self.current = Some(entry);
        Ok(id)
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: Message) -> Result<()> {
        match message {
            Message::Retire(id) => self.retire(shell, id),
            Message::Detach(id) => self.detach(shell, id),
            Message::Clicked(target) => {
                let hit = self.current.as_ref().and_then(|entry| {
                    shell
                        .document
                        .contains(entry.close_button, target)
                        .then(|| entry.notification.id())
                });
                match hit {
                    Some(id) => {
                        shell.diagnostics.log_action(UserAction::CloseNotification);
                        self.retire(shell, id)
                    }
                    None => Ok(()),
                }
            }
        }
    }

    /// Starts the exit transition. A no-op unless `id` is the visible,
    /// not yet retiring notification.
    pub fn retire(&mut self, shell: &mut Shell<'_>, id: NotificationId) -> Result<()> {
        if !self.is_current(id) {
            return Ok(());
        }
        let Some(mut entry) = self.current.take() else {
            return Ok(());
        };
        shell
            .document
            .set_style(entry.element, "animation", motion::NOTIFICATION_EXIT)?;
        shell.restart_timeout(
            &mut entry.timer,
            Duration::from_millis(NOTIFICATION_EXIT_MS),
            Message::Detach(id),
        );
        self.leaving.push(entry);
        Ok(())
    }

    fn detach(&mut self, shell: &mut Shell<'_>, id: NotificationId) -> Result<()> {
        let Some(index) = self
            .leaving
            .iter()
            .position(|entry| entry.notification.id() == id)
        else {
            return Ok(());
        };
        let entry = self.leaving.swap_remove(index);
        remove_if_attached(shell.document, entry.element)
    }

    /// Drops every notification element immediately, cancelling its timers.
    fn clear(&mut self, shell: &mut Shell<'_>) -> Result<()> {
        let entries = self.current.take().into_iter().chain(self.leaving.drain(..));
        for mut entry in entries.collect::<Vec<_>>() {
            shell.cancel(&mut entry.timer);
            remove_if_attached(shell.document, entry.element)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|entry| &entry.notification)
    }

    /// Element of the visible notification.
    #[must_use]
    pub fn element(&self) -> Option<NodeId> {
        self.current.as_ref().map(|entry| entry.element)
    }

    #[must_use]
    pub fn close_button(&self) -> Option<NodeId> {
        self.current.as_ref().map(|entry| entry.close_button)
    }

    #[must_use]
    pub fn is_current(&self, id: NotificationId) -> bool {
        self.current
            .as_ref()
            .is_some_and(|entry| entry.notification.id() == id)
    }

    /// Number of notifications playing their exit transition.
    #[must_use]
    pub fn retiring_count(&self) -> usize {
        self.leaving.len()
    }
}

fn remove_if_attached(doc: &mut dyn Document, element: NodeId) -> Result<()> {
    if doc.is_attached(element) {
        doc.remove(element)?;
    }
    Ok(())
}

/// Builds `div.notification > span + button.notification-close` under body.
fn render(shell: &mut Shell<'_>, notification: &Notification) -> Result<(NodeId, NodeId)> {
    let close_label = shell.tr("notification-close-label");
    let doc = &mut *shell.document;
    let kind = notification.kind();

    let element = doc.create_element("div");
    doc.set_class_name(
        element,
        &format!("{} {}-{}", c::NOTIFICATION, c::NOTIFICATION, kind.as_str()),
    )?;
    doc.set_attribute(element, "role", "status")?;
    doc.set_style(element, "background", kind.color())?;
    doc.set_style(element, "color", palette::WHITE)?;
    doc.set_style(element, "animation", motion::NOTIFICATION_ENTER)?;

    let text = doc.create_element("span");
    doc.set_text(text, notification.message())?;
    doc.append_child(element, text)?;

    let close_button = doc.create_element("button");
    doc.add_class(close_button, c::NOTIFICATION_CLOSE)?;
    doc.set_attribute(close_button, "aria-label", &close_label)?;
    doc.set_text(close_button, "\u{d7}")?;
    doc.append_child(element, close_button)?;

    let body = doc.body();
    doc.append_child(body, element)?;
    Ok((element, close_button))
}
