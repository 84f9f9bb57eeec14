// SPDX-License-Identifier: MPL-2.0
//! Date display in the header.

use crate::config::CLOCK_REFRESH_MS;
use crate::dom::{contract as c, Document, NodeId};
use crate::error::Result;
use crate::scheduler::TimerHandle;
use crate::ui::Shell;
use chrono::{DateTime, TimeZone};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Refresh,
}

/// Long English date, e.g. `Friday, March 15, 2024`.
#[must_use]
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%A, %B %-d, %Y").to_string()
}

#[derive(Debug)]
pub struct Clock {
    element: NodeId,
    refresh: Option<TimerHandle>,
}

impl Clock {
    pub fn mount(doc: &dyn Document) -> Option<Self> {
        Some(Self {
            element: doc.element_by_id(c::CURRENT_DATE)?,
            refresh: None,
        })
    }

    /// Renders now and every refresh period after.
    pub fn start(&mut self, shell: &mut Shell<'_>) -> Result<()> {
        self.render(shell)?;
        shell.restart_interval(
            &mut self.refresh,
            Duration::from_millis(CLOCK_REFRESH_MS),
            Message::Refresh,
        );
        Ok(())
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: Message) -> Result<()> {
        match message {
            Message::Refresh => self.render(shell),
        }
    }

    /// Re-renders immediately; called when the page becomes visible.
    pub fn render(&self, shell: &mut Shell<'_>) -> Result<()> {
        let text = format_date(&shell.timers.wall_clock());
        shell.document.set_text(self.element, &text)
    }
}
