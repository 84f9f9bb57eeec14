// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme switching.
//!
//! The active mode lives in the shared preference cell. The switcher
//! projects it onto the page: the `data-theme` attribute of the document
//! root, the toggle's icon glyph, and a short color transition on the body.

use crate::config::THEME_TRANSITION_MS;
use crate::diagnostics::{AppStateEvent, UserAction};
use crate::dom::{contract as c, Document, NodeId};
use crate::error::Result;
use crate::preferences::ThemeMode;
use crate::scheduler::TimerHandle;
use crate::ui::design_tokens::motion;
use crate::ui::notifications::Kind;
use crate::ui::Shell;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
    Set(ThemeMode),
    TransitionEnded,
}

#[derive(Debug, Default)]
pub struct ThemeSwitcher {
    toggle: Option<NodeId>,
    icon: Option<NodeId>,
    transition: Option<TimerHandle>,
}

impl ThemeSwitcher {
    pub fn mount(doc: &dyn Document) -> Self {
        let toggle = doc.element_by_id(c::THEME_TOGGLE);
        let icon = toggle.and_then(|toggle| doc.descendants_by_tag(toggle, "i").first().copied());
        Self {
            toggle,
            icon,
            transition: None,
        }
    }

    /// Applies the persisted mode without animation or notification.
    pub fn start(&mut self, shell: &mut Shell<'_>) -> Result<ThemeMode> {
        let mode = shell.preferences.get_theme();
        self.apply(shell.document, mode)?;
        Ok(mode)
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: Message) -> Result<()> {
        match message {
            Message::Toggle => {
                shell.diagnostics.log_action(UserAction::ToggleTheme);
                self.toggle_theme(shell)
            }
            Message::Set(mode) => self.set_theme(shell, mode),
            Message::TransitionEnded => {
                self.transition = None;
                let body = shell.document.body();
                shell.document.set_style(body, "transition", "")
            }
        }
    }

    #[must_use]
    pub fn get_theme(&self, shell: &Shell<'_>) -> ThemeMode {
        shell.preferences.get_theme()
    }

    /// Persists and applies `mode`, then announces it.
    pub fn set_theme(&mut self, shell: &mut Shell<'_>, mode: ThemeMode) -> Result<()> {
        shell.preferences.set_theme(mode);
        self.apply(shell.document, mode)?;

        let body = shell.document.body();
        shell
            .document
            .set_style(body, "transition", motion::THEME_TRANSITION)?;
        shell.restart_timeout(
            &mut self.transition,
            Duration::from_millis(THEME_TRANSITION_MS),
            Message::TransitionEnded,
        );

        shell.diagnostics.log_state(AppStateEvent::ThemeApplied {
            theme: mode.to_string(),
        });
        let mode_name = shell.tr(match mode {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
        });
        let text = shell.tr_with_args("notification-theme-switched", &[("mode", &mode_name)]);
        shell.notify(Kind::Info, text);
        Ok(())
    }

    pub fn toggle_theme(&mut self, shell: &mut Shell<'_>) -> Result<()> {
        let next = shell.preferences.get_theme().toggled();
        self.set_theme(shell, next)
    }

    fn apply(&self, doc: &mut dyn Document, mode: ThemeMode) -> Result<()> {
        let root = doc.root();
        doc.set_attribute(root, c::THEME_ATTRIBUTE, mode.as_str())?;
        if let Some(icon) = self.icon {
            doc.set_class_name(icon, icon_class(mode))?;
        }
        Ok(())
    }

    #[must_use]
    pub fn toggle_button(&self) -> Option<NodeId> {
        self.toggle
    }
}

/// Icon glyph offered by the toggle: the sun switches back to light.
#[must_use]
pub fn icon_class(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "fas fa-sun",
        ThemeMode::Light => "fas fa-moon",
    }
}
