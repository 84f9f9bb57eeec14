// SPDX-License-Identifier: MPL-2.0
//! Breaking-news ticker.
//!
//! The marquee itself is a declarative CSS animation; this widget only flips
//! its play state.

use crate::config::TICKER_LOOP_SECS;
use crate::dom::{contract as c, Document, NodeId};
use crate::error::Result;
use crate::ui::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PointerEnter,
    PointerLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

impl PlayState {
    fn as_css(self) -> &'static str {
        match self {
            PlayState::Running => "running",
            PlayState::Paused => "paused",
        }
    }
}

#[derive(Debug)]
pub struct Ticker {
    content: NodeId,
    wrapper: Option<NodeId>,
    hovered: bool,
    hidden: bool,
}

impl Ticker {
    pub fn mount(doc: &dyn Document) -> Option<Self> {
        let content = doc.element_by_id(c::TICKER_CONTENT)?;
        Some(Self {
            content,
            wrapper: doc.elements_by_class(c::TICKER_WRAPPER).first().copied(),
            hovered: false,
            hidden: false,
        })
    }

    pub fn start(&mut self, shell: &mut Shell<'_>) -> Result<()> {
        shell.document.set_style(
            self.content,
            "animation",
            &format!("ticker {TICKER_LOOP_SECS}s linear infinite"),
        )?;
        self.render(shell.document)
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: Message) -> Result<()> {
        self.hovered = message == Message::PointerEnter;
        self.render(shell.document)
    }

    pub fn set_hidden(&mut self, shell: &mut Shell<'_>, hidden: bool) -> Result<()> {
        self.hidden = hidden;
        self.render(shell.document)
    }

    #[must_use]
    pub fn play_state(&self) -> PlayState {
        if self.hovered || self.hidden {
            PlayState::Paused
        } else {
            PlayState::Running
        }
    }

    #[must_use]
    pub fn wrapper(&self) -> Option<NodeId> {
        self.wrapper
    }

    fn render(&self, doc: &mut dyn Document) -> Result<()> {
        doc.set_style(
            self.content,
            "animation-play-state",
            self.play_state().as_css(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Harness;

    fn play_state(h: &Harness, ticker: &Ticker) -> Option<String> {
        h.doc.style(ticker.content, "animation-play-state")
    }

    #[test]
    fn start_applies_loop_animation() {
        let mut h = Harness::new();
        let mut ticker = Ticker::mount(&h.doc).unwrap();
        ticker.start(&mut h.shell()).unwrap();

        assert_eq!(
            h.doc.style(ticker.content, "animation").as_deref(),
            Some("ticker 60s linear infinite")
        );
        assert_eq!(play_state(&h, &ticker).as_deref(), Some("running"));
    }

    #[test]
    fn hover_and_visibility_pause() {
        let mut h = Harness::new();
        let mut ticker = Ticker::mount(&h.doc).unwrap();
        ticker.start(&mut h.shell()).unwrap();

        ticker.update(&mut h.shell(), Message::PointerEnter).unwrap();
        assert_eq!(play_state(&h, &ticker).as_deref(), Some("paused"));
        ticker.update(&mut h.shell(), Message::PointerLeave).unwrap();
        assert_eq!(ticker.play_state(), PlayState::Running);

        ticker.set_hidden(&mut h.shell(), true).unwrap();
        assert_eq!(play_state(&h, &ticker).as_deref(), Some("paused"));
        ticker.set_hidden(&mut h.shell(), false).unwrap();
        assert_eq!(play_state(&h, &ticker).as_deref(), Some("running"));
    }
}
