// SPDX-License-Identifier: MPL-2.0
//! Featured slider.
//!
//! A cyclic state machine over slide indices `0..N`. Every transition
//! deactivates all slides and dots, then activates exactly one of each.
//! Autoplay advances one slide per [`SlideInterval`]; it is paused while the
//! pointer hovers the slider and while the page is hidden.

use crate::diagnostics::{AppStateEvent, UserAction};
use crate::dom::{contract as c, Document, NodeId};
use crate::error::Result;
use crate::scheduler::TimerHandle;
use crate::ui::state::SlideInterval;
use crate::ui::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
    GoTo(usize),
    /// Autoplay timer fired.
    Advance,
    PointerEnter,
    PointerLeave,
}

#[derive(Debug)]
pub struct Slider {
    slides: Vec<NodeId>,
    dots: Vec<NodeId>,
    container: Option<NodeId>,
    prev_button: Option<NodeId>,
    next_button: Option<NodeId>,
    current: usize,
    interval: SlideInterval,
    autoplay: Option<TimerHandle>,
    hovered: bool,
    hidden: bool,
}

/// Index after `current` in a ring of `len` slides.
#[must_use]
pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Index before `current` in a ring of `len` slides.
#[must_use]
pub fn previous_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

impl Slider {
    /// Locates the slider elements. Returns `None` when the page has no
    /// slides.
    pub fn mount(doc: &dyn Document, interval: SlideInterval) -> Option<Self> {
        let slides = doc.elements_by_class(c::SLIDE);
        if slides.is_empty() {
            return None;
        }
        Some(Self {
            slides,
            dots: doc.elements_by_class(c::DOT),
            container: doc.elements_by_class(c::SLIDER_CONTAINER).first().copied(),
            prev_button: doc.element_by_id(c::SLIDE_PREV),
            next_button: doc.element_by_id(c::SLIDE_NEXT),
            current: 0,
            interval,
            autoplay: None,
            hovered: false,
            hidden: false,
        })
    }

    /// Shows the first slide and starts autoplay.
    pub fn start(&mut self, shell: &mut Shell<'_>) -> Result<()> {
        self.show(shell.document, 0)?;
        self.start_autoplay(shell);
        Ok(())
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: Message) -> Result<()> {
        match message {
            Message::Next => {
                shell.diagnostics.log_action(UserAction::NextSlide);
                self.next(shell)
            }
            Message::Previous => {
                shell.diagnostics.log_action(UserAction::PreviousSlide);
                self.previous(shell)
            }
            Message::GoTo(index) => {
                shell.diagnostics.log_action(UserAction::GoToSlide { index });
                self.go_to(shell, index)
            }
            Message::Advance => {
                let index = next_index(self.current, self.slides.len());
                self.show(shell.document, index)
            }
            Message::PointerEnter => {
                self.hovered = true;
                self.refresh_autoplay(shell);
                Ok(())
            }
            Message::PointerLeave => {
                self.hovered = false;
                self.refresh_autoplay(shell);
                Ok(())
            }
        }
    }

    pub fn next(&mut self, shell: &mut Shell<'_>) -> Result<()> {
        let index = next_index(self.current, self.slides.len());
        self.navigate(shell, index)
    }

    pub fn previous(&mut self, shell: &mut Shell<'_>) -> Result<()> {
        let index = previous_index(self.current, self.slides.len());
        self.navigate(shell, index)
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, shell: &mut Shell<'_>, index: usize) -> Result<()> {
        if index >= self.slides.len() {
            return Ok(());
        }
        self.navigate(shell, index)
    }

    /// Pauses or resumes autoplay with the page's visibility.
    pub fn set_hidden(&mut self, shell: &mut Shell<'_>, hidden: bool) {
        self.hidden = hidden;
        self.refresh_autoplay(shell);
    }

    /// Manual navigation restarts the autoplay period.
    fn navigate(&mut self, shell: &mut Shell<'_>, index: usize) -> Result<()> {
        self.show(shell.document, index)?;
        if !self.is_paused() {
            self.start_autoplay(shell);
        }
        Ok(())
    }

    fn show(&mut self, doc: &mut dyn Document, index: usize) -> Result<()> {
        for node in self.slides.iter().chain(&self.dots) {
            doc.remove_class(*node, c::ACTIVE)?;
        }
        doc.add_class(self.slides[index], c::ACTIVE)?;
        if let Some(dot) = self.dots.get(index) {
            doc.add_class(*dot, c::ACTIVE)?;
        }
        self.current = index;
        Ok(())
    }

    fn start_autoplay(&mut self, shell: &mut Shell<'_>) {
        shell.restart_interval(&mut self.autoplay, self.interval.as_duration(), Message::Advance);
    }

    fn refresh_autoplay(&mut self, shell: &mut Shell<'_>) {
        let running = self.autoplay.is_some();
        if self.is_paused() && running {
            shell.cancel(&mut self.autoplay);
            shell.diagnostics.log_state(AppStateEvent::SliderPaused);
        } else if !self.is_paused() && !running {
            self.start_autoplay(shell);
            shell.diagnostics.log_state(AppStateEvent::SliderResumed);
        }
    }

    fn is_paused(&self) -> bool {
        self.hovered || self.hidden
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    #[must_use]
    pub fn dots(&self) -> &[NodeId] {
        &self.dots
    }

    #[must_use]
    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    #[must_use]
    pub fn prev_button(&self) -> Option<NodeId> {
        self.prev_button
    }

    #[must_use]
    pub fn next_button(&self) -> Option<NodeId> {
        self.next_button
    }
}
