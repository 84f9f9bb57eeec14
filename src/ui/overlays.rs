// SPDX-License-Identifier: MPL-2.0
//! Mobile menu and search overlay.
//!
//! Both panels share one [`ExclusiveRegion`]: opening one closes the other.
//! While either is open the page body does not scroll.

use crate::config::{MOBILE_BREAKPOINT_PX, SEARCH_FOCUS_DELAY_MS};
use crate::diagnostics::UserAction;
use crate::dom::{contract as c, Document, NodeId};
use crate::error::Result;
use crate::scheduler::TimerHandle;
use crate::ui::state::ExclusiveRegion;
use crate::ui::Shell;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Menu,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    ToggleMenu,
    MenuLinkClicked,
    OpenSearch,
    CloseSearch,
    /// Delayed focus of the search input after opening.
    FocusSearchInput,
    /// Any click on the page, used for outside-click dismissal.
    Clicked(NodeId),
    Escape,
    Resized { width: f64 },
}

#[derive(Debug, Clone, Copy)]
struct MenuElements {
    button: NodeId,
    panel: NodeId,
}

#[derive(Debug, Default)]
pub struct Overlays {
    menu: Option<MenuElements>,
    search: Option<NodeId>,
    search_input: Option<NodeId>,
    region: ExclusiveRegion<Overlay>,
    focus_timer: Option<TimerHandle>,
}

impl Overlays {
    pub fn mount(doc: &dyn Document) -> Self {
        let menu = doc
            .element_by_id(c::MOBILE_MENU_BUTTON)
            .zip(doc.element_by_id(c::MOBILE_NAV))
            .map(|(button, panel)| MenuElements { button, panel });
        Self {
            menu,
            search: doc.element_by_id(c::SEARCH_OVERLAY),
            search_input: doc.element_by_id(c::SEARCH_INPUT),
            ..Self::default()
        }
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: Message) -> Result<()> {
        match message {
            Message::ToggleMenu => {
                shell.diagnostics.log_action(UserAction::ToggleMobileMenu);
                if self.is_open(Overlay::Menu) {
                    self.close(shell, Overlay::Menu)
                } else {
                    self.open(shell, Overlay::Menu)
                }
            }
            Message::MenuLinkClicked => self.close(shell, Overlay::Menu),
            Message::OpenSearch => {
                if self.search.is_none() {
                    return Ok(());
                }
                shell.diagnostics.log_action(UserAction::OpenSearch);
                self.open(shell, Overlay::Search)?;
                shell.restart_timeout(
                    &mut self.focus_timer,
                    Duration::from_millis(SEARCH_FOCUS_DELAY_MS),
                    Message::FocusSearchInput,
                );
                Ok(())
            }
            Message::CloseSearch => {
                if self.is_open(Overlay::Search) {
                    shell.diagnostics.log_action(UserAction::CloseSearch);
                }
                self.close(shell, Overlay::Search)
            }
            Message::FocusSearchInput => {
                self.focus_timer = None;
                match self.search_input {
                    Some(input) if self.is_open(Overlay::Search) => shell.document.focus(input),
                    _ => Ok(()),
                }
            }
            Message::Clicked(target) => self.dismiss_on_click(shell, target),
            Message::Escape => self.close(shell, Overlay::Search),
            Message::Resized { width } => {
                if width > MOBILE_BREAKPOINT_PX {
                    self.close(shell, Overlay::Menu)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn dismiss_on_click(&mut self, shell: &mut Shell<'_>, target: NodeId) -> Result<()> {
        if let Some(menu) = self.menu {
            let doc = &*shell.document;
            let inside = doc.contains(menu.panel, target) || doc.contains(menu.button, target);
            if self.is_open(Overlay::Menu) && !inside {
                self.close(shell, Overlay::Menu)?;
            }
        }
        // Only a click on the backdrop itself, not its content
        if self.search == Some(target) {
            self.close(shell, Overlay::Search)?;
        }
        Ok(())
    }

    fn open(&mut self, shell: &mut Shell<'_>, overlay: Overlay) -> Result<()> {
        if self.elements(overlay).is_empty() {
            return Ok(());
        }
        if let Some(displaced) = self.region.acquire(overlay) {
            self.project(shell.document, displaced, false)?;
        }
        self.project(shell.document, overlay, true)?;
        let body = shell.document.body();
        shell.document.set_style(body, "overflow", "hidden")
    }

    fn close(&mut self, shell: &mut Shell<'_>, overlay: Overlay) -> Result<()> {
        if !self.region.release(overlay) {
            return Ok(());
        }
        if overlay == Overlay::Search {
            shell.cancel(&mut self.focus_timer);
        }
        self.project(shell.document, overlay, false)?;
        let body = shell.document.body();
        shell.document.set_style(body, "overflow", "")
    }

    fn project(&self, doc: &mut dyn Document, overlay: Overlay, open: bool) -> Result<()> {
        for node in self.elements(overlay) {
            if open {
                doc.add_class(node, c::ACTIVE)?;
            } else {
                doc.remove_class(node, c::ACTIVE)?;
            }
        }
        Ok(())
    }

    fn elements(&self, overlay: Overlay) -> Vec<NodeId> {
        match overlay {
            Overlay::Menu => self
                .menu
                .map(|menu| vec![menu.button, menu.panel])
                .unwrap_or_default(),
            Overlay::Search => self.search.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.region.is_held_by(overlay)
    }

    #[must_use]
    pub fn open_overlay(&self) -> Option<Overlay> {
        self.region.holder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use crate::test_utils::Harness;

    fn mounted() -> (Harness, Overlays) {
        let h = Harness::new();
        let overlays = Overlays::mount(&h.doc);
        (h, overlays)
    }

    fn overflow(h: &Harness) -> Option<String> {
        h.doc.style(h.doc.body(), "overflow")
    }

    fn run_timers(h: &mut Harness, overlays: &mut Overlays, delay: Duration) {
        for message in h.fire(delay) {
            if let app::Message::Overlay(message) = message {
                overlays.update(&mut h.shell(), message).unwrap();
            }
        }
    }

    #[test]
    fn menu_toggle_projects_onto_button_and_panel() {
        let (mut h, mut overlays) = mounted();
        let button = h.doc.element_by_id(c::MOBILE_MENU_BUTTON).unwrap();
        let panel = h.doc.element_by_id(c::MOBILE_NAV).unwrap();

        overlays.update(&mut h.shell(), Message::ToggleMenu).unwrap();
        assert!(h.doc.has_class(button, c::ACTIVE));
        assert!(h.doc.has_class(panel, c::ACTIVE));
        assert_eq!(overflow(&h).as_deref(), Some("hidden"));

        overlays.update(&mut h.shell(), Message::ToggleMenu).unwrap();
        assert!(!h.doc.has_class(panel, c::ACTIVE));
        assert_eq!(overflow(&h), None);
    }

    #[test]
    fn widening_viewport_closes_menu_and_restores_scroll() {
        let (mut h, mut overlays) = mounted();
        overlays.update(&mut h.shell(), Message::ToggleMenu).unwrap();

        overlays
            .update(&mut h.shell(), Message::Resized { width: 700.0 })
            .unwrap();
        assert!(overlays.is_open(Overlay::Menu));

        overlays
            .update(&mut h.shell(), Message::Resized { width: 1024.0 })
            .unwrap();
        assert!(!overlays.is_open(Overlay::Menu));
        assert_eq!(overflow(&h), None);
    }

    #[test]
    fn outside_click_closes_menu_but_inside_click_does_not() {
        let (mut h, mut overlays) = mounted();
        let panel = h.doc.element_by_id(c::MOBILE_NAV).unwrap();
        let link = h.doc.elements_by_class(c::MOBILE_NAV_LINK)[0];
        overlays.update(&mut h.shell(), Message::ToggleMenu).unwrap();

        overlays.update(&mut h.shell(), Message::Clicked(link)).unwrap();
        assert!(overlays.is_open(Overlay::Menu));

        let body = h.doc.body();
        overlays.update(&mut h.shell(), Message::Clicked(body)).unwrap();
        assert!(!overlays.is_open(Overlay::Menu));
        assert!(!h.doc.has_class(panel, c::ACTIVE));
    }

    #[test]
    fn search_focuses_input_after_delay() {
        let (mut h, mut overlays) = mounted();
        let input = h.doc.element_by_id(c::SEARCH_INPUT).unwrap();

        overlays.update(&mut h.shell(), Message::OpenSearch).unwrap();
        assert_eq!(h.doc.focused(), None);

        run_timers(&mut h, &mut overlays, Duration::from_millis(99));
        assert_eq!(h.doc.focused(), None);
        run_timers(&mut h, &mut overlays, Duration::from_millis(1));
        assert_eq!(h.doc.focused(), Some(input));
    }

    #[test]
    fn escape_and_backdrop_click_close_search() {
        let (mut h, mut overlays) = mounted();
        let overlay = h.doc.element_by_id(c::SEARCH_OVERLAY).unwrap();

        overlays.update(&mut h.shell(), Message::OpenSearch).unwrap();
        overlays.update(&mut h.shell(), Message::Escape).unwrap();
        assert!(!h.doc.has_class(overlay, c::ACTIVE));
        assert_eq!(h.timers.pending_count(), 0);

        overlays.update(&mut h.shell(), Message::OpenSearch).unwrap();
        let input = h.doc.element_by_id(c::SEARCH_INPUT).unwrap();
        overlays.update(&mut h.shell(), Message::Clicked(input)).unwrap();
        assert!(overlays.is_open(Overlay::Search));
        overlays.update(&mut h.shell(), Message::Clicked(overlay)).unwrap();
        assert!(!overlays.is_open(Overlay::Search));
    }

    #[test]
    fn opening_search_closes_menu() {
        let (mut h, mut overlays) = mounted();
        let panel = h.doc.element_by_id(c::MOBILE_NAV).unwrap();

        overlays.update(&mut h.shell(), Message::ToggleMenu).unwrap();
        overlays.update(&mut h.shell(), Message::OpenSearch).unwrap();

        assert_eq!(overlays.open_overlay(), Some(Overlay::Search));
        assert!(!h.doc.has_class(panel, c::ACTIVE));
        assert_eq!(overflow(&h).as_deref(), Some("hidden"));
    }

    #[test]
    fn missing_elements_make_overlays_inert() {
        let mut h = Harness::with_document(crate::dom::MemoryDocument::new());
        let mut overlays = Overlays::mount(&h.doc);

        overlays.update(&mut h.shell(), Message::ToggleMenu).unwrap();
        overlays.update(&mut h.shell(), Message::OpenSearch).unwrap();
        assert_eq!(overlays.open_overlay(), None);
        assert_eq!(overflow(&h), None);
    }
}
