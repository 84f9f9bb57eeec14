// SPDX-License-Identifier: MPL-2.0
//! Gesture routing.
//!
//! The [`Router`] is a binding table built once at boot: each entry pairs a
//! gesture on a page element with the message it produces. Routing a gesture
//! first walks the element bindings in table order, then appends the
//! document-level handlers (outside-click dismissal, global shortcuts).

use super::Message;
use crate::dom::{contract as c, Document, NodeId};
use crate::ui::forms::{NewsletterMessage, SearchMessage};
use crate::ui::{articles, navigation, notifications, overlays, slider, theming, ticker};

/// A user or window event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Click {
        target: NodeId,
    },
    KeyDown {
        key: Key,
        modifiers: Modifiers,
        /// Focused element, if any.
        target: Option<NodeId>,
    },
    PointerEnter {
        target: NodeId,
    },
    PointerLeave {
        target: NodeId,
    },
    Scroll,
    Resize {
        width: f64,
    },
    VisibilityChange {
        hidden: bool,
    },
    Submit {
        form: NodeId,
    },
    ImageLoaded {
        target: NodeId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Space,
    Home,
    End,
    Other,
}

impl Key {
    /// Parses a key name as written in scripts (`k`, `Escape`, `Home`).
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "Escape" | "Esc" | "escape" | "esc" => Key::Escape,
            "Enter" | "enter" => Key::Enter,
            " " | "Space" | "space" => Key::Space,
            "Home" | "home" => Key::Home,
            "End" | "end" => Key::End,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => Key::Other,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Click,
    PointerEnter,
    PointerLeave,
    Submit,
    /// Enter or Space on a focused element; replayed as a click.
    Activate,
}

#[derive(Debug, Clone)]
enum Action {
    Fixed(Message),
    /// Builds the message from the bound element.
    Forward(fn(NodeId) -> Message),
    /// Re-routes the gesture as a click on the bound element.
    Click,
}

#[derive(Debug, Clone)]
struct Binding {
    trigger: Trigger,
    source: NodeId,
    action: Action,
}

/// Declarative gesture table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    bindings: Vec<Binding>,
}

impl Router {
    /// Builds the table from the elements present on the page. Missing
    /// elements simply contribute no binding.
    pub fn mount(doc: &dyn Document) -> Self {
        let mut router = Self::default();
        let by_id = |id: &str| doc.element_by_id(id);

        // Overlays
        router.fixed_id(by_id(c::MOBILE_MENU_BUTTON), overlays::Message::ToggleMenu);
        for link in doc.elements_by_class(c::MOBILE_NAV_LINK) {
            router.bind(Trigger::Click, link, Action::Fixed(overlays::Message::MenuLinkClicked.into()));
        }
        router.fixed_id(by_id(c::SEARCH_BUTTON), overlays::Message::OpenSearch);
        router.fixed_id(by_id(c::SEARCH_CLOSE), overlays::Message::CloseSearch);

        // Theme and scrolling
        router.fixed_id(by_id(c::THEME_TOGGLE), theming::Message::Toggle);
        router.fixed_id(by_id(c::BACK_TO_TOP), navigation::Message::ScrollToTop);

        // Slider
        router.fixed_id(by_id(c::SLIDE_PREV), slider::Message::Previous);
        router.fixed_id(by_id(c::SLIDE_NEXT), slider::Message::Next);
        for (index, dot) in doc.elements_by_class(c::DOT).into_iter().enumerate() {
            router.bind(Trigger::Click, dot, Action::Fixed(slider::Message::GoTo(index).into()));
        }
        if let Some(container) = doc.elements_by_class(c::SLIDER_CONTAINER).first().copied() {
            router.hover(container, slider::Message::PointerEnter, slider::Message::PointerLeave);
        }

        // Ticker
        if doc.element_by_id(c::TICKER_CONTENT).is_some() {
            if let Some(wrapper) = doc.elements_by_class(c::TICKER_WRAPPER).first().copied() {
                router.hover(wrapper, ticker::Message::PointerEnter, ticker::Message::PointerLeave);
            }
        }

        // Links
        for link in [c::NAV_LINK, c::MOBILE_NAV_LINK]
            .iter()
            .flat_map(|class| doc.elements_by_class(class))
        {
            router.bind(
                Trigger::Click,
                link,
                Action::Forward(|node| navigation::Message::LinkClicked(node).into()),
            );
        }
        for link in doc.descendants_by_tag(doc.root(), "a") {
            if navigation::is_anchor(doc, link) {
                router.bind(
                    Trigger::Click,
                    link,
                    Action::Forward(|node| navigation::Message::Anchor(node).into()),
                );
            } else if articles::is_share_link(doc, link) {
                router.bind(
                    Trigger::Click,
                    link,
                    Action::Forward(|node| articles::Message::Share(node).into()),
                );
            }
        }

        // Articles
        for card in [c::NEWS_CARD, c::POPULAR_POST]
            .iter()
            .flat_map(|class| doc.elements_by_class(class))
        {
            router.bind(
                Trigger::Click,
                card,
                Action::Forward(|node| articles::Message::Open(node).into()),
            );
            router.bind(Trigger::Activate, card, Action::Click);
        }

        // Forms
        if let Some(form) = doc.elements_by_class(c::NEWSLETTER_FORM).first().copied() {
            router.bind(Trigger::Submit, form, Action::Fixed(NewsletterMessage::Submit.into()));
        }
        for form in [c::SEARCH_FORM, c::SEARCH_OVERLAY_FORM]
            .iter()
            .flat_map(|class| doc.elements_by_class(class))
        {
            router.bind(
                Trigger::Submit,
                form,
                Action::Forward(|node| SearchMessage::Submit(node).into()),
            );
        }

        router
    }

    fn bind(&mut self, trigger: Trigger, source: NodeId, action: Action) {
        self.bindings.push(Binding {
            trigger,
            source,
            action,
        });
    }

    fn fixed_id(&mut self, source: Option<NodeId>, message: impl Into<Message>) {
        if let Some(source) = source {
            self.bind(Trigger::Click, source, Action::Fixed(message.into()));
        }
    }

    fn hover(&mut self, source: NodeId, enter: impl Into<Message>, leave: impl Into<Message>) {
        self.bind(Trigger::PointerEnter, source, Action::Fixed(enter.into()));
        self.bind(Trigger::PointerLeave, source, Action::Fixed(leave.into()));
    }

    /// Number of element bindings in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Translates a gesture into the messages it triggers, in delivery order.
    pub fn route(&self, doc: &dyn Document, gesture: &Gesture) -> Vec<Message> {
        let mut out = Vec::new();
        match *gesture {
            Gesture::Click { target } => {
                self.collect(doc, Trigger::Click, target, true, &mut out);
                out.push(overlays::Message::Clicked(target).into());
                out.push(notifications::Message::Clicked(target).into());
            }
            Gesture::KeyDown {
                key,
                modifiers,
                target,
            } => match key {
                Key::Char(ch) if modifiers.command() && ch.eq_ignore_ascii_case(&'k') => {
                    out.push(overlays::Message::OpenSearch.into());
                }
                Key::Escape => out.push(overlays::Message::Escape.into()),
                Key::Home => out.push(navigation::Message::ScrollToTop.into()),
                Key::End => out.push(navigation::Message::ScrollToBottom.into()),
                Key::Enter | Key::Space => {
                    if let Some(target) = target {
                        self.collect(doc, Trigger::Activate, target, false, &mut out);
                    }
                }
                Key::Char(_) | Key::Other => {}
            },
            Gesture::PointerEnter { target } => {
                self.collect(doc, Trigger::PointerEnter, target, false, &mut out);
            }
            Gesture::PointerLeave { target } => {
                self.collect(doc, Trigger::PointerLeave, target, false, &mut out);
            }
            Gesture::Submit { form } => self.collect(doc, Trigger::Submit, form, false, &mut out),
            Gesture::Scroll => out.push(Message::Scrolled),
            Gesture::Resize { width } => out.push(overlays::Message::Resized { width }.into()),
            Gesture::VisibilityChange { hidden } => out.push(Message::VisibilityChanged { hidden }),
            Gesture::ImageLoaded { target } => out.push(Message::ImageLoaded(target)),
        }
        out
    }

    /// Appends the messages of every binding for `trigger` whose source is
    /// `target` (or, when `bubbles`, contains it).
    fn collect(
        &self,
        doc: &dyn Document,
        trigger: Trigger,
        target: NodeId,
        bubbles: bool,
        out: &mut Vec<Message>,
    ) {
        let matching = self.bindings.iter().filter(|binding| {
            binding.trigger == trigger
                && if bubbles {
                    doc.contains(binding.source, target)
                } else {
                    binding.source == target
                }
        });
        for binding in matching {
            match &binding.action {
                Action::Fixed(message) => out.push(message.clone()),
                Action::Forward(build) => out.push(build(binding.source)),
                Action::Click => out.extend(self.route(doc, &Gesture::Click {
                    target: binding.source,
                })),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::sample;

    fn click(router: &Router, doc: &dyn Document, target: NodeId) -> Vec<Message> {
        router.route(doc, &Gesture::Click { target })
    }

    #[test]
    fn key_parse_handles_names_and_chars() {
        assert_eq!(Key::parse("k"), Key::Char('k'));
        assert_eq!(Key::parse("Escape"), Key::Escape);
        assert_eq!(Key::parse("space"), Key::Space);
        assert_eq!(Key::parse("F5"), Key::Other);
    }

    #[test]
    fn click_on_button_icon_bubbles_to_button() {
        let doc = sample::news_page();
        let router = Router::mount(&doc);
        let toggle = doc.element_by_id(c::THEME_TOGGLE).unwrap();
        let icon = doc.descendants_by_tag(toggle, "i")[0];

        let messages = click(&router, &doc, icon);
        assert_eq!(messages[0], Message::Theme(theming::Message::Toggle));
        // Document-level handlers always follow
        assert_eq!(
            &messages[1..],
            &[
                Message::Overlay(overlays::Message::Clicked(icon)),
                Message::Notification(notifications::Message::Clicked(icon)),
            ]
        );
    }

    #[test]
    fn dots_map_to_their_index() {
        let doc = sample::news_page();
        let router = Router::mount(&doc);
        let dot = doc.elements_by_class(c::DOT)[2];

        assert_eq!(
            click(&router, &doc, dot)[0],
            Message::Slider(slider::Message::GoTo(2))
        );
    }

    #[test]
    fn mobile_link_closes_menu_activates_and_scrolls() {
        let doc = sample::news_page();
        let router = Router::mount(&doc);
        let link = doc.elements_by_class(c::MOBILE_NAV_LINK)[0];

        let messages = click(&router, &doc, link);
        assert!(messages.contains(&Message::Overlay(overlays::Message::MenuLinkClicked)));
        assert!(messages.contains(&Message::Navigation(navigation::Message::LinkClicked(link))));
        assert!(messages.contains(&Message::Navigation(navigation::Message::Anchor(link))));
    }

    #[test]
    fn command_k_opens_search() {
        let doc = sample::news_page();
        let router = Router::mount(&doc);
        for modifiers in [
            Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
            Modifiers {
                meta: true,
                ..Modifiers::default()
            },
        ] {
            let messages = router.route(
                &doc,
                &Gesture::KeyDown {
                    key: Key::Char('k'),
                    modifiers,
                    target: None,
                },
            );
            assert_eq!(messages, vec![Message::Overlay(overlays::Message::OpenSearch)]);
        }

        let plain = router.route(
            &doc,
            &Gesture::KeyDown {
                key: Key::Char('k'),
                modifiers: Modifiers::default(),
                target: None,
            },
        );
        assert!(plain.is_empty());
    }

    #[test]
    fn enter_on_card_replays_click() {
        let doc = sample::news_page();
        let router = Router::mount(&doc);
        let card = doc.elements_by_class(c::NEWS_CARD)[0];

        let messages = router.route(
            &doc,
            &Gesture::KeyDown {
                key: Key::Enter,
                modifiers: Modifiers::default(),
                target: Some(card),
            },
        );
        assert_eq!(messages[0], Message::Articles(articles::Message::Open(card)));
    }

    #[test]
    fn hover_requires_exact_source() {
        let doc = sample::news_page();
        let router = Router::mount(&doc);
        let container = doc.elements_by_class(c::SLIDER_CONTAINER)[0];
        let slide = doc.elements_by_class(c::SLIDE)[0];

        assert_eq!(
            router.route(&doc, &Gesture::PointerEnter { target: container }),
            vec![Message::Slider(slider::Message::PointerEnter)]
        );
        assert!(router
            .route(&doc, &Gesture::PointerEnter { target: slide })
            .is_empty());
    }

    #[test]
    fn empty_page_only_has_document_handlers() {
        let doc = crate::dom::MemoryDocument::new();
        let router = Router::mount(&doc);
        assert!(router.is_empty());
        assert_eq!(click(&router, &doc, doc.body()).len(), 2);
    }
}
