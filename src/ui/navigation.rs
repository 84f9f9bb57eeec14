// SPDX-License-Identifier: MPL-2.0
//! Navigation links, in-page anchors and document-extreme scrolling.

use crate::diagnostics::UserAction;
use crate::dom::{contract as c, Document, NodeId};
use crate::error::Result;
use crate::ui::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A desktop or mobile nav link was clicked.
    LinkClicked(NodeId),
    /// An `a[href^="#"]` anchor was clicked.
    Anchor(NodeId),
    ScrollToTop,
    ScrollToBottom,
}

/// Keeps exactly one navigation link marked `active`.
#[derive(Debug, Default)]
pub struct Navigation {
    links: Vec<NodeId>,
    header: Option<NodeId>,
}

impl Navigation {
    pub fn mount(doc: &dyn Document) -> Self {
        let links = [c::NAV_LINK, c::MOBILE_NAV_LINK]
            .iter()
            .flat_map(|class| doc.elements_by_class(class))
            .collect();
        Self {
            links,
            header: doc.element_by_id(c::HEADER),
        }
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: Message) -> Result<()> {
        match message {
            Message::LinkClicked(link) => self.activate(shell.document, link),
            Message::Anchor(anchor) => {
                if let Some(top) = self.anchor_offset(&*shell.document, anchor) {
                    shell.scroll_to(top);
                }
                Ok(())
            }
            Message::ScrollToTop => {
                shell.diagnostics.log_action(UserAction::ScrollToTop);
                shell.scroll_to(0.0);
                Ok(())
            }
            Message::ScrollToBottom => {
                shell.diagnostics.log_action(UserAction::ScrollToBottom);
                let bottom = shell.document.scroll_height();
                shell.scroll_to(bottom);
                Ok(())
            }
        }
    }

    fn activate(&self, doc: &mut dyn Document, link: NodeId) -> Result<()> {
        if !self.links.contains(&link) {
            return Ok(());
        }
        for other in &self.links {
            doc.remove_class(*other, c::ACTIVE)?;
        }
        doc.add_class(link, c::ACTIVE)
    }

    /// Scroll offset that puts the anchor's target just below the header.
    /// `None` for a bare `#` or a missing target.
    fn anchor_offset(&self, doc: &dyn Document, anchor: NodeId) -> Option<f64> {
        let href = doc.attribute(anchor, "href")?;
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        let target = doc.rect(doc.element_by_id(id)?)?;
        let header_height = self
            .header
            .and_then(|header| doc.rect(header))
            .map_or(0.0, |rect| rect.height);
        Some(target.top - header_height)
    }

    #[must_use]
    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    /// Active link, if any.
    pub fn active(&self, doc: &dyn Document) -> Option<NodeId> {
        self.links
            .iter()
            .copied()
            .find(|link| doc.has_class(*link, c::ACTIVE))
    }
}

/// True for in-page anchors handled by smooth scrolling.
#[must_use]
pub fn is_anchor(doc: &dyn Document, node: NodeId) -> bool {
    doc.tag(node).is_ok_and(|tag| tag.eq_ignore_ascii_case("a"))
        && doc
            .attribute(node, "href")
            .is_some_and(|href| href.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::sample::{HEADER_HEIGHT, PAGE_HEIGHT};
    use crate::dom::{MemoryDocument, Viewport};
    use crate::test_utils::Harness;

    fn mobile_link(h: &Harness, index: usize) -> NodeId {
        h.doc.elements_by_class(c::MOBILE_NAV_LINK)[index]
    }

    #[test]
    fn exactly_one_link_is_active() {
        let mut h = Harness::new();
        let mut nav = Navigation::mount(&h.doc);
        assert_eq!(nav.links().len(), 5);

        let target = mobile_link(&h, 1);
        nav.update(&mut h.shell(), Message::LinkClicked(target))
            .unwrap();

        let active: Vec<_> = nav
            .links()
            .iter()
            .filter(|link| h.doc.has_class(**link, c::ACTIVE))
            .collect();
        assert_eq!(active, vec![&target]);
        assert_eq!(nav.active(&h.doc), Some(target));
    }

    #[test]
    fn anchor_scrolls_below_header() {
        let mut h = Harness::new();
        let mut nav = Navigation::mount(&h.doc);
        let sports = h.doc.elements_by_class(c::NAV_LINK)[2];

        nav.update(&mut h.shell(), Message::Anchor(sports)).unwrap();

        assert_eq!(h.doc.scroll_top(), 1500.0 - HEADER_HEIGHT);
        assert!(h.effects.scrolled);
    }

    #[test]
    fn header_is_found_by_id_alone() {
        let mut doc = MemoryDocument::new();
        doc.set_viewport(Viewport {
            width: 1280.0,
            height: 800.0,
        });
        doc.set_scroll_height(3000.0);
        let body = doc.body();
        doc.build(body, "header")
            .id(c::HEADER)
            .rect(0.0, 64.0)
            .finish();
        doc.build(body, "section")
            .id("world")
            .rect(900.0, 300.0)
            .finish();
        let anchor = doc.build(body, "a").attr("href", "#world").finish();

        let mut h = Harness::with_document(doc);
        let mut nav = Navigation::mount(&h.doc);
        nav.update(&mut h.shell(), Message::Anchor(anchor)).unwrap();

        assert_eq!(h.doc.scroll_top(), 900.0 - 64.0);
    }

    #[test]
    fn bare_hash_and_missing_target_do_not_scroll() {
        let mut h = Harness::new();
        let mut nav = Navigation::mount(&h.doc);
        let body = h.doc.body();
        let bare = h.doc.build(body, "a").attr("href", "#").finish();
        let dangling = h.doc.build(body, "a").attr("href", "#nowhere").finish();

        for anchor in [bare, dangling] {
            assert!(is_anchor(&h.doc, anchor));
            nav.update(&mut h.shell(), Message::Anchor(anchor)).unwrap();
        }
        assert_eq!(h.doc.scroll_top(), 0.0);
        assert!(!h.effects.scrolled);
    }

    #[test]
    fn home_and_end_reach_document_extremes() {
        let mut h = Harness::new();
        let mut nav = Navigation::mount(&h.doc);

        nav.update(&mut h.shell(), Message::ScrollToBottom).unwrap();
        let viewport = h.doc.viewport().height;
        assert_eq!(h.doc.scroll_top(), PAGE_HEIGHT - viewport);

        nav.update(&mut h.shell(), Message::ScrollToTop).unwrap();
        assert_eq!(h.doc.scroll_top(), 0.0);
    }
}
