// SPDX-License-Identifier: MPL-2.0
//! In-memory [`Document`] backed by a node arena.

use super::{Document, NodeId, Rect, Viewport};
use crate::error::{DomError, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Option<Rect>,
}

/// A popup request recorded by [`Document::open_window`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedWindow {
    pub url: String,
    pub name: String,
    pub features: String,
}

/// Arena-backed element tree with a simulated window.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
    focused: Option<NodeId>,
    scroll_top: f64,
    scroll_height: f64,
    viewport: Viewport,
    opened_windows: Vec<OpenedWindow>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document holding only `<html>` and `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let root = NodeId::from_raw(0);
        let body = NodeId::from_raw(1);
        let nodes = vec![
            Node {
                tag: "html".to_string(),
                children: vec![body],
                ..Node::default()
            },
            Node {
                tag: "body".to_string(),
                parent: Some(root),
                ..Node::default()
            },
        ];

        let viewport = Viewport::default();
        Self {
            nodes,
            root,
            body,
            focused: None,
            scroll_top: 0.0,
            scroll_height: viewport.height,
            viewport,
            opened_windows: Vec::new(),
        }
    }

    /// Starts building a new element appended under `parent`.
    pub fn build(&mut self, parent: NodeId, tag: &str) -> ElementBuilder<'_> {
        let node = self.create_element(tag);
        if self.node(parent).is_ok() {
            self.nodes[node.index()].parent = Some(parent);
            self.nodes[parent.index()].children.push(node);
        }
        ElementBuilder { doc: self, node }
    }

    /// Assigns a layout box to an element.
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) -> Result<()> {
        self.node_mut(node)?.rect = Some(rect);
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scroll_to(self.scroll_top);
    }

    pub fn set_scroll_height(&mut self, height: f64) {
        self.scroll_height = height.max(0.0);
        self.scroll_to(self.scroll_top);
    }

    /// Popup requests recorded so far, oldest first.
    #[must_use]
    pub fn opened_windows(&self) -> &[OpenedWindow] {
        &self.opened_windows
    }

    /// Number of attached elements carrying `class`.
    #[must_use]
    pub fn count_class(&self, class: &str) -> usize {
        self.elements_by_class(class).len()
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| DomError::UnknownNode(id).into())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or_else(|| DomError::UnknownNode(id).into())
    }

    /// Pre-order walk of the subtree under `start`, excluding `start`.
    fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(start.index()) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.nodes.get(id.index()) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.viewport.height).max(0.0)
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> NodeId {
        self.root
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root).into_iter().find(|node| {
            self.nodes[node.index()].attributes.get("id").map(String::as_str) == Some(id)
        })
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants_by_class(self.root, class)
    }

    fn descendants_by_class(&self, ancestor: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(ancestor)
            .into_iter()
            .filter(|node| self.has_class(*node, class))
            .collect()
    }

    fn descendants_by_tag(&self, ancestor: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(ancestor)
            .into_iter()
            .filter(|node| self.nodes[node.index()].tag.eq_ignore_ascii_case(tag))
            .collect()
    }

    fn tag(&self, node: NodeId) -> Result<&str> {
        Ok(self.node(node)?.tag.as_str())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.index()).and_then(|n| n.parent)
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        });
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest(child).into());
        }
        if let Some(old_parent) = self.nodes[child.index()].parent.take() {
            self.nodes[old_parent.index()].children.retain(|c| *c != child);
        }
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<()> {
        if node == self.root {
            return Err(DomError::HierarchyRequest(node).into());
        }
        let parent = self.node_mut(node)?.parent.take();
        match parent {
            Some(parent) => {
                self.nodes[parent.index()].children.retain(|c| *c != node);
                if self.focused.is_some_and(|f| self.contains(node, f)) {
                    self.focused = None;
                }
                Ok(())
            }
            None => Err(DomError::Detached(node).into()),
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node.index())
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        let n = self.node_mut(node)?;
        if !n.classes.iter().any(|c| c == class) {
            n.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        self.node_mut(node)?.classes.retain(|c| c != class);
        Ok(())
    }

    fn set_class_name(&mut self, node: NodeId, class_name: &str) -> Result<()> {
        self.node_mut(node)?.classes = class_name
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Ok(())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        if name == "class" {
            return self
                .nodes
                .get(node.index())
                .map(|n| n.classes.join(" "));
        }
        self.nodes
            .get(node.index())
            .and_then(|n| n.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        if name == "class" {
            return self.set_class_name(node, value);
        }
        self.node_mut(node)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes
            .get(node.index())
            .and_then(|n| n.style.get(property).cloned())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()> {
        let style = &mut self.node_mut(node)?.style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    fn text(&self, node: NodeId) -> Option<String> {
        let own = &self.nodes.get(node.index())?.text;
        let mut text = own.clone();
        for child in self.descendants(node) {
            text.push_str(&self.nodes[child.index()].text);
        }
        Some(text)
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        let children = std::mem::take(&mut self.node_mut(node)?.children);
        for child in children {
            self.nodes[child.index()].parent = None;
        }
        self.nodes[node.index()].text = text.to_string();
        Ok(())
    }

    fn value(&self, node: NodeId) -> Option<String> {
        self.nodes.get(node.index()).map(|n| n.value.clone())
    }

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<()> {
        self.node_mut(node)?.value = value.to_string();
        Ok(())
    }

    fn is_disabled(&self, node: NodeId) -> bool {
        self.nodes.get(node.index()).is_some_and(|n| n.disabled)
    }

    fn set_disabled(&mut self, node: NodeId, disabled: bool) -> Result<()> {
        self.node_mut(node)?.disabled = disabled;
        Ok(())
    }

    fn focus(&mut self, node: NodeId) -> Result<()> {
        self.node(node)?;
        if !self.is_attached(node) {
            return Err(DomError::Detached(node).into());
        }
        self.focused = Some(node);
        Ok(())
    }

    fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    fn rect(&self, node: NodeId) -> Option<Rect> {
        if !self.is_attached(node) {
            return None;
        }
        self.nodes.get(node.index()).and_then(|n| n.rect)
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_top = top.clamp(0.0, self.max_scroll());
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn open_window(&mut self, url: &str, name: &str, features: &str) {
        self.opened_windows.push(OpenedWindow {
            url: url.to_string(),
            name: name.to_string(),
            features: features.to_string(),
        });
    }
}

/// Chainable setup for fixture elements.
pub struct ElementBuilder<'a> {
    doc: &'a mut MemoryDocument,
    node: NodeId,
}

impl ElementBuilder<'_> {
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        for part in class.split_whitespace() {
            let _ = self.doc.add_class(self.node, part);
        }
        self
    }

    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        let _ = self.doc.set_attribute(self.node, name, value);
        self
    }

    #[must_use]
    pub fn text(self, text: &str) -> Self {
        self.doc.nodes[self.node.index()].text = text.to_string();
        self
    }

    #[must_use]
    pub fn value(self, value: &str) -> Self {
        self.doc.nodes[self.node.index()].value = value.to_string();
        self
    }

    #[must_use]
    pub fn rect(self, top: f64, height: f64) -> Self {
        self.doc.nodes[self.node.index()].rect = Some(Rect::new(top, height));
        self
    }

    /// Returns the handle of the built element.
    pub fn finish(self) -> NodeId {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn new_document_has_attached_body() {
        let doc = MemoryDocument::new();
        assert!(doc.is_attached(doc.body()));
        assert_eq!(doc.parent(doc.body()), Some(doc.root()));
        assert_eq!(doc.tag(doc.body()).unwrap(), "body");
    }

    #[test]
    fn lookup_by_id_and_class_follows_document_order() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let list = doc.build(body, "ul").id("list").finish();
        let a = doc.build(list, "li").class("item first").finish();
        let b = doc.build(list, "li").class("item").finish();

        assert_eq!(doc.element_by_id("list"), Some(list));
        assert_eq!(doc.elements_by_class("item"), vec![a, b]);
        assert_eq!(doc.descendants_by_class(list, "first"), vec![a]);
        assert_eq!(doc.descendants_by_tag(body, "LI"), vec![a, b]);
    }

    #[test]
    fn removed_nodes_are_not_found() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let panel = doc.build(body, "div").id("panel").class("box").finish();

        doc.remove(panel).unwrap();

        assert!(!doc.is_attached(panel));
        assert_eq!(doc.element_by_id("panel"), None);
        assert!(doc.elements_by_class("box").is_empty());
        assert!(matches!(
            doc.remove(panel),
            Err(Error::Dom(DomError::Detached(_)))
        ));
    }

    #[test]
    fn unknown_node_is_an_error() {
        let mut doc = MemoryDocument::new();
        let ghost = NodeId::from_raw(999);
        assert!(matches!(
            doc.add_class(ghost, "x"),
            Err(Error::Dom(DomError::UnknownNode(_)))
        ));
        assert!(!doc.has_class(ghost, "x"));
    }

    #[test]
    fn append_rejects_cycles() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let outer = doc.build(body, "div").finish();
        let inner = doc.build(outer, "div").finish();
        assert!(doc.append_child(inner, outer).is_err());
    }

    #[test]
    fn class_name_replaces_all_classes() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let icon = doc.build(body, "i").class("fas fa-moon").finish();

        doc.set_class_name(icon, "fas fa-sun").unwrap();

        assert!(doc.has_class(icon, "fa-sun"));
        assert!(!doc.has_class(icon, "fa-moon"));
        assert_eq!(doc.attribute(icon, "class").as_deref(), Some("fas fa-sun"));
    }

    #[test]
    fn empty_style_value_clears_property() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        doc.set_style(body, "overflow", "hidden").unwrap();
        assert_eq!(doc.style(body, "overflow").as_deref(), Some("hidden"));
        doc.set_style(body, "overflow", "").unwrap();
        assert_eq!(doc.style(body, "overflow"), None);
    }

    #[test]
    fn text_concatenates_descendants_and_set_text_drops_children() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let div = doc.build(body, "div").finish();
        let span = doc.build(div, "span").text("hello").finish();
        doc.build(div, "button").text(" x").finish();

        assert_eq!(doc.text(div).as_deref(), Some("hello x"));

        doc.set_text(div, "plain").unwrap();
        assert_eq!(doc.text(div).as_deref(), Some("plain"));
        assert!(!doc.is_attached(span));
    }

    #[test]
    fn scroll_is_clamped_to_document() {
        let mut doc = MemoryDocument::new();
        doc.set_viewport(Viewport {
            width: 1024.0,
            height: 600.0,
        });
        doc.set_scroll_height(2000.0);

        doc.scroll_to(5000.0);
        assert_eq!(doc.scroll_top(), 1400.0);
        doc.scroll_to(-20.0);
        assert_eq!(doc.scroll_top(), 0.0);
    }

    #[test]
    fn removing_focused_subtree_clears_focus() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let form = doc.build(body, "form").finish();
        let input = doc.build(form, "input").finish();

        doc.focus(input).unwrap();
        assert_eq!(doc.focused(), Some(input));
        doc.remove(form).unwrap();
        assert_eq!(doc.focused(), None);
    }
}
