// SPDX-License-Identifier: MPL-2.0
//! Document port: the element tree the widgets read from and project into.
//!
//! Widgets never own markup. They locate the elements they need once at
//! mount time, keep [`NodeId`] handles, and write class/attribute/style
//! changes through the [`Document`] trait whenever their state changes.
//!
//! # Implementations
//!
//! - [`MemoryDocument`]: arena-backed tree used by tests, benches and the
//!   `news-portal` driver binary
//! - [`sample::news_page`]: fixture carrying every element the widgets expect
//!
//! # Design Notes
//!
//! - Lookups return `Option`/`Vec` so a missing element turns the dependent
//!   widget into a no-op instead of an error
//! - Mutations return [`crate::error::Result`]; a stale handle is a runtime
//!   fault surfaced by the app's top-level error path

pub mod contract;
mod memory;
pub mod sample;

pub use memory::{ElementBuilder, MemoryDocument, OpenedWindow};

use crate::error::Result;
use std::fmt;

/// Opaque handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw arena index.
    #[must_use]
    pub fn from_raw(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Vertical extent of an element in document coordinates (px).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Size of the visible window area (px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// The element tree and window surface consumed by the widgets.
pub trait Document {
    /// The document element (`<html>`).
    fn root(&self) -> NodeId;

    /// The `<body>` element.
    fn body(&self) -> NodeId;

    /// Finds an attached element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// All attached elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<NodeId>;

    /// Descendants of `ancestor` carrying `class`, in document order.
    fn descendants_by_class(&self, ancestor: NodeId, class: &str) -> Vec<NodeId>;

    /// Descendants of `ancestor` with the given tag name, in document order.
    fn descendants_by_tag(&self, ancestor: NodeId, tag: &str) -> Vec<NodeId>;

    fn tag(&self, node: NodeId) -> Result<&str>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Returns true when `node` is reachable from the root.
    fn is_attached(&self, node: NodeId) -> bool;

    /// Inclusive containment: a node contains itself.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Detaches `node` (and its subtree) from its parent.
    fn remove(&mut self, node: NodeId) -> Result<()>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<()>;

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<()>;

    /// Replaces the whole class list with the space-separated `class_name`.
    fn set_class_name(&mut self, node: NodeId, class_name: &str) -> Result<()>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()>;

    /// Inline style property, `None` when unset.
    fn style(&self, node: NodeId, property: &str) -> Option<String>;

    /// Sets an inline style property; an empty value clears it.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()>;

    /// Text content of the node and its descendants.
    fn text(&self, node: NodeId) -> Option<String>;

    /// Replaces the node's children with a single text run.
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()>;

    /// Current value of a form control.
    fn value(&self, node: NodeId) -> Option<String>;

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<()>;

    fn is_disabled(&self, node: NodeId) -> bool;

    fn set_disabled(&mut self, node: NodeId, disabled: bool) -> Result<()>;

    fn focus(&mut self, node: NodeId) -> Result<()>;

    fn focused(&self) -> Option<NodeId>;

    /// Layout box of an attached element, if it has one.
    fn rect(&self, node: NodeId) -> Option<Rect>;

    fn scroll_top(&self) -> f64;

    /// Scrolls the window, clamped to the scrollable range.
    fn scroll_to(&mut self, top: f64);

    fn scroll_height(&self) -> f64;

    fn viewport(&self) -> Viewport;

    /// Requests a new browsing window (popup).
    fn open_window(&mut self, url: &str, name: &str, features: &str);
}
