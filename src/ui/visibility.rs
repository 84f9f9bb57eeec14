// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven visibility gates.
//!
//! - [`ScrollThreshold`]: a class present exactly while the window is
//!   scrolled past a fixed offset (header style, back-to-top button)
//! - [`RevealWatcher`]: one-way fade-in of cards, widgets and footer sections
//! - [`LazyImages`]: one-way fade of lazily loaded images
//!
//! All gates are re-evaluated on every scroll; none keeps hysteresis.

use crate::config::{
    BACK_TO_TOP_THRESHOLD_PX, HEADER_SCROLL_THRESHOLD_PX, REVEAL_BOTTOM_MARGIN_PX, REVEAL_RATIO,
};
use crate::dom::{contract as c, Document, NodeId, Rect};
use crate::error::Result;
use crate::ui::design_tokens::motion;
use crate::ui::state::OneShot;

/// Portion of `rect` inside the band `[top, bottom]`, from 0.0 to 1.0.
///
/// A zero-height element counts as fully visible when it lies in the band.
#[must_use]
pub fn intersection_ratio(rect: Rect, top: f64, bottom: f64) -> f64 {
    if rect.height <= 0.0 {
        return if rect.top >= top && rect.top <= bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = rect.bottom().min(bottom) - rect.top.max(top);
    (overlap / rect.height).clamp(0.0, 1.0)
}

/// Toggles `class` on an element depending on the scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct ScrollThreshold {
    element: NodeId,
    class: &'static str,
    threshold: f64,
}

impl ScrollThreshold {
    #[must_use]
    pub fn new(element: NodeId, class: &'static str, threshold: f64) -> Self {
        Self {
            element,
            class,
            threshold,
        }
    }

    #[must_use]
    pub fn is_past(&self, scroll_top: f64) -> bool {
        scroll_top > self.threshold
    }

    /// Projects the threshold state onto the element; returns it.
    pub fn apply(&self, doc: &mut dyn Document) -> Result<bool> {
        let past = self.is_past(doc.scroll_top());
        if past {
            doc.add_class(self.element, self.class)?;
        } else {
            doc.remove_class(self.element, self.class)?;
        }
        Ok(past)
    }

    #[must_use]
    pub fn element(&self) -> NodeId {
        self.element
    }
}

/// Adds `fade-in` to each watched element the first time enough of it is in
/// view. Revealed elements are never watched again.
#[derive(Debug, Clone, Default)]
pub struct RevealWatcher {
    targets: OneShot<NodeId>,
}

impl RevealWatcher {
    pub fn mount(doc: &dyn Document) -> Self {
        let targets = c::REVEAL_TARGETS
            .iter()
            .flat_map(|class| doc.elements_by_class(class));
        Self {
            targets: OneShot::watch(targets),
        }
    }

    /// Reveals every pending target intersecting the viewport; returns how
    /// many were revealed by this pass.
    pub fn evaluate(&mut self, doc: &mut dyn Document) -> Result<usize> {
        let top = doc.scroll_top();
        let bottom = top + doc.viewport().height - REVEAL_BOTTOM_MARGIN_PX;
        let due: Vec<NodeId> = self
            .targets
            .pending()
            .filter(|node| {
                doc.rect(*node)
                    .is_some_and(|rect| intersection_ratio(rect, top, bottom) >= REVEAL_RATIO)
            })
            .collect();

        for node in &due {
            if self.targets.fire(*node) {
                doc.add_class(*node, c::FADE_IN)?;
            }
        }
        Ok(due.len())
    }

    #[must_use]
    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.targets.is_fired(node)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.targets.pending_count()
    }
}

/// Fades `img[loading=lazy]` elements in once they have been scrolled to and
/// have finished loading.
#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    observed: OneShot<NodeId>,
}

impl LazyImages {
    pub fn mount(doc: &dyn Document) -> Self {
        let images = doc
            .descendants_by_tag(doc.root(), "img")
            .into_iter()
            .filter(|img| doc.attribute(*img, "loading").as_deref() == Some("lazy"));
        Self {
            observed: OneShot::watch(images),
        }
    }

    /// Hides each image entering the viewport for the first time, ready for
    /// its fade once loaded.
    pub fn evaluate(&mut self, doc: &mut dyn Document) -> Result<()> {
        let top = doc.scroll_top();
        let bottom = top + doc.viewport().height;
        let entering: Vec<NodeId> = self
            .observed
            .pending()
            .filter(|img| {
                doc.rect(*img)
                    .is_some_and(|rect| intersection_ratio(rect, top, bottom) > 0.0)
            })
            .collect();

        for img in entering {
            self.observed.fire(img);
            doc.set_style(img, "opacity", "0")?;
            doc.set_style(img, "transition", motion::IMAGE_FADE)?;
        }
        Ok(())
    }

    /// Completes the fade of an image that has been observed.
    pub fn loaded(&self, doc: &mut dyn Document, img: NodeId) -> Result<()> {
        if self.observed.is_fired(img) {
            doc.set_style(img, "opacity", "1")?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_observed(&self, img: NodeId) -> bool {
        self.observed.is_fired(img)
    }
}

/// Every scroll gate on the page.
#[derive(Debug, Clone, Default)]
pub struct VisibilityGates {
    header: Option<ScrollThreshold>,
    back_to_top: Option<ScrollThreshold>,
    reveal: RevealWatcher,
    images: LazyImages,
}

impl VisibilityGates {
    pub fn mount(doc: &dyn Document) -> Self {
        Self {
            header: doc
                .element_by_id(c::HEADER)
                .map(|node| ScrollThreshold::new(node, c::SCROLLED, HEADER_SCROLL_THRESHOLD_PX)),
            back_to_top: doc
                .element_by_id(c::BACK_TO_TOP)
                .map(|node| ScrollThreshold::new(node, c::VISIBLE, BACK_TO_TOP_THRESHOLD_PX)),
            reveal: RevealWatcher::mount(doc),
            images: LazyImages::mount(doc),
        }
    }

    /// Re-evaluates every gate against the current scroll position.
    pub fn on_scroll(&mut self, doc: &mut dyn Document) -> Result<()> {
        for gate in [self.header, self.back_to_top].into_iter().flatten() {
            gate.apply(doc)?;
        }
        self.reveal.evaluate(doc)?;
        self.images.evaluate(doc)
    }

    pub fn image_loaded(&self, doc: &mut dyn Document, img: NodeId) -> Result<()> {
        self.images.loaded(doc, img)
    }

    #[must_use]
    pub fn back_to_top(&self) -> Option<NodeId> {
        self.back_to_top.map(|gate| gate.element())
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealWatcher {
        &self.reveal
    }

    #[must_use]
    pub fn images(&self) -> &LazyImages {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{sample, MemoryDocument};

    fn scroll(doc: &mut MemoryDocument, gates: &mut VisibilityGates, top: f64) {
        doc.scroll_to(top);
        gates.on_scroll(doc).unwrap();
    }

    #[test]
    fn ratio_handles_partial_and_degenerate_boxes() {
        let rect = Rect::new(100.0, 100.0);
        assert_eq!(intersection_ratio(rect, 0.0, 150.0), 0.5);
        assert_eq!(intersection_ratio(rect, 300.0, 400.0), 0.0);
        assert_eq!(intersection_ratio(Rect::new(50.0, 0.0), 0.0, 100.0), 1.0);
        assert_eq!(intersection_ratio(Rect::new(500.0, 0.0), 0.0, 100.0), 0.0);
    }

    #[test]
    fn header_threshold_has_no_hysteresis() {
        let mut doc = sample::news_page();
        let mut gates = VisibilityGates::mount(&doc);
        let header = doc.element_by_id(c::HEADER).unwrap();

        let mut seen = Vec::new();
        for top in [0.0, 150.0, 50.0] {
            scroll(&mut doc, &mut gates, top);
            seen.push(doc.has_class(header, c::SCROLLED));
        }
        assert_eq!(seen, vec![false, true, false]);
    }

    #[test]
    fn back_to_top_visible_strictly_past_threshold() {
        let mut doc = sample::news_page();
        let mut gates = VisibilityGates::mount(&doc);
        let button = gates.back_to_top().unwrap();

        scroll(&mut doc, &mut gates, 300.0);
        assert!(!doc.has_class(button, c::VISIBLE));
        scroll(&mut doc, &mut gates, 301.0);
        assert!(doc.has_class(button, c::VISIBLE));
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut doc = sample::news_page();
        let mut gates = VisibilityGates::mount(&doc);
        let first_card = doc.elements_by_class(c::NEWS_CARD)[0];

        scroll(&mut doc, &mut gates, 0.0);
        assert!(!doc.has_class(first_card, c::FADE_IN));

        scroll(&mut doc, &mut gates, 400.0);
        assert!(doc.has_class(first_card, c::FADE_IN));
        assert!(gates.reveal().is_revealed(first_card));

        scroll(&mut doc, &mut gates, 0.0);
        assert!(doc.has_class(first_card, c::FADE_IN));
    }

    #[test]
    fn reveal_respects_bottom_margin() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        // Top edge 20px above the viewport bottom: inside the margin
        let card = doc
            .build(body, "div")
            .class(c::NEWS_CARD)
            .rect(780.0, 100.0)
            .finish();
        doc.set_scroll_height(2000.0);
        let mut watcher = RevealWatcher::mount(&doc);

        assert_eq!(watcher.evaluate(&mut doc).unwrap(), 0);
        doc.scroll_to(50.0);
        assert_eq!(watcher.evaluate(&mut doc).unwrap(), 1);
        assert!(doc.has_class(card, c::FADE_IN));
        assert_eq!(watcher.pending_count(), 0);
    }

    #[test]
    fn lazy_image_fades_in_after_load() {
        let mut doc = sample::news_page();
        let mut gates = VisibilityGates::mount(&doc);
        let img = doc.descendants_by_tag(doc.root(), "img")[0];

        // Load before intersection leaves the image untouched
        gates.image_loaded(&mut doc, img).unwrap();
        assert_eq!(doc.style(img, "opacity"), None);

        scroll(&mut doc, &mut gates, 400.0);
        assert_eq!(doc.style(img, "opacity").as_deref(), Some("0"));
        assert_eq!(
            doc.style(img, "transition").as_deref(),
            Some(motion::IMAGE_FADE)
        );

        gates.image_loaded(&mut doc, img).unwrap();
        assert_eq!(doc.style(img, "opacity").as_deref(), Some("1"));

        // Observation is one-shot
        scroll(&mut doc, &mut gates, 0.0);
        scroll(&mut doc, &mut gates, 400.0);
        assert_eq!(doc.style(img, "opacity").as_deref(), Some("1"));
    }

    #[test]
    fn missing_elements_leave_gates_inert() {
        let mut doc = MemoryDocument::new();
        let mut gates = VisibilityGates::mount(&doc);
        doc.scroll_to(500.0);
        gates.on_scroll(&mut doc).unwrap();
        assert!(gates.back_to_top().is_none());
    }
}
