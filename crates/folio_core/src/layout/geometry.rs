//! Section geometry and the viewport seam.
//!
//! # Responsibility
//! - Describe section bounds in document scroll coordinates.
//! - Abstract element lookup, geometry queries and smooth scrolling behind
//!   `Viewport`, so page logic runs without a rendering surface.
//!
//! # Invariants
//! - Bounds are half-open: `[top, top + height)`.
//! - Implementations read live layout on every call; nothing here caches.

use crate::model::section::NavigationItem;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Vertical extent of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    /// Distance from document top, in CSS pixels.
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns whether `y` lies inside `[top, bottom)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Geometry and scrolling collaborator supplied by the render target.
pub trait Viewport {
    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;

    /// Live bounds of a section, or `None` when its element is absent.
    fn section_bounds(&self, section: NavigationItem) -> Option<SectionBounds>;

    /// Starts bringing a section into view.
    ///
    /// Returns `false` without side effects when the element is absent.
    /// The scroll may still be animating when this returns.
    fn scroll_into_view(&self, section: NavigationItem) -> bool;
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn section_bounds(&self, section: NavigationItem) -> Option<SectionBounds> {
        (**self).section_bounds(section)
    }

    fn scroll_into_view(&self, section: NavigationItem) -> bool {
        (**self).scroll_into_view(section)
    }
}

/// Synthetic viewport with caller-provided bounds.
///
/// `scroll_into_view` records the request but leaves the scroll offset
/// untouched, mirroring a smooth scroll that has not finished yet.
#[derive(Debug, Default)]
pub struct FixedLayout {
    sections: BTreeMap<NavigationItem, SectionBounds>,
    scroll_offset: Cell<f64>,
    scroll_requests: RefCell<Vec<NavigationItem>>,
}

impl FixedLayout {
    /// Creates an empty layout with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stacks the four sections back to back from `y = 0`.
    ///
    /// `heights` follows `NavigationItem::ALL` order.
    pub fn contiguous(heights: [f64; 4]) -> Self {
        let mut layout = Self::new();
        let mut top = 0.0;
        for (section, height) in NavigationItem::ALL.into_iter().zip(heights) {
            layout.set_section(section, SectionBounds::new(top, height));
            top += height;
        }
        layout
    }

    pub fn set_section(&mut self, section: NavigationItem, bounds: SectionBounds) {
        self.sections.insert(section, bounds);
    }

    /// Drops a section, simulating a missing element.
    pub fn remove_section(&mut self, section: NavigationItem) {
        self.sections.remove(&section);
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        self.scroll_offset.set(offset);
    }

    /// Total document height covered by sections.
    pub fn document_height(&self) -> f64 {
        self.sections
            .values()
            .map(SectionBounds::bottom)
            .fold(0.0, f64::max)
    }

    /// Sections passed to `scroll_into_view`, oldest first.
    pub fn scroll_requests(&self) -> Vec<NavigationItem> {
        self.scroll_requests.borrow().clone()
    }

    /// Jumps to the most recent scroll target, as if the animation finished.
    pub fn finish_scroll(&self) {
        let target = self.scroll_requests.borrow().last().copied();
        if let Some(bounds) = target.and_then(|section| self.sections.get(&section)) {
            self.scroll_offset.set(bounds.top);
        }
    }
}

impl Viewport for FixedLayout {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    fn section_bounds(&self, section: NavigationItem) -> Option<SectionBounds> {
        self.sections.get(&section).copied()
    }

    fn scroll_into_view(&self, section: NavigationItem) -> bool {
        if !self.sections.contains_key(&section) {
            return false;
        }
        self.scroll_requests.borrow_mut().push(section);
        true
    }
}
