//! Scroll-driven active-section tracking.
//!
//! # Responsibility
//! - Map a scroll offset to the section currently under the navigation bar.
//! - Coalesce scroll/resize bursts into one evaluation per frame.
//!
//! # Invariants
//! - Sections are probed in `NavigationItem::ALL` order; the first match wins.
//! - A probe that lands in no section yields `None`; callers keep the
//!   previous value.
//! - Bounds are re-read from the viewport on every evaluation.

use crate::layout::geometry::Viewport;
use crate::model::section::NavigationItem;
use crate::tracker::frame::{FrameGate, FrameRequest, FrameScheduler};
use log::{trace, warn};

/// Approximate height of the fixed navigation bar, in CSS pixels.
pub const NAV_OFFSET_PX: f64 = 100.0;

/// Returns the first section whose bounds contain `scroll_y + offset`.
pub fn locate_active_section(
    scroll_y: f64,
    offset: f64,
    viewport: &impl Viewport,
) -> Option<NavigationItem> {
    let probe = scroll_y + offset;
    NavigationItem::ALL.into_iter().find(|section| {
        viewport
            .section_bounds(*section)
            .is_some_and(|bounds| bounds.contains(probe))
    })
}

/// Stateful tracker owning the frame gate.
#[derive(Debug)]
pub struct ActiveSectionTracker {
    offset: f64,
    gate: FrameGate,
    evaluations: u64,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::with_offset(NAV_OFFSET_PX)
    }
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(offset: f64) -> Self {
        Self {
            offset,
            gate: FrameGate::new(),
            evaluations: 0,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Handles one raw scroll or resize event.
    ///
    /// Only the first event of a frame reaches `scheduler`.
    pub fn on_scroll_event(&mut self, scheduler: &impl FrameScheduler) -> FrameRequest {
        let request = self.gate.request();
        if request == FrameRequest::Scheduled && !scheduler.request_frame() {
            self.gate.cancel();
            warn!("event=tracker_schedule module=tracker status=error reason=frame_refused");
            return FrameRequest::Failed;
        }
        request
    }

    /// Runs the evaluation scheduled by `on_scroll_event`.
    ///
    /// A frame that arrives after `cancel_pending` does not evaluate.
    pub fn on_frame(&mut self, viewport: &impl Viewport) -> Option<NavigationItem> {
        if !self.gate.take() {
            trace!("event=tracker_frame module=tracker status=skipped reason=not_pending");
            return None;
        }
        self.evaluate(viewport)
    }

    /// Evaluates immediately, bypassing the frame gate.
    pub fn evaluate(&mut self, viewport: &impl Viewport) -> Option<NavigationItem> {
        self.evaluations += 1;
        let scroll_y = viewport.scroll_offset();
        let located = locate_active_section(scroll_y, self.offset, viewport);
        trace!(
            "event=tracker_evaluate module=tracker status=ok scroll_y={} section={}",
            scroll_y,
            located.map_or("none", NavigationItem::as_str)
        );
        located
    }

    pub fn cancel_pending(&mut self) {
        self.gate.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Number of evaluations run so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}
