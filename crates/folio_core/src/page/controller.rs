//! Page controller: transient state plus the operations that mutate it.
//!
//! # Responsibility
//! - Own `active_section`, `is_visible` and the mobile menu.
//! - Wire scroll events through the tracker and apply its results.
//! - Implement smooth-scroll navigation and the mount/unmount lifecycle.
//!
//! # Invariants
//! - Navigation to a missing target changes no state.
//! - Successful navigation sets the active section synchronously and closes
//!   the mobile menu.
//! - At most one listener subscription is live per page.
//! - A tracker miss (gap, missing section) keeps the previous active section.

use crate::layout::geometry::Viewport;
use crate::model::section::{parse_navigation_item, NavigationItem};
use crate::page::menu::MobileMenu;
use crate::page::subscription::{ListenerError, ListenerHost, ScrollSubscription};
use crate::tracker::active::ActiveSectionTracker;
use crate::tracker::frame::{FrameRequest, FrameScheduler};
use log::{debug, info, warn};

/// Snapshot of everything the renderer needs besides content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    active_section: Option<NavigationItem>,
    is_visible: bool,
    menu: MobileMenu,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the first evaluation or navigation.
    pub fn active_section(&self) -> Option<NavigationItem> {
        self.active_section
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Builder used by static rendering, where no page is mounted.
    pub fn with_active_section(mut self, section: Option<NavigationItem>) -> Self {
        self.active_section = section;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    pub fn with_mobile_menu_open(mut self, open: bool) -> Self {
        if open != self.menu.is_open() {
            self.menu.toggle();
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// A subscription was already live; nothing new was attached.
    AlreadyMounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Navigated(NavigationItem),
    /// Unknown id or absent element; state untouched.
    MissingTarget,
}

/// The single page component.
pub struct Page<V: Viewport, H: ListenerHost> {
    viewport: V,
    state: PageState,
    tracker: ActiveSectionTracker,
    subscription: Option<ScrollSubscription<H>>,
}

impl<V: Viewport, H: ListenerHost> Page<V, H> {
    pub fn new(viewport: V) -> Self {
        Self::with_tracker(viewport, ActiveSectionTracker::new())
    }

    pub fn with_tracker(viewport: V, tracker: ActiveSectionTracker) -> Self {
        Self {
            viewport,
            state: PageState::new(),
            tracker,
            subscription: None,
        }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn active_section(&self) -> Option<NavigationItem> {
        self.state.active_section
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.state.menu.is_open()
    }

    pub fn tracker(&self) -> &ActiveSectionTracker {
        &self.tracker
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Attaches listeners and schedules the first evaluation.
    ///
    /// # Contract
    /// - Idempotent: a second call while mounted attaches nothing.
    /// - Sets `is_visible` on first successful mount.
    ///
    /// # Errors
    /// - Returns host attach errors; the page stays unmounted.
    pub fn mount(
        &mut self,
        host: H,
        scheduler: &impl FrameScheduler,
    ) -> Result<MountOutcome, ListenerError> {
        if self.subscription.is_some() {
            debug!("event=page_mount module=page status=skipped reason=already_mounted");
            return Ok(MountOutcome::AlreadyMounted);
        }

        self.subscription = Some(ScrollSubscription::attach(host)?);
        self.state.is_visible = true;
        if self.tracker.on_scroll_event(scheduler) == FrameRequest::Failed {
            warn!("event=page_mount module=page status=degraded reason=initial_frame_refused");
        }
        info!("event=page_mount module=page status=ok");
        Ok(MountOutcome::Mounted)
    }

    /// Detaches listeners and drops any pending evaluation.
    ///
    /// Returns `false` when the page was not mounted.
    pub fn unmount(&mut self) -> bool {
        self.tracker.cancel_pending();
        match self.subscription.take() {
            Some(subscription) => {
                subscription.dispose();
                info!("event=page_unmount module=page status=ok");
                true
            }
            None => false,
        }
    }

    /// Entry point for raw scroll and resize events.
    pub fn handle_scroll(&mut self, scheduler: &impl FrameScheduler) -> FrameRequest {
        self.tracker.on_scroll_event(scheduler)
    }

    /// Entry point for the repaint callback.
    ///
    /// Returns the section now active when the evaluation matched one.
    pub fn handle_frame(&mut self) -> Option<NavigationItem> {
        let located = self.tracker.on_frame(&self.viewport)?;
        self.state.active_section = Some(located);
        Some(located)
    }

    /// Navigates by string id; unknown ids are a silent no-op.
    pub fn navigate(&mut self, id: &str) -> NavigationOutcome {
        match parse_navigation_item(id) {
            Ok(section) => self.navigate_to(section),
            Err(err) => {
                debug!("event=navigate module=page status=skipped reason=unknown_target error={err}");
                NavigationOutcome::MissingTarget
            }
        }
    }

    /// Scrolls to `section` and marks it active without waiting for the
    /// scroll animation.
    pub fn navigate_to(&mut self, section: NavigationItem) -> NavigationOutcome {
        if !self.viewport.scroll_into_view(section) {
            debug!(
                "event=navigate module=page status=skipped reason=missing_element section={}",
                section
            );
            return NavigationOutcome::MissingTarget;
        }

        self.state.active_section = Some(section);
        self.state.menu.close();
        debug!("event=navigate module=page status=ok section={}", section);
        NavigationOutcome::Navigated(section)
    }

    /// Flips the mobile menu and returns the new state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.state.menu.toggle()
    }
}
