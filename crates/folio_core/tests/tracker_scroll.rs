use folio_core::{
    locate_active_section, ActiveSectionTracker, FixedLayout, FrameRequest, FrameScheduler,
    ListenerError, ListenerHost, NavigationItem, Page, SectionBounds, Viewport, NAV_OFFSET_PX,
};
use std::cell::Cell;

#[derive(Default)]
struct CountingScheduler {
    requests: Cell<u32>,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&self) -> bool {
        self.requests.set(self.requests.get() + 1);
        true
    }
}

struct NoopHost;

impl ListenerHost for NoopHost {
    type Registration = ();

    fn attach(&mut self) -> Result<(), ListenerError> {
        Ok(())
    }

    fn detach(&mut self, _registration: ()) {}
}

fn scenario_layout() -> FixedLayout {
    FixedLayout::contiguous([800.0, 800.0, 800.0, 800.0])
}

#[test]
fn scroll_to_750_activates_about() {
    let layout = scenario_layout();
    let scheduler = CountingScheduler::default();
    let mut page: Page<&FixedLayout, NoopHost> = Page::new(&layout);

    layout.set_scroll_offset(750.0);
    page.handle_scroll(&scheduler);
    assert_eq!(page.handle_frame(), Some(NavigationItem::About));
    assert_eq!(page.active_section(), Some(NavigationItem::About));
}

#[test]
fn every_offset_maps_to_the_section_containing_probe() {
    let layout = scenario_layout();
    let mut tracker = ActiveSectionTracker::new();

    let mut scroll_y = 0.0;
    while scroll_y + NAV_OFFSET_PX < layout.document_height() {
        layout.set_scroll_offset(scroll_y);
        let expected = NavigationItem::ALL
            .into_iter()
            .find(|section| {
                layout
                    .section_bounds(*section)
                    .expect("every section is laid out")
                    .contains(scroll_y + NAV_OFFSET_PX)
            })
            .expect("contiguous layout covers the probe");
        assert_eq!(tracker.evaluate(&layout), Some(expected), "scroll_y={scroll_y}");
        scroll_y += 25.0;
    }
}

#[test]
fn section_boundaries_switch_exactly_at_offset() {
    let layout = scenario_layout();
    assert_eq!(
        locate_active_section(699.999, NAV_OFFSET_PX, &layout),
        Some(NavigationItem::Home)
    );
    assert_eq!(
        locate_active_section(2300.0, NAV_OFFSET_PX, &layout),
        Some(NavigationItem::Contact)
    );
    assert_eq!(locate_active_section(3100.0, NAV_OFFSET_PX, &layout), None);
}

#[test]
fn burst_of_scroll_events_evaluates_once_per_frame() {
    let layout = scenario_layout();
    let scheduler = CountingScheduler::default();
    let mut page: Page<&FixedLayout, NoopHost> = Page::new(&layout);

    assert_eq!(page.handle_scroll(&scheduler), FrameRequest::Scheduled);
    for step in 1..=20 {
        layout.set_scroll_offset(f64::from(step) * 90.0);
        assert_eq!(page.handle_scroll(&scheduler), FrameRequest::AlreadyPending);
    }
    assert_eq!(scheduler.requests.get(), 1);

    // Evaluation reads the latest snapshot: 1800 + 100 lands in projects.
    assert_eq!(page.handle_frame(), Some(NavigationItem::Projects));
    assert_eq!(page.tracker().evaluations(), 1);

    // A stray second frame evaluates nothing.
    assert_eq!(page.handle_frame(), None);
    assert_eq!(page.tracker().evaluations(), 1);

    // The next burst gets a fresh frame.
    assert_eq!(page.handle_scroll(&scheduler), FrameRequest::Scheduled);
    assert_eq!(scheduler.requests.get(), 2);
}

#[test]
fn gap_keeps_previous_active_section() {
    let mut layout = FixedLayout::new();
    layout.set_section(NavigationItem::Home, SectionBounds::new(0.0, 500.0));
    layout.set_section(NavigationItem::About, SectionBounds::new(700.0, 500.0));
    let scheduler = CountingScheduler::default();
    let mut page: Page<&FixedLayout, NoopHost> = Page::new(&layout);

    layout.set_scroll_offset(100.0);
    page.handle_scroll(&scheduler);
    assert_eq!(page.handle_frame(), Some(NavigationItem::Home));

    layout.set_scroll_offset(500.0);
    page.handle_scroll(&scheduler);
    assert_eq!(page.handle_frame(), None);
    assert_eq!(page.active_section(), Some(NavigationItem::Home));
}

#[test]
fn bounds_are_read_live_on_each_evaluation() {
    let mut layout = scenario_layout();
    let mut tracker = ActiveSectionTracker::new();
    layout.set_scroll_offset(750.0);
    assert_eq!(tracker.evaluate(&layout), Some(NavigationItem::About));

    // Hero grows after an image loads; same scroll offset now sits in home.
    layout.set_section(NavigationItem::Home, SectionBounds::new(0.0, 1000.0));
    layout.set_section(NavigationItem::About, SectionBounds::new(1000.0, 800.0));
    assert_eq!(tracker.evaluate(&layout), Some(NavigationItem::Home));
}
