use folio_core::{
    FixedLayout, FrameRequest, FrameScheduler, ListenerError, ListenerHost, MountOutcome,
    NavigationItem, Page,
};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct Listeners {
    active: Cell<u32>,
    attach_calls: Cell<u32>,
    detach_calls: Cell<u32>,
}

struct RecordingHost {
    listeners: Rc<Listeners>,
    fail: bool,
}

impl RecordingHost {
    fn new(listeners: &Rc<Listeners>) -> Self {
        Self {
            listeners: Rc::clone(listeners),
            fail: false,
        }
    }
}

impl ListenerHost for RecordingHost {
    type Registration = u32;

    fn attach(&mut self) -> Result<u32, ListenerError> {
        if self.fail {
            return Err(ListenerError::AttachFailed {
                event: "scroll".to_string(),
                message: "denied".to_string(),
            });
        }
        self.listeners.attach_calls.set(self.listeners.attach_calls.get() + 1);
        self.listeners.active.set(self.listeners.active.get() + 1);
        Ok(self.listeners.attach_calls.get())
    }

    fn detach(&mut self, _registration: u32) {
        self.listeners.detach_calls.set(self.listeners.detach_calls.get() + 1);
        self.listeners.active.set(self.listeners.active.get() - 1);
    }
}

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

/// Scheduler whose host refuses frames until `accept` is set.
#[derive(Default)]
struct RefusingScheduler {
    accept: Cell<bool>,
    requests: Cell<u32>,
}

impl FrameScheduler for RefusingScheduler {
    fn request_frame(&self) -> bool {
        self.requests.set(self.requests.get() + 1);
        self.accept.get()
    }
}

fn new_page() -> Page<FixedLayout, RecordingHost> {
    Page::new(FixedLayout::contiguous([800.0; 4]))
}

#[test]
fn mount_attaches_once_and_schedules_first_evaluation() {
    let listeners = Rc::new(Listeners::default());
    let scheduler = CountingScheduler::default();
    let mut page = new_page();

    assert_eq!(
        page.mount(RecordingHost::new(&listeners), &scheduler).expect("mount"),
        MountOutcome::Mounted
    );
    assert!(page.is_mounted());
    assert!(page.is_visible());
    assert_eq!(scheduler.requests.get(), 1);
    assert_eq!(page.active_section(), None);

    assert_eq!(page.handle_frame(), Some(NavigationItem::Home));
    assert_eq!(page.active_section(), Some(NavigationItem::Home));
}

#[test]
fn second_mount_does_not_duplicate_listeners() {
    let listeners = Rc::new(Listeners::default());
    let scheduler = CountingScheduler::default();
    let mut page = new_page();

    page.mount(RecordingHost::new(&listeners), &scheduler).expect("first mount");
    assert_eq!(
        page.mount(RecordingHost::new(&listeners), &scheduler).expect("second mount"),
        MountOutcome::AlreadyMounted
    );
    assert_eq!(listeners.active.get(), 1);
    assert_eq!(listeners.attach_calls.get(), 1);
}

#[test]
fn unmount_removes_listener_and_pending_frame() {
    let listeners = Rc::new(Listeners::default());
    let scheduler = CountingScheduler::default();
    let mut page = new_page();
    page.mount(RecordingHost::new(&listeners), &scheduler).expect("mount");

    assert!(page.unmount());
    assert_eq!(listeners.active.get(), 0);
    assert_eq!(listeners.detach_calls.get(), 1);
    assert!(!page.tracker().is_pending());

    // A frame that was already queued by the browser does no work.
    assert_eq!(page.handle_frame(), None);
    assert_eq!(page.tracker().evaluations(), 0);

    assert!(!page.unmount());
    assert_eq!(listeners.detach_calls.get(), 1);
}

#[test]
fn remount_after_unmount_attaches_again() {
    let listeners = Rc::new(Listeners::default());
    let scheduler = CountingScheduler::default();
    let mut page = new_page();

    page.mount(RecordingHost::new(&listeners), &scheduler).expect("mount");
    page.unmount();
    assert_eq!(
        page.mount(RecordingHost::new(&listeners), &scheduler).expect("remount"),
        MountOutcome::Mounted
    );
    assert_eq!(listeners.active.get(), 1);
    assert_eq!(listeners.attach_calls.get(), 2);
}

#[test]
fn dropping_mounted_page_detaches() {
    let listeners = Rc::new(Listeners::default());
    let scheduler = CountingScheduler::default();
    {
        let mut page = new_page();
        page.mount(RecordingHost::new(&listeners), &scheduler).expect("mount");
        assert_eq!(listeners.active.get(), 1);
    }
    assert_eq!(listeners.active.get(), 0);
}

#[test]
fn failed_mount_leaves_page_unmounted() {
    let listeners = Rc::new(Listeners::default());
    let scheduler = CountingScheduler::default();
    let mut page = new_page();
    let mut host = RecordingHost::new(&listeners);
    host.fail = true;

    let err = page.mount(host, &scheduler).expect_err("attach failure propagates");
    assert!(err.to_string().contains("scroll"));
    assert!(!page.is_mounted());
    assert!(!page.is_visible());
    assert_eq!(scheduler.requests.get(), 0);
    assert_eq!(listeners.active.get(), 0);
}

#[test]
fn unmount_keeps_page_visible() {
    let listeners = Rc::new(Listeners::default());
    let scheduler = CountingScheduler::default();
    let mut page = new_page();
    page.mount(RecordingHost::new(&listeners), &scheduler).expect("mount");
    page.handle_frame();

    assert!(page.unmount());
    assert!(page.is_visible());
    assert!(page.state().is_visible());
    assert_eq!(page.active_section(), Some(NavigationItem::Home));
}

#[test]
fn refused_initial_frame_still_mounts_and_recovers_on_scroll() {
    let listeners = Rc::new(Listeners::default());
    let scheduler = RefusingScheduler::default();
    let mut page = new_page();

    assert_eq!(
        page.mount(RecordingHost::new(&listeners), &scheduler).expect("mount"),
        MountOutcome::Mounted
    );
    assert!(page.is_mounted());
    assert!(page.is_visible());
    assert_eq!(scheduler.requests.get(), 1);
    assert!(!page.tracker().is_pending());
    assert_eq!(page.handle_frame(), None);

    scheduler.accept.set(true);
    page.viewport().set_scroll_offset(1700.0);
    assert_eq!(page.handle_scroll(&scheduler), FrameRequest::Scheduled);
    assert_eq!(page.handle_frame(), Some(NavigationItem::Projects));
}
