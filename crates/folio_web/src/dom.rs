//! DOM-backed implementations of the core page seams.
//!
//! # Responsibility
//! - `DomViewport`: live geometry and smooth scrolling via `web-sys`.
//! - `RafScheduler`: frame requests through `requestAnimationFrame`.
//! - `WindowListeners`: scroll/resize/click listener registration.
//! - Patch the DOM fragments that depend on page state.
//!
//! # Invariants
//! - Closures hold the page through `Weak`; they never keep it alive.
//! - No code path here panics; DOM failures are logged and skipped.

use folio_core::render::markup::{DATA_NAV_ATTR, MENU_TOGGLE_ID, MOBILE_MENU_ID, NAV_LINKS_ID};
use folio_core::{
    render_mobile_menu, render_nav_links, FrameScheduler, ListenerError, ListenerHost,
    NavigationItem, Page, PageState, SectionBounds, Viewport,
};
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Page type driven by the browser bridge.
pub type DomPage = Page<DomViewport, WindowListeners>;

/// Shared handle kept by the bridge.
pub type SharedPage = Rc<RefCell<DomPage>>;

const HERO_CONTENT_SELECTOR: &str = "#home .hero-content";
const NAV_TARGET_SELECTOR: &str = "[data-nav]";
const VISIBLE_CLASS: &str = "is-visible";

pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn section_element(&self, section: NavigationItem) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(section.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_bounds(&self, section: NavigationItem) -> Option<SectionBounds> {
        let element = self.section_element(section)?;
        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    fn scroll_into_view(&self, section: NavigationItem) -> bool {
        let Some(element) = self.section_element(section) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Frame scheduler bound to one page.
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut()>,
    handle: Rc<Cell<Option<i32>>>,
}

impl RafScheduler {
    /// Builds the scheduler. The frame callback holds both the page and the
    /// scheduler weakly.
    pub fn new(window: Window, page: Weak<RefCell<DomPage>>) -> Rc<Self> {
        Rc::new_cyclic(|scheduler: &Weak<RafScheduler>| {
            let handle = Rc::new(Cell::new(None));
            let frame_handle = Rc::clone(&handle);
            let retry = scheduler.clone();
            let callback = Closure::<dyn FnMut()>::new(move || {
                frame_handle.set(None);
                let Some(page) = page.upgrade() else {
                    return;
                };
                let ran = run_frame(&page, |page| {
                    let before = page.state();
                    page.handle_frame();
                    sync_dom(page.viewport().document(), before, page.state());
                });
                if !ran {
                    // The gate is still pending; the evaluation moves to the next frame.
                    warn!("event=tracker_frame module=web status=deferred reason=page_busy");
                    if let Some(scheduler) = retry.upgrade() {
                        scheduler.request_frame();
                    }
                }
            });
            Self {
                window,
                callback,
                handle,
            }
        })
    }

    /// Cancels the queued frame, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                warn!("event=frame_cancel module=web status=error error={err:?}");
            }
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self) -> bool {
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(id) => {
                self.handle.set(Some(id));
                true
            }
            Err(err) => {
                warn!("event=frame_request module=web status=error error={err:?}");
                false
            }
        }
    }
}

/// Closures kept alive while listeners are attached.
pub struct WindowRegistration {
    on_viewport_change: Closure<dyn FnMut()>,
    on_click: Closure<dyn FnMut(Event)>,
}

/// Listener host over `window` (scroll, resize) and `document` (click).
pub struct WindowListeners {
    window: Window,
    document: Document,
    page: Weak<RefCell<DomPage>>,
    scheduler: Rc<RafScheduler>,
}

impl WindowListeners {
    pub fn new(
        window: Window,
        document: Document,
        page: Weak<RefCell<DomPage>>,
        scheduler: Rc<RafScheduler>,
    ) -> Self {
        Self {
            window,
            document,
            page,
            scheduler,
        }
    }

    fn remove_all(&self, registration: &WindowRegistration) {
        let viewport_change = registration.on_viewport_change.as_ref().unchecked_ref();
        for event in ["scroll", "resize"] {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event, viewport_change)
            {
                warn!("event=listener_detach module=web status=error target={event} error={err:?}");
            }
        }
        if let Err(err) = self
            .document
            .remove_event_listener_with_callback("click", registration.on_click.as_ref().unchecked_ref())
        {
            warn!("event=listener_detach module=web status=error target=click error={err:?}");
        }
    }
}

impl ListenerHost for WindowListeners {
    type Registration = WindowRegistration;

    fn attach(&mut self) -> Result<WindowRegistration, ListenerError> {
        let page = self.page.clone();
        let scheduler = Rc::clone(&self.scheduler);
        let on_viewport_change = Closure::<dyn FnMut()>::new(move || {
            let Some(page) = page.upgrade() else {
                return;
            };
            if let Ok(mut page) = page.try_borrow_mut() {
                page.handle_scroll(&*scheduler);
            };
        });

        let page = self.page.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(page) = page.upgrade() {
                handle_click(&page, &event);
            }
        });

        let registration = WindowRegistration {
            on_viewport_change,
            on_click,
        };

        let viewport_change = registration.on_viewport_change.as_ref().unchecked_ref();
        let attached = ["scroll", "resize"]
            .into_iter()
            .try_for_each(|event| {
                self.window
                    .add_event_listener_with_callback(event, viewport_change)
                    .map_err(|err| (event, err))
            })
            .and_then(|()| {
                self.document
                    .add_event_listener_with_callback(
                        "click",
                        registration.on_click.as_ref().unchecked_ref(),
                    )
                    .map_err(|err| ("click", err))
            });

        if let Err((event, err)) = attached {
            self.remove_all(&registration);
            return Err(ListenerError::AttachFailed {
                event: event.to_string(),
                message: format!("{err:?}"),
            });
        }
        Ok(registration)
    }

    fn detach(&mut self, registration: WindowRegistration) {
        self.scheduler.cancel();
        self.remove_all(&registration);
        debug!("event=listener_detach module=web status=ok");
    }
}

/// Runs `frame` against the page unless it is already borrowed.
///
/// Returns `false` when the page was busy and nothing ran.
fn run_frame<T>(page: &RefCell<T>, frame: impl FnOnce(&mut T)) -> bool {
    match page.try_borrow_mut() {
        Ok(mut page) => {
            frame(&mut page);
            true
        }
        Err(_) => false,
    }
}

/// Routes a delegated click to navigation or the menu toggle.
fn handle_click(page: &SharedPage, event: &Event) {
    let Some(target) = event.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
        return;
    };
    let Ok(mut page) = page.try_borrow_mut() else {
        return;
    };
    let before = page.state();

    if let Ok(Some(nav)) = target.closest(NAV_TARGET_SELECTOR) {
        if let Some(id) = nav.get_attribute(DATA_NAV_ATTR) {
            event.prevent_default();
            page.navigate(&id);
        }
    } else if let Ok(Some(_)) = target.closest(&format!("#{MENU_TOGGLE_ID}")) {
        page.toggle_mobile_menu();
    } else {
        return;
    }

    sync_dom(page.viewport().document(), before, page.state());
}

/// Re-renders state-dependent fragments that changed between two snapshots.
pub fn sync_dom(document: &Document, before: PageState, after: PageState) {
    if before.active_section() != after.active_section()
        || before.mobile_menu_open() != after.mobile_menu_open()
    {
        if let Some(links) = document.get_element_by_id(NAV_LINKS_ID) {
            links.set_inner_html(&render_nav_links(&after));
        }
        if let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) {
            menu.set_inner_html(&render_mobile_menu(&after));
            let result = if after.mobile_menu_open() {
                menu.remove_attribute("hidden")
            } else {
                menu.set_attribute("hidden", "")
            };
            if let Err(err) = result {
                warn!("event=dom_sync module=web status=error target=mobile_menu error={err:?}");
            }
        }
        if let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) {
            let expanded = if after.mobile_menu_open() { "true" } else { "false" };
            if let Err(err) = toggle.set_attribute("aria-expanded", expanded) {
                warn!("event=dom_sync module=web status=error target=menu_toggle error={err:?}");
            }
        }
    }

    if before.is_visible() != after.is_visible() && after.is_visible() {
        if let Ok(Some(hero)) = document.query_selector(HERO_CONTENT_SELECTOR) {
            if let Err(err) = hero.class_list().add_1(VISIBLE_CLASS) {
                warn!("event=dom_sync module=web status=error target=hero error={err:?}");
            }
        }
    }
}
