//! JavaScript-facing API for the portfolio page.
//!
//! # Responsibility
//! - Expose page lifecycle and navigation calls to JavaScript.
//! - Own the single mounted page for the current document.
//!
//! # Invariants
//! - Exported functions must not panic across the wasm boundary.
//! - At most one page is mounted per document; repeated mounts are no-ops.

use crate::console::{default_level, init_console_logging};
use crate::dom::{sync_dom, DomPage, DomViewport, RafScheduler, SharedPage, WindowListeners};
use folio_core::{
    core_version as core_version_inner, ping as ping_inner, ListenerError, MountOutcome, NavigationItem,
    NavigationOutcome,
};
use log::{error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;

struct MountedPage {
    page: SharedPage,
    // Keeps the frame closure alive for as long as the page is mounted.
    _scheduler: Rc<RafScheduler>,
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

/// Module entry point: installs console logging and mounts the page.
#[wasm_bindgen(start)]
pub fn start() {
    init_console_logging(default_level());
    if !mount() {
        error!("event=page_start module=web status=error");
    }
}

/// Health-check call.
///
/// # JS contract
/// - Sync, never throws; always returns a UTF-8 string.
#[wasm_bindgen]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
///
/// # JS contract
/// - Sync, never throws; always returns a UTF-8 string.
#[wasm_bindgen]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Attaches scroll, resize and click listeners and schedules the first
/// active-section evaluation.
///
/// # JS contract
/// - Safe to call repeatedly; listeners are attached at most once.
/// - Returns `true` when the page is mounted after the call.
/// - Never throws; failures are logged and reported as `false`.
#[wasm_bindgen]
pub fn mount() -> bool {
    if MOUNTED.with(|slot| slot.borrow().is_some()) {
        info!("event=page_mount module=web status=skipped reason=already_mounted");
        return true;
    }

    let Some((window, document)) = web_sys::window().and_then(|window| {
        let document = window.document()?;
        Some((window, document))
    }) else {
        warn!(
            "event=page_mount module=web status=error error={}",
            ListenerError::HostUnavailable
        );
        return false;
    };

    let page: SharedPage = Rc::new(RefCell::new(DomPage::new(DomViewport::new(
        window.clone(),
        document.clone(),
    ))));
    let scheduler = RafScheduler::new(window.clone(), Rc::downgrade(&page));
    let listeners = WindowListeners::new(window, document, Rc::downgrade(&page), Rc::clone(&scheduler));

    let outcome = {
        let mut guard = page.borrow_mut();
        let before = guard.state();
        let outcome = guard.mount(listeners, &*scheduler);
        sync_dom(guard.viewport().document(), before, guard.state());
        outcome
    };

    match outcome {
        Ok(MountOutcome::Mounted) | Ok(MountOutcome::AlreadyMounted) => {
            MOUNTED.with(|slot| {
                *slot.borrow_mut() = Some(MountedPage {
                    page,
                    _scheduler: scheduler,
                });
            });
            info!("event=page_mount module=web status=ok");
            true
        }
        Err(err) => {
            warn!("event=page_mount module=web status=error error={err}");
            false
        }
    }
}

/// Removes all listeners and cancels any queued frame.
///
/// # JS contract
/// - Returns `true` if a mounted page was released.
/// - Never throws.
#[wasm_bindgen]
pub fn unmount() -> bool {
    let Some(mounted) = MOUNTED.with(|slot| slot.borrow_mut().take()) else {
        return false;
    };
    let released = match mounted.page.try_borrow_mut() {
        Ok(mut page) => page.unmount(),
        Err(_) => {
            warn!("event=page_unmount module=web status=deferred reason=page_busy");
            false
        }
    };
    info!("event=page_unmount module=web status=ok released={released}");
    // Dropping the last strong handle detaches listeners if `unmount` was deferred.
    drop(mounted);
    true
}

/// Smoothly scrolls to the section with `id` and closes the mobile menu.
///
/// # JS contract
/// - Unknown ids and missing sections return `false` and change nothing.
/// - Never throws.
#[wasm_bindgen]
pub fn navigate(id: String) -> bool {
    with_page(false, |page| {
        let before = page.state();
        let outcome = page.navigate(&id);
        sync_dom(page.viewport().document(), before, page.state());
        matches!(outcome, NavigationOutcome::Navigated(_))
    })
}

/// Flips the mobile menu and returns its new state.
///
/// # JS contract
/// - Returns `false` when no page is mounted.
/// - Never throws.
#[wasm_bindgen]
pub fn toggle_menu() -> bool {
    with_page(false, |page| {
        let before = page.state();
        let open = page.toggle_mobile_menu();
        sync_dom(page.viewport().document(), before, page.state());
        open
    })
}

/// Id of the highlighted section, if any.
#[wasm_bindgen]
pub fn active_section() -> Option<String> {
    with_page(None, |page| section_id(page.active_section()))
}

#[wasm_bindgen]
pub fn menu_open() -> bool {
    with_page(false, |page| page.mobile_menu_open())
}

fn with_page<T>(fallback: T, f: impl FnOnce(&mut DomPage) -> T) -> T {
    MOUNTED.with(|slot| {
        let slot = slot.borrow();
        let Some(mounted) = slot.as_ref() else {
            return fallback;
        };
        let result = match mounted.page.try_borrow_mut() {
            Ok(mut page) => f(&mut page),
            Err(_) => {
                warn!("event=page_call module=web status=skipped reason=page_busy");
                fallback
            }
        };
        result
    })
}

fn section_id(section: Option<NavigationItem>) -> Option<String> {
    section.map(|section| section.as_str().to_owned())
}
