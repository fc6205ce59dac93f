//! Core page logic for Folio.
//! This crate is the single source of truth for page invariants.

pub mod layout;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod page;
pub mod render;
pub mod site;
pub mod tracker;

pub use layout::geometry::{FixedLayout, SectionBounds, Viewport};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{default_log_level, init_logging, logging_status, LogSink, LoggingError};
pub use model::builtin::builtin_content;
pub use model::content::{
    ApiSample, ContactChannel, ContactKind, ContentValidationError, ExpertiseCategory,
    PortfolioContent, Project, ProjectStatus, SiteProfile, SkillRating,
};
pub use model::section::{parse_navigation_item, NavigationItem, NavigationItemError};
pub use page::controller::{MountOutcome, NavigationOutcome, Page, PageState};
pub use page::menu::MobileMenu;
pub use page::subscription::{ListenerError, ListenerHost, ScrollSubscription};
pub use render::markup::{render_mobile_menu, render_nav_links, render_page, RenderOptions};
pub use site::export::{export_site, ExportError, ExportReport};
pub use site::loader::{load_content, ContentLoadError};
pub use tracker::active::{locate_active_section, ActiveSectionTracker, NAV_OFFSET_PX};
pub use tracker::frame::{FrameGate, FrameRequest, FrameScheduler};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
