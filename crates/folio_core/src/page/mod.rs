//! Page component and its lifecycle.
//!
//! # Responsibility
//! - Hold the page's transient state (active section, visibility, menu).
//! - Scope listener registration to the page's mounted lifetime.
//!
//! # Invariants
//! - All state transitions happen on the caller's single UI thread.

pub mod controller;
pub mod menu;
pub mod subscription;
