//! Active-section tracker.
//!
//! # Responsibility
//! - Keep the highlighted navigation item consistent with scroll position.
//! - Bound evaluation cost to one run per rendered frame.
//!
//! # See also
//! - `crate::page::controller` for how results are applied to page state.

pub mod active;
pub mod frame;
