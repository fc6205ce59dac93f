//! Build-time site plumbing: content loading and static export.
//!
//! # See also
//! - `crate::render::markup` for the document shape.

pub mod export;
pub mod loader;
