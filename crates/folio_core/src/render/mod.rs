//! HTML rendering of the page.

pub mod escape;
pub mod markup;
