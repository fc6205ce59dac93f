//! Layout abstractions shared by the tracker and the page controller.

pub mod geometry;
