//! Browser bridge for Folio.
//! Wires `folio_core` page logic to the live DOM through `wasm-bindgen`.

pub mod api;
pub mod console;
pub mod dom;
