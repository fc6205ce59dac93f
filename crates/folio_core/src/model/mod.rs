//! Page domain model.
//!
//! # Responsibility
//! - Define the navigation identifiers and the static content records.
//! - Provide the built-in content used when no content file is supplied.
//!
//! # Invariants
//! - Section identifiers are a closed, ordered set.
//! - Content records are never mutated after validation.

pub mod builtin;
pub mod content;
pub mod section;
