//! # Utilities Module
//!
//! Internal utility modules for the logbuilder crate.
//! These modules are marked as `pub(crate)` to enforce API boundaries.

pub(crate) mod sinks;
pub(crate) mod summary;

pub use summary::{describe, MAX_REPR_LEN};
