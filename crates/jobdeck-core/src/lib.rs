//! Jobdeck Core — shared error type, slug generation, and file utilities.
//!
//! This crate provides the foundational pieces used across all jobdeck
//! crates. It has no internal jobdeck dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error type and Result alias
//! - [`slug`]: Filesystem/URL-safe identifier generation
//! - [`util`]: File and timestamp utilities

pub mod error;
pub mod slug;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use slug::slugify;
pub use util::time::utc_timestamp;
