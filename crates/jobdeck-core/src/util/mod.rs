//! Utility modules for file operations and timestamps.
//!
//! # Modules
//!
//! - [`files`]: Synchronous record-file discovery and read/write helpers
//! - [`time`]: UTC timestamp formatting

pub mod files;
pub mod time;
