//! Jobdeck Record — the on-disk record file format.
//!
//! A record file is a frontmatter header block of quoted key/value pairs
//! followed by a blank line and a free-text markdown body:
//!
//! ```text
//! ---
//! title: "Senior Rust Engineer"
//! organization_name: "Acme"
//! ---
//!
//! We are hiring...
//! ```
//!
//! [`frontmatter`] renders and parses that format; [`store`] writes a
//! rendered record to a collision-free path inside a records directory.

pub mod frontmatter;
pub mod store;

pub use frontmatter::{parse, render, Document};
pub use store::write_record;
