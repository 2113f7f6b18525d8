//! Jobdeck Catalog — record directories compiled into JSON catalogs.
//!
//! The catalog is a pure projection of the record files: it is rebuilt
//! wholesale on every run, never patched incrementally, and a missing
//! records directory yields a well-formed empty catalog rather than an
//! error. The presentation layer fetches the resulting `jobs.json` /
//! `seekers.json` and renders client-side.

pub mod builder;
pub mod persistence;
pub mod types;

pub use builder::{build_job_catalog, build_seeker_catalog};
pub use persistence::save_catalog;
pub use types::{Job, JobCatalog, Seeker, SeekerCatalog};
