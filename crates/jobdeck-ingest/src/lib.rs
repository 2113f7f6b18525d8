//! Jobdeck Ingest — issue bodies in, record files out.
//!
//! Two symmetric pipelines share this crate: job submissions and seeker
//! submissions. Each parses a raw issue body into a field mapping
//! ([`form`]), resolves fields through alias chains ([`fields`]), and
//! assembles a frontmatter record written through `jobdeck-record`
//! ([`job`], [`seeker`]).

pub mod fields;
pub mod form;
pub mod job;
pub mod seeker;

pub use fields::pick;
pub use form::{parse_form_body, parse_profile_body, FieldMap};
pub use job::JobSubmission;
pub use seeker::SeekerSubmission;
