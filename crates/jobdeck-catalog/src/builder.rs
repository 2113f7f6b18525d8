//! Catalog assembly from a records directory.

use std::path::Path;

use jobdeck_core::util::files::{list_records, read_file, FileInfo};
use jobdeck_core::{utc_timestamp, Result};
use jobdeck_record::frontmatter;
use tracing::debug;

use crate::types::{Job, JobCatalog, Seeker, SeekerCatalog};

/// Build the jobs catalog from every record file in `jobs_dir`.
///
/// A missing directory produces an empty catalog; an unreadable record
/// file aborts the build (no partial catalogs).
pub fn build_job_catalog(jobs_dir: &Path) -> Result<JobCatalog> {
    let records = list_records(jobs_dir)?;
    let mut jobs = Vec::with_capacity(records.len());
    for info in &records {
        jobs.push(job_from_record(info)?);
    }
    debug!(count = jobs.len(), dir = %jobs_dir.display(), "job catalog assembled");
    Ok(JobCatalog::new(jobs))
}

/// Build the seekers catalog from every record file in `seekers_dir`.
pub fn build_seeker_catalog(seekers_dir: &Path) -> Result<SeekerCatalog> {
    let records = list_records(seekers_dir)?;
    let mut seekers = Vec::with_capacity(records.len());
    for info in &records {
        seekers.push(seeker_from_record(info)?);
    }
    debug!(count = seekers.len(), dir = %seekers_dir.display(), "seeker catalog assembled");
    Ok(SeekerCatalog::new(seekers))
}

fn job_from_record(info: &FileInfo) -> Result<Job> {
    let doc = frontmatter::parse(&read_file(&info.path)?);

    // Body is the description; records created before the body convention
    // may carry it in a `description` header instead.
    let description = if doc.body.is_empty() {
        doc.field_or("description", "")
    } else {
        doc.body.clone()
    };

    Ok(Job {
        id: info.stem.clone(),
        organization_name: doc.field_or("organization_name", "Unknown organization"),
        organization_logo: doc.field("organization_logo").map(String::from),
        title: doc.field_or("title", "Untitled"),
        description,
        requirements: doc.field("requirements").map(String::from),
        location: doc.field("location").map(String::from),
        job_type: doc.field_or("job_type", "full-time"),
        salary_range: doc.field("salary_range").map(String::from),
        expires_at: doc.field("expires_at").map(String::from),
        application_email: doc.field("application_email").map(String::from),
        application_url: doc.field("application_url").map(String::from),
        application_instructions: doc.field("application_instructions").map(String::from),
        created_at: doc
            .field("created_at")
            .map(String::from)
            .unwrap_or_else(utc_timestamp),
        views_count: parse_count(doc.field("views_count")),
    })
}

fn seeker_from_record(info: &FileInfo) -> Result<Seeker> {
    let doc = frontmatter::parse(&read_file(&info.path)?);

    Ok(Seeker {
        id: info.stem.clone(),
        name: doc.field_or("name", "Anonymous"),
        headline: doc.field_or("headline", ""),
        location: doc.field_or("location", ""),
        skills: doc.field_or("skills", ""),
        experience_summary: doc.field_or("experience_summary", ""),
        profile_url: doc.field_or("profile_url", ""),
        availability: doc.field_or("availability", ""),
        created_at: doc
            .field("created_at")
            .map(String::from)
            .unwrap_or_else(utc_timestamp),
        about: doc.body.clone(),
    })
}

/// Lenient non-negative integer parse: anything unparseable counts as 0.
fn parse_count(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}
