//! Job submission builder.
//!
//! Turns a parsed issue-form body into the job record written under the
//! jobs directory: `{org-slug}-{title-slug}.md` with a fixed frontmatter
//! key order and a body assembled from the description plus optional
//! sections.

use std::path::{Path, PathBuf};

use jobdeck_core::slug::{slugify, truncate_slug};
use jobdeck_core::Result;
use jobdeck_record::write_record;
use tracing::info;

use crate::fields::pick;
use crate::form::parse_form_body;

/// Title slugs are capped so org + title stems stay readable.
const TITLE_SLUG_MAX: usize = 50;

/// A job submission with field aliases resolved and defaults applied.
#[derive(Debug, Clone, Default)]
pub struct JobSubmission {
    pub organization_name: String,
    pub title: String,
    pub location: String,
    /// Lowercased with whitespace runs collapsed to `-`, e.g. `full-time`.
    pub job_type: String,
    pub salary_range: String,
    pub description: String,
    pub requirements: String,
    pub how_to_apply: String,
    pub website: String,
    pub additional_info: String,
}

impl JobSubmission {
    /// Parse a raw issue body into a submission.
    pub fn from_issue_body(body: &str) -> Self {
        let fields = parse_form_body(body);

        Self {
            organization_name: pick(&fields, &["Company Name", "Company"], ""),
            title: pick(&fields, &["Job Title", "Title"], "Untitled"),
            location: pick(&fields, &["Location"], ""),
            job_type: normalize_job_type(&pick(&fields, &["Job Type"], "Full-time")),
            salary_range: pick(&fields, &["Salary Range", "Salary"], ""),
            description: pick(&fields, &["Job Description", "Description"], ""),
            requirements: pick(&fields, &["Requirements"], ""),
            how_to_apply: pick(&fields, &["How to Apply"], ""),
            website: pick(&fields, &["Company Website", "Website"], ""),
            additional_info: pick(&fields, &["Additional Information"], ""),
        }
    }

    /// Desired file stem: `{org-slug}-{title-slug}`, title part capped
    /// at [`TITLE_SLUG_MAX`] characters.
    pub fn file_stem(&self) -> String {
        let org_slug = slugify(&self.organization_name, "company");
        let title_slug = truncate_slug(&slugify(&self.title, "job"), TITLE_SLUG_MAX);
        format!("{org_slug}-{title_slug}")
    }

    /// Frontmatter pairs in record order.
    pub fn frontmatter(&self, created_at: &str) -> Vec<(String, String)> {
        let title = if self.title.is_empty() {
            "Untitled".to_string()
        } else {
            self.title.clone()
        };
        let organization = if self.organization_name.is_empty() {
            "Company".to_string()
        } else {
            self.organization_name.clone()
        };

        vec![
            ("title".into(), title),
            ("organization_name".into(), organization),
            ("organization_logo".into(), String::new()),
            ("location".into(), self.location.clone()),
            ("job_type".into(), self.job_type.clone()),
            ("salary_range".into(), self.salary_range.clone()),
            ("expires_at".into(), String::new()),
            ("application_email".into(), String::new()),
            ("application_url".into(), self.website.clone()),
            ("application_instructions".into(), self.how_to_apply.clone()),
            ("requirements".into(), self.requirements.clone()),
            ("created_at".into(), created_at.to_string()),
            ("views_count".into(), "0".into()),
        ]
    }

    /// Record body: description plus optional titled sections.
    pub fn body_markdown(&self) -> String {
        let mut parts = Vec::new();
        if !self.description.is_empty() {
            parts.push(self.description.clone());
        }
        if !self.requirements.is_empty() {
            parts.push(format!("## Requirements\n\n{}", self.requirements));
        }
        if !self.how_to_apply.is_empty() {
            parts.push(format!("## How to Apply\n\n{}", self.how_to_apply));
        }
        if !self.additional_info.is_empty() {
            parts.push(format!("## Additional Information\n\n{}", self.additional_info));
        }
        parts.join("\n\n")
    }

    /// Write the record into `jobs_dir` at a collision-free path.
    pub fn write_to(&self, jobs_dir: &Path, created_at: &str) -> Result<PathBuf> {
        let frontmatter = self.frontmatter(created_at);
        let path = write_record(
            jobs_dir,
            &self.file_stem(),
            frontmatter.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            &self.body_markdown(),
        )?;
        info!(path = %path.display(), title = %self.title, "job record written");
        Ok(path)
    }
}

/// Lowercase a job type and collapse whitespace runs to hyphens
/// (`Full Time` → `full-time`). Punctuation passes through untouched.
fn normalize_job_type(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
