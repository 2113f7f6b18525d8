//! Seeker submission builder.
//!
//! Seeker profiles arrive either as issue forms or as the older
//! free-text template with bold labels, so parsing runs both dialects.
//! The record lands under the seekers directory as `{name-slug}.md`.

use std::path::{Path, PathBuf};

use jobdeck_core::slug::slugify;
use jobdeck_core::Result;
use jobdeck_record::write_record;
use tracing::info;

use crate::fields::pick;
use crate::form::parse_profile_body;

/// Experience-highlight text is clipped to this many characters when it
/// stands in for a missing years-of-experience answer.
const SUMMARY_CLIP: usize = 200;

/// Body used when a profile carries no free-text sections at all.
const EMPTY_PROFILE_BODY: &str = "Profile created via issue.";

/// A seeker submission with field aliases resolved and defaults applied.
#[derive(Debug, Clone, Default)]
pub struct SeekerSubmission {
    /// Display name; `Anonymous` when the submitter gave none.
    pub name: String,
    pub headline: String,
    pub location: String,
    /// Free text; comma/semicolon splitting happens at render time, not here.
    pub skills: String,
    pub experience_years: String,
    pub availability: String,
    pub about: String,
    pub experience_highlights: String,
    pub looking_for: String,
    pub profile_url: String,
}

impl SeekerSubmission {
    /// Parse a raw issue body into a submission.
    pub fn from_issue_body(body: &str) -> Self {
        let fields = parse_profile_body(body);

        let name = pick(&fields, &["Name"], "Anonymous");
        let linkedin = trim_link(&pick(&fields, &["LinkedIn"], ""));
        let github = trim_link(&pick(&fields, &["GitHub"], ""));
        let profile_url = if linkedin.is_empty() { github } else { linkedin };

        Self {
            name,
            headline: pick(&fields, &["Current Title/Role", "Title", "Headline"], ""),
            location: pick(&fields, &["Location"], ""),
            skills: pick(&fields, &["Skills"], ""),
            experience_years: pick(&fields, &["Years of Experience"], ""),
            availability: pick(&fields, &["Availability", "Preferred Job Type"], ""),
            about: pick(&fields, &["About Me"], ""),
            experience_highlights: pick(&fields, &["Experience Highlights"], ""),
            looking_for: pick(&fields, &["What I'm Looking For"], ""),
            profile_url,
        }
    }

    /// Desired file stem: the slugged name.
    pub fn file_stem(&self) -> String {
        slugify(&self.name, "seeker")
    }

    /// One-line experience summary: the years answer when present, else
    /// clipped highlights.
    pub fn experience_summary(&self) -> String {
        if !self.experience_years.is_empty() {
            return format!("{} experience", self.experience_years);
        }
        self.experience_highlights.chars().take(SUMMARY_CLIP).collect()
    }

    /// Frontmatter pairs in record order.
    pub fn frontmatter(&self, created_at: &str) -> Vec<(String, String)> {
        vec![
            ("name".into(), self.name.clone()),
            ("headline".into(), self.headline.clone()),
            ("location".into(), self.location.clone()),
            ("skills".into(), self.skills.clone()),
            ("experience_summary".into(), self.experience_summary()),
            ("profile_url".into(), self.profile_url.clone()),
            ("availability".into(), self.availability.clone()),
            ("created_at".into(), created_at.to_string()),
        ]
    }

    /// Record body assembled from the free-text sections.
    pub fn body_markdown(&self) -> String {
        let mut parts = Vec::new();
        if !self.about.is_empty() {
            parts.push(format!("## About Me\n\n{}", self.about));
        }
        if !self.experience_highlights.is_empty() {
            parts.push(format!("## Experience Highlights\n\n{}", self.experience_highlights));
        }
        if !self.looking_for.is_empty() {
            parts.push(format!("## What I'm Looking For\n\n{}", self.looking_for));
        }
        if parts.is_empty() {
            EMPTY_PROFILE_BODY.to_string()
        } else {
            parts.join("\n\n")
        }
    }

    /// Write the record into `seekers_dir` at a collision-free path.
    pub fn write_to(&self, seekers_dir: &Path, created_at: &str) -> Result<PathBuf> {
        let frontmatter = self.frontmatter(created_at);
        let path = write_record(
            seekers_dir,
            &self.file_stem(),
            frontmatter.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            &self.body_markdown(),
        )?;
        info!(path = %path.display(), name = %self.name, "seeker record written");
        Ok(path)
    }
}

/// Strip the parentheses (and stray whitespace) submitters wrap profile
/// links in: `(https://example.com)` → `https://example.com`.
fn trim_link(raw: &str) -> String {
    raw.trim_start_matches(|c: char| c == '(' || c.is_whitespace())
        .trim_end_matches(|c: char| c == ')' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdeck_record::frontmatter;
    use tempfile::TempDir;

    const FORM_BODY: &str = "### Name\n\nJane Doe\n\n### Current Title/Role\n\nBackend Engineer\n\n\
        ### Location\n\nOslo\n\n### Skills\n\nRust, Postgres; Kubernetes\n\n\
        ### Years of Experience\n\n8 years\n\n### Availability\n\nImmediately\n\n\
        ### About Me\n\nI like systems programming.\n\n### LinkedIn\n\n(https://linkedin.example/jane)";

    #[test]
    fn test_from_form_body() {
        let sub = SeekerSubmission::from_issue_body(FORM_BODY);
        assert_eq!(sub.name, "Jane Doe");
        assert_eq!(sub.headline, "Backend Engineer");
        assert_eq!(sub.profile_url, "https://linkedin.example/jane");
        assert_eq!(sub.experience_summary(), "8 years experience");
    }

    #[test]
    fn test_from_bold_template_body() {
        let body = "**Name:** Jane\n**Location:** Remote\n**GitHub:** https://github.example/jane";
        let sub = SeekerSubmission::from_issue_body(body);
        assert_eq!(sub.name, "Jane");
        assert_eq!(sub.location, "Remote");
        assert_eq!(sub.profile_url, "https://github.example/jane");
    }

    #[test]
    fn test_anonymous_default_and_fallback_stem() {
        let sub = SeekerSubmission::from_issue_body("");
        assert_eq!(sub.name, "Anonymous");
        assert_eq!(sub.file_stem(), "anonymous");
    }

    #[test]
    fn test_experience_summary_clips_highlights() {
        let sub = SeekerSubmission {
            experience_highlights: "x".repeat(300),
            ..Default::default()
        };
        assert_eq!(sub.experience_summary().len(), 200);
    }

    #[test]
    fn test_linkedin_preferred_over_github() {
        let body = "**LinkedIn:** https://li.example/j\n**GitHub:** https://gh.example/j";
        let sub = SeekerSubmission::from_issue_body(body);
        assert_eq!(sub.profile_url, "https://li.example/j");
    }

    #[test]
    fn test_empty_profile_body_placeholder() {
        let sub = SeekerSubmission::from_issue_body("**Name:** Jane");
        assert_eq!(sub.body_markdown(), "Profile created via issue.");
    }

    #[test]
    fn test_write_to_round_trips() {
        let temp = TempDir::new().unwrap();
        let sub = SeekerSubmission::from_issue_body(FORM_BODY);

        let path = sub.write_to(temp.path(), "2026-08-30T12:00:00Z").unwrap();
        assert_eq!(path, temp.path().join("jane-doe.md"));

        let doc = frontmatter::parse(&std::fs::read_to_string(&path).unwrap());
        assert_eq!(doc.fields.get("name").unwrap(), "Jane Doe");
        assert_eq!(doc.fields.get("skills").unwrap(), "Rust, Postgres; Kubernetes");
        assert_eq!(doc.fields.get("experience_summary").unwrap(), "8 years experience");
        assert!(doc.body.contains("## About Me"));
    }
}
