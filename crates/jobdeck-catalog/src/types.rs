//! Serializable catalog types.
//!
//! Field sets mirror what the listing and detail pages consume. Nullable
//! fields serialize as JSON `null` when the record left them blank;
//! strings with hard defaults (`title`, `job_type`, …) are never null.

use serde::{Deserialize, Serialize};

use jobdeck_core::utc_timestamp;

/// One job listing in the aggregated catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Record id, derived from the filename stem.
    pub id: String,
    pub organization_name: String,
    pub organization_logo: Option<String>,
    pub title: String,
    /// Markdown body of the record (falls back to a `description` header).
    pub description: String,
    pub requirements: Option<String>,
    pub location: Option<String>,
    pub job_type: String,
    pub salary_range: Option<String>,
    pub expires_at: Option<String>,
    pub application_email: Option<String>,
    pub application_url: Option<String>,
    pub application_instructions: Option<String>,
    pub created_at: String,
    pub views_count: u32,
}

/// One seeker profile in the aggregated catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seeker {
    /// Record id, derived from the filename stem.
    pub id: String,
    pub name: String,
    pub headline: String,
    pub location: String,
    /// Free text; split on commas/semicolons at render time.
    pub skills: String,
    pub experience_summary: String,
    pub profile_url: String,
    pub availability: String,
    pub created_at: String,
    /// Markdown body of the record.
    pub about: String,
}

/// Aggregated jobs catalog: `{ "jobs": [...], "count": N, "generated_at": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCatalog {
    pub jobs: Vec<Job>,
    pub count: usize,
    pub generated_at: String,
}

impl JobCatalog {
    /// Wrap a record list, stamping the count and generation time.
    pub fn new(jobs: Vec<Job>) -> Self {
        let count = jobs.len();
        Self {
            jobs,
            count,
            generated_at: utc_timestamp(),
        }
    }
}

/// Aggregated seekers catalog: `{ "seekers": [...], "count": N, "generated_at": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeekerCatalog {
    pub seekers: Vec<Seeker>,
    pub count: usize,
    pub generated_at: String,
}

impl SeekerCatalog {
    /// Wrap a record list, stamping the count and generation time.
    pub fn new(seekers: Vec<Seeker>) -> Self {
        let count = seekers.len();
        Self {
            seekers,
            count,
            generated_at: utc_timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_job_catalog_shape() {
        let catalog = JobCatalog::new(Vec::new());
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&catalog).unwrap()).unwrap();

        assert_eq!(json["jobs"], serde_json::json!([]));
        assert_eq!(json["count"], 0);
        assert!(json["generated_at"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_count_matches_entries() {
        let job = Job {
            id: "acme-engineer".into(),
            organization_name: "Acme".into(),
            organization_logo: None,
            title: "Engineer".into(),
            description: "Build things.".into(),
            requirements: None,
            location: Some("Remote".into()),
            job_type: "full-time".into(),
            salary_range: None,
            expires_at: None,
            application_email: None,
            application_url: None,
            application_instructions: None,
            created_at: "2026-08-30T12:00:00Z".into(),
            views_count: 0,
        };
        let catalog = JobCatalog::new(vec![job.clone(), job]);
        assert_eq!(catalog.count, 2);
        assert_eq!(catalog.count, catalog.jobs.len());
    }

    #[test]
    fn test_nullable_fields_serialize_as_null() {
        let catalog = SeekerCatalog::new(Vec::new());
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"seekers\":[]"));

        let job = Job {
            id: "x".into(),
            organization_name: "Acme".into(),
            organization_logo: None,
            title: "Engineer".into(),
            description: String::new(),
            requirements: None,
            location: None,
            job_type: "full-time".into(),
            salary_range: None,
            expires_at: None,
            application_email: None,
            application_url: None,
            application_instructions: None,
            created_at: "2026-08-30T12:00:00Z".into(),
            views_count: 3,
        };
        let value = serde_json::to_value(&job).unwrap();
        assert!(value["organization_logo"].is_null());
        assert!(value["location"].is_null());
        assert_eq!(value["views_count"], 3);
    }
}
