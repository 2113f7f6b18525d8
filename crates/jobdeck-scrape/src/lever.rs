//! Lever posting scraping via the public postings API.

use jobdeck_core::Result;
use jobdeck_ingest::JobSubmission;
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::fetcher::{Fetcher, DEFAULT_TIMEOUT};
use crate::html::{html_to_text, MAX_TEXT_CHARS};
use crate::title_case;

const HOST: &str = "jobs.lever.co";
const API_BASE: &str = "https://api.lever.co/v0/postings";

/// Scrape a Lever posting URL of the form `jobs.lever.co/<company>/<id>`.
pub fn scrape(fetcher: &dyn Fetcher, url: &Url) -> Result<Option<JobSubmission>> {
    if url.host_str() != Some(HOST) {
        return Ok(None);
    }

    let segments: Vec<&str> = url
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    if segments.len() < 2 {
        return Ok(None);
    }
    let (company, posting) = (segments[0], segments[1]);

    let body = match fetcher.get(&format!("{API_BASE}/{company}/{posting}"), &[], DEFAULT_TIMEOUT) {
        Ok(body) => body,
        Err(_) => {
            warn!(%url, "Lever API unavailable");
            return Ok(None);
        }
    };
    let job: Value = match serde_json::from_str(&body) {
        Ok(job) => job,
        Err(e) => {
            warn!(%url, error = %e, "Lever API returned malformed JSON");
            return Ok(None);
        }
    };

    let title = job["text"].as_str().unwrap_or("Job Listing").trim().to_string();
    let location = job["categories"]["location"]
        .as_str()
        .unwrap_or("")
        .trim()
        .to_string();
    let job_type = match job["categories"]["commitment"].as_str() {
        Some(commitment) if !commitment.trim().is_empty() => commitment.trim().to_lowercase(),
        _ => "full-time".to_string(),
    };

    // The description is split across an intro, titled lists, and a closing
    // paragraph. Stitch them back into one HTML blob before stripping tags.
    let mut html = job["description"].as_str().unwrap_or("").to_string();
    if let Some(lists) = job["lists"].as_array() {
        for list in lists {
            let heading = list["text"].as_str().unwrap_or("");
            let content = list["content"].as_str().unwrap_or("");
            html.push_str(&format!("<h3>{heading}</h3>{content}"));
        }
    }
    html.push_str(job["additional"].as_str().unwrap_or(""));

    Ok(Some(JobSubmission {
        title,
        organization_name: title_case(&company.replace('-', " ")),
        location,
        job_type,
        description: html_to_text(&html, MAX_TEXT_CHARS),
        website: url.to_string(),
        ..Default::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockFetcher;

    #[test]
    fn test_non_lever_url_is_skipped() {
        let fetcher = MockFetcher::new();
        let url = Url::parse("https://boards.greenhouse.io/acme/jobs/1").unwrap();
        assert!(scrape(&fetcher, &url).unwrap().is_none());
    }

    #[test]
    fn test_api_failure_falls_through() {
        let fetcher = MockFetcher::new();
        let url = Url::parse("https://jobs.lever.co/acme/abc-123").unwrap();
        assert!(scrape(&fetcher, &url).unwrap().is_none());
    }

    #[test]
    fn test_successful_scrape() {
        let fetcher = MockFetcher::new().with(
            "https://api.lever.co/v0/postings/acme-widgets/abc-123",
            r#"{
                "text": "Backend Engineer",
                "categories": {"location": "Remote - EU", "commitment": "Part-Time"},
                "description": "<p>Join us.</p>",
                "lists": [
                    {"text": "Requirements", "content": "<ul><li>Rust</li></ul>"}
                ],
                "additional": "<p>Benefits included.</p>"
            }"#,
        );
        let url = Url::parse("https://jobs.lever.co/acme-widgets/abc-123").unwrap();

        let sub = scrape(&fetcher, &url).unwrap().unwrap();
        assert_eq!(sub.title, "Backend Engineer");
        assert_eq!(sub.organization_name, "Acme Widgets");
        assert_eq!(sub.location, "Remote - EU");
        assert_eq!(sub.job_type, "part-time");
        assert!(sub.description.contains("Join us."));
        assert!(sub.description.contains("Requirements"));
        assert!(sub.description.contains("Rust"));
        assert!(sub.description.contains("Benefits included."));
        assert_eq!(sub.website, "https://jobs.lever.co/acme-widgets/abc-123");
    }

    #[test]
    fn test_missing_commitment_defaults_to_full_time() {
        let fetcher = MockFetcher::new().with(
            "https://api.lever.co/v0/postings/acme/xyz",
            r#"{"text": "Engineer", "description": "<p>Work.</p>"}"#,
        );
        let url = Url::parse("https://jobs.lever.co/acme/xyz").unwrap();

        let sub = scrape(&fetcher, &url).unwrap().unwrap();
        assert_eq!(sub.job_type, "full-time");
    }
}
