//! Greenhouse board scraping via the public JSON API.

use jobdeck_core::Result;
use jobdeck_ingest::JobSubmission;
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::fetcher::{Fetcher, DEFAULT_TIMEOUT};
use crate::html::{html_to_text, unescape_entities, MAX_TEXT_CHARS};
use crate::title_case;

/// Hosts served from Greenhouse job boards. Posting paths look like
/// `/<company>/jobs/<id>`.
const HOSTS: [&str; 4] = [
    "boards.greenhouse.io",
    "boards.eu.greenhouse.io",
    "job-boards.greenhouse.io",
    "job-boards.eu.greenhouse.io",
];

const API_BASE: &str = "https://boards-api.greenhouse.io/v1/boards";
const API_BASE_EU: &str = "https://boards-api.eu.greenhouse.io/v1/boards";

/// Scrape a Greenhouse posting URL.
///
/// Returns `Ok(None)` when the URL is not a Greenhouse board or the API
/// is unavailable, letting the strategy chain continue.
pub fn scrape(fetcher: &dyn Fetcher, url: &Url) -> Result<Option<JobSubmission>> {
    let host = url.host_str().unwrap_or("");
    if !HOSTS.contains(&host) {
        return Ok(None);
    }

    let segments: Vec<&str> = url
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    if segments.len() < 3 || segments[1] != "jobs" {
        return Ok(None);
    }
    let (company, job_id) = (segments[0], segments[2]);

    let api_base = if host.contains("eu") { API_BASE_EU } else { API_BASE };

    // Board lookup gives the display name; company slug is the fallback.
    let org_name = fetch_json(fetcher, &format!("{api_base}/{company}"))
        .and_then(|board| board["name"].as_str().map(str::to_string))
        .unwrap_or_else(|| title_case(&company.replace('-', " ")));

    let job = match fetch_json(fetcher, &format!("{api_base}/{company}/jobs/{job_id}")) {
        Some(job) => job,
        None => {
            warn!(%url, "Greenhouse API unavailable");
            return Ok(None);
        }
    };

    let title = job["title"].as_str().unwrap_or("Job Listing").trim().to_string();
    let location = job["location"]["name"]
        .as_str()
        .unwrap_or("")
        .trim()
        .to_string();
    // Greenhouse returns HTML-entity-escaped HTML; unescape before stripping.
    let content = job["content"].as_str().unwrap_or("");
    let description = html_to_text(&unescape_entities(content), MAX_TEXT_CHARS);

    Ok(Some(JobSubmission {
        title,
        organization_name: org_name,
        location,
        job_type: "full-time".to_string(),
        description,
        website: url.to_string(),
        ..Default::default()
    }))
}

fn fetch_json(fetcher: &dyn Fetcher, url: &str) -> Option<Value> {
    let body = fetcher.get(url, &[], DEFAULT_TIMEOUT).ok()?;
    serde_json::from_str(&body).ok()
}
