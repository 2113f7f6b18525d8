//! Jina Reader fallback for JS-rendered pages.
//!
//! `r.jina.ai` renders the target page in a headless browser and returns
//! it as markdown, which covers SPA career sites the static strategies
//! cannot read. This is the end of the chain, so it never fails: when the
//! proxy is unreachable the result is a stub that links the posting.

use jobdeck_ingest::JobSubmission;
use tracing::warn;
use url::Url;

use crate::fetcher::{Fetcher, RENDER_TIMEOUT};
use crate::org_from_host;

const READER_BASE: &str = "https://r.jina.ai/";

/// Scrape `url` through the Jina Reader proxy.
pub fn scrape(fetcher: &dyn Fetcher, url: &Url) -> JobSubmission {
    let reader_url = format!("{READER_BASE}{url}");
    let headers = [("Accept", "text/plain"), ("X-Return-Format", "markdown")];

    let body = match fetcher.get(&reader_url, &headers, RENDER_TIMEOUT) {
        Ok(body) => body,
        Err(e) => {
            warn!(%url, error = %e, "Jina Reader unavailable, writing stub record");
            return stub(url);
        }
    };

    let lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return stub(url);
    }

    // Reader output opens with "Title:", "URL Source:" and
    // "Markdown Content:" lines before the rendered page.
    let title = lines
        .iter()
        .find_map(|line| line.strip_prefix("Title:"))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Job Listing")
        .to_string();

    let content_start = lines
        .iter()
        .position(|line| line.starts_with("Markdown Content:"))
        .or_else(|| lines.iter().position(|line| line.starts_with("URL Source:")))
        .map(|i| i + 1)
        .unwrap_or(1);
    let content = lines.get(content_start..).unwrap_or(&[]).join("\n");

    JobSubmission {
        title,
        organization_name: org_from_host(url),
        job_type: "full-time".to_string(),
        description: if content.is_empty() {
            format!("See full listing at: {url}")
        } else {
            content
        },
        website: url.to_string(),
        ..Default::default()
    }
}

fn stub(url: &Url) -> JobSubmission {
    JobSubmission {
        title: "Job Listing".to_string(),
        organization_name: org_from_host(url),
        job_type: "full-time".to_string(),
        description: format!("See full listing at: {url}"),
        website: url.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockFetcher;

    fn url() -> Url {
        Url::parse("https://spa-jobs.example/openings/7").unwrap()
    }

    #[test]
    fn test_proxy_failure_yields_stub() {
        let fetcher = MockFetcher::new();
        let sub = scrape(&fetcher, &url());
        assert_eq!(sub.title, "Job Listing");
        assert_eq!(sub.organization_name, "Spa Jobs");
        assert_eq!(sub.website, "https://spa-jobs.example/openings/7");
        assert!(sub.description.contains("https://spa-jobs.example/openings/7"));
    }

    #[test]
    fn test_reader_output_is_parsed() {
        let body = "Title: Frontend Engineer at Spa Jobs\n\
                    URL Source: https://spa-jobs.example/openings/7\n\
                    Markdown Content:\n\
                    \n\
                    # Frontend Engineer\n\
                    \n\
                    Build the careers SPA.\n";
        let fetcher = MockFetcher::new().with("https://r.jina.ai/https://spa-jobs.example/openings/7", body);

        let sub = scrape(&fetcher, &url());
        assert_eq!(sub.title, "Frontend Engineer at Spa Jobs");
        assert!(sub.description.contains("# Frontend Engineer"));
        assert!(sub.description.contains("Build the careers SPA."));
        assert!(!sub.description.contains("Markdown Content:"));
    }

    #[test]
    fn test_empty_reader_body_yields_stub() {
        let fetcher =
            MockFetcher::new().with("https://r.jina.ai/https://spa-jobs.example/openings/7", "\n\n");
        let sub = scrape(&fetcher, &url());
        assert_eq!(sub.title, "Job Listing");
        assert!(sub.description.contains("spa-jobs.example"));
    }
}
