//! Jobdeck Scrape — turn a job-posting URL into a record submission.
//!
//! Strategies are tried in order of result quality:
//!
//! 1. Greenhouse public JSON API ([`greenhouse`])
//! 2. Lever public JSON API ([`lever`])
//! 3. JSON-LD `JobPosting` schema in static HTML ([`jsonld`], via [`static_page`])
//! 4. Static HTML heuristics ([`static_page`])
//! 5. Jina Reader proxy for JS-rendered pages ([`jina`])
//!
//! The first four return `None` when they do not apply or the upstream
//! call fails, letting the chain fall through; the Jina fallback never
//! fails, degrading to a stub that links the original posting. All HTTP
//! goes through the [`Fetcher`](fetcher::Fetcher) trait so each strategy
//! is testable against canned payloads.

pub mod fetcher;
pub mod greenhouse;
pub mod html;
pub mod jina;
pub mod jsonld;
pub mod lever;
pub mod static_page;

use jobdeck_core::{Error, Result};
use jobdeck_ingest::JobSubmission;
use tracing::info;
use url::Url;

pub use fetcher::{Fetcher, HttpFetcher, MockFetcher};

/// Scrape `raw_url` into a job submission, trying each strategy in turn.
///
/// A missing scheme is assumed to be `https://`.
pub fn scrape_url(fetcher: &dyn Fetcher, raw_url: &str) -> Result<JobSubmission> {
    let normalized = normalize_url(raw_url);
    let url = Url::parse(&normalized).map_err(|e| Error::parse(format!("bad URL {raw_url}: {e}")))?;

    if let Some(sub) = greenhouse::scrape(fetcher, &url)? {
        info!(strategy = "greenhouse", title = %sub.title, "scraped job posting");
        return Ok(sub);
    }
    if let Some(sub) = lever::scrape(fetcher, &url)? {
        info!(strategy = "lever", title = %sub.title, "scraped job posting");
        return Ok(sub);
    }
    if let Some(sub) = static_page::scrape(fetcher, &url)? {
        info!(strategy = "static", title = %sub.title, "scraped job posting");
        return Ok(sub);
    }

    let sub = jina::scrape(fetcher, &url);
    info!(strategy = "jina", title = %sub.title, "scraped job posting");
    Ok(sub)
}

/// Prefix bare hostnames with `https://`.
fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Derive a display organization name from a URL's host:
/// `careers.acme-widgets.com` → `Acme Widgets` is out of reach, but
/// `acme-widgets.com` → `Acme Widgets`. Mirrors the first-label rule the
/// static site always used.
pub(crate) fn org_from_host(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    let host = host.strip_prefix("www.").unwrap_or(host);
    let label = host.split('.').next().unwrap_or("");
    title_case(&label.replace('-', " "))
}

/// Uppercase the first letter of each whitespace-separated word.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
